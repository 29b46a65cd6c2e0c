//! Prints every combination of `ABCDE`, one line per subset size.
//!
//! Run with: cargo run -p show-combinations

use nextcomb::next_combination;
use owo_colors::OwoColorize;

fn main() {
    let mut letters: Vec<char> = "ABCDE".chars().collect();

    for r in 0..=letters.len() {
        let mut words = vec![word(&letters[..r])];
        while next_combination(&mut letters, r) {
            words.push(word(&letters[..r]));
        }
        println!(
            "{} {}",
            format!("r = {r} ({:>2}):", words.len()).bright_cyan(),
            words.join(" ")
        );
    }
}

fn word(letters: &[char]) -> String {
    if letters.is_empty() {
        "{}".to_string()
    } else {
        letters.iter().collect()
    }
}
