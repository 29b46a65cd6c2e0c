//! Canned inputs.

/// Splits a string into its characters.
pub fn letters(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Joins characters back into a string.
pub fn text(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Inputs with repeated values, each already sorted.
pub const DUPLICATE_WORDS: [&str; 5] = ["AABBC", "ABBBC", "AAAAB", "AABB", "ABCCDDD"];

/// `ABCDE`, `r = 2`, in enumeration order.
pub const ABCDE_PAIRS: [&str; 10] = ["AB", "AC", "AD", "AE", "BC", "BD", "BE", "CD", "CE", "DE"];
