//! Input sequences for sweeps.

use nextcomb_config::InputKind;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Builds the sorted values a sweep of length `n` starts from.
///
/// Duplicate inputs are reproducible: the same `seed` and `n` always give the
/// same multiset.
///
/// # Example
///
/// ```
/// use nextcomb_benchmark::build_input;
/// use nextcomb_config::InputKind;
///
/// assert_eq!(build_input(InputKind::Distinct, 4), [0, 1, 2, 3]);
///
/// let kind = InputKind::Duplicates { values: 3, seed: 1 };
/// let values = build_input(kind, 10);
/// assert_eq!(values, build_input(kind, 10));
/// assert!(values.windows(2).all(|w| w[0] <= w[1]));
/// assert!(values.iter().all(|&v| v < 3));
/// ```
pub fn build_input(kind: InputKind, n: usize) -> Vec<u32> {
    match kind {
        InputKind::Distinct => (0..n as u32).collect(),
        InputKind::Duplicates { values, seed } => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let upper = values.max(1);
            let mut drawn: Vec<u32> = (0..n).map(|_| rng.random_range(0..upper)).collect();
            drawn.sort_unstable();
            drawn
        }
    }
}
