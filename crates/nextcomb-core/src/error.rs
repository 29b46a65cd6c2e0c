//! Error types for nextcomb

use thiserror::Error;

/// Errors reported by the checked entry points.
///
/// The raw generators never return errors: exhaustion is a `false` return and
/// malformed ranges are caller bugs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinationError {
    /// The split point lies past the end of the sequence.
    #[error("split point {split} is outside a sequence of length {len}")]
    SplitOutOfBounds { split: usize, len: usize },

    /// The pool is not in ascending order.
    #[error("pool is not ascending: element at index {index} is less than its predecessor")]
    UnsortedPool { index: usize },

    /// No variant has the given name.
    #[error("unknown variant: {0}")]
    UnknownVariant(String),
}

/// Result type alias for nextcomb operations
pub type Result<T> = std::result::Result<T, CombinationError>;
