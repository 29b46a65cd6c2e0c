//! nextcomb Core - in-place combination enumeration
//!
//! This crate provides the building blocks of the enumeration engine:
//! - Cursor and sequence abstractions every algorithm is generic over
//! - Swap-based range algorithms and the disjoint-range rotation
//! - Interchangeable next-combination generators
//! - A visitor-driven enumeration that restores the input when done
//! - Instrumented values and cursors for counting primitive operations
//!
//! # Example
//!
//! ```
//! use nextcomb_core::next_combination;
//!
//! let mut letters = ['A', 'B', 'C', 'D'];
//! let mut seen = vec![letters[..2].iter().collect::<String>()];
//! while next_combination(&mut letters, 2) {
//!     seen.push(letters[..2].iter().collect());
//! }
//!
//! assert_eq!(seen, ["AB", "AC", "AD", "BC", "BD", "CD"]);
//! // Exhaustion leaves the first combination in place.
//! assert_eq!(letters, ['A', 'B', 'C', 'D']);
//! ```

pub mod algo;
pub mod cursor;
pub mod element;
pub mod error;
pub mod generator;
pub mod instrument;
pub mod rotation;
pub mod selection;
pub mod sequence;
pub mod visitor;

pub use cursor::Cursor;
pub use element::Element;
pub use error::{CombinationError, Result};
pub use generator::{
    next_combination, next_combination_split, CombinationStep, GappedRotation, LinearRotation,
    ReversalScan, Variant,
};
pub use instrument::{OpCounters, OpCounts, Tracked, TrackedCursor};
pub use rotation::rotate_disjoint;
pub use selection::Selection;
pub use sequence::{Joined, Sequence};
pub use visitor::for_each_combination;
