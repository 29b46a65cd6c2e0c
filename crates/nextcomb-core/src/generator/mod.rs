//! Next-combination generators.
//!
//! A generator rearranges a sequence in place so that the prefix
//! `[first, mid)` (the selection) holds the lexicographically next combination
//! of the whole range `[first, last)`. The suffix `[mid, last)` (the pool)
//! holds the unselected elements in ascending order.
//!
//! All generators share the [`CombinationStep`] contract:
//! - an empty selection or an empty pool returns `false` without mutating;
//! - on the last combination, the range is rotated back to the first
//!   combination and `false` is returned;
//! - otherwise the next combination is produced and `true` is returned.
//!
//! The pool must be ascending before the first call and the selection must be
//! ascending for the order to be lexicographic; starting from a fully sorted
//! range satisfies both, and every generator preserves them. Unsorted input is
//! a caller error: behavior is unspecified but the multiset is still
//! preserved. [`Selection`](crate::Selection) validates this up front.
//!
//! # Zero-Erasure Design
//!
//! Generators are zero-sized types with a generic `advance`. Swapping the
//! strategy is a type change at the call site, and every call is
//! monomorphized for the concrete sequence and cursor.

mod gapped;
mod linear;
mod reversal;

use std::fmt;
use std::str::FromStr;

use crate::cursor::Cursor;
use crate::element::Element;
use crate::error::CombinationError;
use crate::sequence::{Joined, Sequence};

pub use gapped::GappedRotation;
pub use linear::LinearRotation;
pub use reversal::ReversalScan;

/// One step of in-place combination enumeration.
pub trait CombinationStep {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Advances `[first, mid)` to the next combination of `[first, last)`.
    ///
    /// Returns `false` when no next combination exists, after restoring the
    /// first combination.
    fn advance<S, C>(&self, seq: &mut S, first: C, mid: C, last: C) -> bool
    where
        S: Sequence + ?Sized,
        C: Cursor;
}

/// Names one enumeration strategy.
///
/// The three stepping variants implement [`CombinationStep`]; `Visitor` is
/// the callback-driven [`for_each_combination`](crate::for_each_combination).
///
/// # Example
///
/// ```
/// use nextcomb_core::Variant;
///
/// let variant: Variant = "reversal_scan".parse().unwrap();
/// assert_eq!(variant, Variant::ReversalScan);
/// assert!(variant.is_stepping());
/// assert!(!Variant::Visitor.is_stepping());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Variant {
    /// Binary searches plus a disjoint-range rotation.
    GappedRotation,
    /// Linear scans plus pairwise swaps and four reversals.
    ReversalScan,
    /// Linear scans plus a disjoint-range rotation.
    LinearRotation,
    /// Recursive visitor enumeration.
    Visitor,
}

impl Variant {
    /// Every variant, in report order.
    pub const ALL: [Variant; 4] = [
        Variant::ReversalScan,
        Variant::Visitor,
        Variant::GappedRotation,
        Variant::LinearRotation,
    ];

    /// Returns the snake_case identifier.
    pub fn name(self) -> &'static str {
        match self {
            Variant::GappedRotation => GappedRotation.name(),
            Variant::ReversalScan => ReversalScan.name(),
            Variant::LinearRotation => LinearRotation.name(),
            Variant::Visitor => "visitor",
        }
    }

    /// Returns true for variants driven by repeated `advance` calls.
    pub fn is_stepping(self) -> bool {
        !matches!(self, Variant::Visitor)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = CombinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| CombinationError::UnknownVariant(s.to_string()))
    }
}

/// Advances the first `r` elements of `items` to the next combination.
///
/// Uses [`GappedRotation`]. `items[r..]` must be ascending on the first call;
/// a fully sorted slice is the usual starting point.
///
/// # Example
///
/// ```
/// use nextcomb_core::next_combination;
///
/// let mut digits = [1, 2, 3];
/// assert!(next_combination(&mut digits, 2));
/// assert_eq!(&digits[..2], &[1, 3]);
/// assert!(next_combination(&mut digits, 2));
/// assert_eq!(&digits[..2], &[2, 3]);
/// assert!(!next_combination(&mut digits, 2));
/// assert_eq!(digits, [1, 2, 3]);
/// ```
pub fn next_combination<T: Element>(items: &mut [T], r: usize) -> bool {
    let len = items.len();
    debug_assert!(r <= len, "split point {r} beyond length {len}");
    GappedRotation.advance(items, 0, r, len)
}

/// Advances `selection` to the next combination drawn from
/// `selection` and `pool` together, where the two slices may live in
/// different buffers.
///
/// Uses [`ReversalScan::advance_disjoint`]. `pool` must be ascending on the
/// first call.
///
/// # Example
///
/// ```
/// use nextcomb_core::next_combination_split;
///
/// let mut chosen = ['a', 'b'];
/// let mut rest = vec!['c', 'd'];
///
/// assert!(next_combination_split(&mut chosen, &mut rest));
/// assert_eq!(chosen, ['a', 'c']);
/// assert_eq!(rest, ['b', 'd']);
/// ```
pub fn next_combination_split<T: Element>(selection: &mut [T], pool: &mut [T]) -> bool {
    let split = selection.len();
    let len = split + pool.len();
    let mut joined = Joined::new(selection, pool);
    ReversalScan.advance_disjoint(&mut joined, 0usize, split, split, len)
}

// Checks range ordering through `index`, which is never counted.
#[inline]
fn debug_check_ranges<S, C>(seq: &S, first: C, mid: C, last: C)
where
    S: Sequence + ?Sized,
    C: Cursor,
{
    debug_assert!(
        first.index() <= mid.index() && mid.index() <= last.index() && last.index() <= seq.len(),
        "malformed ranges: first {:?}, mid {:?}, last {:?}, len {}",
        first,
        mid,
        last,
        seq.len()
    );
}
