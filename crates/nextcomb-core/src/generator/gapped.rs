//! Binary-search generator with a gapped rotation.

use crate::algo::{lower_bound, rotate, upper_bound};
use crate::cursor::Cursor;
use crate::rotation::rotate_disjoint;
use crate::sequence::Sequence;

use super::{debug_check_ranges, CombinationStep};

/// Finds the pivot and its replacement with binary searches and repairs the
/// tail with one [`rotate_disjoint`].
///
/// Because the selection and the pool are both ascending, the pivot is the
/// element just before the `lower_bound` of the pool maximum in the
/// selection, and its replacement is the `upper_bound` of the pivot in the
/// pool. After swapping the two, the selection suffix after the pivot and the
/// pool suffix after the replacement are each ascending; exchanging them
/// across the gap restores both invariants.
///
/// # Example
///
/// ```
/// use nextcomb_core::{CombinationStep, GappedRotation};
///
/// let mut s = [1, 2, 3, 4];
/// assert!(GappedRotation.advance(&mut s[..], 0usize, 2, 4));
/// assert_eq!(s, [1, 3, 2, 4]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GappedRotation;

impl CombinationStep for GappedRotation {
    fn name(&self) -> &'static str {
        "gapped_rotation"
    }

    fn advance<S, C>(&self, seq: &mut S, first: C, mid: C, last: C) -> bool
    where
        S: Sequence + ?Sized,
        C: Cursor,
    {
        debug_check_ranges(seq, first, mid, last);
        if first.same(mid) || mid.same(last) {
            return false;
        }

        let max = last.pred();
        let mut left = lower_bound(&*seq, first, mid, seq.at(max.index()));
        if left.same(first) {
            rotate(seq, first, mid, last);
            return false;
        }
        left.dec();

        let right = upper_bound(&*seq, mid, last, seq.at(left.index()));
        seq.exchange(left.index(), right.index());
        rotate_disjoint(seq, left.succ(), mid, right.succ(), last);
        true
    }
}
