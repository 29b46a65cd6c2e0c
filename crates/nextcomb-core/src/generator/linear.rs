//! Linear-scan generator with a gapped rotation.

use crate::algo::rotate;
use crate::cursor::Cursor;
use crate::rotation::rotate_disjoint;
use crate::sequence::Sequence;

use super::{debug_check_ranges, CombinationStep};

/// Scans backward from the split for the pivot and forward through the pool
/// for its replacement, then repairs the tail like [`GappedRotation`].
///
/// Cheaper than the binary searches when the pivot sits near the split, which
/// is the common case for small selections.
///
/// [`GappedRotation`]: super::GappedRotation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearRotation;

impl CombinationStep for LinearRotation {
    fn name(&self) -> &'static str {
        "linear_rotation"
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
        let mut left = mid;
        loop {
            if left.same(first) {
                rotate(seq, first, mid, last);
                return false;
            }
            left.dec();
            if seq.at(left.index()) < seq.at(max.index()) {
                break;
            }
        }

        // Terminates: the pool maximum is greater than the pivot.
        let mut right = mid;
        while !(seq.at(left.index()) < seq.at(right.index())) {
            right.inc();
        }

        seq.exchange(left.index(), right.index());
        rotate_disjoint(seq, left.succ(), mid, right.succ(), last);
        true
    }
}
