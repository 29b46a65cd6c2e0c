//! Two-range generator built on reversals.

use crate::algo::reverse;
use crate::cursor::Cursor;
use crate::sequence::Sequence;

use super::{debug_check_ranges, CombinationStep};

/// The classic two-range formulation.
///
/// Scans backward through the selection for the pivot, forward through the
/// pool for its replacement, swaps them, then repairs the tail by swapping
/// the overlapping ends of the two suffixes pairwise and fixing their order
/// with four reversals. Exhaustion runs the same repair from the start of
/// both ranges, which restores the first combination.
///
/// Unlike the other generators it works on two separate ranges, see
/// [`advance_disjoint`](ReversalScan::advance_disjoint).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReversalScan;

impl ReversalScan {
    /// Advances the selection `[first1, last1)` against the pool
    /// `[first2, last2)`.
    ///
    /// The ranges must not overlap; the pool may come after a gap or, through
    /// a [`Joined`](crate::Joined) sequence, from another buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use nextcomb_core::ReversalScan;
    ///
    /// // Selection [0, 2), an unrelated element at 2, pool [3, 5).
    /// let mut s = [1, 2, 0, 3, 4];
    /// assert!(ReversalScan.advance_disjoint(&mut s[..], 0usize, 2, 3, 5));
    /// assert_eq!(s, [1, 3, 0, 2, 4]);
    /// ```
    pub fn advance_disjoint<S, C>(
        &self,
        seq: &mut S,
        mut first1: C,
        last1: C,
        mut first2: C,
        last2: C,
    ) -> bool
    where
        S: Sequence + ?Sized,
        C: Cursor,
    {
        debug_check_ranges(seq, first1, last1, last1);
        debug_check_ranges(seq, first2, last2, last2);
        if first1.same(last1) || first2.same(last2) {
            return false;
        }

        let mut m1 = last1;
        let m2 = last2.pred();
        loop {
            m1.dec();
            if m1.same(first1) || seq.at(m1.index()) < seq.at(m2.index()) {
                break;
            }
        }

        let exhausted = m1.same(first1) && !(seq.at(first1.index()) < seq.at(m2.index()));
        if !exhausted {
            while !first2.same(m2) && !(seq.at(m1.index()) < seq.at(first2.index())) {
                first2.inc();
            }
            first1 = m1;
            seq.exchange(first1.index(), first2.index());
            first1.inc();
            first2.inc();
        }

        if !first1.same(last1) && !first2.same(last2) {
            let mut m1 = last1;
            let mut m2 = first2;
            while !m1.same(first1) && !m2.same(last2) {
                m1.dec();
                seq.exchange(m1.index(), m2.index());
                m2.inc();
            }
            reverse(seq, first1, m1);
            reverse(seq, first1, last1);
            reverse(seq, m2, last2);
            reverse(seq, first2, last2);
        }

        !exhausted
    }
}

impl CombinationStep for ReversalScan {
    fn name(&self) -> &'static str {
        "reversal_scan"
    }

    fn advance<S, C>(&self, seq: &mut S, first: C, mid: C, last: C) -> bool
    where
        S: Sequence + ?Sized,
        C: Cursor,
    {
        self.advance_disjoint(seq, first, mid, mid, last)
    }
}
