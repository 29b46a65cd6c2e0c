//! Visitor-driven enumeration.
//!
//! Instead of being called once per combination, [`for_each_combination`]
//! owns the loop and calls back for each one. It builds every combination by
//! recursively swapping a selection slot with each pool slot, and after each
//! level it undoes its work with a discontinuous rotation. So when the
//! enumeration runs to completion the sequence is back in its original
//! arrangement, without ever comparing two elements.

use std::ops::ControlFlow;

use crate::algo::{rotate, swap_ranges};
use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Calls `visit` once for every `r`-combination of `[first, last)`, where
/// `r = first.distance(mid)`, with the combination held in `[first, mid)`.
///
/// The initial arrangement is visited first. For distinct elements that start
/// in ascending order, combinations are visited in lexicographic order. With
/// repeated values every positional combination is visited, so equal
/// multisets are seen more than once.
///
/// `visit` returns [`ControlFlow::Break`] to stop; the sequence is then left
/// in the arrangement that was just visited and `Break` is returned. When
/// every combination has been visited, the sequence is restored and
/// `Continue` is returned.
///
/// # Example
///
/// ```
/// use std::ops::ControlFlow;
/// use nextcomb_core::for_each_combination;
///
/// let mut letters = ['A', 'B', 'C', 'D'];
/// let mut seen = Vec::new();
/// let flow = for_each_combination(&mut letters[..], 0usize, 2, 4, |s: &[char]| {
///     seen.push(s[..2].iter().collect::<String>());
///     ControlFlow::Continue(())
/// });
///
/// assert_eq!(flow, ControlFlow::Continue(()));
/// assert_eq!(seen, ["AB", "AC", "AD", "BC", "BD", "CD"]);
/// assert_eq!(letters, ['A', 'B', 'C', 'D']);
/// ```
pub fn for_each_combination<S, C, F>(
    seq: &mut S,
    first: C,
    mid: C,
    last: C,
    mut visit: F,
) -> ControlFlow<()>
where
    S: Sequence + ?Sized,
    C: Cursor,
    F: FnMut(&S) -> ControlFlow<()>,
{
    let selected = first.distance(mid);
    let remaining = mid.distance(last);
    let ranges = Discontinuous {
        first1: first,
        last1: mid,
        d1: selected,
        first2: mid,
        last2: last,
        d2: remaining,
    };
    combine_discontinuous(seq, ranges, &mut visit, 0)
}

// Two ranges with their lengths; lengths are carried so the recursion never
// has to measure them again.
#[derive(Clone, Copy)]
struct Discontinuous<C> {
    first1: C,
    last1: C,
    d1: isize,
    first2: C,
    last2: C,
    d2: isize,
}

fn combine_discontinuous<S, C, F>(
    seq: &mut S,
    r: Discontinuous<C>,
    visit: &mut F,
    depth: usize,
) -> ControlFlow<()>
where
    S: Sequence + ?Sized,
    C: Cursor,
    F: FnMut(&S) -> ControlFlow<()>,
{
    if r.d1 == 0 || r.d2 == 0 {
        return visit(&*seq);
    }

    if r.d1 == 1 {
        let mut i2 = r.first2;
        while !i2.same(r.last2) {
            visit(&*seq)?;
            seq.exchange(r.first1.index(), i2.index());
            i2.inc();
        }
    } else {
        let first1_next = r.first1.succ();
        let mut i2 = r.first2;
        let mut d22 = r.d2;
        while !i2.same(r.last2) {
            let inner = Discontinuous {
                first1: first1_next,
                last1: r.last1,
                d1: r.d1 - 1,
                first2: i2,
                last2: r.last2,
                d2: d22,
            };
            combine_discontinuous(seq, inner, visit, depth + 1)?;
            seq.exchange(r.first1.index(), i2.index());
            i2.inc();
            d22 -= 1;
        }
    }

    visit(&*seq)?;

    // Below the top level the first pool slot belongs to the caller's pending
    // swap, so it stays out of the rotation.
    if depth == 0 {
        rotate_discontinuous(seq, r);
    } else {
        rotate_discontinuous(
            seq,
            Discontinuous {
                first2: r.first2.succ(),
                d2: r.d2 - 1,
                ..r
            },
        );
    }
    ControlFlow::Continue(())
}

// Same effect as `rotate_disjoint`, with the lengths already known and the
// long-selection case swapping from the back.
fn rotate_discontinuous<S, C>(seq: &mut S, r: Discontinuous<C>)
where
    S: Sequence + ?Sized,
    C: Cursor,
{
    if r.d1 <= r.d2 {
        let mid2 = swap_ranges(seq, r.first1, r.last1, r.first2);
        rotate(seq, r.first2, mid2, r.last2);
    } else {
        let mut i1 = r.last1;
        let mut last2 = r.last2;
        while !r.first2.same(last2) {
            i1.dec();
            last2.dec();
            seq.exchange(i1.index(), last2.index());
        }
        rotate(seq, r.first1, i1, r.last1);
    }
}
