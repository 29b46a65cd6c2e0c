//! Swap-based range algorithms over cursors.
//!
//! Every function takes half-open ranges `[first, last)` expressed as
//! [`Cursor`]s into one [`Sequence`]. Elements are compared with `<` only and
//! moved with [`Sequence::exchange`] only, which keeps the multiset intact and
//! makes every primitive operation visible to instrumentation.

use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Returns the first position in the sorted range whose element is not less
/// than `value`.
///
/// # Example
///
/// ```
/// use nextcomb_core::algo::lower_bound;
///
/// let items = [1, 3, 3, 5];
/// assert_eq!(lower_bound(&items[..], 0usize, 4, &3), 1);
/// assert_eq!(lower_bound(&items[..], 0usize, 4, &6), 4);
/// ```
pub fn lower_bound<S, C>(seq: &S, mut first: C, last: C, value: &S::Item) -> C
where
    S: Sequence + ?Sized,
    C: Cursor,
{
    let mut len = first.distance(last);
    while len > 0 {
        let half = len / 2;
        let middle = first.shifted(half);
        if seq.at(middle.index()) < value {
            first = middle.succ();
            len -= half + 1;
        } else {
            len = half;
        }
    }
    first
}

/// Returns the first position in the sorted range whose element is greater
/// than `value`.
///
/// # Example
///
/// ```
/// use nextcomb_core::algo::upper_bound;
///
/// let items = [1, 3, 3, 5];
/// assert_eq!(upper_bound(&items[..], 0usize, 4, &3), 3);
/// assert_eq!(upper_bound(&items[..], 0usize, 4, &0), 0);
/// ```
pub fn upper_bound<S, C>(seq: &S, mut first: C, last: C, value: &S::Item) -> C
where
    S: Sequence + ?Sized,
    C: Cursor,
{
    let mut len = first.distance(last);
    while len > 0 {
        let half = len / 2;
        let middle = first.shifted(half);
        if value < seq.at(middle.index()) {
            len = half;
        } else {
            first = middle.succ();
            len -= half + 1;
        }
    }
    first
}

/// Swaps `[first1, last1)` element-wise with the range starting at `first2`
/// and returns the end of the second range.
///
/// The ranges must not overlap.
pub fn swap_ranges<S, C>(seq: &mut S, mut first1: C, last1: C, mut first2: C) -> C
where
    S: Sequence + ?Sized,
    C: Cursor,
{
    while !first1.same(last1) {
        seq.exchange(first1.index(), first2.index());
        first1.inc();
        first2.inc();
    }
    first2
}

/// Reverses `[first, last)` in place.
pub fn reverse<S, C>(seq: &mut S, mut first: C, mut last: C)
where
    S: Sequence + ?Sized,
    C: Cursor,
{
    loop {
        if first.same(last) {
            return;
        }
        last.dec();
        if first.same(last) {
            return;
        }
        seq.exchange(first.index(), last.index());
        first.inc();
    }
}

/// Rotates `[first, last)` so that `middle` becomes the first element.
///
/// Returns the new position of the element previously at `first`. Uses the
/// forward, swap-only block rotation, so it needs no temporary storage.
///
/// # Example
///
/// ```
/// use nextcomb_core::algo::rotate;
///
/// let mut items = [1, 2, 3, 4, 5];
/// let moved = rotate(&mut items[..], 0usize, 2, 5);
///
/// assert_eq!(items, [3, 4, 5, 1, 2]);
/// assert_eq!(moved, 3);
/// ```
pub fn rotate<S, C>(seq: &mut S, mut first: C, mut middle: C, last: C) -> C
where
    S: Sequence + ?Sized,
    C: Cursor,
{
    if first.same(middle) {
        return last;
    }
    if middle.same(last) {
        return first;
    }

    let mut next = middle;
    loop {
        seq.exchange(first.index(), next.index());
        first.inc();
        next.inc();
        if first.same(middle) {
            middle = next;
        }
        if next.same(last) {
            break;
        }
    }

    let result = first;
    next = middle;
    while !next.same(last) {
        seq.exchange(first.index(), next.index());
        first.inc();
        next.inc();
        if first.same(middle) {
            middle = next;
        } else if next.same(last) {
            next = middle;
        }
    }
    result
}

#[cfg(test)]
mod tests;
