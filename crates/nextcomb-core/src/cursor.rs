//! Positions into a sequence.

use std::fmt::Debug;

/// A copyable position into a [`Sequence`](crate::Sequence).
///
/// Cursors play the role of random-access iterators. The algorithms in this
/// crate only move and compare positions through this trait, so a decorating
/// cursor such as [`TrackedCursor`](crate::TrackedCursor) observes every
/// positional operation without the algorithms knowing about it.
///
/// [`index`](Cursor::index) is the dereference and is never counted as an
/// operation.
///
/// # Example
///
/// ```
/// use nextcomb_core::Cursor;
///
/// let start: usize = 2;
/// let end = start.shifted(3);
///
/// assert_eq!(end.index(), 5);
/// assert_eq!(start.distance(end), 3);
/// assert!(start.before(end));
/// assert!(end.pred().same(4));
/// ```
pub trait Cursor: Copy + Debug {
    /// Returns the sequence index this cursor points at.
    fn index(self) -> usize;

    /// Moves one position forward.
    fn inc(&mut self);

    /// Moves one position backward.
    fn dec(&mut self);

    /// Moves by `n` positions; negative values move backward.
    fn shift(&mut self, n: isize);

    /// Returns the signed number of positions from `self` to `to`.
    fn distance(self, to: Self) -> isize;

    /// Returns true if both cursors point at the same position.
    fn same(self, other: Self) -> bool;

    /// Returns true if `self` points strictly before `other`.
    fn before(self, other: Self) -> bool;

    /// Returns the position after this one.
    fn succ(mut self) -> Self {
        self.inc();
        self
    }

    /// Returns the position before this one.
    fn pred(mut self) -> Self {
        self.dec();
        self
    }

    /// Returns the position `n` steps away.
    fn shifted(mut self, n: isize) -> Self {
        self.shift(n);
        self
    }
}

impl Cursor for usize {
    #[inline]
    fn index(self) -> usize {
        self
    }

    #[inline]
    fn inc(&mut self) {
        *self += 1;
    }

    #[inline]
    fn dec(&mut self) {
        *self -= 1;
    }

    #[inline]
    fn shift(&mut self, n: isize) {
        *self = self.wrapping_add_signed(n);
    }

    #[inline]
    fn distance(self, to: Self) -> isize {
        to as isize - self as isize
    }

    #[inline]
    fn same(self, other: Self) -> bool {
        self == other
    }

    #[inline]
    fn before(self, other: Self) -> bool {
        self < other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usize_steps() {
        let mut c: usize = 3;
        c.inc();
        assert_eq!(c, 4);
        c.dec();
        c.dec();
        assert_eq!(c, 2);
        c.shift(5);
        assert_eq!(c, 7);
        c.shift(-7);
        assert_eq!(c, 0);
    }

    #[test]
    fn test_usize_distance_is_signed() {
        assert_eq!(2usize.distance(6), 4);
        assert_eq!(6usize.distance(2), -4);
        assert_eq!(3usize.distance(3), 0);
    }

    #[test]
    fn test_provided_methods_do_not_mutate_receiver() {
        let c: usize = 5;
        assert_eq!(c.succ(), 6);
        assert_eq!(c.pred(), 4);
        assert_eq!(c.shifted(-2), 3);
        assert_eq!(c, 5);
    }

    #[test]
    fn test_ordering() {
        assert!(1usize.before(2));
        assert!(!2usize.before(2));
        assert!(2usize.same(2));
        assert!(!2usize.same(3));
    }
}
