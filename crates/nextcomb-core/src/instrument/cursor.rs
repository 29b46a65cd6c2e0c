//! Counting cursor wrapper.

use std::fmt;

use super::OpCounters;
use crate::cursor::Cursor;

/// A cursor that reports its steps and comparisons to an [`OpCounters`].
///
/// `inc`, `dec` and `shift` count one cursor step each, whatever the shift
/// distance. `same`, `before` and `distance` count one cursor comparison.
/// `index` is free.
///
/// Cursors from different counters must not be mixed; comparisons are
/// recorded on the receiver's counters.
#[derive(Clone, Copy)]
pub struct TrackedCursor<'c, C> {
    inner: C,
    counters: &'c OpCounters,
}

impl<'c, C: Cursor> TrackedCursor<'c, C> {
    pub fn new(inner: C, counters: &'c OpCounters) -> Self {
        Self { inner, counters }
    }

    /// Returns the wrapped cursor.
    pub fn inner(self) -> C {
        self.inner
    }
}

impl<C: Cursor> Cursor for TrackedCursor<'_, C> {
    #[inline]
    fn index(self) -> usize {
        self.inner.index()
    }

    #[inline]
    fn inc(&mut self) {
        self.counters.record_cursor_step();
        self.inner.inc();
    }

    #[inline]
    fn dec(&mut self) {
        self.counters.record_cursor_step();
        self.inner.dec();
    }

    #[inline]
    fn shift(&mut self, n: isize) {
        self.counters.record_cursor_step();
        self.inner.shift(n);
    }

    #[inline]
    fn distance(self, to: Self) -> isize {
        self.counters.record_cursor_comparison();
        self.inner.distance(to.inner)
    }

    #[inline]
    fn same(self, other: Self) -> bool {
        self.counters.record_cursor_comparison();
        self.inner.same(other.inner)
    }

    #[inline]
    fn before(self, other: Self) -> bool {
        self.counters.record_cursor_comparison();
        self.inner.before(other.inner)
    }
}

impl<C: fmt::Debug> fmt::Debug for TrackedCursor<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TrackedCursor").field(&self.inner).finish()
    }
}
