//! Counter storage and snapshots.

use std::cell::Cell;
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use super::{Tracked, TrackedCursor};
use crate::cursor::Cursor;

/// Four independent operation counters.
///
/// Counters use [`Cell`], so an `OpCounters` is shared by plain reference
/// within one thread and is `!Sync`. Each sweep owns its own set.
#[derive(Debug, Default)]
pub struct OpCounters {
    value_comparisons: Cell<u64>,
    value_swaps: Cell<u64>,
    cursor_comparisons: Cell<u64>,
    cursor_steps: Cell<u64>,
}

impl OpCounters {
    /// Creates counters starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn bump(cell: &Cell<u64>) {
        cell.set(cell.get() + 1);
    }

    /// Records one comparison between two values.
    #[inline]
    pub fn record_value_comparison(&self) {
        Self::bump(&self.value_comparisons);
    }

    /// Records one exchange of two values.
    #[inline]
    pub fn record_value_swap(&self) {
        Self::bump(&self.value_swaps);
    }

    /// Records one comparison or distance between two positions.
    #[inline]
    pub fn record_cursor_comparison(&self) {
        Self::bump(&self.cursor_comparisons);
    }

    /// Records one move of a position.
    #[inline]
    pub fn record_cursor_step(&self) {
        Self::bump(&self.cursor_steps);
    }

    pub fn value_comparisons(&self) -> u64 {
        self.value_comparisons.get()
    }

    pub fn value_swaps(&self) -> u64 {
        self.value_swaps.get()
    }

    pub fn cursor_comparisons(&self) -> u64 {
        self.cursor_comparisons.get()
    }

    pub fn cursor_steps(&self) -> u64 {
        self.cursor_steps.get()
    }

    /// Sets every counter back to zero.
    pub fn reset(&self) {
        self.value_comparisons.set(0);
        self.value_swaps.set(0);
        self.cursor_comparisons.set(0);
        self.cursor_steps.set(0);
    }

    /// Copies the current values.
    pub fn snapshot(&self) -> OpCounts {
        OpCounts {
            value_comparisons: self.value_comparisons(),
            value_swaps: self.value_swaps(),
            cursor_comparisons: self.cursor_comparisons(),
            cursor_steps: self.cursor_steps(),
        }
    }

    /// Wraps one value so its comparisons and swaps are counted here.
    pub fn track<T>(&self, value: T) -> Tracked<'_, T> {
        Tracked::new(value, self)
    }

    /// Wraps every value of `values`.
    pub fn track_all<T, I>(&self, values: I) -> Vec<Tracked<'_, T>>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().map(|v| self.track(v)).collect()
    }

    /// Wraps a cursor so its steps and comparisons are counted here.
    pub fn cursor<C: Cursor>(&self, inner: C) -> TrackedCursor<'_, C> {
        TrackedCursor::new(inner, self)
    }
}

/// A copy of [`OpCounters`] at one moment.
///
/// Subtracting two snapshots gives the work done between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpCounts {
    pub value_comparisons: u64,
    pub value_swaps: u64,
    pub cursor_comparisons: u64,
    pub cursor_steps: u64,
}

impl OpCounts {
    /// Sum of all four counters.
    pub fn total(&self) -> u64 {
        self.value_comparisons + self.value_swaps + self.cursor_comparisons + self.cursor_steps
    }

    /// Returns true if no counter is below its value in `earlier`.
    pub fn dominates(&self, earlier: &OpCounts) -> bool {
        self.value_comparisons >= earlier.value_comparisons
            && self.value_swaps >= earlier.value_swaps
            && self.cursor_comparisons >= earlier.cursor_comparisons
            && self.cursor_steps >= earlier.cursor_steps
    }
}

impl Add for OpCounts {
    type Output = OpCounts;

    fn add(self, rhs: OpCounts) -> OpCounts {
        OpCounts {
            value_comparisons: self.value_comparisons + rhs.value_comparisons,
            value_swaps: self.value_swaps + rhs.value_swaps,
            cursor_comparisons: self.cursor_comparisons + rhs.cursor_comparisons,
            cursor_steps: self.cursor_steps + rhs.cursor_steps,
        }
    }
}

impl AddAssign for OpCounts {
    fn add_assign(&mut self, rhs: OpCounts) {
        *self = *self + rhs;
    }
}

/// Saturates at zero, so a reset between two snapshots yields zeros instead
/// of overflowing.
impl Sub for OpCounts {
    type Output = OpCounts;

    fn sub(self, rhs: OpCounts) -> OpCounts {
        OpCounts {
            value_comparisons: self.value_comparisons.saturating_sub(rhs.value_comparisons),
            value_swaps: self.value_swaps.saturating_sub(rhs.value_swaps),
            cursor_comparisons: self.cursor_comparisons.saturating_sub(rhs.cursor_comparisons),
            cursor_steps: self.cursor_steps.saturating_sub(rhs.cursor_steps),
        }
    }
}

impl std::iter::Sum for OpCounts {
    fn sum<I: Iterator<Item = OpCounts>>(iter: I) -> OpCounts {
        iter.fold(OpCounts::default(), Add::add)
    }
}

impl fmt::Display for OpCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value comparisons: {}, value swaps: {}, iter comparisons: {}, iter increments: {}",
            self.value_comparisons, self.value_swaps, self.cursor_comparisons, self.cursor_steps
        )
    }
}
