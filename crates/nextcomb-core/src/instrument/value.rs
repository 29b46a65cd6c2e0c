//! Counting element wrapper.

use std::cmp::Ordering;
use std::fmt;

use super::OpCounters;
use crate::element::Element;

/// A value that reports every comparison and swap to an [`OpCounters`].
///
/// Ordering and equality are those of the inner value. Each call to `cmp`,
/// `partial_cmp` or `eq` counts as one value comparison, and each exchange
/// through a [`Sequence`](crate::Sequence) counts as one value swap.
///
/// ```
/// use nextcomb_core::OpCounters;
///
/// let counters = OpCounters::new();
/// let a = counters.track(3);
/// let b = counters.track(5);
///
/// assert!(a < b);
/// assert_ne!(a, b);
/// assert_eq!(counters.value_comparisons(), 2);
/// assert_eq!(format!("{a} {b:?}"), "3 5");
/// ```
#[derive(Clone)]
pub struct Tracked<'c, T> {
    value: T,
    counters: &'c OpCounters,
}

impl<'c, T> Tracked<'c, T> {
    pub fn new(value: T, counters: &'c OpCounters) -> Self {
        Self { value, counters }
    }

    /// Returns the inner value without counting.
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn counters(&self) -> &'c OpCounters {
        self.counters
    }
}

impl<T: PartialEq> PartialEq for Tracked<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.counters.record_value_comparison();
        self.value == other.value
    }
}

impl<T: Eq> Eq for Tracked<'_, T> {}

impl<T: Ord> PartialOrd for Tracked<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Tracked<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.counters.record_value_comparison();
        self.value.cmp(&other.value)
    }
}

impl<T: Element> Element for Tracked<'_, T> {
    #[inline]
    fn on_swap(&self, other: &Self) {
        self.counters.record_value_swap();
        self.value.on_swap(&other.value);
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Tracked<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
