//! Values that can be enumerated.

use std::cmp::Reverse;

/// A totally ordered value stored in a [`Sequence`](crate::Sequence).
///
/// [`on_swap`](Element::on_swap) runs once for every exchange of two elements
/// performed by the algorithms, before the values move. The default does
/// nothing; [`Tracked`](crate::Tracked) uses it to count swaps.
///
/// Implemented for the primitive integers, `bool`, `char`, `()`, `String`,
/// `str`, shared references, [`Reverse`] and small tuples. Other types opt in
/// with an empty impl:
///
/// ```
/// use nextcomb_core::{next_combination, Element};
///
/// #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
/// struct Shift(u32);
///
/// impl Element for Shift {}
///
/// let mut shifts = [Shift(1), Shift(2), Shift(3)];
/// assert!(next_combination(&mut shifts, 1));
/// assert_eq!(shifts[0], Shift(2));
/// ```
pub trait Element: Ord {
    /// Called before `self` and `other` trade places.
    #[inline]
    fn on_swap(&self, _other: &Self) {}
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(impl Element for $ty {})*
    };
}

impl_element!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, (), String, str,
);

impl<T: Element + ?Sized> Element for &T {}

impl<T: Element> Element for Reverse<T> {
    #[inline]
    fn on_swap(&self, other: &Self) {
        self.0.on_swap(&other.0);
    }
}

impl<A: Element, B: Element> Element for (A, B) {}

impl<A: Element, B: Element, C: Element> Element for (A, B, C) {}
