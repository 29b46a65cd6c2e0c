//! Random-access storage the algorithms operate on.

use std::mem;

use crate::element::Element;

/// An ordered, mutable, fixed-length collection of [`Element`]s.
///
/// Algorithms read elements with [`at`](Sequence::at) and move them only with
/// [`exchange`](Sequence::exchange), so a sequence never changes its multiset
/// of values.
pub trait Sequence {
    /// The element type.
    type Item: Element;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns true if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn at(&self, index: usize) -> &Self::Item;

    /// Swaps the elements at `a` and `b`, notifying [`Element::on_swap`].
    fn exchange(&mut self, a: usize, b: usize);
}

impl<T: Element> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn exchange(&mut self, a: usize, b: usize) {
        self[a].on_swap(&self[b]);
        self.swap(a, b);
    }
}

impl<T: Element> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn exchange(&mut self, a: usize, b: usize) {
        self.as_mut_slice().exchange(a, b);
    }
}

/// Two disjoint slices presented as one logical sequence.
///
/// Indices `0..head.len()` address `head`, the remaining indices address
/// `tail`. This lets the two-range generators work on a selection and a pool
/// that live in different buffers.
///
/// # Example
///
/// ```
/// use nextcomb_core::{Joined, Sequence};
///
/// let mut head = [1, 2];
/// let mut tail = [3, 4, 5];
/// let mut joined = Joined::new(&mut head, &mut tail);
///
/// joined.exchange(0, 4);
/// assert_eq!(*joined.at(0), 5);
/// assert_eq!(joined.len(), 5);
/// drop(joined);
///
/// assert_eq!(head, [5, 2]);
/// assert_eq!(tail, [3, 4, 1]);
/// ```
#[derive(Debug)]
pub struct Joined<'a, T> {
    head: &'a mut [T],
    tail: &'a mut [T],
}

impl<'a, T> Joined<'a, T> {
    /// Joins `head` and `tail`.
    pub fn new(head: &'a mut [T], tail: &'a mut [T]) -> Self {
        Self { head, tail }
    }

    /// Returns the first slice.
    pub fn head(&self) -> &[T] {
        self.head
    }

    /// Returns the second slice.
    pub fn tail(&self) -> &[T] {
        self.tail
    }

    /// Returns the logical index where `tail` starts.
    pub fn split_point(&self) -> usize {
        self.head.len()
    }

    /// Splits back into the two underlying slices.
    pub fn into_parts(self) -> (&'a mut [T], &'a mut [T]) {
        (self.head, self.tail)
    }

    fn exchange_across(&mut self, head_index: usize, tail_index: usize)
    where
        T: Element,
    {
        let a = &mut self.head[head_index];
        let b = &mut self.tail[tail_index];
        a.on_swap(b);
        mem::swap(a, b);
    }
}

impl<T: Element> Sequence for Joined<'_, T> {
    type Item = T;

    fn len(&self) -> usize {
        self.head.len() + self.tail.len()
    }

    fn at(&self, index: usize) -> &T {
        let split = self.head.len();
        if index < split {
            &self.head[index]
        } else {
            &self.tail[index - split]
        }
    }

    fn exchange(&mut self, a: usize, b: usize) {
        let split = self.head.len();
        match (a < split, b < split) {
            (true, true) => self.head.exchange(a, b),
            (false, false) => self.tail.exchange(a - split, b - split),
            (true, false) => self.exchange_across(a, b - split),
            (false, true) => self.exchange_across(b, a - split),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_exchange() {
        let mut items = [1, 2, 3];
        items.exchange(0, 2);
        assert_eq!(items, [3, 2, 1]);
        items.exchange(1, 1);
        assert_eq!(items, [3, 2, 1]);
    }

    #[test]
    fn test_vec_delegates_to_slice() {
        let mut items = vec!['a', 'b'];
        Sequence::exchange(&mut items, 0, 1);
        assert_eq!(Sequence::len(&items), 2);
        assert_eq!(*Sequence::at(&items, 0), 'b');
    }

    #[test]
    fn test_joined_addressing() {
        let mut head = [10, 20];
        let mut tail = [30];
        let joined = Joined::new(&mut head, &mut tail);

        assert_eq!(joined.split_point(), 2);
        assert_eq!(*joined.at(0), 10);
        assert_eq!(*joined.at(1), 20);
        assert_eq!(*joined.at(2), 30);
        assert!(!joined.is_empty());
    }

    #[test]
    fn test_joined_exchange_within_and_across() {
        let mut head = [1, 2];
        let mut tail = [3, 4];
        let mut joined = Joined::new(&mut head, &mut tail);

        joined.exchange(0, 1);
        joined.exchange(2, 3);
        joined.exchange(3, 0);

        let (head, tail) = joined.into_parts();
        assert_eq!(head, &[3, 1]);
        assert_eq!(tail, &[4, 2]);
    }

    #[test]
    fn test_joined_empty_parts() {
        let mut head: [u8; 0] = [];
        let mut tail: [u8; 0] = [];
        let joined = Joined::new(&mut head, &mut tail);
        assert!(joined.is_empty());
    }
}
