//! Checked, slice-based enumeration.

use crate::element::Element;
use crate::error::{CombinationError, Result};
use crate::generator::{CombinationStep, GappedRotation};

/// A slice split into a selection and a pool, validated once so that every
/// later [`advance`](Selection::advance) meets the generator preconditions.
///
/// # Example
///
/// ```
/// use nextcomb_core::{LinearRotation, Selection};
///
/// let mut cards = [2, 5, 7, 9];
/// let mut hand = Selection::with_step(&mut cards, 3, LinearRotation).unwrap();
///
/// let mut hands = vec![hand.selected().to_vec()];
/// while hand.advance() {
///     hands.push(hand.selected().to_vec());
/// }
/// assert_eq!(hands, [[2, 5, 7], [2, 5, 9], [2, 7, 9], [5, 7, 9]]);
/// ```
///
/// Invalid splits are rejected:
///
/// ```
/// use nextcomb_core::{CombinationError, Selection};
///
/// let mut items = [1, 3, 2];
/// assert_eq!(
///     Selection::new(&mut items, 1).unwrap_err(),
///     CombinationError::UnsortedPool { index: 2 },
/// );
/// assert_eq!(
///     Selection::new(&mut items, 4).unwrap_err(),
///     CombinationError::SplitOutOfBounds { split: 4, len: 3 },
/// );
/// ```
#[derive(Debug)]
pub struct Selection<'a, T, G = GappedRotation> {
    items: &'a mut [T],
    split: usize,
    step: G,
}

impl<'a, T: Element> Selection<'a, T> {
    /// Splits `items` after the first `split` elements, using
    /// [`GappedRotation`].
    pub fn new(items: &'a mut [T], split: usize) -> Result<Self> {
        Self::with_step(items, split, GappedRotation)
    }
}

impl<'a, T: Element, G: CombinationStep> Selection<'a, T, G> {
    /// Splits `items` after the first `split` elements, advancing with `step`.
    ///
    /// # Errors
    ///
    /// Returns [`CombinationError::SplitOutOfBounds`] if `split > items.len()`
    /// and [`CombinationError::UnsortedPool`] if `items[split..]` is not
    /// ascending.
    pub fn with_step(items: &'a mut [T], split: usize, step: G) -> Result<Self> {
        let len = items.len();
        if split > len {
            return Err(CombinationError::SplitOutOfBounds { split, len });
        }
        if let Some(index) = (split + 1..len).find(|&i| items[i] < items[i - 1]) {
            return Err(CombinationError::UnsortedPool { index });
        }
        Ok(Self { items, split, step })
    }

    /// Moves to the next combination; `false` means the enumeration wrapped
    /// around to the first combination.
    pub fn advance(&mut self) -> bool {
        let len = self.items.len();
        self.step.advance(&mut *self.items, 0usize, self.split, len)
    }

    /// Returns the current combination.
    pub fn selected(&self) -> &[T] {
        &self.items[..self.split]
    }

    /// Returns the unselected elements, in ascending order.
    pub fn pool(&self) -> &[T] {
        &self.items[self.split..]
    }

    /// Returns the selection size.
    pub fn split(&self) -> usize {
        self.split
    }

    /// Returns the whole arrangement.
    pub fn as_slice(&self) -> &[T] {
        self.items
    }

    /// Returns the generator in use.
    pub fn step(&self) -> &G {
        &self.step
    }

    /// Releases the underlying slice.
    pub fn into_inner(self) -> &'a mut [T] {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ReversalScan;
    use nextcomb_test::{binomial, letters, text};

    #[test]
    fn test_new_accepts_sorted_pool_with_unsorted_selection() {
        let mut items = [9, 1, 2, 3];
        let selection = Selection::new(&mut items, 1).unwrap();
        assert_eq!(selection.selected(), &[9]);
        assert_eq!(selection.pool(), &[1, 2, 3]);
        assert_eq!(selection.split(), 1);
    }

    #[test]
    fn test_split_at_ends() {
        let mut items = [3, 2, 1];
        assert!(Selection::new(&mut items, 3).is_ok());
        assert_eq!(
            Selection::new(&mut items, 0).unwrap_err(),
            CombinationError::UnsortedPool { index: 1 }
        );
    }

    #[test]
    fn test_enumerates_binomial_many() {
        let mut items = letters("ABCDEF");
        let mut selection = Selection::with_step(&mut items, 2, ReversalScan).unwrap();
        let mut count = 1;
        while selection.advance() {
            count += 1;
        }
        assert_eq!(count, binomial(6, 2));
        assert_eq!(text(selection.as_slice()), "ABCDEF");
        assert_eq!(selection.step().name(), "reversal_scan");
    }

    #[test]
    fn test_into_inner_returns_current_arrangement() {
        let mut items = [1, 2, 3];
        let mut selection = Selection::new(&mut items, 1).unwrap();
        assert!(selection.advance());
        let inner = selection.into_inner();
        assert_eq!(inner, &[2, 1, 3]);
    }

    #[test]
    fn test_error_messages() {
        let err = CombinationError::SplitOutOfBounds { split: 4, len: 3 };
        assert_eq!(err.to_string(), "split point 4 is outside a sequence of length 3");
        let err = CombinationError::UnsortedPool { index: 2 };
        assert!(err.to_string().contains("index 2"));
    }
}
