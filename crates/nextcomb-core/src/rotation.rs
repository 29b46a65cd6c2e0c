//! Disjoint-range rotation.

use crate::algo::{rotate, swap_ranges};
use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Exchanges two non-overlapping ranges `A = [first1, last1)` and
/// `B = [first2, last2)` of possibly different lengths.
///
/// Viewed as one range with the gap between them removed, `A ++ B` becomes
/// `B ++ A`: the leading `|A|` slots receive the front of `B ++ A` and the
/// trailing `|B|` slots receive the rest. Uses `O(|A| + |B|)` swaps.
///
/// With `n1 = |A|` and `n2 = |B|`:
/// - `n1 <= n2`: swap `A` with the first `n1` elements of `B`, then rotate `B`
///   so the untouched tail of `B` moves to its front.
/// - `n1 > n2`: swap the last `n2` elements of `A` with `B`, then rotate `A`
///   so the elements received from `B` move to its front.
///
/// # Example
///
/// ```
/// use nextcomb_core::rotate_disjoint;
///
/// //            A----A       B-------B
/// let mut s = [1, 2, 9, 9, 3, 4, 5];
/// rotate_disjoint(&mut s[..], 0usize, 2, 4, 7);
///
/// // A ++ B was [1, 2, 3, 4, 5]; it now reads [3, 4, 5, 1, 2].
/// assert_eq!(s, [3, 4, 9, 9, 5, 1, 2]);
/// ```
pub fn rotate_disjoint<S, C>(seq: &mut S, first1: C, last1: C, first2: C, last2: C)
where
    S: Sequence + ?Sized,
    C: Cursor,
{
    let n1 = first1.distance(last1);
    let n2 = first2.distance(last2);
    if n1 <= n2 {
        let mid2 = swap_ranges(seq, first1, last1, first2);
        rotate(seq, first2, mid2, last2);
    } else {
        let mid1 = last1.shifted(-n2);
        swap_ranges(seq, mid1, last1, first2);
        rotate(seq, first1, mid1, last1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gapped(a: &[u32], gap: usize, b: &[u32]) -> Vec<u32> {
        let mut v = a.to_vec();
        v.extend(std::iter::repeat(0).take(gap));
        v.extend_from_slice(b);
        v
    }

    #[test]
    fn test_matches_rotation_of_concatenation() {
        for n1 in 0..5u32 {
            for n2 in 0..5u32 {
                for gap in 0..3usize {
                    let a: Vec<u32> = (1..=n1).collect();
                    let b: Vec<u32> = (100..100 + n2).collect();
                    let mut seq = gapped(&a, gap, &b);

                    let first2 = a.len() + gap;
                    let last2 = seq.len();
                    rotate_disjoint(&mut seq[..], 0usize, a.len(), first2, last2);

                    let mut joined: Vec<u32> = a.iter().chain(&b).copied().collect();
                    joined.rotate_left(a.len());
                    let expected = gapped(&joined[..a.len()], gap, &joined[a.len()..]);
                    assert_eq!(seq, expected, "n1 {n1}, n2 {n2}, gap {gap}");
                }
            }
        }
    }

    #[test]
    fn test_adjacent_ranges_behave_like_rotate() {
        let mut seq = [1, 2, 3, 4, 5, 6];
        rotate_disjoint(&mut seq[..], 0usize, 4, 4, 6);
        assert_eq!(seq, [5, 6, 1, 2, 3, 4]);
    }

    #[test]
    fn test_longer_first_range() {
        let mut seq = ['a', 'b', 'c', '-', 'x'];
        rotate_disjoint(&mut seq[..], 0usize, 3, 4, 5);
        assert_eq!(seq, ['x', 'a', 'b', '-', 'c']);
    }
}
