//! Tests for the range algorithms.

use super::*;

#[test]
fn test_lower_bound_duplicates() {
    let items = [1, 2, 2, 2, 4];
    assert_eq!(lower_bound(&items[..], 0usize, 5, &2), 1);
    assert_eq!(lower_bound(&items[..], 0usize, 5, &3), 4);
    assert_eq!(lower_bound(&items[..], 0usize, 5, &0), 0);
}

#[test]
fn test_upper_bound_duplicates() {
    let items = [1, 2, 2, 2, 4];
    assert_eq!(upper_bound(&items[..], 0usize, 5, &2), 4);
    assert_eq!(upper_bound(&items[..], 0usize, 5, &4), 5);
    assert_eq!(upper_bound(&items[..], 0usize, 5, &1), 1);
}

#[test]
fn test_bounds_on_subrange() {
    let items = [9, 1, 3, 5, 0];
    assert_eq!(lower_bound(&items[..], 1usize, 4, &4), 3);
    assert_eq!(upper_bound(&items[..], 1usize, 4, &5), 4);
    assert_eq!(lower_bound(&items[..], 2usize, 2, &4), 2);
}

#[test]
fn test_swap_ranges_returns_end_of_second() {
    let mut items = [1, 2, 3, 4, 5, 6];
    let end = swap_ranges(&mut items[..], 0usize, 2, 3);
    assert_eq!(end, 5);
    assert_eq!(items, [4, 5, 3, 1, 2, 6]);
}

#[test]
fn test_swap_ranges_empty() {
    let mut items = [1, 2];
    let end = swap_ranges(&mut items[..], 1usize, 1, 0);
    assert_eq!(end, 0);
    assert_eq!(items, [1, 2]);
}

#[test]
fn test_reverse_odd_and_even() {
    let mut odd = [1, 2, 3, 4, 5];
    reverse(&mut odd[..], 0usize, 5);
    assert_eq!(odd, [5, 4, 3, 2, 1]);

    let mut even = [1, 2, 3, 4];
    reverse(&mut even[..], 1usize, 4);
    assert_eq!(even, [1, 4, 3, 2]);

    let mut single = [7];
    reverse(&mut single[..], 0usize, 1);
    assert_eq!(single, [7]);
}

#[test]
fn test_rotate_matches_rotate_left() {
    for len in 0..8usize {
        for middle in 0..=len {
            let mut items: Vec<usize> = (0..len).collect();
            let mut expected = items.clone();
            expected.rotate_left(middle);

            let moved = rotate(&mut items[..], 0usize, middle, len);

            assert_eq!(items, expected, "len {len}, middle {middle}");
            assert_eq!(moved, len - middle, "len {len}, middle {middle}");
        }
    }
}

#[test]
fn test_rotate_inner_range() {
    let mut items = ['x', 'a', 'b', 'c', 'd', 'y'];
    rotate(&mut items[..], 1usize, 4, 5);
    assert_eq!(items, ['x', 'd', 'a', 'b', 'c', 'y']);
}
