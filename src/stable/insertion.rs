//! Insertion sort. Also the small-input base case of [`crate::stable::hybrid_merge`].

use crate::comparison::{precedes, Direction};

sort_by_impl!("insertion_stable", 2_048);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort_shift_left(v, 1, &mut T::lt, Direction::Ascending);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F, direction: Direction)
where
    F: FnMut(&T, &T) -> bool,
{
    insertion_sort_shift_left(v, 1, &mut is_less, direction);
}

/// Sort `v` assuming `v[..offset]` is already sorted.
///
/// Every element of `v[offset..]` is shifted left by adjacent swaps until its left neighbour no
/// longer has to follow it. Equal elements stop the shift, so the sort is stable.
///
/// # Panics
///
/// Panics if `offset == 0` or `offset > v.len()`, unless `v` is empty or a single element.
pub fn insertion_sort_shift_left<T, F>(
    v: &mut [T],
    offset: usize,
    is_less: &mut F,
    direction: Direction,
) where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    assert!(offset != 0 && offset <= len);

    for i in offset..len {
        insert_tail(&mut v[..=i], is_less, direction);
    }
}

/// Inserts `v[v.len() - 1]` into the sorted prefix `v[..v.len() - 1]`.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F, direction: Direction)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut hole = v.len() - 1;
    while hole > 0 && precedes(&v[hole], &v[hole - 1], is_less, direction) {
        v.swap(hole - 1, hole);
        hole -= 1;
    }
}
