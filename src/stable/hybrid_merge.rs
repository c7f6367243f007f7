//! Top-down merge sort that hands small partitions to insertion sort.
//!
//! The merge never moves elements out of the slice. It records the merged order as source indices
//! and then permutes the slice with swaps. If the user comparison panics mid-merge, nothing has
//! been moved yet and the slice still holds every original element exactly once.

use crate::comparison::{precedes, Direction};
use crate::stable::insertion::insertion_sort_shift_left;

sort_by_impl!("hybrid_merge_stable");

/// Partitions of at most this length are insertion sorted instead of split further.
pub const DEFAULT_THRESHOLD: usize = 12;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, DEFAULT_THRESHOLD, &mut T::lt, Direction::Ascending);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], is_less: F, direction: Direction)
where
    F: FnMut(&T, &T) -> bool,
{
    sort_by_threshold(v, DEFAULT_THRESHOLD, is_less, direction);
}

/// Like [`sort_by`] with a custom insertion sort threshold.
///
/// A `threshold` of 0 or 1 never takes the insertion sort path, the slice is split all the way
/// down to single elements.
#[inline]
pub fn sort_by_threshold<T, F>(v: &mut [T], threshold: usize, mut is_less: F, direction: Direction)
where
    F: FnMut(&T, &T) -> bool,
{
    merge_sort(v, threshold, &mut is_less, direction);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn merge_sort<T, F>(v: &mut [T], threshold: usize, is_less: &mut F, direction: Direction)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    if len <= threshold {
        insertion_sort_shift_left(v, 1, is_less, direction);
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = v.split_at_mut(mid);
        merge_sort(left, threshold, is_less, direction);
        merge_sort(right, threshold, is_less, direction);
    }

    merge(v, mid, is_less, direction);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` into `v`.
fn merge<T, F>(v: &mut [T], mid: usize, is_less: &mut F, direction: Direction)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // order[k] is the current index of the element that belongs at position k.
    let mut order = Vec::with_capacity(len);

    let (mut l, mut r) = (0, mid);
    while l < mid && r < len {
        // Only take from the right run if it strictly precedes, ties go left.
        if precedes(&v[r], &v[l], is_less, direction) {
            order.push(r);
            r += 1;
        } else {
            order.push(l);
            l += 1;
        }
    }
    order.extend(l..mid);
    order.extend(r..len);

    apply_permutation(v, &mut order);
}

/// Rearranges `v` so that `v[k]` holds what was at `v[order[k]]`. Walks every cycle of the
/// permutation once, `order` is consumed in the process.
fn apply_permutation<T>(v: &mut [T], order: &mut [usize]) {
    debug_assert_eq!(v.len(), order.len());

    for start in 0..order.len() {
        if order[start] == start {
            continue;
        }

        let mut pos = start;
        loop {
            let src = order[pos];
            // Mark as placed.
            order[pos] = pos;

            if src == start {
                break;
            }

            v.swap(pos, src);
            pos = src;
        }
    }
}
