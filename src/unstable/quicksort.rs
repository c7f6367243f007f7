//! Recursive quicksort with median-of-three pivot selection and a crossing pointer (Hoare style)
//! partition.
//!
//! Only sorts ascending by `Ord`. Elements equal to the pivot stop both scans, which splits runs
//! of equal elements evenly instead of degrading to quadratic time.

sort_impl!("quicksort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    quicksort(v, 0, len - 1, &mut T::lt);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

/// Sorts the inclusive range `v[first..=last]`.
fn quicksort<T, F>(v: &mut [T], mut first: usize, mut last: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while first < last {
        let split = partition(v, first, last, is_less);

        // Recurse into the smaller side and loop on the larger one, this limits stack depth to
        // O(log n) even for adversarial inputs.
        if split - first < last + 1 - split {
            quicksort(v, first, split - 1, is_less);
            first = split;
        } else {
            quicksort(v, split, last, is_less);
            last = split - 1;
        }
    }
}

/// Partitions `v[first..=last]` (at least two elements) and returns `split` such that
/// `v[first..split]` <= pivot <= `v[split..=last]`, with `first < split <= last`.
fn partition<T, F>(v: &mut [T], first: usize, last: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(first < last);

    let mid = first + (last - first) / 2;
    sort3(v, first, mid, last, is_less);

    // v[first] and v[last] are already on the correct side of the pivot.
    let mut pivot_pos = mid;
    let mut left = first + 1;
    let mut right = last - 1;

    while left <= right {
        while left <= right && is_less(&v[left], &v[pivot_pos]) {
            left += 1;
        }
        while left <= right && is_less(&v[pivot_pos], &v[right]) {
            right -= 1;
        }

        if left <= right {
            v.swap(left, right);

            // The pivot value may itself be swapped, follow it.
            if pivot_pos == left {
                pivot_pos = right;
            } else if pivot_pos == right {
                pivot_pos = left;
            }

            left += 1;
            // right >= left >= first + 1 before the decrement, no underflow.
            right -= 1;
        }
    }

    left
}

/// Orders `v[a] <= v[b] <= v[c]` with three conditional swaps.
#[inline]
fn sort3<T, F>(v: &mut [T], a: usize, b: usize, c: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&v[c], &v[a]) {
        v.swap(a, c);
    }
    if is_less(&v[b], &v[a]) {
        v.swap(a, b);
    }
    if is_less(&v[c], &v[b]) {
        v.swap(b, c);
    }
}
