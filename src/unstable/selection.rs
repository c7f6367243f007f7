//! Selection sort. Repeatedly moves the first element of the unsorted suffix that has to come
//! first to the front of that suffix.

use crate::comparison::{precedes, Direction};

sort_by_impl!("selection_unstable", 2_048);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut T::lt, Direction::Ascending);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F, direction: Direction)
where
    F: FnMut(&T, &T) -> bool,
{
    selection_sort(v, &mut is_less, direction);
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F, direction: Direction)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let mut first_idx = i;
        for j in (i + 1)..len {
            // Strict comparison, on ties the earliest candidate is kept.
            if precedes(&v[j], &v[first_idx], is_less, direction) {
                first_idx = j;
            }
        }

        v.swap(i, first_idx);
    }
}
