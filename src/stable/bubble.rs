//! Bubble sort with early exit. Only strictly out of order neighbours are swapped, which keeps
//! equal elements in their input order.

use crate::comparison::{precedes, Direction};

sort_by_impl!("bubble_stable", 2_048);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut T::lt, Direction::Ascending);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F, direction: Direction)
where
    F: FnMut(&T, &T) -> bool,
{
    bubble_sort(v, &mut is_less, direction);
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F, direction: Direction)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // After each pass the largest (per direction) remaining element sits at `unsorted_end - 1`.
    let mut unsorted_end = len;
    while unsorted_end > 1 {
        let mut swapped = false;

        for j in 0..unsorted_end - 1 {
            if precedes(&v[j + 1], &v[j], is_less, direction) {
                v.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            return;
        }

        unsorted_end -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_takes_a_single_pass() {
        let mut comps = 0;
        let mut v = (0..50).collect::<Vec<i32>>();
        sort_by(
            &mut v,
            |a, b| {
                comps += 1;
                a < b
            },
            Direction::Ascending,
        );

        assert_eq!(comps, 49);
    }

    #[test]
    fn descending_keeps_equal_order() {
        let mut v = [(2, 'a'), (5, 'b'), (2, 'c'), (5, 'd'), (1, 'e')];
        sort_by(&mut v, |a, b| a.0 < b.0, Direction::Descending);
        assert_eq!(v, [(5, 'b'), (5, 'd'), (2, 'a'), (2, 'c'), (1, 'e')]);
    }
}
