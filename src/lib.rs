//! Classic comparison sorts: selection, bubble, insertion, a hybrid merge/insertion sort and a
//! median-of-three quicksort, plus a small median ranking utility built on top of them.

macro_rules! sort_impl {
    ($name:expr) => {
        sort_impl!($name, usize::MAX);
    };
    ($name:expr, $max_test_len:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            const MAX_TEST_LEN: usize = $max_test_len;

            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }
        }
    };
}

macro_rules! sort_by_impl {
    ($name:expr $(, $max_test_len:expr)?) => {
        sort_impl!($name $(, $max_test_len)?);

        impl sort_test_tools::SortBy for SortImpl {
            #[inline]
            fn sort_by<T, F>(arr: &mut [T], is_less: F, descending: bool)
            where
                F: FnMut(&T, &T) -> bool,
            {
                sort_by(arr, is_less, $crate::Direction::from(descending));
            }
        }
    };
}

pub mod comparison;
pub mod other;
pub mod stable;
pub mod unstable;

pub use comparison::{precedes, Direction};
pub use other::score::{rank, Rank, Score};

pub use stable::bubble::sort_by as bubble_sort;
pub use stable::hybrid_merge::sort_by_threshold as hybrid_merge_sort;
pub use stable::insertion::sort_by as insertion_sort;
pub use unstable::quicksort::sort as quicksort;
pub use unstable::selection::sort_by as selection_sort;
