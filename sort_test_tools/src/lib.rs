/// A sort driven by the natural order of `T`.
pub trait Sort {
    /// Inputs longer than this are skipped by the generic test suite. Quadratic sorts lower it.
    const MAX_TEST_LEN: usize = usize::MAX;

    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;
}

/// A sort that also takes a user `is_less` comparison and a direction.
pub trait SortBy: Sort {
    fn sort_by<T, F>(arr: &mut [T], is_less: F, descending: bool)
    where
        F: FnMut(&T, &T) -> bool;
}

pub mod patterns;
