//! The ordering adapter shared by every sort that takes a user comparison.
//!
//! A comparison is an `is_less` predicate: `is_less(a, b)` returns `true` if `a` strictly precedes
//! `b` in ascending order. The [`Direction`] decides whether that order is used as is or reversed.

/// Sort direction. `Descending` reverses the order defined by the comparison.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    #[inline]
    pub fn is_descending(self) -> bool {
        matches!(self, Direction::Descending)
    }
}

/// `true` maps to `Descending`, mirroring a plain `descending` flag.
impl From<bool> for Direction {
    #[inline]
    fn from(descending: bool) -> Self {
        if descending {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }
}

/// Returns `true` if `a` has to be placed before `b` given `is_less` and `direction`.
///
/// For equal elements this is `false` in both directions, which is what the stable sorts rely on
/// to never move an element past an equal one.
#[inline]
pub fn precedes<T, F>(a: &T, b: &T, is_less: &mut F, direction: Direction) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    match direction {
        Direction::Ascending => is_less(a, b),
        Direction::Descending => is_less(b, a),
    }
}
