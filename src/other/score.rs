//! Ranks a two part score against the medians of a reference population.

use std::fmt;

use crate::comparison::Direction;
use crate::stable::hybrid_merge;

/// A score made of an English and a Math part. Any integer is a valid part, there is no range or
/// granularity restriction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Score {
    pub english: i64,
    pub math: i64,
}

impl Score {
    pub const fn new(english: i64, math: i64) -> Self {
        Self { english, math }
    }
}

impl From<(i64, i64)> for Score {
    fn from((english, math): (i64, i64)) -> Self {
        Self::new(english, math)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<English: {}, Math: {}>", self.english, self.math)
    }
}

/// Which parts of a score are strictly above the population median.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Both,
    Math,
    English,
    None,
}

impl Rank {
    fn from_parts(english_above: bool, math_above: bool) -> Self {
        match (english_above, math_above) {
            (true, true) => Rank::Both,
            (false, true) => Rank::Math,
            (true, false) => Rank::English,
            (false, false) => Rank::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Both => "Both",
            Rank::Math => "Math",
            Rank::English => "English",
            Rank::None => "None",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compares `candidate` part by part against the medians of `population`.
///
/// A part only counts if it is strictly greater than the median. An empty population ranks every
/// candidate as [`Rank::Both`].
pub fn rank(population: &[Score], candidate: Score) -> Rank {
    let mut by_english = population.to_vec();
    hybrid_merge::sort_by(
        &mut by_english,
        |a, b| a.english < b.english,
        Direction::Ascending,
    );

    let mut by_math = population.to_vec();
    hybrid_merge::sort_by(&mut by_math, |a, b| a.math < b.math, Direction::Ascending);

    let (Some(median_english), Some(median_math)) = (
        median_by(&by_english, |s| s.english),
        median_by(&by_math, |s| s.math),
    ) else {
        // Empty population, there is no median to beat.
        return Rank::Both;
    };

    Rank::from_parts(
        candidate.english > median_english,
        candidate.math > median_math,
    )
}

/// Median of `key` over `sorted`, which has to be sorted ascending by `key`.
///
/// For an even length this is the floor of the mean of the two middle values. Returns `None` for
/// an empty slice.
pub fn median_by<T, K>(sorted: &[T], mut key: K) -> Option<i64>
where
    K: FnMut(&T) -> i64,
{
    let len = sorted.len();
    if len == 0 {
        return None;
    }

    let upper = key(&sorted[len / 2]);
    if len % 2 == 1 {
        return Some(upper);
    }

    let lower = key(&sorted[len / 2 - 1]);
    // Widen to avoid overflow, div_euclid by a positive divisor rounds toward negative infinity.
    Some((i128::from(lower) + i128::from(upper)).div_euclid(2) as i64)
}
