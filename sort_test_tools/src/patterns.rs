//! Inputs for the test suite and the benches.
//!
//! Every generator draws from a `StdRng` seeded with [`random_init_seed`]. By default the seed is
//! fixed per process, `OVERRIDE_SEED=<u64>` pins it across processes to reproduce a failure.

use std::env;
use std::ops::RangeInclusive;
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use rand::distributions::{Distribution, Uniform};
use rand::prelude::*;

// --- Values ---

pub fn random(len: usize) -> Vec<i32> {
    random_uniform(len, i32::MIN..=i32::MAX)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();
    dist.sample_iter(seeded_rng()).take(len).collect()
}

/// Random values where the first `sorted_percent` of the slice is already in ascending order.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = percent_of(len, sorted_percent);
    v[..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// About `saw_count` runs, each one sorted either ascending or descending at random.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let mut v = random(len);
    let run_len = (len / saw_count.max(1)).max(1);

    let mut rng = seeded_rng();
    for run in v.chunks_mut(run_len) {
        run.sort_unstable();
        if rng.gen::<bool>() {
            run.reverse();
        }
    }

    v
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (rising, falling) = v.split_at_mut(len / 2);
    rising.sort_unstable();
    falling.sort_unstable_by(|a, b| b.cmp(a));

    v
}

/// `zero_percent` of the values are `0`, the rest comes from `rest`, shuffled together.
///
/// Inputs dominated by one value are where a partition that doesn't stop on equal elements goes
/// quadratic.
pub fn mostly_zero(len: usize, zero_percent: f64, rest: fn(usize) -> Vec<i32>) -> Vec<i32> {
    let zero_len = percent_of(len, zero_percent);

    let mut v = vec![0; zero_len];
    v.extend(rest(len - zero_len));
    v.shuffle(&mut seeded_rng());

    v
}

// --- Stability ---

/// Maps every key into `0..distinct` and pairs it with the number of times that key was seen so
/// far, starting at 1.
///
/// Sorting by the key alone, a stable sort keeps the tags of equal keys increasing.
pub fn tag_occurrences(keys: &[i32], distinct: usize) -> Vec<(i32, i32)> {
    assert!(distinct != 0 && distinct <= i32::MAX as usize);

    let mut seen = vec![0; distinct];
    keys.iter()
        .map(|&key| {
            let key = key.rem_euclid(distinct as i32);
            let count = &mut seen[key as usize];
            *count += 1;
            (key, *count)
        })
        .collect()
}

/// `len` random keys in `0..distinct`, tagged with [`tag_occurrences`].
pub fn random_tagged(len: usize, distinct: usize) -> Vec<(i32, i32)> {
    tag_occurrences(&random_uniform(len, 0..=(distinct as i32 - 1)), distinct)
}

// --- Scores ---

/// `len` (English, Math) score pairs with parts drawn from the given ranges.
pub fn score_parts(
    len: usize,
    english: RangeInclusive<i32>,
    math: RangeInclusive<i32>,
) -> Vec<(i64, i64)> {
    let english = Uniform::from(english);
    let math = Uniform::from(math);
    let mut rng = seeded_rng();

    (0..len)
        .map(|_| {
            (
                i64::from(english.sample(&mut rng)),
                i64::from(math.sample(&mut rng)),
            )
        })
        .collect()
}

// --- Seed ---

/// Switches every later pattern to a fresh random seed, unless `OVERRIDE_SEED` is set.
///
/// By default `patterns::random(4)` yields the same values for the whole process, benchmarks
/// should call this so each iteration sorts new values.
pub fn use_random_seed_each_time() {
    let mut source = seed_source();
    if !matches!(*source, SeedSource::Override(_)) {
        *source = SeedSource::PerCall;
    }
}

/// The seed the next pattern will use. Set `OVERRIDE_SEED=<u64>` to reproduce a run.
pub fn random_init_seed() -> u64 {
    match *seed_source() {
        SeedSource::Override(seed) | SeedSource::PerProcess(seed) => seed,
        SeedSource::PerCall => thread_rng().gen(),
    }
}

pub fn is_seed_overridden() -> bool {
    matches!(*seed_source(), SeedSource::Override(_))
}

// --- Private ---

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SeedSource {
    Override(u64),
    PerProcess(u64),
    PerCall,
}

static SEED_SOURCE: Lazy<Mutex<SeedSource>> = Lazy::new(|| {
    let source = match env::var("OVERRIDE_SEED") {
        Ok(seed) => SeedSource::Override(
            seed.trim()
                .parse()
                .unwrap_or_else(|_| panic!("OVERRIDE_SEED must be a u64, got: '{seed}'")),
        ),
        Err(_) => SeedSource::PerProcess(thread_rng().gen()),
    };

    Mutex::new(source)
});

// Tests that panic on purpose never hold the lock, a poisoned lock still has a valid seed.
fn seed_source() -> MutexGuard<'static, SeedSource> {
    SEED_SOURCE.lock().unwrap_or_else(PoisonError::into_inner)
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn percent_of(len: usize, percent: f64) -> usize {
    (((len as f64) * (percent / 100.0)).round() as usize).min(len)
}
