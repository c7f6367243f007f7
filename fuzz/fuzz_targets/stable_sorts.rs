#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sorts::{stable, Direction};
use classic_sorts_fuzz::{stable_expected, tagged_values};

fuzz_target!(|data: &[u8]| {
    let (descending, input) = tagged_values(data);
    let direction = Direction::from(descending);
    let expected = stable_expected(&input, descending);

    let mut v = input.clone();
    stable::hybrid_merge::sort_by(&mut v, |a, b| a.0 < b.0, direction);
    assert_eq!(v, expected);

    // Small thresholds exercise the merge path on short inputs.
    let threshold = data.len() % 5;
    let mut v = input.clone();
    stable::hybrid_merge::sort_by_threshold(&mut v, threshold, |a, b| a.0 < b.0, direction);
    assert_eq!(v, expected);

    if input.len() <= 512 {
        let mut v = input.clone();
        stable::insertion::sort_by(&mut v, |a, b| a.0 < b.0, direction);
        assert_eq!(v, expected);

        let mut v = input;
        stable::bubble::sort_by(&mut v, |a, b| a.0 < b.0, direction);
        assert_eq!(v, expected);
    }
});
