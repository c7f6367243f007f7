#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sorts::unstable;

fuzz_target!(|data: &[u8]| {
    let mut expected = data.to_vec();
    expected.sort_unstable();

    let mut v = data.to_vec();
    unstable::quicksort::sort(&mut v);
    assert_eq!(v, expected);

    if data.len() <= 512 {
        let mut v = data.to_vec();
        unstable::selection::sort(&mut v);
        assert_eq!(v, expected);
    }
});
