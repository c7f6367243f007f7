/// Splits fuzzer input into a direction flag and the values to sort, every value is tagged with its
/// input position so stability violations are visible.
pub fn tagged_values(data: &[u8]) -> (bool, Vec<(u8, usize)>) {
    match data.split_first() {
        Some((&flags, rest)) => (
            flags & 1 == 1,
            rest.iter().enumerate().map(|(i, &b)| (b, i)).collect(),
        ),
        None => (false, Vec::new()),
    }
}

/// The result of `slice::sort_by` on the key only, which is stable.
pub fn stable_expected(v: &[(u8, usize)], descending: bool) -> Vec<(u8, usize)> {
    let mut expected = v.to_vec();
    if descending {
        expected.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        expected.sort_by(|a, b| a.0.cmp(&b.0));
    }

    expected
}
