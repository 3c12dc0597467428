/// Generates `0..size`, with every multiple of 100 replaced by `repeated`.
pub fn sequence_with_repeats(size: i32, repeated: i32) -> Vec<i32> {
    (0..size)
        .map(|i| if i % 100 == 0 { repeated } else { i })
        .collect()
}

/// Generates `0..size`, skipping every multiple of 100.
pub fn sequence_without_repeats(size: i32) -> Vec<i32> {
    (0..size).filter(|i| i % 100 != 0).collect()
}
