use std::hint::black_box;

/// Iterations of the summing loop.
pub const EXPENSIVE_ITERATIONS: u64 = 100_000;

/// Derives the display value for a title.
///
/// Sums `0..EXPENSIVE_ITERATIONS` (4999950000) and appends the sum to the
/// title. The loop always runs in full; `black_box` keeps it from being
/// folded into a constant.
pub fn expensive_function(title: &str) -> String {
    let mut sum: u64 = 0;
    for i in 0..black_box(EXPENSIVE_ITERATIONS) {
        sum += i;
    }
    format!("{title}: {sum}")
}
