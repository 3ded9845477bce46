//! Numeric assertion helpers for animation samples.

pub const DEFAULT_TOLERANCE: f32 = 1e-3;

pub fn approx_eq(actual: f32, expected: f32, tolerance: f32) -> bool {
    (actual - expected).abs() <= tolerance
}

#[track_caller]
pub fn assert_approx_eq(actual: f32, expected: f32) {
    assert!(
        approx_eq(actual, expected, DEFAULT_TOLERANCE),
        "expected {expected}, got {actual}"
    );
}

pub fn is_non_decreasing(samples: &[f32]) -> bool {
    samples.windows(2).all(|pair| pair[1] >= pair[0])
}

/// True if some sample lies strictly between `low` and `high`.
pub fn has_intermediate(samples: &[f32], low: f32, high: f32) -> bool {
    samples.iter().any(|value| *value > low && *value < high)
}
