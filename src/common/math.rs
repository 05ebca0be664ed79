//! Windowed arithmetic over plain `f64` slices.

/// Arithmetic mean of a slice, `None` when empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Simple moving average of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    mean(&values[values.len() - period..])
}

/// Trailing mean for every position of `values`.
///
/// Position `i` holds the mean of `values[i + 1 - period ..= i]`, or `None`
/// while fewer than `period` values have been seen. Each window is summed
/// on its own so the result does not accumulate drift over long series.
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }

    (0..values.len())
        .map(|i| {
            if i + 1 < period {
                None
            } else {
                mean(&values[i + 1 - period..=i])
            }
        })
        .collect()
}
