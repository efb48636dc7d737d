//! Descriptive statistics over plain `f64` slices.
//!
//! Quantiles use linear interpolation between the two nearest ranks:
//! for `n` sorted values the position of quantile `q` is `(n - 1) * q`,
//! and a fractional position blends its floor and ceiling neighbours.
//! Outlier bounds and report percentiles both depend on this choice.

/// Sorts finite values ascending, dropping NaN.
pub fn sorted_values(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Linear-interpolated quantile of an ascending slice.
///
/// Returns `None` for an empty slice or a `q` outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use estate_common::stats::quantile;
///
/// assert_eq!(quantile(&[1.0, 2.0, 3.0, 4.0], 0.5), Some(2.5));
/// assert_eq!(quantile(&[10.0, 10.0, 10.0, 10.0, 100.0], 0.75), Some(10.0));
/// ```
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let position = (sorted.len() - 1) as f64 * q;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Arithmetic mean, `None` when empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (denominator `n - 1`), `None` below two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let avg = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}
