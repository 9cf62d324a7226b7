//! Deterministic numeric and statistical helpers.
//!
//! Every helper is total: empty input and zero denominators yield `0.0`
//! instead of `NaN` or a panic.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Return `numer / denom * 100`, guarding division by zero.
#[must_use]
pub fn safe_percent(numer: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        numer as f64 / denom as f64 * 100.0
    }
}

/// Arithmetic mean of a series of counts; `0.0` for an empty series.
#[must_use]
pub fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().map(|v| *v as f64).sum();
    sum / values.len() as f64
}

/// Population standard deviation (divides by `N`, not `N - 1`).
#[must_use]
pub fn population_std_dev(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mu = mean(values);
    let variance: f64 = values
        .iter()
        .map(|v| {
            let d = *v as f64 - mu;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Coefficient of variation as a percentage (`std_dev / mean * 100`).
///
/// Returns `0.0` when `mean` is zero.
#[must_use]
pub fn coefficient_of_variation(std_dev: f64, mean: f64) -> f64 {
    if mean == 0.0 {
        0.0
    } else {
        std_dev / mean * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_f64_rounds_expected_precision() {
        let value = 12.34567;
        assert_eq!(round_f64(value, 2), 12.35);
        assert_eq!(round_f64(value, 4), 12.3457);
    }

    #[test]
    fn safe_percent_guards_divide_by_zero() {
        assert_eq!(safe_percent(5, 0), 0.0);
        assert_eq!(safe_percent(1, 4), 25.0);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[100, 300]), 200.0);
    }

    #[test]
    fn population_std_dev_divides_by_n() {
        assert_eq!(population_std_dev(&[100, 300]), 100.0);
        assert_eq!(population_std_dev(&[7]), 0.0);
        assert_eq!(population_std_dev(&[]), 0.0);
    }

    #[test]
    fn coefficient_of_variation_handles_zero_mean() {
        assert_eq!(coefficient_of_variation(3.0, 0.0), 0.0);
        assert_eq!(coefficient_of_variation(100.0, 200.0), 50.0);
    }
}
