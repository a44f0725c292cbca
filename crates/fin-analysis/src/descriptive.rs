//! Descriptive statistics over plain slices of values.
//!
//! Each function returns `None` when the statistic is undefined for the
//! given number of values.

use fin_model::ColumnStatistics;

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance (ddof = 1).
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some(sum_sq / (values.len() - 1) as f64)
}

/// Sample standard deviation (ddof = 1).
pub fn sample_std(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Population standard deviation (ddof = 0).
pub fn population_std(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((sum_sq / values.len() as f64).sqrt())
}

/// Quantile of already sorted values, interpolating linearly between the
/// two closest ranks at `h = (n - 1) * q`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let h = (n - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let (lower, upper) = (sorted[lo], sorted[hi]);
    let value = lower + (h - lo as f64) * (upper - lower);
    Some(value.clamp(lower, upper))
}

/// Bias-corrected Fisher-Pearson skewness.
///
/// Needs at least 3 values and non-zero variance.
pub fn skewness(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }
    let m = mean(values)?;
    let nf = n as f64;
    let m2 = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / nf;
    if is_constant(m2, m) {
        return None;
    }
    let m3 = values.iter().map(|v| (v - m).powi(3)).sum::<f64>() / nf;
    let g1 = m3 / m2.powf(1.5);
    Some((nf * (nf - 1.0)).sqrt() / (nf - 2.0) * g1)
}

/// Bias-corrected excess kurtosis.
///
/// Needs at least 4 values and non-zero variance.
pub fn kurtosis(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 4 {
        return None;
    }
    let m = mean(values)?;
    let nf = n as f64;
    let sum2: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    if is_constant(sum2 / nf, m) {
        return None;
    }
    let sum4: f64 = values.iter().map(|v| (v - m).powi(4)).sum();
    let s2 = sum2 / (nf - 1.0);
    let lead = nf * (nf + 1.0) / ((nf - 1.0) * (nf - 2.0) * (nf - 3.0));
    let tail = 3.0 * (nf - 1.0).powi(2) / ((nf - 2.0) * (nf - 3.0));
    Some(lead * sum4 / (s2 * s2) - tail)
}

/// Variance indistinguishable from zero at the scale of the mean.
fn is_constant(population_variance: f64, mean: f64) -> bool {
    population_variance <= f64::EPSILON * mean.abs().max(1.0).powi(2)
}

/// Full descriptive record for one column's non-missing values.
pub fn describe(values: &[f64]) -> ColumnStatistics {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    ColumnStatistics {
        count: values.len(),
        mean: mean(values),
        std: sample_std(values),
        min: sorted.first().copied(),
        max: sorted.last().copied(),
        p25: quantile_sorted(&sorted, 0.25),
        p50: quantile_sorted(&sorted, 0.5),
        p75: quantile_sorted(&sorted, 0.75),
        skew: skewness(values),
        kurtosis: kurtosis(values),
    }
}
