//! Descriptive statistics over sample slices.
//!
//! The percentile estimator and the standard-deviation convention are fixed
//! here, once, so every consumer of the crate reproduces identical numbers:
//!
//! - `percentile` interpolates linearly between the two closest order
//!   statistics (rank `h = (n - 1) * q / 100`), the default estimator of
//!   most statistical packages.
//! - `sample_std_dev` uses the sample convention (ddof = 1), the standard
//!   choice in risk practice.

use thiserror::Error;

/// Statistics errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StatsError {
    /// Operation requires at least one observation.
    #[error("statistic requires a non-empty sample")]
    EmptySample,

    /// Percentile rank outside the [0, 100] range.
    #[error("percentile rank must be in [0, 100], got {rank}")]
    InvalidRank {
        /// The offending rank value
        rank: f64,
    },
}

/// Arithmetic mean of a sample.
///
/// Returns `None` for an empty slice rather than producing NaN.
#[inline]
pub fn mean(sample: &[f64]) -> Option<f64> {
    if sample.is_empty() {
        return None;
    }
    Some(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Sample standard deviation (ddof = 1).
///
/// A sample of fewer than two observations has no measurable dispersion and
/// yields 0, keeping downstream volatility estimates finite.
pub fn sample_std_dev(sample: &[f64]) -> f64 {
    let n = sample.len();
    if n < 2 {
        return 0.0;
    }

    // mean() is Some for non-empty input
    let mu = mean(sample).unwrap_or(0.0);
    let sum_sq: f64 = sample.iter().map(|x| (x - mu) * (x - mu)).sum();

    (sum_sq / (n - 1) as f64).sqrt()
}

/// Percentile of a sample at `rank` (in [0, 100]), by linear interpolation
/// between the two closest order statistics.
///
/// For a sorted sample x(0) ≤ … ≤ x(n−1), the estimate at rank q is
/// x(l) + g · (x(l+1) − x(l)) where h = (n − 1) · q / 100, l = ⌊h⌋ and
/// g = h − l. The input order is irrelevant; the slice is copied and sorted
/// internally, never mutated.
///
/// # Errors
/// - [`StatsError::EmptySample`] for an empty slice
/// - [`StatsError::InvalidRank`] when `rank` is outside [0, 100] or NaN
///
/// # Examples
/// ```
/// use risk_core::percentile;
///
/// let sample = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(percentile(&sample, 0.0).unwrap(), 1.0);
/// assert_eq!(percentile(&sample, 50.0).unwrap(), 2.5);
/// assert_eq!(percentile(&sample, 100.0).unwrap(), 4.0);
/// ```
pub fn percentile(sample: &[f64], rank: f64) -> Result<f64, StatsError> {
    if sample.is_empty() {
        return Err(StatsError::EmptySample);
    }
    if !(0.0..=100.0).contains(&rank) {
        return Err(StatsError::InvalidRank { rank });
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    if n == 1 {
        return Ok(sorted[0]);
    }

    let h = (n - 1) as f64 * rank / 100.0;
    let lower = h.floor() as usize;
    let frac = h - h.floor();

    if lower + 1 >= n {
        return Ok(sorted[n - 1]);
    }

    Ok(sorted[lower] + frac * (sorted[lower + 1] - sorted[lower]))
}
