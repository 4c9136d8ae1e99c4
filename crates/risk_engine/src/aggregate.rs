//! VaR and Expected Shortfall extraction from a P&L distribution.
//!
//! Sign convention: the raw percentiles live in P&L space where losses are
//! negative; both metrics are negated on return so a loss reads as a
//! positive risk number. This flip is deliberate and must stay explicit.

use risk_core::{mean, percentile, StatsError};

use crate::types::ConfidenceLevels;

/// Computes 1-day VaR and ES from a P&L series.
///
/// 1. `var_raw` = percentile of the P&L at rank (1 − var level)·100.
/// 2. `es_threshold` = percentile at rank (1 − es level)·100.
/// 3. ES = mean of all P&L values ≤ `es_threshold`; when the tail is empty
///    (a degenerate distribution) the threshold itself is used, avoiding a
///    NaN from averaging nothing.
/// 4. Returns `(−var_raw, −es)`.
///
/// Percentiles interpolate linearly between order statistics (see
/// [`risk_core::percentile`]); the estimator choice moves results at the
/// margin, so it is fixed there once for the whole workspace.
///
/// # Errors
/// [`StatsError::EmptySample`] when the P&L series is empty.
///
/// # Examples
/// ```
/// use risk_engine::aggregate::calculate_var_es;
/// use risk_engine::types::ConfidenceLevels;
///
/// let pnl = [-5.0, -1.0, 0.5, 1.0, 2.0];
/// let levels = ConfidenceLevels { var: 0.95, es: 0.975 };
/// let (var, es) = calculate_var_es(&pnl, &levels).unwrap();
/// // Losses are reported positive, and ES is at least as deep as VaR
/// assert!(var > 0.0);
/// assert!(es >= var);
/// ```
pub fn calculate_var_es(
    pnl: &[f64],
    levels: &ConfidenceLevels,
) -> Result<(f64, f64), StatsError> {
    let var_raw = percentile(pnl, (1.0 - levels.var) * 100.0)?;

    let es_threshold = percentile(pnl, (1.0 - levels.es) * 100.0)?;
    let tail: Vec<f64> = pnl.iter().copied().filter(|&p| p <= es_threshold).collect();
    let es = mean(&tail).unwrap_or(es_threshold);

    Ok((-var_raw, -es))
}
