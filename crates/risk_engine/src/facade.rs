//! Engine façade: one call from parameters to (VaR, ES, error).
//!
//! The façade is the system boundary. It validates, estimates volatility,
//! simulates, optionally hands the P&L series to an observer, aggregates,
//! and folds every failure into a uniform [`RiskResult`] — no error or
//! panic propagates past it.

use risk_models::{historical_volatility, smile_adjusted_volatility};

use crate::aggregate::calculate_var_es;
use crate::error::EngineError;
use crate::scenarios::simulate_one_day_change;
use crate::types::{ConfidenceLevels, MarketParams, RiskReport, RiskResult};
use crate::validate::check_parameters;

/// Receiver for the simulated P&L series.
///
/// This is the seam for the external plotting collaborator: a side channel
/// with no bearing on the returned metrics. Observation happens after
/// simulation and before aggregation.
pub trait PnlObserver {
    /// Called once per pipeline run with the full P&L series.
    fn observe(&mut self, pnl: &[f64]);
}

/// Runs the typed pipeline: validation through aggregation.
///
/// Steps:
/// 1. [`check_parameters`] — first failure aborts before any computation.
/// 2. Historical volatility from the relative-price series, then the
///    moneyness smile adjustment.
/// 3. [`simulate_one_day_change`] with the adjusted volatility.
/// 4. Hand the P&L series to `observer`, when present.
/// 5. [`calculate_var_es`].
///
/// # Errors
/// Any [`EngineError`] variant raised by a stage, unchanged.
pub fn run_pipeline(
    market: &MarketParams,
    levels: &ConfidenceLevels,
    relative_prices: &[f64],
    mut observer: Option<&mut dyn PnlObserver>,
) -> Result<RiskReport, EngineError> {
    check_parameters(market, levels)?;

    let historical_vol = historical_volatility(relative_prices);
    let adjusted_vol = smile_adjusted_volatility(market.spot, market.strike, historical_vol);

    let pnl = simulate_one_day_change(market, relative_prices, adjusted_vol)?;

    if let Some(obs) = observer.as_deref_mut() {
        obs.observe(&pnl);
    }

    let (var, es) = calculate_var_es(&pnl, levels)?;

    Ok(RiskReport {
        var,
        es,
        historical_vol,
        adjusted_vol,
        scenario_count: pnl.len(),
    })
}

/// Calculates 1-day VaR and ES for a European call option.
///
/// Uniform-result wrapper around [`run_pipeline`]: on success the metrics
/// are filled and `error` is `None`; on any failure — validation or
/// computational — both metrics are exactly 0 and `error` carries the
/// message. Callers must check `error` before trusting the numbers.
///
/// # Examples
/// ```
/// use risk_engine::facade::calculate_one_day_eu_call_var_es;
/// use risk_engine::types::{ConfidenceLevels, MarketParams};
///
/// let market = MarketParams { spot: -1.0, strike: 110.0, expiry: 1.0, rate: 0.05 };
/// let levels = ConfidenceLevels { var: 0.99, es: 0.975 };
///
/// let result = calculate_one_day_eu_call_var_es(&market, &levels, &[1.0, 1.01], None);
/// assert_eq!(result.var, 0.0);
/// assert_eq!(result.es, 0.0);
/// assert!(result.error.is_some());
/// ```
pub fn calculate_one_day_eu_call_var_es(
    market: &MarketParams,
    levels: &ConfidenceLevels,
    relative_prices: &[f64],
    observer: Option<&mut dyn PnlObserver>,
) -> RiskResult {
    match run_pipeline(market, levels, relative_prices, observer) {
        Ok(report) => RiskResult::from_report(&report),
        Err(err) => RiskResult::from_error(err.to_string()),
    }
}
