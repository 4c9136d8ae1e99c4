//! One-day historical-simulation scenario engine.
//!
//! Each historical relative price is replayed against today's market: the
//! spot is shocked by the observed ratio, the clock advances one trading
//! day, and the option is repriced. The P&L of a scenario is the repriced
//! value minus the baseline value.

use thiserror::Error;

use risk_core::ONE_TRADING_DAY;
use risk_models::{AnalyticalError, BlackScholes};

use crate::types::MarketParams;

/// Scenario simulation errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScenarioError {
    /// The option expires before the simulated day completes. No clamping
    /// is applied: silently flooring the remaining expiry would distort the
    /// repriced values.
    #[error("remaining time to expiry is negative")]
    NegativeRemainingExpiry,

    /// Pricing model rejected a scenario's parameters.
    #[error(transparent)]
    Model(#[from] AnalyticalError),
}

/// Replays each relative price as a one-day shock and reprices the option.
///
/// Steps, per the historical-simulation method:
/// 1. Baseline value: price(S0, K, T, r, σ) — computed once, reused across
///    all scenarios.
/// 2. For each relative price ρ in input order: scenario spot S = S0·ρ,
///    remaining expiry T − 1/252, scenario P&L =
///    price(S, K, T − 1/252, r, σ) − baseline.
///
/// The output series aligns one-to-one (same length, same order) with the
/// input, which is treated as read-only. Work is O(n) closed-form
/// valuations; the function is pure.
///
/// # Errors
/// - [`ScenarioError::NegativeRemainingExpiry`] when `market.expiry` does
///   not cover the simulated day
/// - [`ScenarioError::Model`] when the pricer rejects the inputs (an
///   upstream validation gap, not expected from the façade)
///
/// # Examples
/// ```
/// use risk_engine::scenarios::simulate_one_day_change;
/// use risk_engine::types::MarketParams;
///
/// let market = MarketParams { spot: 100.0, strike: 100.0, expiry: 1.0, rate: 0.05 };
/// let pnl = simulate_one_day_change(&market, &[1.01, 0.99], 0.2).unwrap();
/// assert_eq!(pnl.len(), 2);
/// // An up-move gains, a down-move loses
/// assert!(pnl[0] > 0.0);
/// assert!(pnl[1] < 0.0);
/// ```
pub fn simulate_one_day_change(
    market: &MarketParams,
    relative_prices: &[f64],
    sigma: f64,
) -> Result<Vec<f64>, ScenarioError> {
    let baseline_model = BlackScholes::new(market.spot, market.rate, sigma)?;
    let baseline = baseline_model.price_call(market.strike, market.expiry);

    let remaining = market.expiry - ONE_TRADING_DAY;

    let mut pnl = Vec::with_capacity(relative_prices.len());

    for &ratio in relative_prices {
        if remaining <= 0.0 {
            return Err(ScenarioError::NegativeRemainingExpiry);
        }

        let scenario_spot = market.spot * ratio;
        let scenario_model = BlackScholes::new(scenario_spot, market.rate, sigma)?;
        let end_of_day = scenario_model.price_call(market.strike, remaining);

        pnl.push(end_of_day - baseline);
    }

    Ok(pnl)
}
