//! Volatility estimation from historical relative prices.
//!
//! Two estimates are produced:
//!
//! - **historical**: annualised sample standard deviation of the daily
//!   relative-price series, σ_hist = √252 · stddev(ratios)
//! - **smile-adjusted**: σ_hist scaled by a piecewise moneyness factor,
//!   a deliberately simple stand-in for a calibrated volatility smile
//!
//! The smile thresholds and multipliers are fixed constants of the model,
//! not caller inputs.

use risk_core::math::stats::sample_std_dev;
use risk_core::time::annualisation_factor;

/// Moneyness (K/S) below which the option counts as deep in the money.
pub const DEEP_ITM_MONEYNESS: f64 = 0.9;

/// Moneyness (K/S) above which the option counts as deep out of the money.
pub const DEEP_OTM_MONEYNESS: f64 = 1.1;

/// Volatility multiplier applied deep in the money.
pub const DEEP_ITM_MULTIPLIER: f64 = 1.2;

/// Volatility multiplier applied deep out of the money.
pub const DEEP_OTM_MULTIPLIER: f64 = 1.3;

/// Annualised historical volatility of a daily relative-price series.
///
/// σ_hist = √252 · stddev(relative_prices), where stddev is the **sample**
/// standard deviation (ddof = 1). A series with fewer than two observations
/// has no measurable dispersion and yields 0.
///
/// # Examples
/// ```
/// use risk_models::historical_volatility;
///
/// // A flat series carries zero volatility
/// assert_eq!(historical_volatility(&[1.0; 500]), 0.0);
///
/// let vol = historical_volatility(&[0.99, 1.01, 0.98, 1.02]);
/// assert!(vol > 0.0);
/// ```
pub fn historical_volatility(relative_prices: &[f64]) -> f64 {
    annualisation_factor() * sample_std_dev(relative_prices)
}

/// Smile-adjusted volatility from a piecewise moneyness model.
///
/// Moneyness is K/S. Deep in the money (< 0.9) scales σ by 1.2, deep out of
/// the money (> 1.1) by 1.3, and the at-the-money band in between leaves σ
/// unchanged. The boundaries 0.9 and 1.1 belong to the at-the-money band.
///
/// # Examples
/// ```
/// use risk_models::smile_adjusted_volatility;
///
/// // Deep ITM: strike well below spot
/// assert_eq!(smile_adjusted_volatility(100.0, 80.0, 0.2), 0.2 * 1.2);
/// // Deep OTM: strike well above spot
/// assert_eq!(smile_adjusted_volatility(100.0, 120.0, 0.2), 0.2 * 1.3);
/// // Near ATM: unchanged
/// assert_eq!(smile_adjusted_volatility(100.0, 100.0, 0.2), 0.2);
/// ```
pub fn smile_adjusted_volatility(spot: f64, strike: f64, historical_vol: f64) -> f64 {
    let moneyness = strike / spot;

    let factor = if moneyness < DEEP_ITM_MONEYNESS {
        DEEP_ITM_MULTIPLIER
    } else if moneyness > DEEP_OTM_MONEYNESS {
        DEEP_OTM_MULTIPLIER
    } else {
        1.0
    };

    historical_vol * factor
}
