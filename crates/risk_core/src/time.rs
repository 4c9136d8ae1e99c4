//! Trading-calendar constants.
//!
//! The whole engine measures time in year fractions under a fixed
//! trading-day calendar. The calendar length is a named constant so an
//! alternate convention (e.g. 365 calendar days) can be substituted in
//! one place.

/// Number of trading days in a year under the standard equity calendar.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Year fraction corresponding to a single trading day.
pub const ONE_TRADING_DAY: f64 = 1.0 / TRADING_DAYS_PER_YEAR;

/// Annualisation factor for daily volatility: sqrt of the calendar length.
#[inline]
pub fn annualisation_factor() -> f64 {
    TRADING_DAYS_PER_YEAR.sqrt()
}
