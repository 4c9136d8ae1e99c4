//! Error types for analytical pricing.

use thiserror::Error;

/// Analytical pricing errors.
///
/// Raised when a model is constructed with parameters outside its domain.
/// These indicate an internal invariant violation when reached through the
/// engine, since the engine validates caller input before pricing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Non-positive spot price.
    #[error("invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Negative volatility. Zero is accepted as a degenerate limiting case.
    #[error("invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },
}
