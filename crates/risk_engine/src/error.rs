//! Engine error taxonomy.
//!
//! Each pipeline stage has its own error type; [`EngineError`] is the sum
//! carried by the typed API. The façade flattens any variant into the
//! `error` slot of `RiskResult` via `Display`, so the transparent wrappers
//! preserve the stage-level message verbatim.

use thiserror::Error;

use risk_core::StatsError;
use risk_models::AnalyticalError;

use crate::scenarios::ScenarioError;
use crate::source::SourceError;
use crate::validate::ValidationError;

/// Any failure mode of the risk pipeline.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// Parameter set rejected before any computation ran.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failure while replaying scenarios (expiry exhaustion or pricing).
    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    /// Failure while extracting tail statistics from the P&L series.
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// Pricing model rejected its construction parameters.
    #[error(transparent)]
    Model(#[from] AnalyticalError),

    /// Failure while producing the relative-price series.
    #[error(transparent)]
    Source(#[from] SourceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_transparent() {
        let err: EngineError = ValidationError::NonPositiveSpot.into();
        assert_eq!(err.to_string(), "underlying price must be positive");
    }

    #[test]
    fn test_scenario_message_is_transparent() {
        let err: EngineError = ScenarioError::NegativeRemainingExpiry.into();
        assert_eq!(err.to_string(), "remaining time to expiry is negative");
    }

    #[test]
    fn test_stats_message_is_transparent() {
        let err: EngineError = StatsError::EmptySample.into();
        assert_eq!(err.to_string(), "statistic requires a non-empty sample");
    }
}
