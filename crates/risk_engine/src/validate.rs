//! Parameter validation ahead of any computation.
//!
//! Checks run in a fixed order and the first failure wins: no accumulation,
//! no partial results. Validation is pure and has no side effects.

use thiserror::Error;

use risk_core::ONE_TRADING_DAY;

use crate::types::{ConfidenceLevels, MarketParams};

/// Rejection of an economically invalid or unsupported parameter set.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Spot price must be strictly positive.
    #[error("underlying price must be positive")]
    NonPositiveSpot,

    /// Strike price must be strictly positive.
    #[error("strike price must be positive")]
    NonPositiveStrike,

    /// Options expiring in under one trading day are not supported.
    #[error("expiry earlier than 1 trading day is unsupported")]
    SubDayExpiry,

    /// Risk-free rate outside the supported [0, 1] range.
    #[error("risk-free rate must be in [0, 1]")]
    RateOutOfRange,

    /// VaR confidence level outside the open interval (0, 1).
    #[error("VaR confidence level must be in (0, 1)")]
    VarLevelOutOfRange,

    /// ES confidence level outside the open interval (0, 1).
    #[error("ES confidence level must be in (0, 1)")]
    EsLevelOutOfRange,
}

/// Validates market parameters and confidence levels.
///
/// Check order (first failure is returned):
/// 1. spot > 0
/// 2. strike > 0
/// 3. expiry >= 1 trading day (1/252 years)
/// 4. rate ∈ [0, 1]
/// 5. VaR level ∈ (0, 1)
/// 6. ES level ∈ (0, 1)
///
/// # Examples
/// ```
/// use risk_engine::types::{ConfidenceLevels, MarketParams};
/// use risk_engine::validate::check_parameters;
///
/// let market = MarketParams { spot: 100.0, strike: 110.0, expiry: 1.0, rate: 0.05 };
/// let levels = ConfidenceLevels { var: 0.99, es: 0.975 };
/// assert!(check_parameters(&market, &levels).is_ok());
/// ```
pub fn check_parameters(
    market: &MarketParams,
    levels: &ConfidenceLevels,
) -> Result<(), ValidationError> {
    if market.spot <= 0.0 {
        return Err(ValidationError::NonPositiveSpot);
    }

    if market.strike <= 0.0 {
        return Err(ValidationError::NonPositiveStrike);
    }

    if market.expiry < ONE_TRADING_DAY {
        return Err(ValidationError::SubDayExpiry);
    }

    if !(0.0..=1.0).contains(&market.rate) {
        return Err(ValidationError::RateOutOfRange);
    }

    if !(0.0 < levels.var && levels.var < 1.0) {
        return Err(ValidationError::VarLevelOutOfRange);
    }

    if !(0.0 < levels.es && levels.es < 1.0) {
        return Err(ValidationError::EsLevelOutOfRange);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_market() -> MarketParams {
        MarketParams {
            spot: 100.0,
            strike: 110.0,
            expiry: 1.0,
            rate: 0.05,
        }
    }

    fn valid_levels() -> ConfidenceLevels {
        ConfidenceLevels {
            var: 0.95,
            es: 0.975,
        }
    }

    #[test]
    fn test_valid_parameters_pass() {
        assert!(check_parameters(&valid_market(), &valid_levels()).is_ok());
    }

    #[test]
    fn test_non_positive_spot_rejected() {
        for spot in [0.0, -1.0] {
            let market = MarketParams {
                spot,
                ..valid_market()
            };
            assert_eq!(
                check_parameters(&market, &valid_levels()),
                Err(ValidationError::NonPositiveSpot)
            );
        }
    }

    #[test]
    fn test_non_positive_strike_rejected() {
        let market = MarketParams {
            strike: 0.0,
            ..valid_market()
        };
        assert_eq!(
            check_parameters(&market, &valid_levels()),
            Err(ValidationError::NonPositiveStrike)
        );
    }

    #[test]
    fn test_sub_day_expiry_rejected() {
        let market = MarketParams {
            expiry: 0.5 / 252.0,
            ..valid_market()
        };
        assert_eq!(
            check_parameters(&market, &valid_levels()),
            Err(ValidationError::SubDayExpiry)
        );
    }

    #[test]
    fn test_one_day_expiry_accepted() {
        let market = MarketParams {
            expiry: 1.0 / 252.0,
            ..valid_market()
        };
        assert!(check_parameters(&market, &valid_levels()).is_ok());
    }

    #[test]
    fn test_rate_out_of_range_rejected() {
        for rate in [-0.01, 1.01] {
            let market = MarketParams {
                rate,
                ..valid_market()
            };
            assert_eq!(
                check_parameters(&market, &valid_levels()),
                Err(ValidationError::RateOutOfRange)
            );
        }
    }

    #[test]
    fn test_rate_boundaries_accepted() {
        for rate in [0.0, 1.0] {
            let market = MarketParams {
                rate,
                ..valid_market()
            };
            assert!(check_parameters(&market, &valid_levels()).is_ok());
        }
    }

    #[test]
    fn test_var_level_out_of_range_rejected() {
        for var in [0.0, 1.0, -0.5, 1.5] {
            let levels = ConfidenceLevels {
                var,
                ..valid_levels()
            };
            assert_eq!(
                check_parameters(&valid_market(), &levels),
                Err(ValidationError::VarLevelOutOfRange)
            );
        }
    }

    #[test]
    fn test_es_level_out_of_range_rejected() {
        for es in [0.0, 1.0] {
            let levels = ConfidenceLevels {
                es,
                ..valid_levels()
            };
            assert_eq!(
                check_parameters(&valid_market(), &levels),
                Err(ValidationError::EsLevelOutOfRange)
            );
        }
    }

    #[test]
    fn test_first_failure_wins() {
        // Both spot and strike invalid: the spot check fires first
        let market = MarketParams {
            spot: -1.0,
            strike: -1.0,
            ..valid_market()
        };
        assert_eq!(
            check_parameters(&market, &valid_levels()),
            Err(ValidationError::NonPositiveSpot)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::NonPositiveSpot.to_string(),
            "underlying price must be positive"
        );
        assert_eq!(
            ValidationError::SubDayExpiry.to_string(),
            "expiry earlier than 1 trading day is unsupported"
        );
        assert_eq!(
            ValidationError::VarLevelOutOfRange.to_string(),
            "VaR confidence level must be in (0, 1)"
        );
    }
}
