//! Value types flowing through the engine.
//!
//! All types here are plain immutable values with no identity beyond a
//! single computation call; the engine retains nothing between invocations.

/// Market and contract parameters for a European call option.
///
/// Invariants (enforced by [`crate::validate::check_parameters`], not by
/// construction): spot > 0, strike > 0, expiry >= one trading day,
/// rate ∈ [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams {
    /// Current price of the underlying asset (S0)
    pub spot: f64,
    /// Strike price of the option (K)
    pub strike: f64,
    /// Time to expiration in years (T)
    pub expiry: f64,
    /// Risk-free interest rate (r), annualised
    pub rate: f64,
}

/// Confidence levels for the two tail metrics.
///
/// Each level must lie strictly in (0, 1). The ES level is conventionally
/// at least the VaR level (a deeper tail) but that ordering is not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceLevels {
    /// Confidence level for Value at Risk, e.g. 0.99
    pub var: f64,
    /// Confidence level for Expected Shortfall, e.g. 0.975
    pub es: f64,
}

/// Typed output of a successful pipeline run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskReport {
    /// 1-day Value at Risk, positive = loss
    pub var: f64,
    /// 1-day Expected Shortfall, positive = loss
    pub es: f64,
    /// Annualised historical volatility (raw estimate)
    pub historical_vol: f64,
    /// Smile-adjusted volatility used for repricing
    pub adjusted_vol: f64,
    /// Number of scenarios evaluated
    pub scenario_count: usize,
}

/// Uniform result returned by the engine façade.
///
/// On failure `var` and `es` are exactly 0 and `error` holds the failure
/// message; the zeros must not be read as valid risk numbers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskResult {
    /// 1-day Value at Risk, positive = loss
    pub var: f64,
    /// 1-day Expected Shortfall, positive = loss
    pub es: f64,
    /// Failure message, `None` on success
    pub error: Option<String>,
}

impl RiskResult {
    /// Builds a success result from the typed report.
    pub fn from_report(report: &RiskReport) -> Self {
        Self {
            var: report.var,
            es: report.es,
            error: None,
        }
    }

    /// Builds a failure result with zeroed metrics.
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            var: 0.0,
            es: 0.0,
            error: Some(message.into()),
        }
    }

    /// True when the computation succeeded.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error_zeroes_metrics() {
        let r = RiskResult::from_error("boom");
        assert_eq!(r.var, 0.0);
        assert_eq!(r.es, 0.0);
        assert_eq!(r.error.as_deref(), Some("boom"));
        assert!(!r.is_ok());
    }

    #[test]
    fn test_from_report_carries_metrics() {
        let report = RiskReport {
            var: 1.5,
            es: 2.0,
            historical_vol: 0.2,
            adjusted_vol: 0.24,
            scenario_count: 500,
        };
        let r = RiskResult::from_report(&report);
        assert_eq!(r.var, 1.5);
        assert_eq!(r.es, 2.0);
        assert!(r.is_ok());
    }
}
