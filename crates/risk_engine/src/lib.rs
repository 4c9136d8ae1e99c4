//! # Risk Engine (Application layer)
//!
//! Historical-simulation 1-day VaR and Expected Shortfall for a European
//! call option, repriced under Black-Scholes.
//!
//! Pipeline:
//!
//! ```text
//! validate -> historical volatility -> smile adjustment
//!          -> one-day scenario repricing -> VaR/ES aggregation
//! ```
//!
//! The public boundary is [`facade::calculate_one_day_eu_call_var_es`],
//! which never propagates an error: every failure mode is folded into the
//! `error` slot of [`types::RiskResult`] with VaR and ES zeroed. Callers
//! wanting typed errors use [`facade::run_pipeline`] instead.
//!
//! The engine is stateless and fully deterministic: no caching, no global
//! state, no randomness outside the explicitly seeded synthetic return
//! source. Two calls with identical inputs produce bit-identical outputs.
//!
//! ## Example
//!
//! ```
//! use risk_engine::facade::calculate_one_day_eu_call_var_es;
//! use risk_engine::types::{ConfidenceLevels, MarketParams};
//!
//! let market = MarketParams {
//!     spot: 100.0,
//!     strike: 110.0,
//!     expiry: 1.0,
//!     rate: 0.05,
//! };
//! let levels = ConfidenceLevels { var: 0.95, es: 0.975 };
//! let ratios: Vec<f64> = (0..1000).map(|i| 0.98 + 0.04 * i as f64 / 999.0).collect();
//!
//! let result = calculate_one_day_eu_call_var_es(&market, &levels, &ratios, None);
//! assert!(result.error.is_none());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod aggregate;
pub mod error;
pub mod facade;
pub mod scenarios;
pub mod source;
pub mod types;
pub mod validate;


pub use aggregate::calculate_var_es;
pub use error::EngineError;
pub use facade::{calculate_one_day_eu_call_var_es, run_pipeline, PnlObserver};
pub use scenarios::simulate_one_day_change;
pub use source::{HistoricalReturns, ReturnSource, SourceError, SyntheticNormalReturns};
pub use types::{ConfidenceLevels, MarketParams, RiskReport, RiskResult};
pub use validate::{check_parameters, ValidationError};
