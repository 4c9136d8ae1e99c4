//! # Risk Models (Model layer)
//!
//! Valuation and volatility models for the optvar workspace:
//!
//! - [`analytical`]: closed-form Black-Scholes valuation of European call
//!   options, generic over `num_traits::Float`
//! - [`volatility`]: annualised historical volatility from a relative-price
//!   series and a piecewise moneyness smile adjustment
//!
//! All models are pure value types with no retained state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
pub mod volatility;

pub use analytical::{AnalyticalError, BlackScholes};
pub use volatility::{historical_volatility, smile_adjusted_volatility};
