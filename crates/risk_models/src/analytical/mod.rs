//! Analytical pricing formulas.
//!
//! Closed-form Black-Scholes valuation for European call options under
//! lognormal dynamics. Limiting cases (expiry at zero, zero volatility)
//! collapse to discounted intrinsic value instead of dividing by zero.

pub mod black_scholes;
pub mod error;

pub use black_scholes::BlackScholes;
pub use error::AnalyticalError;
