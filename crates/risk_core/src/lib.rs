//! # Risk Core (Foundation layer)
//!
//! Numeric foundations shared by the optvar workspace:
//!
//! - `time`: trading-calendar constants (trading days per year, one-day
//!   year fraction)
//! - `math::distributions`: standard normal CDF/PDF, generic over
//!   `num_traits::Float`
//! - `math::stats`: descriptive statistics over sample slices (mean,
//!   sample standard deviation, percentile with linear interpolation)
//!
//! This crate has no I/O, no global state, and no dependencies beyond
//! numeric traits and error derivation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod time;

pub use math::distributions::{norm_cdf, norm_pdf};
pub use math::stats::{mean, percentile, sample_std_dev, StatsError};
pub use time::{ONE_TRADING_DAY, TRADING_DAYS_PER_YEAR};
