//! Mathematical building blocks.
//!
//! - [`distributions`]: standard normal CDF and PDF
//! - [`stats`]: descriptive statistics over sample slices

pub mod distributions;
pub mod stats;
