//! Return sources: producers of relative-price series.
//!
//! The scenario engine consumes a finite, ordered sequence of daily
//! relative prices P(t)/P(t−1). Where that sequence comes from is
//! abstracted behind [`ReturnSource`], so replaying history and drawing
//! synthetic returns share one seam into the engine.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;

/// Return source errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SourceError {
    /// A price series needs at least two observations to form one ratio.
    #[error("price series must contain at least two observations")]
    InsufficientPrices,

    /// Prices must be strictly positive to form ratios.
    #[error("non-positive price {price} at index {index}")]
    NonPositivePrice {
        /// Position of the offending price in the input series
        index: usize,
        /// The offending price value
        price: f64,
    },

    /// The synthetic distribution parameters are invalid.
    #[error("invalid normal distribution: std_dev = {std_dev}")]
    InvalidDistribution {
        /// The offending standard deviation
        std_dev: f64,
    },
}

/// A producer of a finite ordered sequence of daily relative prices.
///
/// Implementations must be deterministic per instance: calling
/// [`ReturnSource::relative_prices`] twice yields the same series, keeping
/// the whole engine idempotent.
pub trait ReturnSource {
    /// Produces the relative-price series, oldest observation first.
    fn relative_prices(&self) -> Result<Vec<f64>, SourceError>;
}

/// Historical return source: ratios of consecutive raw prices.
///
/// Expects a chronologically ordered raw price series, oldest first, and
/// yields P(t)/P(t−1) for each consecutive pair.
///
/// # Examples
/// ```
/// use risk_engine::source::{HistoricalReturns, ReturnSource};
///
/// let source = HistoricalReturns::new(vec![100.0, 101.0, 99.0]).unwrap();
/// let ratios = source.relative_prices().unwrap();
/// assert_eq!(ratios.len(), 2);
/// assert!((ratios[0] - 1.01).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct HistoricalReturns {
    prices: Vec<f64>,
}

impl HistoricalReturns {
    /// Creates a source from an oldest-first raw price series.
    ///
    /// # Errors
    /// - [`SourceError::InsufficientPrices`] for fewer than two prices
    /// - [`SourceError::NonPositivePrice`] if any price is ≤ 0
    pub fn new(prices: Vec<f64>) -> Result<Self, SourceError> {
        if prices.len() < 2 {
            return Err(SourceError::InsufficientPrices);
        }
        for (index, &price) in prices.iter().enumerate() {
            if price <= 0.0 {
                return Err(SourceError::NonPositivePrice { index, price });
            }
        }
        Ok(Self { prices })
    }

    /// Number of raw prices held by the source.
    pub fn price_count(&self) -> usize {
        self.prices.len()
    }
}

impl ReturnSource for HistoricalReturns {
    fn relative_prices(&self) -> Result<Vec<f64>, SourceError> {
        Ok(self
            .prices
            .windows(2)
            .map(|pair| pair[1] / pair[0])
            .collect())
    }
}

/// Synthetic return source drawing daily returns from a normal
/// distribution.
///
/// Each draw is a daily return; the emitted relative price is 1 + return.
/// The generator is seeded, so one instance always produces the same
/// series.
///
/// # Examples
/// ```
/// use risk_engine::source::{ReturnSource, SyntheticNormalReturns};
///
/// let source = SyntheticNormalReturns::new(0.001, 0.02, 1000, 42).unwrap();
/// let a = source.relative_prices().unwrap();
/// let b = source.relative_prices().unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticNormalReturns {
    distribution: Normal<f64>,
    size: usize,
    seed: u64,
}

impl SyntheticNormalReturns {
    /// Default mean of the daily returns.
    pub const DEFAULT_MEAN: f64 = 0.001;

    /// Default standard deviation of the daily returns.
    pub const DEFAULT_STD_DEV: f64 = 0.02;

    /// Default number of daily returns generated.
    pub const DEFAULT_SIZE: usize = 1000;

    /// Creates a seeded synthetic source.
    ///
    /// # Errors
    /// [`SourceError::InvalidDistribution`] when `std_dev` is negative or
    /// not finite.
    pub fn new(mean: f64, std_dev: f64, size: usize, seed: u64) -> Result<Self, SourceError> {
        let distribution =
            Normal::new(mean, std_dev).map_err(|_| SourceError::InvalidDistribution { std_dev })?;
        Ok(Self {
            distribution,
            size,
            seed,
        })
    }

    /// Creates a source with the default parameters and the given seed.
    pub fn with_seed(seed: u64) -> Self {
        // Defaults are valid by construction
        Self {
            distribution: Normal::new(Self::DEFAULT_MEAN, Self::DEFAULT_STD_DEV)
                .expect("default distribution parameters are valid"),
            size: Self::DEFAULT_SIZE,
            seed,
        }
    }

    /// Returns the seed used for generation.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ReturnSource for SyntheticNormalReturns {
    fn relative_prices(&self) -> Result<Vec<f64>, SourceError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        Ok((0..self.size)
            .map(|_| 1.0 + self.distribution.sample(&mut rng))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_historical_ratios() {
        let source = HistoricalReturns::new(vec![100.0, 102.0, 96.9]).unwrap();
        let ratios = source.relative_prices().unwrap();
        assert_eq!(ratios.len(), 2);
        assert_relative_eq!(ratios[0], 1.02, epsilon = 1e-12);
        assert_relative_eq!(ratios[1], 0.95, epsilon = 1e-12);
    }

    #[test]
    fn test_historical_preserves_order() {
        let source = HistoricalReturns::new(vec![100.0, 110.0, 99.0, 99.0]).unwrap();
        let ratios = source.relative_prices().unwrap();
        assert!(ratios[0] > 1.0);
        assert!(ratios[1] < 1.0);
        assert_relative_eq!(ratios[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_historical_rejects_short_series() {
        assert_eq!(
            HistoricalReturns::new(vec![100.0]).unwrap_err(),
            SourceError::InsufficientPrices
        );
        assert_eq!(
            HistoricalReturns::new(vec![]).unwrap_err(),
            SourceError::InsufficientPrices
        );
    }

    #[test]
    fn test_historical_rejects_non_positive_price() {
        let err = HistoricalReturns::new(vec![100.0, 0.0, 101.0]).unwrap_err();
        assert_eq!(
            err,
            SourceError::NonPositivePrice {
                index: 1,
                price: 0.0
            }
        );
    }

    #[test]
    fn test_synthetic_is_reproducible() {
        let source = SyntheticNormalReturns::new(0.001, 0.02, 500, 7).unwrap();
        assert_eq!(
            source.relative_prices().unwrap(),
            source.relative_prices().unwrap()
        );
    }

    #[test]
    fn test_synthetic_seeds_differ() {
        let a = SyntheticNormalReturns::with_seed(1).relative_prices().unwrap();
        let b = SyntheticNormalReturns::with_seed(2).relative_prices().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_synthetic_size() {
        let source = SyntheticNormalReturns::new(0.0, 0.01, 123, 0).unwrap();
        assert_eq!(source.relative_prices().unwrap().len(), 123);
    }

    #[test]
    fn test_synthetic_centred_near_one() {
        let source = SyntheticNormalReturns::new(0.001, 0.02, 5000, 42).unwrap();
        let ratios = source.relative_prices().unwrap();
        let mean = ratios.iter().sum::<f64>() / ratios.len() as f64;
        assert_relative_eq!(mean, 1.001, epsilon = 2e-3);
    }

    #[test]
    fn test_synthetic_rejects_negative_std_dev() {
        assert!(matches!(
            SyntheticNormalReturns::new(0.0, -0.1, 10, 0),
            Err(SourceError::InvalidDistribution { .. })
        ));
    }
}
