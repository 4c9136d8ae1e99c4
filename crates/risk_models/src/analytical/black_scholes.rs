//! Black-Scholes pricing model for European call options.
//!
//! **Call price**: C = S·N(d₁) − K·e^(−rT)·N(d₂)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ − σ√T
//!
//! Pricing is a pure deterministic function of the inputs. The degenerate
//! regions of the formula (expiry at zero, zero volatility) return the
//! limiting value — discounted intrinsic — rather than dividing by zero.

use num_traits::Float;

use risk_core::{norm_cdf, norm_pdf};

use super::error::AnalyticalError;

/// Black-Scholes model for European call pricing.
///
/// Holds the market state (spot, rate, volatility); strike and expiry are
/// supplied per call so one model instance can revalue a whole scenario set.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use risk_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// assert!(call > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ), annualised
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised)
    /// * `volatility` - Annualised volatility (must be non-negative; zero
    ///   is priced as the deterministic limiting case)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility < 0
    ///
    /// # Examples
    /// ```
    /// use risk_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, -0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_ok());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }

        if volatility < zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// When σ√T vanishes the term diverges; a large signed value is returned
    /// according to whether the option is in or out of the money.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let half = T::from(0.5).unwrap();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon || self.volatility <= epsilon {
            let large = T::from(100.0).unwrap();
            return if self.spot > strike {
                large
            } else if self.spot < strike {
                -large
            } else {
                zero
            };
        }

        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = self.volatility * sqrt_t;

        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ − σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon || self.volatility <= epsilon {
            return self.d1(strike, expiry);
        }

        let sqrt_t = expiry.sqrt();
        self.d1(strike, expiry) - self.volatility * sqrt_t
    }

    /// Computes the European call option price.
    ///
    /// C = S·N(d₁) − K·e^(−rT)·N(d₂)
    ///
    /// Limiting cases:
    /// - `expiry` ≈ 0: intrinsic value max(S − K, 0)
    /// - `volatility` ≈ 0: discounted intrinsic max(S − K·e^(−rT), 0),
    ///   the deterministic forward payoff
    ///
    /// # Examples
    /// ```
    /// use risk_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// // Known reference: S=100, K=100, r=0.05, sigma=0.2, T=1 => ~10.4506
    /// let price = bs.price_call(100.0, 1.0);
    /// assert!((price - 10.4506).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            let intrinsic = self.spot - strike;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let discount = (-self.rate * expiry).exp();

        if self.volatility <= epsilon {
            let forward_intrinsic = self.spot - strike * discount;
            return if forward_intrinsic > zero {
                forward_intrinsic
            } else {
                zero
            };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes the call Delta (∂C/∂S) = N(d₁).
    ///
    /// Retained for sanity checks on the repricing pipeline; not part of
    /// the VaR/ES path.
    #[inline]
    pub fn delta_call(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon || self.volatility <= epsilon {
            let one = T::one();
            let zero = T::zero();
            return if self.spot > strike { one } else { zero };
        }

        norm_cdf(self.d1(strike, expiry))
    }

    /// Computes Vega (∂C/∂σ) = S·√T·φ(d₁).
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon || self.volatility <= epsilon {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        self.spot * expiry.sqrt() * norm_pdf(d1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_valid_parameters() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.volatility(), 0.2);
    }

    #[test]
    fn test_new_rejects_non_positive_spot() {
        assert!(matches!(
            BlackScholes::new(0.0_f64, 0.05, 0.2),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
        assert!(matches!(
            BlackScholes::new(-5.0_f64, 0.05, 0.2),
            Err(AnalyticalError::InvalidSpot { .. })
        ));
    }

    #[test]
    fn test_new_rejects_negative_volatility() {
        assert!(matches!(
            BlackScholes::new(100.0_f64, 0.05, -0.2),
            Err(AnalyticalError::InvalidVolatility { volatility }) if volatility == -0.2
        ));
    }

    #[test]
    fn test_new_accepts_zero_volatility() {
        assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_ok());
    }

    #[test]
    fn test_d1_d2_relationship() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let d1 = bs.d1(105.0, 0.5);
        let d2 = bs.d2(105.0, 0.5);
        assert_relative_eq!(d2, d1 - 0.2 * 0.5_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn test_d1_atm_zero_rate() {
        // ATM with r=0: d1 = sigma * sqrt(T) / 2
        let bs = BlackScholes::new(100.0_f64, 0.0, 0.2).unwrap();
        assert_relative_eq!(bs.d1(100.0, 1.0), 0.1, epsilon = 1e-10);
    }

    #[test]
    fn test_call_price_reference_value() {
        // Known reference: S=100, K=100, r=0.05, sigma=0.2, T=1 => ~10.4506
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(100.0, 1.0), 10.4506, epsilon = 0.001);
    }

    #[test]
    fn test_call_price_expiry_zero_is_intrinsic() {
        let bs = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(100.0, 0.0), 10.0, epsilon = 1e-10);

        let bs = BlackScholes::new(90.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(100.0, 0.0), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_call_price_zero_vol_is_discounted_intrinsic() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap();
        let expected = 100.0 - 90.0 * (-0.05_f64).exp();
        assert_relative_eq!(bs.price_call(90.0, 1.0), expected, epsilon = 1e-10);

        // OTM under zero vol has no value
        assert_relative_eq!(bs.price_call(110.0, 1.0), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_deep_itm_call_near_forward_intrinsic() {
        let bs = BlackScholes::new(200.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price_call(100.0, 1.0);
        let forward_intrinsic = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(price >= forward_intrinsic - 0.01);
    }

    #[test]
    fn test_deep_otm_call_near_zero() {
        let bs = BlackScholes::new(50.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.price_call(100.0, 1.0) < 0.01);
    }

    #[test]
    fn test_call_price_increases_with_spot() {
        let lo = BlackScholes::new(95.0_f64, 0.05, 0.2).unwrap();
        let hi = BlackScholes::new(105.0_f64, 0.05, 0.2).unwrap();
        assert!(hi.price_call(100.0, 1.0) > lo.price_call(100.0, 1.0));
    }

    #[test]
    fn test_call_price_increases_with_volatility() {
        let lo = BlackScholes::new(100.0_f64, 0.05, 0.1).unwrap();
        let hi = BlackScholes::new(100.0_f64, 0.05, 0.3).unwrap();
        assert!(hi.price_call(100.0, 1.0) > lo.price_call(100.0, 1.0));
    }

    #[test]
    fn test_time_decay() {
        // Shorter expiry is worth less for an OTM call
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let long = bs.price_call(110.0, 1.0);
        let short = bs.price_call(110.0, 0.5);
        assert!(short < long);
    }

    #[test]
    fn test_delta_vs_finite_diff() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let h = 0.01;

        let bs_up = BlackScholes::new(100.0 + h, 0.05, 0.2).unwrap();
        let bs_dn = BlackScholes::new(100.0 - h, 0.05, 0.2).unwrap();

        let fd = (bs_up.price_call(100.0, 1.0) - bs_dn.price_call(100.0, 1.0)) / (2.0 * h);
        assert_relative_eq!(bs.delta_call(100.0, 1.0), fd, epsilon = 1e-4);
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let h = 0.001;

        let bs_up = BlackScholes::new(100.0, 0.05, 0.2 + h).unwrap();
        let bs_dn = BlackScholes::new(100.0, 0.05, 0.2 - h).unwrap();

        let fd = (bs_up.price_call(100.0, 1.0) - bs_dn.price_call(100.0, 1.0)) / (2.0 * h);
        assert_relative_eq!(bs.vega(100.0, 1.0), fd, epsilon = 1e-3);
    }

    #[test]
    fn test_f32_compatibility() {
        let bs = BlackScholes::new(100.0_f32, 0.05_f32, 0.2_f32).unwrap();
        assert!(bs.price_call(100.0_f32, 1.0_f32) > 0.0_f32);
    }
}
