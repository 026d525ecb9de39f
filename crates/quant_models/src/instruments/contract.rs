//! European option contract definition.
//!
//! This module provides the immutable market-parameter tuple every
//! analytic in this crate is computed from, with validation.

use num_traits::Float;

use super::error::ModelError;
use super::payoff::OptionKind;

/// Immutable European option contract.
///
/// Bundles strike, spot, time to maturity, risk-free rate, continuous
/// dividend yield, and payoff direction. Construction validates the
/// strict-positivity invariants the pricing formulas rely on: strike and
/// spot feed a logarithm, time to maturity is a divisor under a square
/// root. Rate and dividend yield may be any finite value, including
/// negative.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use quant_models::instruments::{OptionContract, OptionKind};
///
/// let contract = OptionContract::new(
///     100.0_f64, // strike
///     105.0,     // spot
///     0.5,       // time to maturity in years
///     0.04,      // risk-free rate
///     0.01,      // dividend yield
///     OptionKind::Call,
/// )
/// .unwrap();
///
/// assert_eq!(contract.strike(), 100.0);
/// assert!(contract.kind().is_call());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionContract<T: Float> {
    strike: T,
    spot: T,
    expiry: T,
    rate: T,
    dividend_yield: T,
    kind: OptionKind,
}

impl<T: Float> OptionContract<T> {
    /// Creates a new contract with validation.
    ///
    /// # Arguments
    /// * `strike` - Strike price (must be positive)
    /// * `spot` - Spot price (must be positive)
    /// * `expiry` - Time to maturity in years (must be positive)
    /// * `rate` - Continuously compounded risk-free rate
    /// * `dividend_yield` - Continuous dividend yield
    /// * `kind` - Payoff direction
    ///
    /// # Returns
    /// `Ok(OptionContract)` if the positivity invariants hold,
    /// `Err(ModelError)` naming the offending parameter otherwise.
    ///
    /// # Examples
    /// ```
    /// use quant_models::instruments::{OptionContract, OptionKind};
    ///
    /// let valid = OptionContract::new(100.0_f64, 105.0, 0.5, 0.04, 0.0, OptionKind::Put);
    /// assert!(valid.is_ok());
    ///
    /// let expired = OptionContract::new(100.0_f64, 105.0, 0.0, 0.04, 0.0, OptionKind::Put);
    /// assert!(expired.is_err());
    /// ```
    pub fn new(
        strike: T,
        spot: T,
        expiry: T,
        rate: T,
        dividend_yield: T,
        kind: OptionKind,
    ) -> Result<Self, ModelError> {
        let zero = T::zero();

        if strike <= zero {
            return Err(ModelError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if spot <= zero {
            return Err(ModelError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if expiry <= zero {
            return Err(ModelError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            strike,
            spot,
            expiry,
            rate,
            dividend_yield,
            kind,
        })
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    /// Returns the payoff direction.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// A copy of this contract with the spot replaced.
    ///
    /// The replacement is not re-validated; this exists for the
    /// finite-difference engine, whose perturbation steps are far smaller
    /// than any quoted spot.
    #[inline]
    pub fn with_spot(&self, spot: T) -> Self {
        Self { spot, ..*self }
    }

    /// A copy of this contract with the dividend yield replaced.
    #[inline]
    pub fn with_dividend_yield(&self, dividend_yield: T) -> Self {
        Self {
            dividend_yield,
            ..*self
        }
    }
}
