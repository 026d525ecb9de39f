//! Black-Scholes pricing model for European options.
//!
//! This module provides closed-form pricing and analytic Greeks for a
//! dividend-paying European option.
//!
//! ## Mathematical Formulas
//!
//! **Price**: V = φ·(S·e^(-qT)·Φ(φ·d₁) - K·e^(-rT)·Φ(φ·d₂)), φ = +1 call, -1 put
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use crate::instruments::{OptionContract, OptionKind};

/// Black-Scholes model bound to one option contract.
///
/// A thin, stateless wrapper: every method maps a volatility to a price or
/// sensitivity for the bound contract. Volatility must be strictly positive;
/// zero or negative values feed a division by zero inside `d₁` and produce
/// meaningless results. That precondition is the caller's responsibility and
/// is deliberately not guarded here, so the root-finding layer can probe the
/// model freely.
///
/// # Greek conventions
///
/// Delta is `Φ(d₁)` for a call and `Φ(d₁) − 1` for a put, and vega is
/// `S·√T·φ(d₁)`, in both cases without the `e^(−qT)` dividend discount that
/// a strict derivative of the dividend-adjusted price would carry. Gamma is
/// `φ(d₁)/(S·σ·√T)`. For zero-dividend contracts these coincide with the
/// true partial derivatives.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use quant_models::analytical::BlackScholes;
/// use quant_models::instruments::{OptionContract, OptionKind};
///
/// let contract =
///     OptionContract::new(100.0_f64, 100.0, 1.0, 0.05, 0.0, OptionKind::Call).unwrap();
/// let model = BlackScholes::new(contract);
///
/// // Classic textbook value: S = K = 100, r = 5%, T = 1y, σ = 20%
/// let price = model.price(0.2);
/// assert!((price - 10.4506).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    contract: OptionContract<T>,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a model bound to the given contract.
    pub fn new(contract: OptionContract<T>) -> Self {
        Self { contract }
    }

    /// Returns the bound contract.
    #[inline]
    pub fn contract(&self) -> &OptionContract<T> {
        &self.contract
    }

    /// Computes the d₁ term at the given volatility.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self, volatility: T) -> T {
        self.norm_args(volatility).0
    }

    /// Computes the d₂ term at the given volatility.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, volatility: T) -> T {
        self.norm_args(volatility).1
    }

    /// Computes both normal-distribution arguments in one pass.
    fn norm_args(&self, volatility: T) -> (T, T) {
        let c = &self.contract;
        let half = T::from(0.5).unwrap();

        let log_term = (c.spot() / c.strike()).ln();
        let drift_term =
            (c.rate() - c.dividend_yield() + half * volatility * volatility) * c.expiry();
        let denom = volatility * c.expiry().sqrt();

        let d1 = (log_term + drift_term) / denom;
        let d2 = d1 - denom;

        (d1, d2)
    }

    /// Prices the contract at the given volatility.
    ///
    /// # Arguments
    /// * `volatility` - Annualised volatility (must be positive)
    ///
    /// # Returns
    /// The Black-Scholes present value.
    ///
    /// # Examples
    /// ```
    /// use quant_models::analytical::BlackScholes;
    /// use quant_models::instruments::{OptionContract, OptionKind};
    ///
    /// let put =
    ///     OptionContract::new(100.0_f64, 100.0, 1.0, 0.05, 0.0, OptionKind::Put).unwrap();
    /// let model = BlackScholes::new(put);
    ///
    /// // Put value for the classic textbook inputs
    /// assert!((model.price(0.2) - 5.5735).abs() < 1e-3);
    /// ```
    pub fn price(&self, volatility: T) -> T {
        let c = &self.contract;
        let (d1, d2) = self.norm_args(volatility);
        let phi = c.kind().sign::<T>();

        let n_d1 = norm_cdf(phi * d1);
        let n_d2 = norm_cdf(phi * d2);

        let discount_factor = (-c.rate() * c.expiry()).exp();
        let dividend_factor = (-c.dividend_yield() * c.expiry()).exp();

        phi * (c.spot() * dividend_factor * n_d1 - c.strike() * discount_factor * n_d2)
    }

    /// Analytic delta at the given volatility.
    ///
    /// `Φ(d₁)` for a call, `Φ(d₁) − 1` for a put; no dividend discount (see
    /// the type-level convention note).
    pub fn delta(&self, volatility: T) -> T {
        let n_d1 = norm_cdf(self.d1(volatility));
        match self.contract.kind() {
            OptionKind::Call => n_d1,
            OptionKind::Put => n_d1 - T::one(),
        }
    }

    /// Analytic gamma at the given volatility.
    ///
    /// `φ(d₁)/(S·σ·√T)`, identical for calls and puts.
    pub fn gamma(&self, volatility: T) -> T {
        let c = &self.contract;
        let density = norm_pdf(self.d1(volatility));
        density / (c.spot() * volatility * c.expiry().sqrt())
    }

    /// Analytic vega at the given volatility.
    ///
    /// `S·√T·φ(d₁)`, identical for calls and puts; no dividend discount.
    pub fn vega(&self, volatility: T) -> T {
        let c = &self.contract;
        let density = norm_pdf(self.d1(volatility));
        c.spot() * c.expiry().sqrt() * density
    }
}
