//! Greek triple.

use num_traits::Float;

use crate::analytical::BlackScholes;

/// Delta, gamma and vega for one contract at one volatility.
///
/// # Examples
/// ```
/// use quant_models::analytical::BlackScholes;
/// use quant_models::greeks::GreeksBundle;
/// use quant_models::instruments::{OptionContract, OptionKind};
///
/// let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.05, 0.0, OptionKind::Call)?;
/// let greeks = GreeksBundle::analytic(&BlackScholes::new(contract), 0.2);
///
/// assert!((greeks.delta - 0.6368).abs() < 1e-3);
/// assert!(greeks.gamma > 0.0);
/// assert!(greeks.vega > 0.0);
/// # Ok::<(), quant_models::instruments::ModelError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksBundle<T: Float> {
    /// Sensitivity of price to spot.
    pub delta: T,
    /// Sensitivity of delta to spot.
    pub gamma: T,
    /// Sensitivity of price to volatility.
    pub vega: T,
}

impl<T: Float> GreeksBundle<T> {
    /// Closed-form Greeks of a model at the given volatility.
    pub fn analytic(model: &BlackScholes<T>, volatility: T) -> Self {
        Self {
            delta: model.delta(volatility),
            gamma: model.gamma(volatility),
            vega: model.vega(volatility),
        }
    }

    /// Component-wise absolute difference against another bundle.
    pub fn abs_difference(&self, other: &Self) -> Self {
        Self {
            delta: (self.delta - other.delta).abs(),
            gamma: (self.gamma - other.gamma).abs(),
            vega: (self.vega - other.vega).abs(),
        }
    }

    /// Largest component of the bundle.
    pub fn max_component(&self) -> T {
        self.delta.max(self.gamma).max(self.vega)
    }
}
