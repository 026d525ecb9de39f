//! Side-by-side Greek comparison.

use num_traits::Float;

use super::{FiniteDifference, GreeksBundle};
use crate::analytical::BlackScholes;

/// Analytic and finite-difference Greeks for one contract at one volatility.
///
/// # Examples
/// ```
/// use quant_models::analytical::BlackScholes;
/// use quant_models::greeks::{FiniteDifference, GreeksReport};
/// use quant_models::instruments::{OptionContract, OptionKind};
///
/// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.0, OptionKind::Call)?;
/// let report = GreeksReport::evaluate(
///     &BlackScholes::new(contract),
///     0.2,
///     &FiniteDifference::default(),
/// );
///
/// assert!(report.divergence().delta < 1e-4);
/// # Ok::<(), quant_models::instruments::ModelError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksReport<T: Float> {
    /// Closed-form Greeks.
    pub analytic: GreeksBundle<T>,
    /// Central-difference estimates.
    pub finite_difference: GreeksBundle<T>,
}

impl<T: Float> GreeksReport<T> {
    /// Evaluate both Greek sets for a model at the given volatility.
    pub fn evaluate(model: &BlackScholes<T>, volatility: T, engine: &FiniteDifference<T>) -> Self {
        Self {
            analytic: GreeksBundle::analytic(model, volatility),
            finite_difference: engine.bundle(model, volatility),
        }
    }

    /// Component-wise absolute gap between the two Greek sets.
    pub fn divergence(&self) -> GreeksBundle<T> {
        self.analytic.abs_difference(&self.finite_difference)
    }

    /// Largest single-component gap.
    pub fn max_divergence(&self) -> T {
        self.divergence().max_component()
    }
}
