//! Chain analysis configuration.

use quant_models::greeks::DEFAULT_FD_STEP;
use quant_models::implied::ImpliedVolConfig;

/// Settings applied to every quote in a chain run.
///
/// Default values match the solver and finite-difference defaults in
/// `quant_models`; an analysis that constructs `ChainConfig::default()`
/// behaves exactly like solving each quote by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainConfig {
    /// Implied-volatility solver settings shared by all three methods.
    pub solver: ImpliedVolConfig<f64>,
    /// Perturbation step for the finite-difference Greeks.
    pub fd_step: f64,
    /// When set, replaces the chain-level dividend yield on every contract.
    pub dividend_yield_override: Option<f64>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            solver: ImpliedVolConfig::default(),
            fd_step: DEFAULT_FD_STEP,
            dividend_yield_override: None,
        }
    }
}

impl ChainConfig {
    /// Replaces the solver settings.
    pub fn with_solver(mut self, solver: ImpliedVolConfig<f64>) -> Self {
        self.solver = solver;
        self
    }

    /// Replaces the finite-difference step.
    pub fn with_fd_step(mut self, step: f64) -> Self {
        self.fd_step = step;
        self
    }

    /// Forces a dividend yield on every contract in the chain.
    pub fn with_dividend_yield_override(mut self, yield_: f64) -> Self {
        self.dividend_yield_override = Some(yield_);
        self
    }
}
