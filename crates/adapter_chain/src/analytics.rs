//! Per-quote analytics.

use quant_models::analytical::BlackScholes;
use quant_models::greeks::{FiniteDifference, GreeksBundle, GreeksReport};
use quant_models::implied::{ImpliedVolSolver, IvMethod};

use crate::config::ChainConfig;
use crate::record::ChainQuote;

/// Solved analytics for one quote.
///
/// Built in one pass by [`evaluate`](Self::evaluate) and immutable after
/// that: every field is populated from the same solve, so a row can never
/// mix volatilities from different runs.
///
/// Timings are wall-clock milliseconds per individual solve; the Greeks are
/// taken at the bisection volatility, the robust method of the three.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteAnalytics {
    /// The price the solves matched (bid/ask mid or last trade).
    pub observed_price: f64,
    /// Bisection implied volatility.
    pub bisection_vol: f64,
    /// Bisection solve time in milliseconds.
    pub bisection_millis: f64,
    /// Newton-Raphson implied volatility.
    pub newton_vol: f64,
    /// Newton-Raphson solve time in milliseconds.
    pub newton_millis: f64,
    /// Secant implied volatility.
    pub secant_vol: f64,
    /// Secant solve time in milliseconds.
    pub secant_millis: f64,
    /// Model price at the bisection volatility.
    pub model_price: f64,
    /// Parity-implied price of the opposite leg at the observed price.
    pub parity_price: f64,
    /// Closed-form Greeks at the bisection volatility.
    pub analytic: GreeksBundle<f64>,
    /// Central-difference Greeks at the bisection volatility.
    pub finite_difference: GreeksBundle<f64>,
}

impl QuoteAnalytics {
    /// Solve a quote against its model and assemble the full record.
    ///
    /// Runs all three implied-volatility methods, reprices at the bisection
    /// volatility, evaluates both Greek sets there, and derives the parity
    /// counterpart price `C - P = S·e^(-qT) - K·e^(-rT)` for the opposite
    /// leg.
    pub fn evaluate(model: &BlackScholes<f64>, observed_price: f64, config: &ChainConfig) -> Self {
        let solver = ImpliedVolSolver::with_config(*model, observed_price, config.solver);

        let bisection = solver.solve(IvMethod::Bisection);
        let newton = solver.solve(IvMethod::NewtonRaphson);
        let secant = solver.solve(IvMethod::Secant);

        let greeks = GreeksReport::evaluate(
            model,
            bisection.vol,
            &FiniteDifference::new(config.fd_step),
        );

        Self {
            observed_price,
            bisection_vol: bisection.vol,
            bisection_millis: bisection.elapsed_millis(),
            newton_vol: newton.vol,
            newton_millis: newton.elapsed_millis(),
            secant_vol: secant.vol,
            secant_millis: secant.elapsed_millis(),
            model_price: model.price(bisection.vol),
            parity_price: parity_counterpart(model, observed_price),
            analytic: greeks.analytic,
            finite_difference: greeks.finite_difference,
        }
    }
}

/// Price of the opposite leg implied by put-call parity.
///
/// For a call quote this returns the put price `C - F`, for a put quote the
/// call price `P + F`, where `F = S·e^(-qT) - K·e^(-rT)` is the discounted
/// forward minus the discounted strike.
fn parity_counterpart(model: &BlackScholes<f64>, observed_price: f64) -> f64 {
    let c = model.contract();
    let forward = c.spot() * (-c.dividend_yield() * c.expiry()).exp()
        - c.strike() * (-c.rate() * c.expiry()).exp();

    if c.kind().is_call() {
        observed_price - forward
    } else {
        observed_price + forward
    }
}

/// A quote paired with its solved analytics.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysedQuote {
    /// The raw vendor record.
    pub quote: ChainQuote,
    /// Everything derived from it.
    pub analytics: QuoteAnalytics,
}
