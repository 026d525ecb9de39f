//! Greeks command implementation
//!
//! Prints analytic and central-difference Greeks side by side for one
//! contract, with the absolute gap per component.

use tracing::info;

use quant_models::analytical::BlackScholes;
use quant_models::greeks::{FiniteDifference, GreeksReport};

use crate::commands::ContractArgs;
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the greeks command
pub fn run(
    args: &ContractArgs,
    volatility: f64,
    step: Option<f64>,
    config: &CliConfig,
) -> Result<()> {
    info!("Starting Greeks comparison...");
    info!("  Volatility: {}", volatility);

    if volatility <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "Volatility must be positive, got {}",
            volatility
        )));
    }

    let step = config.fd_step(step);
    if step <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "Step must be positive, got {}",
            step
        )));
    }
    info!("  Step: {}", step);

    let model = BlackScholes::new(args.contract()?);
    let report = GreeksReport::evaluate(&model, volatility, &FiniteDifference::new(step));
    let gap = report.divergence();

    println!("\n┌────────┬──────────────┬──────────────┬──────────────┐");
    println!("│ Greek  │ Analytic     │ Finite diff  │ Abs diff     │");
    println!("├────────┼──────────────┼──────────────┼──────────────┤");
    println!(
        "│ Delta  │ {:>12.6} │ {:>12.6} │ {:>12.3e} │",
        report.analytic.delta, report.finite_difference.delta, gap.delta
    );
    println!(
        "│ Gamma  │ {:>12.6} │ {:>12.6} │ {:>12.3e} │",
        report.analytic.gamma, report.finite_difference.gamma, gap.gamma
    );
    println!(
        "│ Vega   │ {:>12.6} │ {:>12.6} │ {:>12.3e} │",
        report.analytic.vega, report.finite_difference.vega, gap.vega
    );
    println!("└────────┴──────────────┴──────────────┴──────────────┘");

    info!("Greeks comparison complete");
    Ok(())
}
