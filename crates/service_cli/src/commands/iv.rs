//! Implied-volatility command implementation
//!
//! Solves one quoted price for its implied volatility and prints the full
//! estimate record, convergence flags included.

use tracing::{info, warn};

use quant_models::analytical::BlackScholes;
use quant_models::implied::{ImpliedVolSolver, IvMethod};

use crate::commands::ContractArgs;
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the iv command
pub fn run(
    args: &ContractArgs,
    price: f64,
    method: &str,
    tolerance: Option<f64>,
    config: &CliConfig,
) -> Result<()> {
    info!("Starting implied-volatility solve...");
    info!("  Market price: {}", price);
    info!("  Method: {}", method);

    if price <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "Market price must be positive, got {}",
            price
        )));
    }

    let method: IvMethod = method.parse()?;
    let mut solver_config = config.solver_config();
    if let Some(tolerance) = tolerance {
        solver_config = solver_config.with_tolerance(tolerance);
    }

    let model = BlackScholes::new(args.contract()?);
    let estimate = ImpliedVolSolver::with_config(model, price, solver_config).solve(method);

    if !estimate.is_success() {
        warn!("Estimate did not converge; inspect the flags below");
    }

    println!("\n┌──────────────┬──────────────┐");
    println!("│ Field        │ Value        │");
    println!("├──────────────┼──────────────┤");
    println!("│ Method       │ {:>12} │", estimate.method.as_str());
    println!("│ Implied vol  │ {:>12.6} │", estimate.vol);
    println!("│ Iterations   │ {:>12} │", estimate.iterations);
    println!("│ Elapsed (ms) │ {:>12.3} │", estimate.elapsed_millis());
    println!("│ Converged    │ {:>12} │", estimate.converged);
    println!("│ Bracketed    │ {:>12} │", estimate.bracketed);
    println!("│ Residual     │ {:>12.3e} │", estimate.residual);
    println!("└──────────────┴──────────────┘");

    info!("Implied-volatility solve complete");
    Ok(())
}
