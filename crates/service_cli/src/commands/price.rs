//! Price command implementation
//!
//! Prices a single contract at a given volatility and prints the analytic
//! Greeks alongside.

use tracing::info;

use quant_models::analytical::BlackScholes;
use quant_models::greeks::GreeksBundle;

use crate::commands::ContractArgs;
use crate::{CliError, Result};

/// Run the price command
pub fn run(args: &ContractArgs, volatility: f64) -> Result<()> {
    info!("Starting pricing...");
    info!("  Strike: {}", args.strike);
    info!("  Spot: {}", args.spot);
    info!("  Expiry (years): {}", args.expiry);
    info!("  Rate: {}", args.rate);
    info!("  Dividend yield: {}", args.dividend);
    info!("  Kind: {}", args.kind);
    info!("  Volatility: {}", volatility);

    if volatility <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "Volatility must be positive, got {}",
            volatility
        )));
    }

    let model = BlackScholes::new(args.contract()?);
    let price = model.price(volatility);
    let greeks = GreeksBundle::analytic(&model, volatility);

    println!("\n┌────────────┬──────────────┐");
    println!("│ Quantity   │ Value        │");
    println!("├────────────┼──────────────┤");
    println!("│ Price      │ {:>12.6} │", price);
    println!("│ Delta      │ {:>12.6} │", greeks.delta);
    println!("│ Gamma      │ {:>12.6} │", greeks.gamma);
    println!("│ Vega       │ {:>12.6} │", greeks.vega);
    println!("└────────────┴──────────────┘");

    info!("Pricing complete");
    Ok(())
}
