//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The contract
//! parameters shared by the single-contract commands live here.

use clap::Args;

use quant_models::instruments::{OptionContract, OptionKind};

use crate::Result;

pub mod chain;
pub mod check;
pub mod greeks;
pub mod iv;
pub mod price;

/// Contract parameters shared by `price`, `iv` and `greeks`
#[derive(Debug, Args)]
pub struct ContractArgs {
    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: f64,

    /// Spot price of the underlying
    #[arg(short, long)]
    pub spot: f64,

    /// Time to expiry in years
    #[arg(short = 't', long)]
    pub expiry: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, default_value = "0.0")]
    pub rate: f64,

    /// Continuous dividend yield
    #[arg(short = 'q', long, default_value = "0.0")]
    pub dividend: f64,

    /// Option kind: call or put
    #[arg(long, default_value = "call")]
    pub kind: String,
}

impl ContractArgs {
    /// Builds the validated contract these arguments describe.
    pub fn contract(&self) -> Result<OptionContract<f64>> {
        let kind: OptionKind = self.kind.parse()?;
        Ok(OptionContract::new(
            self.strike,
            self.spot,
            self.expiry,
            self.rate,
            self.dividend,
            kind,
        )?)
    }
}
