//! Quantara CLI - Command Line Operations for Option Analytics
//!
//! This is the operational entry point for the Quantara option analytics
//! workspace.
//!
//! # Commands
//!
//! - `quantara price` - Price a European option and report analytic Greeks
//! - `quantara iv` - Solve for implied volatility from an observed price
//! - `quantara greeks` - Compare analytic and finite-difference Greeks
//! - `quantara chain` - Batch-analyse an option-chain CSV
//! - `quantara check` - Run the numerical validation battery
//!
//! # Architecture
//!
//! As the service layer of the workspace (L4: Services), this crate
//! orchestrates all other layers to provide a unified command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::ContractArgs;
pub use error::{CliError, Result};

/// Quantara Option Analytics CLI
#[derive(Parser)]
#[command(name = "quantara")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "quantara.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option and report analytic Greeks
    Price {
        #[command(flatten)]
        contract: ContractArgs,

        /// Volatility input for the Black-Scholes formulas (annualised)
        #[arg(long)]
        volatility: f64,
    },

    /// Solve for the implied volatility of an observed option price
    Iv {
        #[command(flatten)]
        contract: ContractArgs,

        /// Observed market price of the option
        #[arg(short, long)]
        price: f64,

        /// Root-finding method (bisection, newton, secant)
        #[arg(short, long, default_value = "bisection")]
        method: String,

        /// Override the convergence tolerance from the configuration file
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Compare analytic Greeks against finite-difference estimates
    Greeks {
        #[command(flatten)]
        contract: ContractArgs,

        /// Volatility input for both Greek engines (annualised)
        #[arg(long)]
        volatility: f64,

        /// Override the finite-difference step from the configuration file
        #[arg(long)]
        step: Option<f64>,
    },

    /// Batch-analyse an option-chain CSV and write the enriched rows
    Chain {
        /// Path to the vendor option-chain CSV
        #[arg(short, long)]
        input: String,

        /// Output file for the enriched analysis CSV
        #[arg(short, long, default_value = "chain_analysis.csv")]
        output: String,

        /// Ticker symbol recorded in the output rows
        #[arg(long)]
        symbol: String,

        /// Spot price of the underlying
        #[arg(short, long)]
        spot: f64,

        /// Continuously compounded risk-free rate
        #[arg(short, long, default_value = "0.0")]
        rate: f64,

        /// Continuously compounded dividend yield
        #[arg(short = 'q', long, default_value = "0.0")]
        dividend: f64,
    },

    /// Run the numerical validation battery
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = config::CliConfig::load(&cli.config)?;

    match cli.command {
        Commands::Price {
            contract,
            volatility,
        } => commands::price::run(&contract, volatility),
        Commands::Iv {
            contract,
            price,
            method,
            tolerance,
        } => commands::iv::run(&contract, price, &method, tolerance, &config),
        Commands::Greeks {
            contract,
            volatility,
            step,
        } => commands::greeks::run(&contract, volatility, step, &config),
        Commands::Chain {
            input,
            output,
            symbol,
            spot,
            rate,
            dividend,
        } => commands::chain::run(&input, &output, &symbol, spot, rate, dividend, &config),
        Commands::Check => commands::check::run(),
    }
}
