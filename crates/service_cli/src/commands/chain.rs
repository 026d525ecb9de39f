//! Chain command implementation
//!
//! Reads a vendor chain CSV, solves every usable quote through
//! `adapter_chain` and writes the enriched CSV, then prints a run summary.

use std::time::Instant;

use tracing::info;

use adapter_chain::{read_quotes, write_analysis, AnalysedRow, ChainConfig, OptionChain};

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the chain command
pub fn run(
    input: &str,
    output: &str,
    symbol: &str,
    spot: f64,
    rate: f64,
    dividend: f64,
    config: &CliConfig,
) -> Result<()> {
    info!("Starting chain analysis...");
    info!("  Input: {}", input);
    info!("  Output: {}", output);
    info!("  Symbol: {}", symbol);
    info!("  Spot: {}", spot);
    info!("  Rate: {}", rate);
    info!("  Dividend yield: {}", dividend);

    if spot <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "Spot must be positive, got {}",
            spot
        )));
    }
    if !std::path::Path::new(input).exists() {
        return Err(CliError::FileNotFound(input.to_string()));
    }

    // Create the output directory if it doesn't exist
    if let Some(parent) = std::path::Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let started = Instant::now();

    let quotes = read_quotes(input)?;
    let records_in = quotes.len();

    let mut chain = OptionChain::new(symbol, spot, rate, dividend);
    for quote in quotes {
        chain.push(quote);
    }

    let chain_config = ChainConfig::default()
        .with_solver(config.solver_config())
        .with_fd_step(config.fd_step(None));
    let analysed = chain.analyse(&chain_config);

    let rows: Vec<AnalysedRow> = analysed
        .iter()
        .map(|row| AnalysedRow::from_analysis(chain.symbol(), row))
        .collect();
    write_analysis(output, &rows)?;

    let elapsed_millis = started.elapsed().as_secs_f64() * 1e3;

    println!("\n┌──────────────┬──────────────┐");
    println!("│ Records in   │ {:>12} │", records_in);
    println!("│ Analysed     │ {:>12} │", rows.len());
    println!("│ Skipped      │ {:>12} │", records_in - rows.len());
    println!("│ Elapsed (ms) │ {:>12.1} │", elapsed_millis);
    println!("└──────────────┴──────────────┘");

    info!("Chain analysis complete");
    Ok(())
}
