//! CSV ingestion and enriched-output writing.
//!
//! Input files carry one [`ChainQuote`] per row under the vendor header;
//! output files repeat the quote columns and append everything the solves
//! produced. Both directions go through `csv` with serde, so the column
//! set lives on the record types rather than in format strings.

use std::io::{Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use quant_models::instruments::OptionKind;
use serde::{Deserialize, Serialize};

use crate::analytics::AnalysedQuote;
use crate::error::{ChainError, Result};
use crate::record::ChainQuote;

/// Reads and validates every quote in a chain CSV.
///
/// Parsing failures surface as [`ChainError::Csv`]; rows that parse but
/// carry a non-positive strike or expiry are rejected as
/// [`ChainError::InvalidRecord`] with their 1-based file line. Pricing-level
/// problems such as missing quotes are not errors here; those rows are
/// skipped later by [`OptionChain::analyse`](crate::OptionChain::analyse).
pub fn read_quotes<P: AsRef<Path>>(path: P) -> Result<Vec<ChainQuote>> {
    collect_quotes(csv::Reader::from_path(path)?)
}

fn collect_quotes<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<ChainQuote>> {
    let mut quotes = Vec::new();
    for (index, row) in reader.deserialize::<ChainQuote>().enumerate() {
        // Header occupies line 1.
        let line = index as u64 + 2;
        let quote = row?;
        validate(&quote, line)?;
        quotes.push(quote);
    }
    Ok(quotes)
}

fn validate(quote: &ChainQuote, line: u64) -> Result<()> {
    if !(quote.strike > 0.0 && quote.strike.is_finite()) {
        return Err(ChainError::InvalidRecord {
            line,
            reason: format!("strike must be positive and finite, got {}", quote.strike),
        });
    }
    if !(quote.years_to_expiry > 0.0 && quote.years_to_expiry.is_finite()) {
        return Err(ChainError::InvalidRecord {
            line,
            reason: format!(
                "years to expiry must be positive and finite, got {}",
                quote.years_to_expiry
            ),
        });
    }
    Ok(())
}

/// Writes analysed rows to a CSV file, header included.
pub fn write_analysis<P: AsRef<Path>>(path: P, rows: &[AnalysedRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_rows(&mut writer, rows)
}

fn write_rows<W: Write>(writer: &mut csv::Writer<W>, rows: &[AnalysedRow]) -> Result<()> {
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// One flat output row: the original quote columns plus the solved fields.
///
/// Column names keep the vendor vocabulary for the pass-through fields and
/// add `BisectionIV`/`NewtonIV`/`SecantIV` with millisecond timings, the
/// closed-form and central-difference Greek triples, the parity counterpart
/// price and the model price at the bisection volatility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysedRow {
    /// Underlying ticker symbol.
    pub ticker: String,
    /// Expiration date.
    pub expiration: NaiveDate,
    /// Year fraction to expiry.
    #[serde(rename = "TimeToMaturity")]
    pub years_to_expiry: f64,
    /// Strike price.
    pub strike: f64,
    /// Call or put.
    #[serde(rename = "OptionType")]
    pub kind: OptionKind,
    /// Last traded price.
    pub last_price: f64,
    /// Best bid.
    pub bid: f64,
    /// Best ask.
    pub ask: f64,
    /// Contracts traded.
    pub volume: u64,
    /// Open contracts.
    pub open_interest: u64,
    /// The vendor's own implied volatility.
    #[serde(rename = "ImpliedVolatility")]
    pub vendor_implied_vol: f64,
    /// Bisection implied volatility.
    #[serde(rename = "BisectionIV")]
    pub bisection_vol: f64,
    /// Bisection solve time in milliseconds.
    #[serde(rename = "BisectionMs")]
    pub bisection_millis: f64,
    /// Newton-Raphson implied volatility.
    #[serde(rename = "NewtonIV")]
    pub newton_vol: f64,
    /// Newton-Raphson solve time in milliseconds.
    #[serde(rename = "NewtonMs")]
    pub newton_millis: f64,
    /// Secant implied volatility.
    #[serde(rename = "SecantIV")]
    pub secant_vol: f64,
    /// Secant solve time in milliseconds.
    #[serde(rename = "SecantMs")]
    pub secant_millis: f64,
    /// Closed-form delta at the bisection volatility.
    #[serde(rename = "Delta_bs")]
    pub delta_bs: f64,
    /// Closed-form gamma.
    #[serde(rename = "Gamma_bs")]
    pub gamma_bs: f64,
    /// Closed-form vega.
    #[serde(rename = "Vega_bs")]
    pub vega_bs: f64,
    /// Central-difference delta.
    #[serde(rename = "Delta_fd")]
    pub delta_fd: f64,
    /// Central-difference gamma.
    #[serde(rename = "Gamma_fd")]
    pub gamma_fd: f64,
    /// Central-difference vega.
    #[serde(rename = "Vega_fd")]
    pub vega_fd: f64,
    /// Parity-implied price of the opposite leg.
    pub parity_price: f64,
    /// Model price at the bisection volatility.
    pub model_price: f64,
    /// Vendor in-the-money flag.
    pub in_the_money: bool,
}

impl AnalysedRow {
    /// Flattens an analysed quote into one output row.
    pub fn from_analysis(ticker: &str, analysed: &AnalysedQuote) -> Self {
        let quote = &analysed.quote;
        let analytics = &analysed.analytics;
        Self {
            ticker: ticker.to_string(),
            expiration: quote.expiration,
            years_to_expiry: quote.years_to_expiry,
            strike: quote.strike,
            kind: quote.kind,
            last_price: quote.last_price,
            bid: quote.bid,
            ask: quote.ask,
            volume: quote.volume,
            open_interest: quote.open_interest,
            vendor_implied_vol: quote.vendor_implied_vol,
            bisection_vol: analytics.bisection_vol,
            bisection_millis: analytics.bisection_millis,
            newton_vol: analytics.newton_vol,
            newton_millis: analytics.newton_millis,
            secant_vol: analytics.secant_vol,
            secant_millis: analytics.secant_millis,
            delta_bs: analytics.analytic.delta,
            gamma_bs: analytics.analytic.gamma,
            vega_bs: analytics.analytic.vega,
            delta_fd: analytics.finite_difference.delta,
            gamma_fd: analytics.finite_difference.gamma,
            vega_fd: analytics.finite_difference.vega,
            parity_price: analytics.parity_price,
            model_price: analytics.model_price,
            in_the_money: quote.in_the_money,
        }
    }
}
