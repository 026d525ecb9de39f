//! # Adapter Chain (L3: Adapters)
//!
//! Option-chain CSV ingestion and batch implied-volatility enrichment.
//!
//! This crate provides:
//! - [`ChainQuote`]: one vendor CSV row, serde-mapped to the vendor header
//! - [`OptionChain`]: quotes grouped under one underlying's market inputs
//! - [`QuoteAnalytics`]: per-quote implied vols (all three methods, timed),
//!   Greeks and parity bookkeeping, assembled in a single pass
//! - [`io`]: CSV reading with per-line validation and enriched-CSV writing
//!
//! Chain analysis is best-effort: a quote with no usable price or with
//! parameters the contract constructor rejects is skipped and logged at
//! `debug` level, never failing the batch.
//!
//! ## Example
//!
//! ```
//! use adapter_chain::{ChainConfig, ChainQuote, OptionChain};
//! use chrono::NaiveDate;
//! use quant_models::instruments::OptionKind;
//!
//! let mut chain = OptionChain::new("NVDA", 130.694, 0.0423, 0.0);
//! chain.push(ChainQuote {
//!     expiration: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
//!     years_to_expiry: 0.021918,
//!     strike: 130.0,
//!     kind: OptionKind::Put,
//!     last_price: 3.10,
//!     bid: 3.15,
//!     ask: 3.20,
//!     volume: 420,
//!     open_interest: 1180,
//!     vendor_implied_vol: 0.46,
//!     in_the_money: false,
//! });
//!
//! let analysed = chain.analyse(&ChainConfig::default());
//! assert_eq!(analysed.len(), 1);
//! assert!((analysed[0].analytics.bisection_vol - 0.4637).abs() < 2e-3);
//! ```

pub mod analytics;
pub mod chain;
pub mod config;
pub mod error;
pub mod io;
pub mod record;

pub use analytics::{AnalysedQuote, QuoteAnalytics};
pub use chain::OptionChain;
pub use config::ChainConfig;
pub use error::{ChainError, Result};
pub use io::{read_quotes, write_analysis, AnalysedRow};
pub use record::ChainQuote;
