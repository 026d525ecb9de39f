//! Raw option-chain quote records.

use chrono::NaiveDate;
use quant_models::instruments::OptionKind;
use serde::{Deserialize, Serialize};

/// One quote line from a vendor option-chain file.
///
/// Field names serialise to the vendor's column vocabulary
/// (`Strike`, `OptionType`, `LastPrice`, ...). The record itself carries no
/// underlying information; the spot, rate and dividend yield live on the
/// [`OptionChain`](crate::OptionChain) that owns the quotes.
///
/// # Examples
/// ```
/// use adapter_chain::ChainQuote;
/// use chrono::NaiveDate;
/// use quant_models::instruments::OptionKind;
///
/// let quote = ChainQuote {
///     expiration: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
///     years_to_expiry: 0.021918,
///     strike: 130.0,
///     kind: OptionKind::Put,
///     last_price: 3.10,
///     bid: 3.15,
///     ask: 3.20,
///     volume: 420,
///     open_interest: 1180,
///     vendor_implied_vol: 0.46,
///     in_the_money: false,
/// };
///
/// // Mid of bid/ask wins over the stale last trade.
/// assert_eq!(quote.observed_price(), Some(3.175));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChainQuote {
    /// Contract expiration date.
    pub expiration: NaiveDate,
    /// Year fraction until expiration.
    #[serde(rename = "TimeToMaturity")]
    pub years_to_expiry: f64,
    /// Strike price.
    pub strike: f64,
    /// Call or put.
    #[serde(rename = "OptionType")]
    pub kind: OptionKind,
    /// Last traded price; zero when the contract has not traded.
    pub last_price: f64,
    /// Best bid; zero when absent.
    pub bid: f64,
    /// Best ask; zero when absent.
    pub ask: f64,
    /// Session volume.
    pub volume: u64,
    /// Open interest.
    pub open_interest: u64,
    /// The vendor's own implied-volatility figure, kept for comparison.
    #[serde(rename = "ImpliedVolatility")]
    pub vendor_implied_vol: f64,
    /// Vendor moneyness flag.
    pub in_the_money: bool,
}

impl ChainQuote {
    /// The price the solver should match, if the quote carries one.
    ///
    /// Bid/ask midpoint when both sides are positive, otherwise the last
    /// traded price when positive, otherwise `None`. Quotes with no usable
    /// price are skipped by analysis rather than solved against zero.
    pub fn observed_price(&self) -> Option<f64> {
        if self.bid > 0.0 && self.ask > 0.0 {
            Some((self.bid + self.ask) / 2.0)
        } else if self.last_price > 0.0 {
            Some(self.last_price)
        } else {
            None
        }
    }
}
