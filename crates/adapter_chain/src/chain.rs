//! An option chain and its batch analysis.

use chrono::NaiveDate;
use quant_models::analytical::BlackScholes;
use quant_models::instruments::{OptionContract, OptionKind};
use tracing::debug;

use crate::analytics::{AnalysedQuote, QuoteAnalytics};
use crate::config::ChainConfig;
use crate::record::ChainQuote;

/// A collection of quotes sharing one underlying.
///
/// The chain carries the market inputs every contract inherits (spot, rate,
/// dividend yield); each [`ChainQuote`] contributes its own strike, expiry
/// and prices. Analysis is best-effort: quotes that cannot be priced are
/// skipped and logged rather than failing the batch.
///
/// # Example
///
/// ```
/// use adapter_chain::OptionChain;
///
/// let chain = OptionChain::new("NVDA", 130.694, 0.0423, 0.0);
/// assert!(chain.is_empty());
/// assert_eq!(chain.symbol(), "NVDA");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OptionChain {
    symbol: String,
    spot: f64,
    rate: f64,
    dividend_yield: f64,
    quotes: Vec<ChainQuote>,
}

impl OptionChain {
    /// Creates an empty chain for one underlying.
    pub fn new(symbol: impl Into<String>, spot: f64, rate: f64, dividend_yield: f64) -> Self {
        Self {
            symbol: symbol.into(),
            spot,
            rate,
            dividend_yield,
            quotes: Vec::new(),
        }
    }

    /// Appends a quote.
    pub fn push(&mut self, quote: ChainQuote) {
        self.quotes.push(quote);
    }

    /// Returns the underlying's ticker symbol.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the underlying spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the chain-level dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns all quotes in insertion order.
    #[inline]
    pub fn quotes(&self) -> &[ChainQuote] {
        &self.quotes
    }

    /// Returns the number of quotes.
    #[inline]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns `true` when the chain holds no quotes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Finds the first quote matching a strike, expiration date and kind.
    pub fn find(
        &self,
        strike: f64,
        expiration: NaiveDate,
        kind: OptionKind,
    ) -> Option<&ChainQuote> {
        self.quotes
            .iter()
            .find(|q| q.strike == strike && q.expiration == expiration && q.kind == kind)
    }

    /// Analyses every quote, skipping the unusable ones.
    ///
    /// A quote is skipped (at `debug` level) when [`ChainQuote::observed_price`]
    /// yields nothing or when its contract parameters fail validation, for
    /// example a non-positive strike or expiry. Successful rows carry the
    /// full [`QuoteAnalytics`] record.
    pub fn analyse(&self, config: &ChainConfig) -> Vec<AnalysedQuote> {
        let dividend_yield = config
            .dividend_yield_override
            .unwrap_or(self.dividend_yield);
        let mut analysed = Vec::with_capacity(self.quotes.len());

        for quote in &self.quotes {
            let observed = match quote.observed_price() {
                Some(price) => price,
                None => {
                    debug!(
                        "Skipping {} {} @ {}: no usable price",
                        quote.expiration, quote.kind, quote.strike
                    );
                    continue;
                }
            };

            let contract = match OptionContract::new(
                quote.strike,
                self.spot,
                quote.years_to_expiry,
                self.rate,
                dividend_yield,
                quote.kind,
            ) {
                Ok(contract) => contract,
                Err(err) => {
                    debug!(
                        "Skipping {} {} @ {}: {}",
                        quote.expiration, quote.kind, quote.strike, err
                    );
                    continue;
                }
            };

            let model = BlackScholes::new(contract);
            analysed.push(AnalysedQuote {
                quote: quote.clone(),
                analytics: QuoteAnalytics::evaluate(&model, observed, config),
            });
        }

        analysed
    }

    /// Put-call parity gap for a matched pair, `C − P − (S·e^(−qT) − K·e^(−rT))`.
    ///
    /// Returns `None` unless both legs are quoted with usable prices. A gap
    /// well clear of the bid/ask width is a data problem or an arbitrage,
    /// not a model disagreement: parity is model-free.
    pub fn parity_gap(&self, strike: f64, expiration: NaiveDate) -> Option<f64> {
        let call = self.find(strike, expiration, OptionKind::Call)?;
        let put = self.find(strike, expiration, OptionKind::Put)?;

        let call_price = call.observed_price()?;
        let put_price = put.observed_price()?;

        let expiry = call.years_to_expiry;
        let forward = self.spot * (-self.dividend_yield * expiry).exp()
            - strike * (-self.rate * expiry).exp();

        Some(call_price - put_price - forward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn quote(strike: f64, kind: OptionKind, bid: f64, ask: f64) -> ChainQuote {
        ChainQuote {
            expiration: march_15(),
            years_to_expiry: 0.021918,
            strike,
            kind,
            last_price: 0.0,
            bid,
            ask,
            volume: 100,
            open_interest: 250,
            vendor_implied_vol: 0.46,
            in_the_money: false,
        }
    }

    fn sample_chain() -> OptionChain {
        let mut chain = OptionChain::new("NVDA", 130.694, 0.0423, 0.0);
        chain.push(quote(130.0, OptionKind::Put, 3.15, 3.20));
        chain.push(quote(130.0, OptionKind::Call, 3.80, 3.90));
        chain.push(quote(135.0, OptionKind::Call, 1.55, 1.60));
        chain
    }

    // ========================================================================
    // Construction and lookup
    // ========================================================================

    #[test]
    fn test_push_and_len() {
        let chain = sample_chain();
        assert_eq!(chain.len(), 3);
        assert!(!chain.is_empty());
        assert_eq!(chain.quotes().len(), 3);
    }

    #[test]
    fn test_find_matches_all_three_keys() {
        let chain = sample_chain();

        let put = chain.find(130.0, march_15(), OptionKind::Put);
        assert!(put.is_some());
        assert_eq!(put.unwrap().bid, 3.15);

        assert!(chain.find(130.0, march_15(), OptionKind::Call).is_some());
        assert!(chain.find(135.0, march_15(), OptionKind::Put).is_none());

        let other_date = NaiveDate::from_ymd_opt(2024, 4, 19).unwrap();
        assert!(chain.find(130.0, other_date, OptionKind::Put).is_none());
    }

    // ========================================================================
    // Batch analysis
    // ========================================================================

    #[test]
    fn test_analyse_solves_every_usable_quote() {
        let chain = sample_chain();
        let analysed = chain.analyse(&ChainConfig::default());

        assert_eq!(analysed.len(), 3);
        for row in &analysed {
            assert!(row.analytics.bisection_vol > 0.0);
            assert!(
                (row.analytics.model_price - row.analytics.observed_price).abs() < 1e-6,
                "model price should match the observed price at the solved vol"
            );
        }

        // The anchor put solves near its vendor mark.
        assert!((analysed[0].analytics.bisection_vol - 0.4637).abs() < 2e-3);
    }

    #[test]
    fn test_analyse_skips_quotes_without_prices() {
        let mut chain = sample_chain();
        chain.push(quote(140.0, OptionKind::Call, 0.0, 0.0));

        let analysed = chain.analyse(&ChainConfig::default());
        assert_eq!(analysed.len(), 3);
    }

    #[test]
    fn test_analyse_skips_invalid_contracts() {
        let mut chain = sample_chain();
        chain.push(quote(-5.0, OptionKind::Call, 1.0, 1.1));

        let analysed = chain.analyse(&ChainConfig::default());
        assert_eq!(analysed.len(), 3);
    }

    #[test]
    fn test_analyse_applies_dividend_override() {
        let chain = sample_chain();
        let config = ChainConfig::default().with_dividend_yield_override(0.03);

        let plain = chain.analyse(&ChainConfig::default());
        let overridden = chain.analyse(&config);

        // A dividend yield lowers the forward, so the same put price solves
        // to a different volatility.
        assert!(
            (plain[0].analytics.bisection_vol - overridden[0].analytics.bisection_vol).abs() > 1e-4
        );
    }

    // ========================================================================
    // Parity
    // ========================================================================

    #[test]
    fn test_parity_gap_for_a_matched_pair() {
        let chain = sample_chain();
        let gap = chain.parity_gap(130.0, march_15());
        assert!(gap.is_some());

        // C − P = 3.85 − 3.175 = 0.675; F = 130.694 − 130·e^(−0.0423·0.021918).
        let forward = 130.694 - 130.0 * (-0.0423_f64 * 0.021918).exp();
        assert!((gap.unwrap() - (0.675 - forward)).abs() < 1e-12);
    }

    #[test]
    fn test_parity_gap_requires_both_legs() {
        let chain = sample_chain();
        assert_eq!(chain.parity_gap(135.0, march_15()), None);
        assert_eq!(chain.parity_gap(120.0, march_15()), None);
    }

    #[test]
    fn test_parity_gap_requires_usable_prices() {
        let mut chain = OptionChain::new("NVDA", 130.694, 0.0423, 0.0);
        chain.push(quote(130.0, OptionKind::Call, 3.80, 3.90));
        chain.push(quote(130.0, OptionKind::Put, 0.0, 0.0));

        assert_eq!(chain.parity_gap(130.0, march_15()), None);
    }
}
