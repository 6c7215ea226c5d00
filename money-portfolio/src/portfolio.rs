//! Portfolio aggregate
//!
//! Accumulates holdings and sums them in a target currency through the
//! exchange rate port. Contains no rate storage of its own.

use serde::Serialize;

use exchange_rates::{Currency, CurrencyPair, ExchangeError};
use money_types::{ExchangeRateProvider, Money};

/// Ordered holdings in arbitrary currencies.
///
/// Same-currency entries are kept separately; nothing is merged on `add`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Portfolio {
    holdings: Vec<Money>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a holding.
    pub fn add(&mut self, money: Money) {
        self.holdings.push(money);
    }

    pub fn holdings(&self) -> &[Money] {
        &self.holdings
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Converts every holding into `to` and sums the results.
    ///
    /// Stops at the first holding without a rate and returns that error
    /// unchanged. An empty portfolio evaluates to zero.
    pub fn evaluate<P>(&self, to: Currency, provider: &P) -> Result<Money, ExchangeError>
    where
        P: ExchangeRateProvider + ?Sized,
    {
        let mut total = 0.0;
        for holding in &self.holdings {
            total += holding.convert(to, provider)?.amount();
        }

        tracing::debug!(
            holdings = self.holdings.len(),
            currency = %to,
            total,
            "Portfolio evaluated"
        );
        Ok(Money::new(total, to))
    }

    /// Every distinct conversion into `to` the provider cannot perform,
    /// in the order the holdings first need it.
    pub fn missing_rates<P>(&self, to: Currency, provider: &P) -> Vec<CurrencyPair>
    where
        P: ExchangeRateProvider + ?Sized,
    {
        let mut missing: Vec<CurrencyPair> = Vec::new();
        for holding in &self.holdings {
            let pair = CurrencyPair::new(holding.currency(), to);
            if pair.is_identity() || missing.contains(&pair) {
                continue;
            }
            if provider.rate(pair.from, pair.to).is_none() {
                missing.push(pair);
            }
        }
        missing
    }
}

impl FromIterator<Money> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Money>>(iter: I) -> Self {
        Self {
            holdings: iter.into_iter().collect(),
        }
    }
}

impl Extend<Money> for Portfolio {
    fn extend<I: IntoIterator<Item = Money>>(&mut self, iter: I) {
        self.holdings.extend(iter);
    }
}
