//! The bank: a directional exchange rate table.

use std::collections::HashMap;

use crate::{Currency, CurrencyPair, ExchangeError};

/// Holds directional exchange rates and converts amounts with them.
///
/// A rate for `(from, to)` says nothing about `(to, from)`; each direction
/// must be added explicitly. Conversions never chain through a third currency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bank {
    exchange_rates: HashMap<CurrencyPair, f64>,
}

impl Bank {
    /// Creates an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bank holding the single rate `currency1 -> currency2`.
    pub fn create(currency1: Currency, currency2: Currency, rate: f64) -> Self {
        let mut bank = Self::new();
        bank.add_exchange_rate(currency1, currency2, rate);
        bank
    }

    /// Creates a bank from an initial rate table.
    pub fn with_rates<I>(rates: I) -> Self
    where
        I: IntoIterator<Item = (CurrencyPair, f64)>,
    {
        rates.into_iter().collect()
    }

    /// Inserts or overwrites the rate for `from -> to`.
    pub fn add_exchange_rate(&mut self, from: Currency, to: Currency, rate: f64) {
        let pair = CurrencyPair::new(from, to);
        if let Some(previous) = self.exchange_rates.insert(pair, rate) {
            tracing::debug!(%pair, previous, rate, "Exchange rate replaced");
        }
    }

    /// Converts `amount` from one currency to another.
    ///
    /// Same-currency conversion returns the amount untouched without a lookup.
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> Result<f64, ExchangeError> {
        if from == to {
            return Ok(amount);
        }

        match self.exchange_rates.get(&CurrencyPair::new(from, to)) {
            Some(rate) => Ok(amount * rate),
            None => {
                tracing::warn!(%from, %to, "No exchange rate for conversion");
                Err(ExchangeError::MissingExchangeRate { from, to })
            }
        }
    }

    /// Rate applied for `from -> to`; `1.0` for identical currencies.
    pub fn rate(&self, from: Currency, to: Currency) -> Option<f64> {
        if from == to {
            return Some(1.0);
        }
        self.exchange_rates.get(&CurrencyPair::new(from, to)).copied()
    }

    pub fn has_rate(&self, from: Currency, to: Currency) -> bool {
        self.rate(from, to).is_some()
    }

    /// Stored rates ordered by pair.
    pub fn rates(&self) -> Vec<(CurrencyPair, f64)> {
        let mut rates: Vec<_> = self
            .exchange_rates
            .iter()
            .map(|(pair, rate)| (*pair, *rate))
            .collect();
        rates.sort_by_key(|(pair, _)| *pair);
        rates
    }

    pub fn len(&self) -> usize {
        self.exchange_rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchange_rates.is_empty()
    }
}

impl FromIterator<(CurrencyPair, f64)> for Bank {
    fn from_iter<I: IntoIterator<Item = (CurrencyPair, f64)>>(iter: I) -> Self {
        let mut bank = Bank::new();
        bank.extend(iter);
        bank
    }
}

impl Extend<(CurrencyPair, f64)> for Bank {
    fn extend<I: IntoIterator<Item = (CurrencyPair, f64)>>(&mut self, iter: I) {
        for (pair, rate) in iter {
            self.add_exchange_rate(pair.from, pair.to, rate);
        }
    }
}
