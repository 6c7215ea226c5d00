//! A single directional exchange rate record.

use serde::{Deserialize, Serialize};

use exchange_rates::{Bank, Currency, CurrencyPair};

/// `1 from = rate to`, as read from rate files and listed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub from: Currency,
    pub to: Currency,
    pub rate: f64,
}

impl ExchangeRate {
    pub fn new(from: Currency, to: Currency, rate: f64) -> Self {
        Self { from, to, rate }
    }

    pub fn pair(&self) -> CurrencyPair {
        CurrencyPair::new(self.from, self.to)
    }

    /// A usable rate is finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.rate.is_finite() && self.rate > 0.0
    }

    /// Every rate stored in `bank`, ordered by pair.
    pub fn list(bank: &Bank) -> Vec<ExchangeRate> {
        bank.rates()
            .into_iter()
            .map(|(pair, rate)| ExchangeRate::new(pair.from, pair.to, rate))
            .collect()
    }
}

impl From<ExchangeRate> for (CurrencyPair, f64) {
    fn from(rate: ExchangeRate) -> Self {
        (rate.pair(), rate.rate)
    }
}
