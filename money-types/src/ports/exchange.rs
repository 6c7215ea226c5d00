//! Exchange rate provider port.
//!
//! This trait defines the interface for anything that can convert amounts
//! between currencies. The in-memory [`Bank`] is the provided implementation.

use exchange_rates::{Bank, Currency, ExchangeError};

/// Port trait for exchange rate providers.
pub trait ExchangeRateProvider: Send + Sync {
    /// Returns how many units of `to` you get for 1 unit of `from`, if known.
    fn rate(&self, from: Currency, to: Currency) -> Option<f64>;

    /// Convert an amount from one currency to another.
    fn convert(&self, amount: f64, from: Currency, to: Currency) -> Result<f64, ExchangeError>;
}

impl ExchangeRateProvider for Bank {
    fn rate(&self, from: Currency, to: Currency) -> Option<f64> {
        Bank::rate(self, from, to)
    }

    fn convert(&self, amount: f64, from: Currency, to: Currency) -> Result<f64, ExchangeError> {
        Bank::convert(self, amount, from, to)
    }
}
