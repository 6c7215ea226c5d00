//! Fluent bank construction around a pivot currency.

use crate::{Bank, Currency, ExchangeError};

/// Builds a [`Bank`] whose rates all start from one pivot currency.
///
/// ```
/// use exchange_rates::{BankBuilder, Currency};
///
/// let bank = BankBuilder::a_bank()
///     .with_pivot_currency(Currency::EUR)
///     .with_exchange_rate(1.2, Currency::USD)
///     .build()
///     .unwrap();
///
/// assert_eq!(bank.rate(Currency::EUR, Currency::USD), Some(1.2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BankBuilder {
    pivot_currency: Option<Currency>,
    rates: Vec<(f64, Currency)>,
}

impl BankBuilder {
    pub fn a_bank() -> Self {
        Self::default()
    }

    pub fn with_pivot_currency(mut self, currency: Currency) -> Self {
        self.pivot_currency = Some(currency);
        self
    }

    /// Adds `pivot -> currency = rate`.
    pub fn with_exchange_rate(mut self, rate: f64, currency: Currency) -> Self {
        self.rates.push((rate, currency));
        self
    }

    /// Adds every collected rate from the pivot currency.
    ///
    /// Without any rates the result is an empty bank, pivot or not; rates
    /// without a pivot fail with `MissingPivotCurrency`.
    pub fn build(self) -> Result<Bank, ExchangeError> {
        let mut bank = Bank::new();
        if self.rates.is_empty() {
            return Ok(bank);
        }

        let pivot = self
            .pivot_currency
            .ok_or(ExchangeError::MissingPivotCurrency)?;
        for (rate, currency) in self.rates {
            bank.add_exchange_rate(pivot, currency, rate);
        }
        Ok(bank)
    }
}
