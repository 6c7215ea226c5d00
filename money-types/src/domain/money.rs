//! Monetary value with embedded currency.

use serde::{Deserialize, Serialize};
use std::fmt;

use exchange_rates::{Currency, ExchangeError};

use crate::ports::ExchangeRateProvider;

/// An immutable amount in a single currency.
///
/// Amounts are plain `f64`; conversion multiplies by the stored rate without
/// rounding, so callers compare totals with a tolerance where it matters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money {
    amount: f64,
    currency: Currency,
}

impl Money {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero-value Money for the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0.0, currency)
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Converts into `to` through the given rate source.
    pub fn convert<P>(&self, to: Currency, provider: &P) -> Result<Money, ExchangeError>
    where
        P: ExchangeRateProvider + ?Sized,
    {
        let amount = provider.convert(self.amount, self.currency, to)?;
        Ok(Money::new(amount, to))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = usize::from(self.currency.decimal_places());
        write!(f, "{:.*} {}", precision, self.amount, self.currency)
    }
}
