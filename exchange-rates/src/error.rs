//! Error types for exchange rate operations.

use crate::{Currency, CurrencyPair};

/// Errors raised while looking up or configuring exchange rates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    #[error("Missing exchange rate: {from}->{to}")]
    MissingExchangeRate { from: Currency, to: Currency },

    #[error("Pivot currency must be set before adding exchange rates")]
    MissingPivotCurrency,

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

impl ExchangeError {
    /// The unsupported conversion, if this is a missing-rate error.
    pub fn missing_pair(&self) -> Option<CurrencyPair> {
        match self {
            ExchangeError::MissingExchangeRate { from, to } => Some(CurrencyPair::new(*from, *to)),
            _ => None,
        }
    }
}
