//! # Money Types
//!
//! Value types and port traits for multi-currency evaluation.
//! Pure data structures and the contract conversions go through; no IO.
//!
//! ## Architecture
//!
//! - `domain/` - `Money` and the `ExchangeRate` record
//! - `ports/` - Trait definitions rate sources must implement

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{ExchangeRate, Money};
pub use exchange_rates::{Bank, BankBuilder, Currency, CurrencyPair, ExchangeError};
pub use ports::ExchangeRateProvider;
