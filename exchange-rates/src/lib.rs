//! Exchange Rates Library
//!
//! Currencies are defined declaratively with a macro that generates the
//! closed `Currency` enum together with its metadata, parsing and display.
//! A [`Bank`] stores directional rates keyed by [`CurrencyPair`] and converts
//! plain amounts between currencies.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` invocation in `currency.rs`:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     CHF => ("CHF", "CHF", 2),
//! }
//! ```
//!
//! # Example
//! ```
//! use exchange_rates::{Bank, Currency, ExchangeError};
//!
//! let mut bank = Bank::create(Currency::EUR, Currency::USD, 1.2);
//! bank.add_exchange_rate(Currency::USD, Currency::KRW, 1100.0);
//!
//! assert_eq!(bank.convert(5.0, Currency::USD, Currency::KRW), Ok(5500.0));
//! assert_eq!(bank.convert(5.0, Currency::KRW, Currency::KRW), Ok(5.0));
//! assert_eq!(
//!     bank.convert(5.0, Currency::USD, Currency::EUR),
//!     Err(ExchangeError::MissingExchangeRate {
//!         from: Currency::USD,
//!         to: Currency::EUR,
//!     })
//! );
//! ```

mod bank;
mod builder;
mod currency;
mod error;

pub use bank::Bank;
pub use builder::BankBuilder;
pub use currency::{Currency, CurrencyPair};
pub use error::ExchangeError;
