//! Currency enumeration and the directional pair used to key exchange rates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ExchangeError;

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines the Currency enum and its metadata
// ─────────────────────────────────────────────────────────────────────────────

/// Generates the `Currency` enum with code, symbol and decimal metadata.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     Variant => ("CODE", "SYMBOL", decimal_places),
/// }
/// ```
macro_rules! define_currencies {
    (
        $(
            $(#[$meta:meta])*
            $name:ident => ($code:literal, $symbol:literal, $decimals:expr)
        ),* $(,)?
    ) => {
        /// Currencies known to the bank.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(rename_all = "UPPERCASE")]
        pub enum Currency {
            $($(#[$meta])* $name),*
        }

        impl Currency {
            /// ISO 4217 code.
            pub fn code(&self) -> &'static str {
                match self {
                    $(Currency::$name => $code),*
                }
            }

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(Currency::$name => $symbol),*
                }
            }

            /// Number of minor-unit digits used when displaying amounts.
            pub fn decimal_places(&self) -> u8 {
                match self {
                    $(Currency::$name => $decimals),*
                }
            }

            pub fn all() -> &'static [Currency] {
                &[$(Currency::$name),*]
            }
        }

        impl std::str::FromStr for Currency {
            type Err = ExchangeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($code => Ok(Currency::$name),)*
                    _ => Err(ExchangeError::UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - Add new currencies here!
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    /// Euro
    EUR => ("EUR", "€", 2),
    /// US Dollar
    USD => ("USD", "$", 2),
    /// South Korean Won
    KRW => ("KRW", "₩", 0),
    /// British Pound Sterling
    GBP => ("GBP", "£", 2),
    /// Indian Rupee
    INR => ("INR", "₹", 2),
    /// Japanese Yen
    JPY => ("JPY", "¥", 0),
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Currency Pair
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered `(from, to)` pair keying a single directional rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub from: Currency,
    pub to: Currency,
}

impl CurrencyPair {
    pub fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }

    /// The pair in the opposite direction.
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

impl From<(Currency, Currency)> for CurrencyPair {
    fn from((from, to): (Currency, Currency)) -> Self {
        Self::new(from, to)
    }
}
