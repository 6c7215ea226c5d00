//! Port traits.
//!
//! Evaluation depends on these traits, not on a concrete rate source.

mod exchange;

pub use exchange::ExchangeRateProvider;
