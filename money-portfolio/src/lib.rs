//! # Money Portfolio
//!
//! Holds amounts in several currencies and evaluates them into one.
//!
//! Evaluation is generic over `P: ExchangeRateProvider`, so the in-memory
//! `Bank` or any other rate source can be injected.

pub mod portfolio;

#[cfg(test)]
mod portfolio_tests;

pub use portfolio::Portfolio;
