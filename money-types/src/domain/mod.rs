//! Domain models.

pub mod money;
pub mod rate;

pub use money::Money;
pub use rate::ExchangeRate;
