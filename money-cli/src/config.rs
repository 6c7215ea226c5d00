//! Rate configuration: the rates file plus inline `--rate` flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use exchange_rates::{Bank, Currency};
use money_types::{ExchangeRate, Money};

/// Where the bank's rates come from.
pub struct Config {
    pub rates_file: Option<PathBuf>,
    pub rates: Vec<ExchangeRate>,
}

impl Config {
    /// Parses inline `FROM:TO:RATE` flags.
    pub fn new(rates_file: Option<PathBuf>, rates: &[String]) -> anyhow::Result<Self> {
        let rates = rates
            .iter()
            .map(|s| parse_rate(s))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self { rates_file, rates })
    }

    /// Builds the bank: file rates first, inline rates overwrite them.
    pub fn build_bank(&self) -> anyhow::Result<Bank> {
        let mut bank = Bank::new();

        if let Some(path) = &self.rates_file {
            let rates = read_rates_file(path)?;
            tracing::info!(path = %path.display(), count = rates.len(), "Loaded rates file");
            bank.extend(rates.iter().map(|rate| (rate.pair(), rate.rate)));
        }

        for rate in &self.rates {
            bank.add_exchange_rate(rate.from, rate.to, rate.rate);
        }

        Ok(bank)
    }
}

/// Reads a JSON array of `{"from", "to", "rate"}` records.
pub fn read_rates_file(path: &Path) -> anyhow::Result<Vec<ExchangeRate>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rates file {}", path.display()))?;
    let rates: Vec<ExchangeRate> = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid rates file {}", path.display()))?;

    if let Some(bad) = rates.iter().find(|rate| !rate.is_valid()) {
        anyhow::bail!(
            "Invalid rate {} for {} in {}",
            bad.rate,
            bad.pair(),
            path.display()
        );
    }
    Ok(rates)
}

pub fn parse_currency(s: &str) -> anyhow::Result<Currency> {
    s.parse().map_err(|e| {
        let supported: Vec<_> = Currency::all().iter().map(Currency::code).collect();
        anyhow::anyhow!("{}. Supported: {}", e, supported.join(", "))
    })
}

/// Parses `FROM:TO:RATE`, e.g. `EUR:USD:1.2`.
pub fn parse_rate(s: &str) -> anyhow::Result<ExchangeRate> {
    let parts: Vec<&str> = s.split(':').collect();
    let [from, to, rate] = parts.as_slice() else {
        anyhow::bail!("Invalid rate '{}': expected FROM:TO:RATE", s);
    };

    let rate = ExchangeRate::new(
        parse_currency(from)?,
        parse_currency(to)?,
        rate.trim()
            .parse()
            .with_context(|| format!("Invalid rate value in '{}'", s))?,
    );
    if !rate.is_valid() {
        anyhow::bail!("Invalid rate '{}': must be a positive number", s);
    }
    Ok(rate)
}

/// Parses `AMOUNT:CCY`, e.g. `10:EUR`.
pub fn parse_holding(s: &str) -> anyhow::Result<Money> {
    let (amount, currency) = s
        .split_once(':')
        .ok_or_else(|| anyhow::anyhow!("Invalid holding '{}': expected AMOUNT:CCY", s))?;
    let amount: f64 = amount
        .trim()
        .parse()
        .with_context(|| format!("Invalid amount in '{}'", s))?;
    if !amount.is_finite() {
        anyhow::bail!("Invalid holding '{}': amount must be finite", s);
    }
    Ok(Money::new(amount, parse_currency(currency)?))
}
