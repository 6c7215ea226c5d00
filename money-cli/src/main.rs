//! Money CLI
//!
//! Converts amounts and evaluates multi-currency portfolios from the
//! command line. Rates come from a JSON rates file and `--rate` flags.

mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exchange_rates::{Bank, Currency};
use money_portfolio::Portfolio;
use money_types::{ExchangeRate, Money};

use config::{Config, parse_currency, parse_holding};

#[derive(Parser)]
#[command(name = "money")]
#[command(author, version, about = "Multi-currency conversion and portfolio evaluation", long_about = None)]
struct Cli {
    /// JSON file with [{"from": "EUR", "to": "USD", "rate": 1.2}, ...]
    #[arg(long, env = "MONEY_RATES_FILE")]
    rates_file: Option<PathBuf>,

    /// Exchange rate as FROM:TO:RATE (repeatable, overrides the rates file)
    #[arg(long = "rate")]
    rates: Vec<String>,

    /// Emit logs as JSON
    #[arg(long, env = "MONEY_JSON_LOGS")]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two currencies
    Convert {
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Evaluate holdings in a single currency
    Evaluate {
        /// Target currency
        #[arg(long)]
        to: String,
        /// Holding as AMOUNT:CCY (repeatable)
        #[arg(long = "holding", allow_hyphen_values = true)]
        holdings: Vec<String>,
    },
    /// List the configured exchange rates
    Rates,
    /// List supported currencies
    Currencies,
}

fn init_tracing(json: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,money_cli=info".into()),
        )
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

// ─────────────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────────────

fn convert(bank: &Bank, amount: f64, from: &str, to: &str) -> Result<Value> {
    if !amount.is_finite() {
        anyhow::bail!("Invalid amount {}: amount must be finite", amount);
    }

    let money = Money::new(amount, parse_currency(from)?);
    let converted = money.convert(parse_currency(to)?, bank)?;
    Ok(serde_json::json!({
        "from": money,
        "to": converted,
    }))
}

/// Fails with every missing pair, not only the first one hit.
fn evaluate(bank: &Bank, to: &str, holdings: &[String]) -> Result<Value> {
    let target = parse_currency(to)?;
    let portfolio = holdings
        .iter()
        .map(|s| parse_holding(s))
        .collect::<Result<Portfolio>>()?;

    let total = match portfolio.evaluate(target, bank) {
        Ok(total) => total,
        Err(err) => {
            let missing: Vec<String> = portfolio
                .missing_rates(target, bank)
                .iter()
                .map(ToString::to_string)
                .collect();
            anyhow::bail!("{}. Missing pairs: {}", err, missing.join(", "));
        }
    };

    tracing::info!(%total, holdings = portfolio.len(), "Portfolio evaluated");
    Ok(serde_json::json!({
        "holdings": portfolio,
        "total": total,
    }))
}

fn rates(bank: &Bank) -> Result<Value> {
    Ok(serde_json::to_value(ExchangeRate::list(bank))?)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = Config::new(cli.rates_file, &cli.rates)?;
    let bank = config.build_bank()?;
    tracing::debug!(rates = bank.len(), "Bank ready");

    let output = match cli.command {
        Commands::Convert { amount, from, to } => convert(&bank, amount, &from, &to)?,
        Commands::Evaluate { to, holdings } => evaluate(&bank, &to, &holdings)?,
        Commands::Rates => rates(&bank)?,
        Commands::Currencies => {
            for currency in Currency::all() {
                println!("{} {}", currency.code(), currency.symbol());
            }
            return Ok(());
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
