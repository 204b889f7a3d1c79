pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::core::transaction::TransactionKind;
use crate::providers::frankfurter::FrankfurterProvider;
use crate::store::LedgerStore;

/// The resolved work a single invocation performs, independent of the
/// command-line surface that produced it.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Record a transaction in the ledger.
    Add {
        kind: TransactionKind,
        amount: f64,
        category: String,
        date: Option<String>,
        note: Option<String>,
    },
    /// Show the most recent transactions.
    List { limit: usize },
    /// Delete a transaction by id.
    Remove { id: String },
    /// Write all transactions to a CSV file.
    Export { output: PathBuf },
    /// Income, expense and balance totals per period.
    Summary { currency: Option<String> },
    /// Amortization schedule for a fixed-rate loan.
    Loan { amount: f64, rate: f64, term: u32 },
    /// Divide a shared expense evenly.
    Split { total: f64, people: u32 },
    /// Project per-category spending from historical averages.
    Forecast { window: u32, horizon: u32 },
    /// Estimate how much could be saved.
    Savings { window: u32 },
    /// Convert an amount between currencies.
    Convert {
        amount: f64,
        from: Option<String>,
        to: String,
    },
}

/// Loads configuration and dispatches a command to its handler.
pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Expense tracker starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Add {
            kind,
            amount,
            category,
            date,
            note,
        } => {
            let store = LedgerStore::open(&config.ledger_path()?)?;
            cli::transactions::add(
                &store,
                kind,
                amount,
                &category,
                date.as_deref(),
                note.as_deref(),
            )
            .await
        }
        AppCommand::List { limit } => {
            let store = LedgerStore::open(&config.ledger_path()?)?;
            cli::transactions::list(&store, limit, &config.currency).await
        }
        AppCommand::Remove { id } => {
            let store = LedgerStore::open(&config.ledger_path()?)?;
            cli::transactions::remove(&store, &id).await
        }
        AppCommand::Export { output } => {
            let store = LedgerStore::open(&config.ledger_path()?)?;
            cli::transactions::export(&store, &output).await
        }
        AppCommand::Summary { currency } => {
            let store = LedgerStore::open(&config.ledger_path()?)?;
            let provider = FrankfurterProvider::new(config.frankfurter_base_url());
            cli::summary::run(&store, &provider, &config, currency.as_deref()).await
        }
        AppCommand::Loan { amount, rate, term } => {
            cli::loan::run(amount, rate, term, &config.currency)
        }
        AppCommand::Split { total, people } => cli::split::run(total, people, &config.currency),
        AppCommand::Forecast { window, horizon } => {
            let store = LedgerStore::open(&config.ledger_path()?)?;
            cli::forecast::run(&store, window, horizon, &config.currency).await
        }
        AppCommand::Savings { window } => {
            let store = LedgerStore::open(&config.ledger_path()?)?;
            cli::savings::run(&store, window, &config.currency).await
        }
        AppCommand::Convert { amount, from, to } => {
            let provider = FrankfurterProvider::new(config.frankfurter_base_url());
            let from = from.unwrap_or_else(|| config.currency.clone());
            cli::convert::run(&provider, amount, &from, &to).await
        }
    }
}
