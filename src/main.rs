use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use gasto::core::log::init_logging;
use gasto::core::transaction::TransactionKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> TransactionKind {
        match kind {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

impl From<Commands> for gasto::AppCommand {
    fn from(cmd: Commands) -> gasto::AppCommand {
        match cmd {
            Commands::Add {
                kind,
                amount,
                category,
                date,
                note,
            } => gasto::AppCommand::Add {
                kind: kind.into(),
                amount,
                category,
                date,
                note,
            },
            Commands::List { limit } => gasto::AppCommand::List { limit },
            Commands::Remove { id } => gasto::AppCommand::Remove { id },
            Commands::Export { output } => gasto::AppCommand::Export { output },
            Commands::Summary { currency } => gasto::AppCommand::Summary { currency },
            Commands::Loan { amount, rate, term } => {
                gasto::AppCommand::Loan { amount, rate, term }
            }
            Commands::Split { total, people } => gasto::AppCommand::Split { total, people },
            Commands::Forecast { window, horizon } => {
                gasto::AppCommand::Forecast { window, horizon }
            }
            Commands::Savings { window } => gasto::AppCommand::Savings { window },
            Commands::Convert { amount, from, to } => {
                gasto::AppCommand::Convert { amount, from, to }
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Record an income or expense
    Add {
        /// Whether this is income or an expense
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Amount in the configured currency
        #[arg(long)]
        amount: f64,
        /// Category, e.g. groceries or salary
        #[arg(long)]
        category: String,
        /// Date as YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Free-form note
        #[arg(long)]
        note: Option<String>,
    },
    /// Show recent transactions
    List {
        /// Maximum number of transactions to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Delete a transaction by id
    Remove {
        /// Id printed by add and list
        #[arg(long)]
        id: String,
    },
    /// Export all transactions to CSV
    Export {
        /// Path of the CSV file to write
        #[arg(long)]
        output: PathBuf,
    },
    /// Display income, expense and balance totals per period
    Summary {
        /// Convert totals into this currency for display
        #[arg(long)]
        currency: Option<String>,
    },
    /// Display a loan amortization schedule
    Loan {
        /// Principal borrowed
        #[arg(long)]
        amount: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        /// Term in months
        #[arg(long)]
        term: u32,
    },
    /// Split a shared expense evenly
    Split {
        /// Total expense to split
        #[arg(long)]
        total: f64,
        /// Number of people sharing it
        #[arg(long)]
        people: u32,
    },
    /// Project per-category spending from historical averages
    Forecast {
        /// Months of history to average over
        #[arg(long, default_value_t = 3)]
        window: u32,
        /// Months to project ahead
        #[arg(long, default_value_t = 6)]
        horizon: u32,
    },
    /// Estimate potential savings
    Savings {
        /// Months of history to consider
        #[arg(long, default_value_t = 3)]
        window: u32,
    },
    /// Convert an amount between currencies
    Convert {
        /// Amount to convert
        #[arg(long)]
        amount: f64,
        /// Source currency, defaults to the configured one
        #[arg(long)]
        from: Option<String>,
        /// Target currency
        #[arg(long)]
        to: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => gasto::cli::setup::setup(),
        Some(cmd) => gasto::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
