//! Transaction model and source abstraction

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransactionKind::Income => "income",
                TransactionKind::Expense => "expense",
            }
        )
    }
}

impl FromStr for TransactionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(anyhow::anyhow!("Invalid transaction kind: {}", s)),
        }
    }
}

/// A single income or expense entry.
///
/// Records are immutable once stored; an edit replaces the whole record.
/// `id` is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: Option<String>,
    pub amount: f64,
    pub category: String,
    pub kind: TransactionKind,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: String,
}

impl TransactionRecord {
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            amount,
            category: category.into(),
            kind,
            date,
            note: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// Read access to the persisted ledger.
///
/// The calculation engine never talks to storage directly; it consumes the
/// lists these methods return. Failures are opaque to it, there is no retry.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<TransactionRecord>>;

    /// Records dated within `[from, to]`, both bounds inclusive.
    async fn fetch_range(&self, from: NaiveDate, to: NaiveDate)
    -> Result<Vec<TransactionRecord>>;
}
