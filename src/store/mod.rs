pub mod memory;

use crate::core::transaction::{TransactionKind, TransactionRecord, TransactionSource};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

/// The on-disk transaction ledger.
///
/// One fjall keyspace with a partition per transaction kind, keyed by the
/// record id and holding the serde_json-encoded record. The two-partition
/// layout keeps incomes and expenses separately scannable.
pub struct LedgerStore {
    keyspace: Keyspace,
    income: PartitionHandle,
    expense: PartitionHandle,
}

impl LedgerStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create ledger directory: {}", path.display()))?;
        let keyspace = fjall::Config::new(path)
            .open()
            .with_context(|| format!("Failed to open ledger at {}", path.display()))?;
        let income = keyspace.open_partition("income", PartitionCreateOptions::default())?;
        let expense = keyspace.open_partition("expense", PartitionCreateOptions::default())?;
        Ok(Self {
            keyspace,
            income,
            expense,
        })
    }

    fn partition_for(&self, kind: TransactionKind) -> &PartitionHandle {
        match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expense,
        }
    }

    /// Stores a record, assigning a fresh id when it has none. Returns the
    /// record as stored.
    pub fn insert(&self, record: &TransactionRecord) -> Result<TransactionRecord> {
        let mut stored = record.clone();
        let id = stored
            .id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();

        self.partition_for(stored.kind)
            .insert(id.as_bytes(), serde_json::to_vec(&stored)?)?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!(%id, kind = %stored.kind, "Stored transaction");
        Ok(stored)
    }

    /// Removes a record by id from whichever partition holds it. Returns
    /// whether anything was deleted.
    pub fn remove(&self, id: &str) -> Result<bool> {
        for partition in [&self.income, &self.expense] {
            if partition.get(id.as_bytes())?.is_some() {
                partition.remove(id.as_bytes())?;
                self.keyspace.persist(PersistMode::SyncAll)?;
                debug!(%id, "Removed transaction");
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn read_partition(&self, partition: &PartitionHandle) -> Result<Vec<TransactionRecord>> {
        let mut records = Vec::new();
        for entry in partition.iter() {
            let (_, value) = entry?;
            records.push(serde_json::from_slice(&value)?);
        }
        Ok(records)
    }

    fn read_all(&self) -> Result<Vec<TransactionRecord>> {
        let mut records = self.read_partition(&self.income)?;
        records.extend(self.read_partition(&self.expense)?);
        Ok(records)
    }
}

#[async_trait]
impl TransactionSource for LedgerStore {
    async fn fetch_all(&self) -> Result<Vec<TransactionRecord>> {
        self.read_all()
    }

    async fn fetch_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<TransactionRecord>> {
        let mut records = self.read_all()?;
        records.retain(|r| r.date >= from && r.date <= to);
        Ok(records)
    }
}
