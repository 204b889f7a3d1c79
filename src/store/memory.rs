use crate::core::transaction::{TransactionRecord, TransactionSource};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

/// In-memory transaction source, the non-persistent twin of the disk ledger.
/// Handy as a test double wherever a `TransactionSource` is expected.
#[derive(Default)]
pub struct MemoryLedger {
    inner: Mutex<Vec<TransactionRecord>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<TransactionRecord>) -> Self {
        Self {
            inner: Mutex::new(records),
        }
    }

    pub async fn push(&self, record: TransactionRecord) {
        self.inner.lock().await.push(record);
    }
}

#[async_trait]
impl TransactionSource for MemoryLedger {
    async fn fetch_all(&self) -> Result<Vec<TransactionRecord>> {
        Ok(self.inner.lock().await.clone())
    }

    async fn fetch_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<TransactionRecord>> {
        let mut records = self.inner.lock().await.clone();
        records.retain(|r| r.date >= from && r.date <= to);
        Ok(records)
    }
}
