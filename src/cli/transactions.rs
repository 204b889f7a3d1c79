use crate::cli::ui::{self, StyleType};
use crate::core::transaction::{TransactionKind, TransactionRecord, TransactionSource};
use crate::store::LedgerStore;
use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use comfy_table::Cell;
use std::path::Path;

/// Records a new transaction in the ledger.
pub async fn add(
    store: &LedgerStore,
    kind: TransactionKind,
    amount: f64,
    category: &str,
    date: Option<&str>,
    note: Option<&str>,
) -> Result<()> {
    if amount <= 0.0 {
        bail!("Amount must be positive, got {amount}");
    }
    let category = category.trim();
    if category.is_empty() {
        bail!("Category must not be empty");
    }

    let date = match date {
        Some(raw) => raw
            .parse::<NaiveDate>()
            .with_context(|| format!("Invalid date '{raw}', expected YYYY-MM-DD"))?,
        None => Local::now().date_naive(),
    };

    let mut record = TransactionRecord::new(amount, category, kind, date);
    if let Some(note) = note {
        record.note = note.to_string();
    }
    let stored = store.insert(&record)?;

    println!(
        "Recorded {} of {:.2} in '{}' on {} (id {})",
        kind,
        amount,
        category,
        date,
        stored.id.unwrap_or_default()
    );
    Ok(())
}

/// Renders the most recent transactions as a table, newest first.
pub fn render_transactions(records: &[TransactionRecord], currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Kind"),
        ui::header_cell("Category"),
        ui::header_cell(&format!("Amount ({currency})")),
        ui::header_cell("Note"),
        ui::header_cell("Id"),
    ]);

    for record in records {
        table.add_row(vec![
            Cell::new(record.date.to_string()),
            Cell::new(record.kind.to_string()),
            Cell::new(&record.category),
            ui::money_cell(record.amount),
            Cell::new(&record.note),
            Cell::new(record.id.as_deref().unwrap_or("-")),
        ]);
    }
    table.to_string()
}

/// Lists the most recent transactions.
pub async fn list(source: &dyn TransactionSource, limit: usize, currency: &str) -> Result<()> {
    let mut records = source.fetch_all().await?;
    if records.is_empty() {
        println!("No transactions recorded yet.");
        return Ok(());
    }

    records.sort_by(|a, b| b.date.cmp(&a.date));
    records.truncate(limit);

    println!(
        "{}",
        ui::style_text("Recent Transactions", StyleType::Title)
    );
    println!("{}", render_transactions(&records, currency));
    Ok(())
}

/// Deletes a transaction by id.
pub async fn remove(store: &LedgerStore, id: &str) -> Result<()> {
    if store.remove(id)? {
        println!("Removed transaction {id}");
        Ok(())
    } else {
        bail!("No transaction found with id {id}");
    }
}

/// Writes every transaction to a CSV file.
pub async fn export(source: &dyn TransactionSource, output: &Path) -> Result<()> {
    let mut records = source.fetch_all().await?;
    records.sort_by(|a, b| a.date.cmp(&b.date));

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    writer.write_record(["date", "kind", "category", "amount", "note"])?;
    for record in &records {
        writer.write_record([
            record.date.to_string(),
            record.kind.to_string(),
            record.category.clone(),
            format!("{:.2}", record.amount),
            record.note.clone(),
        ])?;
    }
    writer.flush()?;

    println!(
        "Exported {} transactions to {}",
        records.len(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryLedger;
    use tempfile::tempdir;

    fn record(amount: f64, category: &str, kind: TransactionKind, date: &str) -> TransactionRecord {
        TransactionRecord::new(amount, category, kind, date.parse().unwrap())
    }

    #[test]
    fn test_render_transactions_contains_fields() {
        let records = vec![
            record(1200.0, "salary", TransactionKind::Income, "2024-03-01"),
            record(45.5, "groceries", TransactionKind::Expense, "2024-03-02"),
        ];
        let rendered = render_transactions(&records, "EUR");
        assert!(rendered.contains("salary"));
        assert!(rendered.contains("1200.00"));
        assert!(rendered.contains("groceries"));
        assert!(rendered.contains("45.50"));
        assert!(rendered.contains("Amount (EUR)"));
    }

    #[tokio::test]
    async fn test_add_rejects_bad_input() {
        let dir = tempdir().unwrap();
        let store = LedgerStore::open(&dir.path().join("ledger")).unwrap();

        let result = add(&store, TransactionKind::Expense, 0.0, "food", None, None).await;
        assert!(result.unwrap_err().to_string().contains("must be positive"));

        let result = add(&store, TransactionKind::Expense, 10.0, "  ", None, None).await;
        assert!(result.unwrap_err().to_string().contains("must not be empty"));

        let result = add(
            &store,
            TransactionKind::Expense,
            10.0,
            "food",
            Some("03/15/2024"),
            None,
        )
        .await;
        assert!(result.unwrap_err().to_string().contains("Invalid date"));

        assert!(store.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_then_remove() {
        let dir = tempdir().unwrap();
        let store = LedgerStore::open(&dir.path().join("ledger")).unwrap();

        add(
            &store,
            TransactionKind::Income,
            500.0,
            "salary",
            Some("2024-03-01"),
            Some("march"),
        )
        .await
        .unwrap();

        let all = store.fetch_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].note, "march");

        let id = all[0].id.clone().unwrap();
        remove(&store, &id).await.unwrap();
        let result = remove(&store, &id).await;
        assert!(result.unwrap_err().to_string().contains("No transaction"));
    }

    #[tokio::test]
    async fn test_export_writes_csv() {
        let dir = tempdir().unwrap();
        let ledger = MemoryLedger::with_records(vec![
            record(45.5, "groceries", TransactionKind::Expense, "2024-03-02"),
            record(1200.0, "salary", TransactionKind::Income, "2024-03-01"),
        ]);

        let output = dir.path().join("out.csv");
        export(&ledger, &output).await.unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "date,kind,category,amount,note");
        // Sorted oldest first.
        assert_eq!(lines.next().unwrap(), "2024-03-01,income,salary,1200.00,");
        assert_eq!(
            lines.next().unwrap(),
            "2024-03-02,expense,groceries,45.50,"
        );
    }
}
