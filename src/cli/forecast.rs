use crate::cli::ui::{self, StyleType};
use crate::core::analytics;
use crate::core::transaction::{TransactionKind, TransactionRecord, TransactionSource};
use anyhow::{Context, Result, bail};
use chrono::{Local, Months};
use comfy_table::Cell;
use std::collections::HashMap;

/// Renders per-category monthly averages next to their projected totals.
pub fn render_projection(
    averages: &HashMap<String, f64>,
    projection: &HashMap<String, f64>,
    currency: &str,
) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Category"),
        ui::header_cell(&format!("Avg/month ({currency})")),
        ui::header_cell(&format!("Projected ({currency})")),
    ]);

    let mut categories: Vec<&String> = averages.keys().collect();
    categories.sort();
    for category in categories {
        table.add_row(vec![
            Cell::new(category),
            ui::money_cell(averages[category]),
            ui::money_cell(projection.get(category).copied().unwrap_or(0.0)),
        ]);
    }
    table.to_string()
}

fn print_section(
    title: &str,
    records: &[TransactionRecord],
    kind: TransactionKind,
    window: u32,
    horizon: u32,
    currency: &str,
) {
    let averages = analytics::category_averages(records, kind, window);
    if averages.is_empty() {
        println!(
            "{}",
            ui::style_text(&format!("No {kind} records in the window."), StyleType::Subtle)
        );
        return;
    }
    let projection = analytics::category_projection(records, kind, window, horizon);
    println!("{}", ui::style_text(title, StyleType::Title));
    println!("{}", render_projection(&averages, &projection, currency));
}

/// Projects per-category income and spending `horizon` months ahead from the
/// averages of the trailing `window` months.
pub async fn run(
    source: &dyn TransactionSource,
    window: u32,
    horizon: u32,
    currency: &str,
) -> Result<()> {
    if window == 0 {
        bail!("Window must be at least one month");
    }
    if horizon == 0 {
        bail!("Horizon must be at least one month");
    }

    let today = Local::now().date_naive();
    let from = today
        .checked_sub_months(Months::new(window))
        .context("Window reaches before the supported date range")?;
    let records = source.fetch_range(from, today).await?;

    println!(
        "Based on the last {window} month(s), projected over {horizon} month(s):\n"
    );
    print_section(
        "Projected Expenses",
        &records,
        TransactionKind::Expense,
        window,
        horizon,
        currency,
    );
    print_section(
        "Projected Income",
        &records,
        TransactionKind::Income,
        window,
        horizon,
        currency,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_projection_sorted_by_category() {
        let records = vec![
            TransactionRecord::new(
                60.0,
                "transport",
                TransactionKind::Expense,
                "2024-03-01".parse().unwrap(),
            ),
            TransactionRecord::new(
                90.0,
                "groceries",
                TransactionKind::Expense,
                "2024-02-15".parse().unwrap(),
            ),
        ];
        let averages = analytics::category_averages(&records, TransactionKind::Expense, 3);
        let projection = analytics::category_projection(&records, TransactionKind::Expense, 3, 6);
        let rendered = render_projection(&averages, &projection, "EUR");

        assert!(rendered.contains("groceries"));
        assert!(rendered.contains("30.00"));
        assert!(rendered.contains("180.00"));
        assert!(rendered.contains("transport"));
        assert!(rendered.contains("20.00"));
        assert!(rendered.contains("120.00"));
        // Alphabetical ordering of categories.
        assert!(rendered.find("groceries").unwrap() < rendered.find("transport").unwrap());
    }
}
