use crate::cli::ui::{self, StyleType};
use crate::core::analytics;
use crate::core::money::format_amount;
use crate::core::transaction::TransactionSource;
use anyhow::{Context, Result, bail};
use chrono::{Local, Months};

/// Prints the potential-savings estimate for the trailing window: income and
/// expense totals, a 30% of income heuristic, and the total spent in
/// discretionary categories.
pub async fn run(source: &dyn TransactionSource, window: u32, currency: &str) -> Result<()> {
    if window == 0 {
        bail!("Window must be at least one month");
    }

    let today = Local::now().date_naive();
    let from = today
        .checked_sub_months(Months::new(window))
        .context("Window reaches before the supported date range")?;
    let records = source.fetch_range(from, today).await?;
    let estimate = analytics::estimate_potential_savings(&records);

    println!(
        "{}",
        ui::style_text(
            &format!("Savings Estimate (last {window} month(s))"),
            StyleType::Title
        )
    );
    println!(
        "{} {}",
        ui::style_text("Income:", StyleType::TotalLabel),
        format_amount(estimate.total_income, currency)
    );
    println!(
        "{} {}",
        ui::style_text("Expenses:", StyleType::TotalLabel),
        format_amount(estimate.total_expense, currency)
    );
    println!(
        "{} {}",
        ui::style_text("Potential savings (30% of income):", StyleType::TotalLabel),
        ui::style_text(
            &format_amount(estimate.potential_savings, currency),
            StyleType::TotalValue
        )
    );
    println!(
        "{} {}",
        ui::style_text("Spent on reducible categories:", StyleType::TotalLabel),
        format_amount(estimate.reducible_expense_total, currency)
    );
    Ok(())
}
