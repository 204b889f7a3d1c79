use crate::cli::ui::{self, StyleType};
use crate::core::analytics::{self, PeriodSummary};
use crate::core::config::AppConfig;
use crate::core::currency::CurrencyRateProvider;
use crate::core::money::format_amount;
use crate::core::transaction::{TransactionKind, TransactionSource};
use anyhow::Result;
use chrono::Local;
use comfy_table::Cell;

/// Renders the period summary as a table with one row per period.
pub fn render_summary(summary: &PeriodSummary, currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Period"),
        ui::header_cell(&format!("Income ({currency})")),
        ui::header_cell(&format!("Expenses ({currency})")),
        ui::header_cell(&format!("Balance ({currency})")),
    ]);

    let rows = [
        ("Today", summary.daily),
        ("This month", summary.monthly),
        ("This year", summary.yearly),
        ("Overall", summary.overall),
    ];
    for (label, aggregate) in rows {
        let aggregate = aggregate.rounded();
        table.add_row(vec![
            Cell::new(label),
            ui::money_cell(aggregate.income_total),
            ui::money_cell(aggregate.expense_total),
            ui::balance_cell(aggregate.balance()),
        ]);
    }
    table.to_string()
}

fn scaled(summary: PeriodSummary, rate: f64) -> PeriodSummary {
    let mut scaled = summary;
    for aggregate in [
        &mut scaled.daily,
        &mut scaled.monthly,
        &mut scaled.yearly,
        &mut scaled.overall,
    ] {
        aggregate.income_total *= rate;
        aggregate.expense_total *= rate;
    }
    scaled
}

/// Prints income, expense and balance totals per period, with an optional
/// conversion into another display currency.
pub async fn run(
    source: &dyn TransactionSource,
    rate_provider: &dyn CurrencyRateProvider,
    config: &AppConfig,
    display_currency: Option<&str>,
) -> Result<()> {
    let records = source.fetch_all().await?;
    let today = Local::now().date_naive();
    let mut summary = analytics::period_summary(&records, today);

    let mut currency = config.currency.clone();
    if let Some(target) = display_currency
        && !target.eq_ignore_ascii_case(&config.currency)
    {
        let spinner = ui::new_spinner(&format!("Fetching {} rate...", target.to_uppercase()));
        let rate = rate_provider.get_rate(&config.currency, target).await;
        spinner.finish_and_clear();
        summary = scaled(summary, rate?);
        currency = target.to_uppercase();
    }

    println!("{}", ui::style_text("Summary", StyleType::Title));
    println!("{}", render_summary(&summary, &currency));

    if let Some(goal) = &config.goal {
        let progress = analytics::goal_progress(summary.overall.balance(), goal.target);
        println!(
            "{} {} {:.1}% of {}",
            ui::style_text("Goal:", StyleType::TotalLabel),
            goal.name,
            progress,
            format_amount(goal.target, &currency),
        );
    }

    if let Some(largest) = analytics::largest_of_kind(&records, TransactionKind::Income) {
        println!(
            "{}",
            ui::style_text(
                &format!(
                    "Largest income: {} ({})",
                    format_amount(largest.amount, &config.currency),
                    largest.category
                ),
                StyleType::Subtle
            )
        );
    }
    if let Some(largest) = analytics::largest_of_kind(&records, TransactionKind::Expense) {
        println!(
            "{}",
            ui::style_text(
                &format!(
                    "Largest expense: {} ({})",
                    format_amount(largest.amount, &config.currency),
                    largest.category
                ),
                StyleType::Subtle
            )
        );
    }

    Ok(())
}
