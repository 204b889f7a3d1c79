use crate::cli::ui::{self, StyleType};
use crate::core::loan::{self, LoanScheduleRow};
use crate::core::money::{format_amount, round_cents};
use anyhow::{Result, bail};
use comfy_table::Cell;

/// Renders an amortization schedule, one row per monthly payment.
pub fn render_schedule(schedule: &[LoanScheduleRow], currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Month"),
        ui::header_cell(&format!("Payment ({currency})")),
        ui::header_cell(&format!("Interest ({currency})")),
        ui::header_cell(&format!("Principal ({currency})")),
    ]);

    for row in schedule {
        table.add_row(vec![
            Cell::new(row.period.to_string()),
            ui::money_cell(row.payment),
            ui::money_cell(row.interest),
            ui::money_cell(row.principal),
        ]);
    }
    table.to_string()
}

/// Computes and prints the amortization schedule for a fixed-rate loan.
pub fn run(amount: f64, annual_rate_pct: f64, term_months: u32, currency: &str) -> Result<()> {
    if amount <= 0.0 {
        bail!("Loan amount must be positive, got {amount}");
    }
    if annual_rate_pct < 0.0 {
        bail!("Interest rate must not be negative, got {annual_rate_pct}");
    }
    if term_months == 0 {
        bail!("Loan term must be at least one month");
    }

    let schedule = loan::loan_schedule(amount, annual_rate_pct, term_months);
    println!(
        "{}",
        ui::style_text(
            &format!("Amortization Schedule ({annual_rate_pct}% over {term_months} months)"),
            StyleType::Title
        )
    );
    println!("{}", render_schedule(&schedule, currency));

    let total_paid = round_cents(schedule.iter().map(|r| r.payment).sum());
    let total_interest = round_cents(schedule.iter().map(|r| r.interest).sum());
    if let Some(first) = schedule.first() {
        println!(
            "{} {}",
            ui::style_text("Monthly payment:", StyleType::TotalLabel),
            ui::style_text(
                &format_amount(first.payment, currency),
                StyleType::TotalValue
            )
        );
    }
    println!(
        "{} {}",
        ui::style_text("Total paid:", StyleType::TotalLabel),
        ui::style_text(&format_amount(total_paid, currency), StyleType::TotalValue)
    );
    println!(
        "{} {}",
        ui::style_text("Total interest:", StyleType::TotalLabel),
        ui::style_text(
            &format_amount(total_interest, currency),
            StyleType::TotalValue
        )
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_schedule_golden_first_row() {
        let schedule = loan::loan_schedule(1000.0, 12.0, 12);
        let rendered = render_schedule(&schedule, "EUR");
        assert!(rendered.contains("88.85"));
        assert!(rendered.contains("10.00"));
        assert!(rendered.contains("78.85"));
    }

    #[test]
    fn test_run_rejects_invalid_input() {
        assert!(run(0.0, 5.0, 12, "EUR").is_err());
        assert!(run(1000.0, -1.0, 12, "EUR").is_err());
        assert!(run(1000.0, 5.0, 0, "EUR").is_err());
        assert!(run(1000.0, 5.0, 12, "EUR").is_ok());
    }
}
