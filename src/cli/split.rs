use crate::cli::ui::{self, StyleType};
use crate::core::loan::split_expense;
use crate::core::money::format_amount;
use anyhow::{Result, bail};

/// Divides a shared expense evenly and prints the per-person share.
pub fn run(total: f64, people: u32, currency: &str) -> Result<()> {
    if total < 0.0 {
        bail!("Expense total must not be negative, got {total}");
    }
    if people == 0 {
        bail!("Cannot split between zero people");
    }

    let share = split_expense(total, people);
    println!(
        "{} split {} ways: {}",
        format_amount(total, currency),
        people,
        ui::style_text(&format_amount(share, currency), StyleType::TotalValue)
    );
    Ok(())
}
