use crate::cli::ui::{self, StyleType};
use crate::core::currency::CurrencyRateProvider;
use crate::core::money::{format_amount, round_cents};
use anyhow::{Result, bail};

/// Converts an amount between two currencies at the latest reference rate.
pub async fn run(
    rate_provider: &dyn CurrencyRateProvider,
    amount: f64,
    from: &str,
    to: &str,
) -> Result<()> {
    if amount < 0.0 {
        bail!("Amount must not be negative, got {amount}");
    }

    let spinner = ui::new_spinner(&format!(
        "Fetching {} to {} rate...",
        from.to_uppercase(),
        to.to_uppercase()
    ));
    let rate = rate_provider.get_rate(from, to).await;
    spinner.finish_and_clear();
    let rate = rate?;

    let converted = round_cents(amount * rate);
    println!(
        "{} = {} (rate {rate})",
        format_amount(amount, &from.to_uppercase()),
        ui::style_text(
            &format_amount(converted, &to.to_uppercase()),
            StyleType::TotalValue
        ),
    );
    Ok(())
}
