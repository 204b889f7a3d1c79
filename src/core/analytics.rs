//! Aggregation, projection and savings estimation over transaction lists.
//!
//! Every function here is a pure, single pass over records the caller already
//! fetched; results are recomputed on demand and owned by the caller.

use crate::core::money::round_cents;
use crate::core::transaction::{TransactionKind, TransactionRecord};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Categories treated as discretionary spending when estimating savings.
/// Matched case-insensitively against the record's category.
const REDUCIBLE_CATEGORIES: [&str; 5] = [
    "entertainment",
    "subscriptions",
    "dining out",
    "non-essential shopping",
    "leisure",
];

/// Flat share of income assumed saveable. Reported alongside, but never
/// combined with, the reducible-category total.
const POTENTIAL_SAVINGS_RATE: f64 = 0.30;

/// Income and expense sums for one time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PeriodAggregate {
    pub income_total: f64,
    pub expense_total: f64,
}

impl PeriodAggregate {
    pub fn balance(&self) -> f64 {
        round_cents(self.income_total - self.expense_total)
    }

    fn add(&mut self, record: &TransactionRecord) {
        match record.kind {
            TransactionKind::Income => self.income_total += record.amount,
            TransactionKind::Expense => self.expense_total += record.amount,
        }
    }

    pub fn rounded(self) -> Self {
        Self {
            income_total: round_cents(self.income_total),
            expense_total: round_cents(self.expense_total),
        }
    }
}

/// Daily, monthly, yearly and overall aggregates relative to `today`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PeriodSummary {
    pub daily: PeriodAggregate,
    pub monthly: PeriodAggregate,
    pub yearly: PeriodAggregate,
    pub overall: PeriodAggregate,
}

/// Buckets every record into the periods containing `today` and sums amounts.
///
/// The monthly bucket matches on month number alone, so the same calendar
/// month of a different year is included. A regression test pins this
/// behavior down.
pub fn period_summary(records: &[TransactionRecord], today: NaiveDate) -> PeriodSummary {
    let mut summary = PeriodSummary::default();

    for record in records {
        summary.overall.add(record);
        if record.date == today {
            summary.daily.add(record);
        }
        if record.date.month() == today.month() {
            summary.monthly.add(record);
        }
        if record.date.year() == today.year() {
            summary.yearly.add(record);
        }
    }

    PeriodSummary {
        daily: summary.daily.rounded(),
        monthly: summary.monthly.rounded(),
        yearly: summary.yearly.rounded(),
        overall: summary.overall.rounded(),
    }
}

/// The record with the largest amount of the given kind, if any.
pub fn largest_of_kind(
    records: &[TransactionRecord],
    kind: TransactionKind,
) -> Option<&TransactionRecord> {
    records
        .iter()
        .filter(|r| r.kind == kind)
        .max_by(|a, b| a.amount.total_cmp(&b.amount))
}

/// Average amount per month for each category of the given kind.
///
/// The divisor is the number of months in the trailing window, not the record
/// count: two expenses totaling 90.00 inside a 3-month window average
/// 30.00/month. A zero-month window has no defined average and yields an
/// empty map.
pub fn category_averages(
    records: &[TransactionRecord],
    kind: TransactionKind,
    window_months: u32,
) -> HashMap<String, f64> {
    if window_months == 0 {
        return HashMap::new();
    }

    let mut totals: HashMap<String, f64> = HashMap::new();
    for record in records.iter().filter(|r| r.kind == kind) {
        *totals.entry(record.category.clone()).or_default() += record.amount;
    }

    totals
        .into_iter()
        .map(|(category, total)| (category, round_cents(total / window_months as f64)))
        .collect()
}

/// Extrapolates the per-category monthly averages over `horizon_months`.
/// No smoothing or seasonality, a straight multiply.
pub fn category_projection(
    records: &[TransactionRecord],
    kind: TransactionKind,
    window_months: u32,
    horizon_months: u32,
) -> HashMap<String, f64> {
    category_averages(records, kind, window_months)
        .into_iter()
        .map(|(category, average)| (category, round_cents(average * horizon_months as f64)))
        .collect()
}

/// Outcome of [`estimate_potential_savings`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsEstimate {
    pub total_income: f64,
    pub total_expense: f64,
    /// Flat 30% of income. Independent of `reducible_expense_total`; the two
    /// figures are surfaced side by side, never combined.
    pub potential_savings: f64,
    pub reducible_expense_total: f64,
}

/// Sums the supplied (already windowed) records into a savings estimate.
pub fn estimate_potential_savings(records: &[TransactionRecord]) -> SavingsEstimate {
    let mut total_income = 0.0;
    let mut total_expense = 0.0;
    let mut reducible = 0.0;

    for record in records {
        match record.kind {
            TransactionKind::Income => total_income += record.amount,
            TransactionKind::Expense => {
                total_expense += record.amount;
                if is_reducible(&record.category) {
                    reducible += record.amount;
                }
            }
        }
    }

    SavingsEstimate {
        total_income: round_cents(total_income),
        total_expense: round_cents(total_expense),
        potential_savings: round_cents(total_income * POTENTIAL_SAVINGS_RATE),
        reducible_expense_total: round_cents(reducible),
    }
}

/// Whether a category counts as discretionary spending.
pub fn is_reducible(category: &str) -> bool {
    let lowered = category.to_lowercase();
    REDUCIBLE_CATEGORIES.contains(&lowered.as_str())
}

/// Progress towards a savings goal as a percentage, clamped to 0..=100.
/// A non-positive target has no meaningful progress and reports 0.
pub fn goal_progress(balance: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    round_cents((balance / target * 100.0).clamp(0.0, 100.0))
}
