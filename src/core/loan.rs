//! Loan amortization and expense splitting.
//!
//! Pure arithmetic over caller-supplied parameters; no I/O, no state.

use crate::core::money::round_cents;

/// One repayment period of an amortization schedule.
///
/// `payment == interest + principal` within cent rounding, and the principal
/// column of a full schedule sums back to the loan amount.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanScheduleRow {
    /// 1-based period number.
    pub period: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
}

/// Builds the fixed-payment amortization schedule for a loan.
///
/// `annual_rate_pct` is the nominal annual rate in percent; periods are
/// months. Invalid input (non-positive principal, zero term, negative rate)
/// yields an empty schedule rather than an error.
pub fn loan_schedule(principal: f64, annual_rate_pct: f64, term_months: u32) -> Vec<LoanScheduleRow> {
    if principal <= 0.0 || annual_rate_pct < 0.0 || term_months == 0 {
        return Vec::new();
    }

    let monthly_rate = annual_rate_pct / 12.0 / 100.0;
    let n = term_months as f64;

    let payment = if monthly_rate > 0.0 {
        let growth = (1.0 + monthly_rate).powf(n);
        principal * (monthly_rate * growth) / (growth - 1.0)
    } else {
        principal / n
    };

    let mut balance = principal;
    (1..=term_months)
        .map(|period| {
            let interest = balance * monthly_rate;
            let repaid = payment - interest;
            balance -= repaid;
            LoanScheduleRow {
                period,
                payment: round_cents(payment),
                interest: round_cents(interest),
                principal: round_cents(repaid),
            }
        })
        .collect()
}

/// Splits a shared expense evenly across a party.
///
/// A zero party count or a negative total returns 0.0; both are caller
/// errors that the engine maps to a defined result instead of failing.
pub fn split_expense(total: f64, people: u32) -> f64 {
    if people == 0 || total < 0.0 {
        return 0.0;
    }
    round_cents(total / people as f64)
}
