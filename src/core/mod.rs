//! Core business logic: the calculation engine and its abstractions

pub mod analytics;
pub mod config;
pub mod currency;
pub mod loan;
pub mod log;
pub mod money;
pub mod transaction;

// Re-export main types for cleaner imports
pub use currency::CurrencyRateProvider;
pub use transaction::{TransactionKind, TransactionRecord, TransactionSource};
