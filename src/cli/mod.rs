pub mod convert;
pub mod forecast;
pub mod loan;
pub mod savings;
pub mod setup;
pub mod split;
pub mod summary;
pub mod transactions;
pub mod ui;
