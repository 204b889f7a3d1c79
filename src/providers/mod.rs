pub mod frankfurter;
