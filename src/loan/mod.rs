//! Loan input data model and text parsing

mod inputs;
pub mod parser;

pub use inputs::{CreditTier, LoanInputs, DEFAULT_VEHICLE_PRICE, MAX_TERM_MONTHS};
