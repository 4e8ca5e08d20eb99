//! Loan Estimator - payment estimation engine for vehicle financing
//!
//! This library provides:
//! - Closed-form amortization payment calculation
//! - Credit-tier APR lookup with CSV rate-sheet overrides
//! - What-if payment deltas for alternate down payments and terms
//! - A reactive calculator session that recomputes on every input change

pub mod error;
pub mod estimator;
pub mod format;
pub mod loan;
pub mod rates;
pub mod session;

// Re-export commonly used types
pub use error::EstimateError;
pub use estimator::{monthly_payment, recompute, PaymentEstimate, WhatIfOption};
pub use loan::{CreditTier, LoanInputs};
pub use rates::RateTable;
pub use session::CalculatorSession;
