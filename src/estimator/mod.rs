//! Payment estimation: amortization math and what-if deltas

mod payment;
mod whatif;

pub use payment::{monthly_payment, recompute, PaymentEstimate};
pub use whatif::{
    what_if_down_payments, what_if_terms, WhatIfOption, DOWN_PAYMENT_PRESETS, TERM_PRESETS,
};
