//! What-if payment deltas for alternate down payments and terms
//!
//! Each quick-pick candidate is recomputed with everything else held fixed
//! and reported as a signed whole-dollar delta versus the current payment.

use super::payment::monthly_payment;
use crate::error::EstimateError;
use crate::loan::{LoanInputs, MAX_TERM_MONTHS};
use crate::rates::RateTable;
use serde::{Deserialize, Serialize};

/// Quick-pick down payment candidates from the reference calculator
pub const DOWN_PAYMENT_PRESETS: [f64; 5] = [0.0, 1_000.0, 2_000.0, 3_000.0, 5_000.0];

/// Quick-pick finance term candidates (months)
pub const TERM_PRESETS: [u32; 5] = [36, 48, 60, 72, 84];

/// One what-if candidate and its payment delta versus the current estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhatIfOption {
    /// Candidate down payment, when varying the down payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_payment: Option<f64>,

    /// Candidate term in months, when varying the term
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_months: Option<u32>,

    /// Rounded monthly payment under this candidate
    pub monthly_payment: f64,

    /// Signed whole-dollar change versus the current rounded payment
    pub payment_delta: f64,
}

/// Rounded, non-negative payment for one candidate
fn candidate_payment(principal: f64, rate: f64, term: u32) -> f64 {
    monthly_payment(principal, rate, term).round().max(0.0)
}

/// Recompute the payment for each candidate down payment, holding the term
/// and APR fixed, and report the delta versus the current payment.
///
/// Ordered as given; the candidate equal to the current down payment has
/// delta 0.
pub fn what_if_down_payments(
    inputs: &LoanInputs,
    rates: &RateTable,
    candidates: &[f64],
) -> Result<Vec<WhatIfOption>, EstimateError> {
    inputs.validate()?;

    let rate = rates.monthly_rate_for(inputs.credit_tier);
    let base = inputs.vehicle_price - inputs.trade_in_value;
    let current = candidate_payment(inputs.principal(), rate, inputs.term_months);

    Ok(candidates
        .iter()
        .map(|&dp| {
            let payment = candidate_payment(base - dp, rate, inputs.term_months);
            WhatIfOption {
                down_payment: Some(dp),
                term_months: None,
                monthly_payment: payment,
                payment_delta: payment - current,
            }
        })
        .collect())
}

/// Recompute the payment for each candidate term, holding the principal and
/// APR fixed, and report the delta versus the current payment.
///
/// Candidates outside the accepted term range are skipped: zero months would
/// divide by zero, and terms beyond [`MAX_TERM_MONTHS`] are rejected the same
/// way `LoanInputs::validate` rejects them.
pub fn what_if_terms(
    inputs: &LoanInputs,
    rates: &RateTable,
    candidates: &[u32],
) -> Result<Vec<WhatIfOption>, EstimateError> {
    inputs.validate()?;

    let rate = rates.monthly_rate_for(inputs.credit_tier);
    let principal = inputs.principal();
    let current = candidate_payment(principal, rate, inputs.term_months);

    Ok(candidates
        .iter()
        .filter(|&&term| term > 0 && term <= MAX_TERM_MONTHS)
        .map(|&term| {
            let payment = candidate_payment(principal, rate, term);
            WhatIfOption {
                down_payment: None,
                term_months: Some(term),
                monthly_payment: payment,
                payment_delta: payment - current,
            }
        })
        .collect())
}
