//! Closed-form amortization payment calculation

use crate::error::EstimateError;
use crate::loan::LoanInputs;
use crate::rates::RateTable;
use log::debug;
use serde::{Deserialize, Serialize};

/// Calculate the fixed monthly payment that retires `principal` over
/// `number_of_payments` periods at `monthly_rate` per period.
///
/// Standard amortization formula; at a zero rate it degrades to straight-line
/// division. Unrounded and unclamped. Callers must reject
/// `number_of_payments == 0` before calling.
pub fn monthly_payment(principal: f64, monthly_rate: f64, number_of_payments: u32) -> f64 {
    if monthly_rate > 0.0 {
        principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powi(-(number_of_payments as i32)))
    } else {
        principal / number_of_payments as f64
    }
}

/// A derived payment estimate for one set of loan inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentEstimate {
    /// Amount financed; signed, negative when down payment + trade-in
    /// exceed the price
    pub principal: f64,

    /// APR in percent used for this estimate
    pub apr: f64,

    /// Monthly rate as a fraction (APR / 100 / 12)
    pub monthly_rate: f64,

    /// Monthly payment in whole dollars, clamped at 0 for a
    /// non-positive principal
    pub monthly_payment: f64,

    /// Finance term in months
    pub term_months: u32,
}

impl PaymentEstimate {
    /// True when the down payment and trade-in cover the full price,
    /// so no financing is needed
    pub fn is_fully_covered(&self) -> bool {
        self.principal <= 0.0
    }
}

/// Derive a fresh estimate from the current inputs and rate table.
///
/// The sole recomputation entry point: validates the inputs, derives the
/// principal and monthly rate, applies the amortization formula, and rounds
/// to whole dollars. A non-positive principal clamps the payment to 0 rather
/// than publishing a negative payment.
pub fn recompute(inputs: &LoanInputs, rates: &RateTable) -> Result<PaymentEstimate, EstimateError> {
    inputs.validate()?;

    let principal = inputs.principal();
    let apr = rates.apr_for(inputs.credit_tier);
    let monthly_rate = rates.monthly_rate_for(inputs.credit_tier);

    let raw = monthly_payment(principal, monthly_rate, inputs.term_months);
    let rounded = raw.round().max(0.0);

    debug!(
        "recompute: principal={:.2} apr={:.2}% term={}mo payment={}",
        principal, apr, inputs.term_months, rounded
    );

    Ok(PaymentEstimate {
        principal,
        apr,
        monthly_rate,
        monthly_payment: rounded,
        term_months: inputs.term_months,
    })
}
