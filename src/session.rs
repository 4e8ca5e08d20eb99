//! Calculator session: the reactive wrapper around the pure estimator
//!
//! Owns the current inputs and rate table and keeps the published estimate
//! fresh: every mutation runs a synchronous recompute before returning, so
//! the estimate a front-end reads is never stale. Malformed text input
//! coerces back to the previous valid value instead of propagating NaN.

use crate::error::EstimateError;
use crate::estimator::{
    self, recompute, PaymentEstimate, WhatIfOption, DOWN_PAYMENT_PRESETS, TERM_PRESETS,
};
use crate::loan::{parser, CreditTier, LoanInputs};
use crate::rates::RateTable;
use log::warn;

/// A single UI session of the payment calculator
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    inputs: LoanInputs,
    rates: RateTable,
    estimate: PaymentEstimate,
}

impl CalculatorSession {
    /// Start a session with the form defaults and the standard rate table
    pub fn new() -> Self {
        Self::with_inputs(LoanInputs::default())
            .expect("default inputs are valid")
    }

    /// Start a session with the vehicle price seeded from a URL query string
    pub fn from_query(query: &str) -> Self {
        let mut inputs = LoanInputs::default();
        inputs.vehicle_price = parser::price_from_query(query);
        Self::with_inputs(inputs).expect("query seeding cannot produce invalid inputs")
    }

    /// Start a session with specific inputs and the standard rate table
    pub fn with_inputs(inputs: LoanInputs) -> Result<Self, EstimateError> {
        Self::with_rates(inputs, RateTable::standard())
    }

    /// Start a session with specific inputs and rate table
    pub fn with_rates(inputs: LoanInputs, rates: RateTable) -> Result<Self, EstimateError> {
        let estimate = recompute(&inputs, &rates)?;
        Ok(Self {
            inputs,
            rates,
            estimate,
        })
    }

    /// Replace the full input set and recompute atomically.
    ///
    /// Invalid inputs leave the previous inputs and estimate untouched.
    pub fn on_inputs_changed(
        &mut self,
        new_inputs: LoanInputs,
    ) -> Result<&PaymentEstimate, EstimateError> {
        let estimate = recompute(&new_inputs, &self.rates)?;
        self.inputs = new_inputs;
        self.estimate = estimate;
        Ok(&self.estimate)
    }

    /// Mutate one field and recompute, rolling back on invalid values
    fn update<F: FnOnce(&mut LoanInputs)>(&mut self, apply: F) -> &PaymentEstimate {
        let mut candidate = self.inputs.clone();
        apply(&mut candidate);
        if let Err(e) = self.on_inputs_changed(candidate) {
            warn!("keeping previous value: {}", e);
        }
        &self.estimate
    }

    /// Set the vehicle price and refresh the estimate
    pub fn set_vehicle_price(&mut self, price: f64) -> &PaymentEstimate {
        self.update(|inputs| inputs.vehicle_price = price)
    }

    /// Set the down payment and refresh the estimate
    pub fn set_down_payment(&mut self, down: f64) -> &PaymentEstimate {
        self.update(|inputs| inputs.down_payment = down)
    }

    /// Set the trade-in value and refresh the estimate
    pub fn set_trade_in_value(&mut self, trade_in: f64) -> &PaymentEstimate {
        self.update(|inputs| inputs.trade_in_value = trade_in)
    }

    /// Set the finance term and refresh the estimate
    pub fn set_term_months(&mut self, term: u32) -> &PaymentEstimate {
        self.update(|inputs| inputs.term_months = term)
    }

    /// Set the credit tier and refresh the estimate (APR follows the tier)
    pub fn set_credit_tier(&mut self, tier: CreditTier) -> &PaymentEstimate {
        self.update(|inputs| inputs.credit_tier = tier)
    }

    /// Set the vehicle price from form text, coercing malformed input
    /// back to the previous value
    pub fn set_vehicle_price_text(&mut self, raw: &str) -> &PaymentEstimate {
        match parser::parse_money(raw) {
            Ok(price) => self.set_vehicle_price(price),
            Err(e) => {
                warn!("keeping previous vehicle price: {}", e);
                &self.estimate
            }
        }
    }

    /// Set the down payment from form text
    pub fn set_down_payment_text(&mut self, raw: &str) -> &PaymentEstimate {
        match parser::parse_money(raw) {
            Ok(down) => self.set_down_payment(down),
            Err(e) => {
                warn!("keeping previous down payment: {}", e);
                &self.estimate
            }
        }
    }

    /// Set the trade-in value from form text
    pub fn set_trade_in_value_text(&mut self, raw: &str) -> &PaymentEstimate {
        match parser::parse_money(raw) {
            Ok(trade_in) => self.set_trade_in_value(trade_in),
            Err(e) => {
                warn!("keeping previous trade-in value: {}", e);
                &self.estimate
            }
        }
    }

    /// Set the finance term from form text
    pub fn set_term_months_text(&mut self, raw: &str) -> &PaymentEstimate {
        match parser::parse_term(raw) {
            Ok(term) => self.set_term_months(term),
            Err(e) => {
                warn!("keeping previous finance term: {}", e);
                &self.estimate
            }
        }
    }

    /// What-if deltas over the quick-pick down payments
    pub fn what_if_down_payments(&self) -> Vec<WhatIfOption> {
        estimator::what_if_down_payments(&self.inputs, &self.rates, &DOWN_PAYMENT_PRESETS)
            .expect("session inputs are always valid")
    }

    /// What-if deltas over the quick-pick terms
    pub fn what_if_terms(&self) -> Vec<WhatIfOption> {
        estimator::what_if_terms(&self.inputs, &self.rates, &TERM_PRESETS)
            .expect("session inputs are always valid")
    }

    /// Current inputs
    pub fn inputs(&self) -> &LoanInputs {
        &self.inputs
    }

    /// Rate table in effect for this session
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Latest estimate; always consistent with `inputs()`
    pub fn estimate(&self) -> &PaymentEstimate {
        &self.estimate
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session() {
        let session = CalculatorSession::new();
        assert_eq!(session.inputs().vehicle_price, 20_000.0);
        assert_eq!(session.estimate().monthly_payment, 367.0);
    }

    #[test]
    fn test_query_seeding() {
        let session = CalculatorSession::from_query("?price=30000");
        assert_eq!(session.inputs().vehicle_price, 30_000.0);

        let fallback = CalculatorSession::from_query("?price=not-a-number");
        assert_eq!(fallback.inputs().vehicle_price, 20_000.0);
    }

    #[test]
    fn test_mutation_refreshes_estimate() {
        let mut session = CalculatorSession::new();
        let before = session.estimate().monthly_payment;

        let after = session.set_down_payment(5_000.0).monthly_payment;
        assert!(after < before);
        assert_eq!(session.inputs().down_payment, 5_000.0);

        // Tier change moves the APR and the payment together
        session.set_credit_tier(CreditTier::Poor);
        assert_eq!(session.estimate().apr, 16.0);
    }

    #[test]
    fn test_malformed_text_keeps_previous_value() {
        let mut session = CalculatorSession::new();
        let before = session.estimate().clone();

        session.set_vehicle_price_text("garbage");
        session.set_down_payment_text("NaN");
        session.set_term_months_text("0");

        assert_eq!(session.inputs().vehicle_price, 20_000.0);
        assert_eq!(session.inputs().down_payment, 1_000.0);
        assert_eq!(session.inputs().term_months, 60);
        assert_eq!(session.estimate(), &before);
    }

    #[test]
    fn test_setter_returns_fresh_or_previous_estimate() {
        let mut session = CalculatorSession::new();

        // Valid mutation: the returned borrow is the refreshed estimate
        let refreshed = session.set_down_payment(3_000.0).clone();
        assert_eq!(refreshed, *session.estimate());
        assert!(refreshed.monthly_payment < 367.0);

        // Invalid mutation through the numeric setter: previous estimate survives
        let kept = session.set_term_months(0).clone();
        assert_eq!(kept, refreshed);
        assert_eq!(session.inputs().term_months, 60);
    }

    #[test]
    fn test_invalid_inputs_roll_back() {
        let mut session = CalculatorSession::new();
        let before = session.estimate().clone();

        let bad = LoanInputs {
            term_months: 0,
            ..session.inputs().clone()
        };
        assert!(session.on_inputs_changed(bad).is_err());
        assert_eq!(session.estimate(), &before);
    }

    #[test]
    fn test_currency_text_accepted() {
        let mut session = CalculatorSession::new();
        session.set_vehicle_price_text("$25,000");
        assert_eq!(session.inputs().vehicle_price, 25_000.0);
    }

    #[test]
    fn test_what_if_tables_track_session() {
        let mut session = CalculatorSession::new();
        session.set_down_payment(2_000.0);

        let options = session.what_if_down_payments();
        let current = options
            .iter()
            .find(|o| o.down_payment == Some(2_000.0))
            .unwrap();
        assert_eq!(current.payment_delta, 0.0);
    }
}
