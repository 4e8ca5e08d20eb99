//! AWS Lambda handler for payment quote requests
//!
//! Accepts loan inputs via JSON and returns the payment estimate along with
//! what-if tables for the quick-pick down payments and terms.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use loan_estimator::{
    estimator::{what_if_down_payments, what_if_terms, DOWN_PAYMENT_PRESETS, TERM_PRESETS},
    loan::{CreditTier, LoanInputs, DEFAULT_VEHICLE_PRICE},
    rates::RateTable,
    recompute, PaymentEstimate, WhatIfOption,
};
use serde::{Deserialize, Serialize};

/// Input for a quote calculation
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Vehicle price (default: 20000)
    #[serde(default = "default_price")]
    pub vehicle_price: f64,

    /// Down payment (default: 1000)
    #[serde(default = "default_down_payment")]
    pub down_payment: f64,

    /// Trade-in value (default: 0)
    #[serde(default)]
    pub trade_in_value: f64,

    /// Finance term in months (default: 60)
    #[serde(default = "default_term")]
    pub term_months: u32,

    /// Credit tier: excellent, good, fair, or poor (default: excellent)
    #[serde(default = "default_tier")]
    pub credit_tier: String,

    /// Include what-if tables in the response (default: true)
    #[serde(default = "default_true")]
    pub include_what_if: bool,
}

fn default_price() -> f64 { DEFAULT_VEHICLE_PRICE }
fn default_down_payment() -> f64 { 1_000.0 }
fn default_term() -> u32 { 60 }
fn default_tier() -> String { "excellent".to_string() }
fn default_true() -> bool { true }

/// Output from a quote calculation
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub estimate: PaymentEstimate,
    pub fully_covered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_if_down_payments: Option<Vec<WhatIfOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_if_terms: Option<Vec<WhatIfOption>>,
    pub execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &QuoteResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: QuoteRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let credit_tier: CreditTier = match request.credit_tier.parse() {
        Ok(tier) => tier,
        Err(e) => {
            return Ok(error_response(400, &format!("{}", e)));
        }
    };

    let inputs = match LoanInputs::new(
        request.vehicle_price,
        request.down_payment,
        request.trade_in_value,
        request.term_months,
        credit_tier,
    ) {
        Ok(inputs) => inputs,
        Err(e) => {
            return Ok(error_response(400, &format!("{}", e)));
        }
    };

    let rates = RateTable::standard();
    let estimate = match recompute(&inputs, &rates) {
        Ok(estimate) => estimate,
        Err(e) => {
            return Ok(error_response(400, &format!("{}", e)));
        }
    };

    let (wi_down, wi_terms) = if request.include_what_if {
        // Inputs are already validated; these cannot fail
        let down = what_if_down_payments(&inputs, &rates, &DOWN_PAYMENT_PRESETS)
            .map_err(|e| Error::from(e.to_string()))?;
        let terms = what_if_terms(&inputs, &rates, &TERM_PRESETS)
            .map_err(|e| Error::from(e.to_string()))?;
        (Some(down), Some(terms))
    } else {
        (None, None)
    };

    let response = QuoteResponse {
        fully_covered: estimate.is_fully_covered(),
        estimate,
        what_if_down_payments: wi_down,
        what_if_terms: wi_terms,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
