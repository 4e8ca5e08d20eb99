//! Loan input records matching the payment calculator form fields

use crate::error::EstimateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default vehicle price when no seed value is supplied
pub const DEFAULT_VEHICLE_PRICE: f64 = 20_000.0;

/// Longest accepted finance term (100 years); keeps the exponent in the
/// amortization formula well inside i32 range
pub const MAX_TERM_MONTHS: u32 = 1_200;

/// Credit score tier used for APR lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CreditTier {
    /// All tiers in rate-sheet order (best to worst)
    pub const ALL: [CreditTier; 4] = [
        CreditTier::Excellent,
        CreditTier::Good,
        CreditTier::Fair,
        CreditTier::Poor,
    ];

    /// Lowercase name as it appears in rate sheets and requests
    pub fn as_str(&self) -> &'static str {
        match self {
            CreditTier::Excellent => "excellent",
            CreditTier::Good => "good",
            CreditTier::Fair => "fair",
            CreditTier::Poor => "poor",
        }
    }
}

impl fmt::Display for CreditTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreditTier {
    type Err = EstimateError;

    /// Never silently defaults: anything outside the four names is an error
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "excellent" => Ok(CreditTier::Excellent),
            "good" => Ok(CreditTier::Good),
            "fair" => Ok(CreditTier::Fair),
            "poor" => Ok(CreditTier::Poor),
            other => Err(EstimateError::InvalidTier {
                tier: other.to_string(),
            }),
        }
    }
}

/// The full set of form inputs driving the estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInputs {
    /// Sticker price of the vehicle
    pub vehicle_price: f64,

    /// Cash down payment
    pub down_payment: f64,

    /// Value credited for a trade-in vehicle
    pub trade_in_value: f64,

    /// Finance term in months
    pub term_months: u32,

    /// Credit tier used for APR lookup
    pub credit_tier: CreditTier,
}

impl LoanInputs {
    /// Create inputs, validating them immediately
    pub fn new(
        vehicle_price: f64,
        down_payment: f64,
        trade_in_value: f64,
        term_months: u32,
        credit_tier: CreditTier,
    ) -> Result<Self, EstimateError> {
        let inputs = Self {
            vehicle_price,
            down_payment,
            trade_in_value,
            term_months,
            credit_tier,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Amount financed: price less down payment and trade-in.
    /// May be negative when the buyer covers more than the price.
    pub fn principal(&self) -> f64 {
        self.vehicle_price - self.down_payment - self.trade_in_value
    }

    /// Reject values that would poison the payment arithmetic
    pub fn validate(&self) -> Result<(), EstimateError> {
        if self.term_months == 0 {
            return Err(EstimateError::invalid_input("finance term must be at least 1 month"));
        }
        if self.term_months > MAX_TERM_MONTHS {
            return Err(EstimateError::invalid_input(format!(
                "finance term cannot exceed {} months",
                MAX_TERM_MONTHS
            )));
        }
        for (name, value) in [
            ("vehicle price", self.vehicle_price),
            ("down payment", self.down_payment),
            ("trade-in value", self.trade_in_value),
        ] {
            if !value.is_finite() {
                return Err(EstimateError::invalid_input(format!("{} is not a number", name)));
            }
            if value < 0.0 {
                return Err(EstimateError::invalid_input(format!("{} cannot be negative", name)));
            }
        }
        Ok(())
    }
}

impl Default for LoanInputs {
    /// Form defaults from the reference calculator
    fn default() -> Self {
        Self {
            vehicle_price: DEFAULT_VEHICLE_PRICE,
            down_payment: 1_000.0,
            trade_in_value: 0.0,
            term_months: 60,
            credit_tier: CreditTier::Excellent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parsing() {
        assert_eq!("excellent".parse::<CreditTier>().unwrap(), CreditTier::Excellent);
        assert_eq!(" Good ".parse::<CreditTier>().unwrap(), CreditTier::Good);
        assert_eq!("POOR".parse::<CreditTier>().unwrap(), CreditTier::Poor);

        let err = "subprime".parse::<CreditTier>().unwrap_err();
        assert_eq!(err, EstimateError::InvalidTier { tier: "subprime".to_string() });
    }

    #[test]
    fn test_principal() {
        let inputs = LoanInputs::new(20_000.0, 1_000.0, 500.0, 60, CreditTier::Good).unwrap();
        assert_eq!(inputs.principal(), 18_500.0);
    }

    #[test]
    fn test_zero_term_rejected() {
        let err = LoanInputs::new(20_000.0, 0.0, 0.0, 0, CreditTier::Excellent).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidInput { .. }));
    }

    #[test]
    fn test_oversize_term_rejected() {
        assert!(LoanInputs::new(20_000.0, 0.0, 0.0, MAX_TERM_MONTHS, CreditTier::Good).is_ok());
        assert!(LoanInputs::new(20_000.0, 0.0, 0.0, MAX_TERM_MONTHS + 1, CreditTier::Good).is_err());
        assert!(LoanInputs::new(20_000.0, 0.0, 0.0, u32::MAX, CreditTier::Good).is_err());
    }

    #[test]
    fn test_negative_and_nan_rejected() {
        assert!(LoanInputs::new(-1.0, 0.0, 0.0, 60, CreditTier::Fair).is_err());
        assert!(LoanInputs::new(20_000.0, f64::NAN, 0.0, 60, CreditTier::Fair).is_err());
        assert!(LoanInputs::new(20_000.0, 0.0, f64::INFINITY, 60, CreditTier::Fair).is_err());
    }

    #[test]
    fn test_defaults_valid() {
        let inputs = LoanInputs::default();
        assert!(inputs.validate().is_ok());
        assert_eq!(inputs.vehicle_price, 20_000.0);
        assert_eq!(inputs.term_months, 60);
    }
}
