//! Credit-tier APR rate table

pub mod loader;

use crate::loan::CreditTier;
use serde::{Deserialize, Serialize};

/// Annual percentage rate by credit tier
///
/// The standard table is a process-wide constant; an alternate rate sheet
/// may be loaded from CSV for overrides (see [`loader`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// APRs in percent, indexed in [`CreditTier::ALL`] order
    aprs: [f64; 4],
}

impl RateTable {
    /// Standard rate table from the reference calculator
    pub fn standard() -> Self {
        Self {
            aprs: [6.0, 8.0, 12.0, 16.0],
        }
    }

    /// Build a table from per-tier APRs (percent)
    pub fn from_aprs(excellent: f64, good: f64, fair: f64, poor: f64) -> Self {
        Self {
            aprs: [excellent, good, fair, poor],
        }
    }

    /// APR in percent for a credit tier
    pub fn apr_for(&self, tier: CreditTier) -> f64 {
        match tier {
            CreditTier::Excellent => self.aprs[0],
            CreditTier::Good => self.aprs[1],
            CreditTier::Fair => self.aprs[2],
            CreditTier::Poor => self.aprs[3],
        }
    }

    /// Monthly rate as a fraction for a credit tier (APR / 100 / 12)
    pub fn monthly_rate_for(&self, tier: CreditTier) -> f64 {
        self.apr_for(tier) / 100.0 / 12.0
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}
