//! CSV-based rate sheet loader
//!
//! Loads an APR override table from a `tier,apr` CSV so dealer rate sheets
//! can replace the standard table without a rebuild.

use super::RateTable;
use crate::error::EstimateError;
use crate::loan::CreditTier;
use log::debug;
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Load a rate table from a CSV file with `tier,apr` rows
pub fn load_rate_table<P: AsRef<Path>>(path: P) -> Result<RateTable, Box<dyn Error>> {
    let file = File::open(path.as_ref())?;
    load_rate_table_from_reader(file)
}

/// Load a rate table from any reader (e.g., string buffer, network stream)
pub fn load_rate_table_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<RateTable, Box<dyn Error>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut aprs: HashMap<CreditTier, f64> = HashMap::new();

    for result in csv_reader.records() {
        let record = result?;
        let tier: CreditTier = record[0].parse()?;
        let apr: f64 = record[1].parse()?;

        if !apr.is_finite() || apr < 0.0 {
            return Err(EstimateError::invalid_input(format!(
                "bad APR for tier {}: {}",
                tier, &record[1]
            ))
            .into());
        }
        aprs.insert(tier, apr);
    }

    // Every tier must be present; a partial sheet would silently fall back
    for tier in CreditTier::ALL {
        if !aprs.contains_key(&tier) {
            return Err(EstimateError::invalid_input(format!(
                "rate sheet missing tier: {}",
                tier
            ))
            .into());
        }
    }

    let table = RateTable::from_aprs(
        aprs[&CreditTier::Excellent],
        aprs[&CreditTier::Good],
        aprs[&CreditTier::Fair],
        aprs[&CreditTier::Poor],
    );
    debug!("loaded rate sheet: {:?}", table);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rate_sheet() {
        let csv = "tier,apr\nexcellent,5.5\ngood,7.5\nfair,11.0\npoor,15.0\n";
        let table = load_rate_table_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(table.apr_for(CreditTier::Excellent), 5.5);
        assert_eq!(table.apr_for(CreditTier::Poor), 15.0);
    }

    #[test]
    fn test_unknown_tier_rejected() {
        let csv = "tier,apr\nexcellent,5.5\ngood,7.5\nfair,11.0\nsubprime,20.0\n";
        assert!(load_rate_table_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_tier_rejected() {
        let csv = "tier,apr\nexcellent,5.5\ngood,7.5\n";
        assert!(load_rate_table_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_negative_apr_rejected() {
        let csv = "tier,apr\nexcellent,-1.0\ngood,7.5\nfair,11.0\npoor,15.0\n";
        assert!(load_rate_table_from_reader(csv.as_bytes()).is_err());
    }
}
