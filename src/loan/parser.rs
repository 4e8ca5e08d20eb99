//! Parse money text fields and the price query parameter
//!
//! Form fields arrive as decorated currency text ("$20,000"); the initial
//! vehicle price may be seeded from a `price` query-string parameter.

use crate::error::EstimateError;
use crate::loan::DEFAULT_VEHICLE_PRICE;
use log::warn;

/// Parse a money amount from user text, tolerating `$` and thousands commas.
/// NaN, infinities, and negative amounts are rejected rather than passed on.
pub fn parse_money(raw: &str) -> Result<f64, EstimateError> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Err(EstimateError::invalid_input("empty amount"));
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| EstimateError::invalid_input(format!("unparsable amount: {:?}", raw)))?;

    if !value.is_finite() {
        return Err(EstimateError::invalid_input(format!("non-finite amount: {:?}", raw)));
    }
    if value < 0.0 {
        return Err(EstimateError::invalid_input(format!("negative amount: {:?}", raw)));
    }

    Ok(value)
}

/// Parse a finance term in months from user text
pub fn parse_term(raw: &str) -> Result<u32, EstimateError> {
    let term: u32 = raw
        .trim()
        .parse()
        .map_err(|_| EstimateError::invalid_input(format!("unparsable term: {:?}", raw)))?;
    if term == 0 {
        return Err(EstimateError::invalid_input("finance term must be at least 1 month"));
    }
    Ok(term)
}

/// Seed the vehicle price from a URL query string.
///
/// Looks for a `price` parameter; absent or unparsable values fall back to
/// the default price (20000).
pub fn price_from_query(query: &str) -> f64 {
    let raw = query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "price")
        .map(|(_, value)| value);

    match raw {
        Some(text) => match parse_money(text) {
            Ok(price) => price,
            Err(e) => {
                warn!("ignoring price query parameter: {}", e);
                DEFAULT_VEHICLE_PRICE
            }
        },
        None => DEFAULT_VEHICLE_PRICE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("20000").unwrap(), 20_000.0);
        assert_eq!(parse_money("$20,000").unwrap(), 20_000.0);
        assert_eq!(parse_money(" $1,234.50 ").unwrap(), 1_234.5);
        assert_eq!(parse_money("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_money_rejects_garbage() {
        assert!(parse_money("").is_err());
        assert!(parse_money("$").is_err());
        assert!(parse_money("abc").is_err());
        assert!(parse_money("-500").is_err());
        assert!(parse_money("NaN").is_err());
        assert!(parse_money("inf").is_err());
    }

    #[test]
    fn test_parse_term() {
        assert_eq!(parse_term("60").unwrap(), 60);
        assert!(parse_term("0").is_err());
        assert!(parse_term("-12").is_err());
        assert!(parse_term("sixty").is_err());
    }

    #[test]
    fn test_price_from_query() {
        assert_eq!(price_from_query("?price=25000"), 25_000.0);
        assert_eq!(price_from_query("price=25000&ref=homepage"), 25_000.0);
        assert_eq!(price_from_query("ref=homepage"), DEFAULT_VEHICLE_PRICE);
        assert_eq!(price_from_query(""), DEFAULT_VEHICLE_PRICE);
        assert_eq!(price_from_query("?price=banana"), DEFAULT_VEHICLE_PRICE);
    }
}
