//! USD display formatting for whole-dollar amounts

/// Format a value as a whole-dollar USD string with thousands separators.
///
/// Mirrors the reference display: zero decimal places, `-$…` for negatives.
pub fn usd(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let dollars = rounded.abs() as u64;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_formatting() {
        assert_eq!(usd(0.0), "$0");
        assert_eq!(usd(367.0), "$367");
        assert_eq!(usd(1_000.0), "$1,000");
        assert_eq!(usd(20_000.0), "$20,000");
        assert_eq!(usd(1_234_567.0), "$1,234,567");
    }

    #[test]
    fn test_usd_rounds() {
        assert_eq!(usd(366.6), "$367");
        assert_eq!(usd(367.4), "$367");
    }

    #[test]
    fn test_usd_negative() {
        assert_eq!(usd(-5_000.0), "-$5,000");
    }
}
