use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{ExtractoError, Result};

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("valid date pattern"))
}

/// `DD/MM/YYYY` (day and month may be a single digit) to `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Result<String> {
    let raw = raw.trim();
    let caps = date_re()
        .captures(raw)
        .ok_or_else(|| ExtractoError::Format(format!("invalid date '{raw}'")))?;
    let d: u32 = caps[1].parse().map_err(|_| bad_date(raw))?;
    let m: u32 = caps[2].parse().map_err(|_| bad_date(raw))?;
    let y: i32 = caps[3].parse().map_err(|_| bad_date(raw))?;
    NaiveDate::from_ymd_opt(y, m, d)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .ok_or_else(|| bad_date(raw))
}

fn bad_date(raw: &str) -> ExtractoError {
    ExtractoError::Format(format!("invalid date '{raw}'"))
}

/// Comma-decimal amount to a signed float. No thousands separators.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let s = raw.trim().replace(',', ".");
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ExtractoError::Format(format!("invalid amount '{}'", raw.trim()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("15/03/2024").unwrap(), "2024-03-15");
        assert_eq!(parse_date("1/2/2024").unwrap(), "2024-02-01");
        assert_eq!(parse_date(" 09/11/2023 ").unwrap(), "2023-11-09");
    }

    #[test]
    fn test_parse_date_rejects_malformed() {
        for raw in ["", "15/03", "15//2024", "/03/2024", "2024-03-15", "15/03/24", "aa/bb/cccc"] {
            assert!(
                matches!(parse_date(raw), Err(ExtractoError::Format(_))),
                "expected format error for '{raw}'"
            );
        }
    }

    #[test]
    fn test_parse_date_rejects_impossible_dates() {
        assert!(parse_date("30/02/2024").is_err());
        assert!(parse_date("01/13/2024").is_err());
        assert!(parse_date("00/01/2024").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("-45,30").unwrap(), -45.3);
        assert_eq!(parse_amount("1234,56").unwrap(), 1234.56);
        assert_eq!(parse_amount(" 12 ").unwrap(), 12.0);
        assert_eq!(parse_amount("0,00").unwrap(), 0.0);
        assert_eq!(parse_amount("7.5").unwrap(), 7.5);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        for raw in ["", "abc", "1.234,56", "NaN", "inf", "12,3,4"] {
            assert!(
                matches!(parse_amount(raw), Err(ExtractoError::Format(_))),
                "expected format error for '{raw}'"
            );
        }
    }
}
