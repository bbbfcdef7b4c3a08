//! Parsing of the free-text count field.
//!
//! Typed text never produces an error in the UI: [`coerce_count`] maps
//! anything unparseable to zero. Numbers too large for `i64` saturate.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountInputError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
}

/// Parse count text the way a numeric form field reads it.
///
/// - blank text is zero
/// - signed decimal integers parse exactly
/// - unsigned `0x`/`0o`/`0b` literals parse in their radix
/// - finite decimals (`2.7`, `1e3`) truncate toward zero
/// - `Infinity` and anything past the `i64` range saturate
pub fn parse_count(text: &str) -> Result<i64, CountInputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let not_a_number = || CountInputError::NotANumber(trimmed.to_string());

    if is_integer_literal(trimmed) {
        return Ok(trimmed
            .parse::<i64>()
            .unwrap_or(if trimmed.starts_with('-') { i64::MIN } else { i64::MAX }));
    }

    if let Some(n) = parse_radix_literal(trimmed) {
        return n.ok_or_else(not_a_number);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Ok(i64::MAX),
        "-Infinity" => return Ok(i64::MIN),
        _ => {}
    }

    // `f64::from_str` also accepts "inf" and "NaN"; only plain decimals count.
    let looks_decimal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && trimmed.chars().any(|c| c.is_ascii_digit());
    if !looks_decimal {
        return Err(not_a_number());
    }

    let value: f64 = trimmed.parse().map_err(|_| not_a_number())?;
    // float-to-int `as` saturates at the i64 bounds
    Ok(value.trunc() as i64)
}

/// [`parse_count`] with a fallback of zero.
pub fn coerce_count(text: &str) -> i64 {
    match parse_count(text) {
        Ok(n) => n,
        Err(e) => {
            tracing::debug!(error = %e, "count input coerced to 0");
            0
        }
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `None` when `s` has no radix prefix, `Some(None)` when the digits are bad.
fn parse_radix_literal(s: &str) -> Option<Option<i64>> {
    let prefix = s.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }
    Some(Some(
        u64::from_str_radix(digits, radix)
            .ok()
            .and_then(|n| i64::try_from(n).ok())
            .unwrap_or(i64::MAX),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integers() {
        assert_eq!(parse_count("0"), Ok(0));
        assert_eq!(parse_count("42"), Ok(42));
        assert_eq!(parse_count("-17"), Ok(-17));
        assert_eq!(parse_count("+8"), Ok(8));
        assert_eq!(parse_count("  12 "), Ok(12));
        assert_eq!(parse_count("007"), Ok(7));
    }

    #[test]
    fn test_parse_blank_is_zero() {
        assert_eq!(parse_count(""), Ok(0));
        assert_eq!(parse_count("   "), Ok(0));
    }

    #[test]
    fn test_parse_decimals_truncate() {
        assert_eq!(parse_count("2.7"), Ok(2));
        assert_eq!(parse_count("-2.7"), Ok(-2));
        assert_eq!(parse_count("1e3"), Ok(1000));
        assert_eq!(parse_count(".5"), Ok(0));
    }

    #[test]
    fn test_parse_radix_literals() {
        assert_eq!(parse_count("0x1A"), Ok(26));
        assert_eq!(parse_count("0X1a"), Ok(26));
        assert_eq!(parse_count("0o17"), Ok(15));
        assert_eq!(parse_count("0b101"), Ok(5));
        assert_eq!(parse_count("0xFFFFFFFFFFFFFFFFFFFF"), Ok(i64::MAX));
        assert!(matches!(parse_count("0x"), Err(CountInputError::NotANumber(_))));
        assert!(matches!(parse_count("0b12"), Err(CountInputError::NotANumber(_))));
        assert!(matches!(parse_count("-0x1A"), Err(CountInputError::NotANumber(_))));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(
            parse_count("abc"),
            Err(CountInputError::NotANumber("abc".into()))
        );
        assert!(matches!(parse_count("-"), Err(CountInputError::NotANumber(_))));
        assert!(matches!(parse_count("12abc"), Err(CountInputError::NotANumber(_))));
        assert!(matches!(parse_count("inf"), Err(CountInputError::NotANumber(_))));
        assert!(matches!(parse_count("NaN"), Err(CountInputError::NotANumber(_))));
        assert!(matches!(parse_count("1 2"), Err(CountInputError::NotANumber(_))));
    }

    #[test]
    fn test_parse_out_of_range_saturates() {
        assert_eq!(parse_count("99999999999999999999"), Ok(i64::MAX));
        assert_eq!(parse_count("-99999999999999999999"), Ok(i64::MIN));
        assert_eq!(parse_count("1e300"), Ok(i64::MAX));
        assert_eq!(parse_count("-1e400"), Ok(i64::MIN));
        assert_eq!(parse_count("Infinity"), Ok(i64::MAX));
        assert_eq!(parse_count("-Infinity"), Ok(i64::MIN));
    }

    #[test]
    fn test_coerce_falls_back_to_zero() {
        assert_eq!(coerce_count("abc"), 0);
        assert_eq!(coerce_count("-"), 0);
        assert_eq!(coerce_count("99999999999999999999"), i64::MAX);
        assert_eq!(coerce_count("-5"), -5);
    }
}
