//! Value parsing - turn user input into a finite number

use crate::ConversionError;

/// Parse a numeric value such as "5", "-40", "1.5e3"
///
/// Rejects malformed text and anything that is not finite
/// ("nan", "inf", "1e999").
pub fn parse_value(s: &str) -> Result<f64, ConversionError> {
    let trimmed = s.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ConversionError::InvalidValue(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(trimmed.to_string()));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_values() {
        assert_eq!(parse_value("5").unwrap(), 5.0);
        assert_eq!(parse_value("-40").unwrap(), -40.0);
        assert_eq!(parse_value(" 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_value("1.5e3").unwrap(), 1500.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "abc", "5km", "1,5", "--3"] {
            let err = parse_value(input).unwrap_err();
            assert!(matches!(err, ConversionError::InvalidValue(_)), "{:?}", input);
        }
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        for input in ["nan", "NaN", "inf", "-inf", "infinity", "1e999"] {
            assert!(parse_value(input).is_err(), "{:?} should be rejected", input);
        }
    }
}
