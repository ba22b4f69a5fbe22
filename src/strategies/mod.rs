//! Built-in decoding strategies
//!
//! Every strategy decodes one record with a different library or access
//! pattern and returns `integer_1 + integer_2`. None of them keep state
//! between calls.

mod key_scan;
mod simd;
mod typed;
mod untyped;

pub use key_scan::SonicKeyScanStrategy;
pub use simd::SimdDomStrategy;
pub use typed::{SerdeTypedStrategy, SonicTypedStrategy};
pub use untyped::{SerdeMapStrategy, SonicMapStrategy};

use crate::errors::DecodeError;

/// Checksum from two numbers seen through an f64-only numeric model.
///
/// The sum is taken in f64 and truncated toward zero; out-of-range values
/// saturate and NaN becomes 0.
pub(crate) fn float_checksum(a: f64, b: f64) -> i64 {
    (a + b) as i64
}

/// Parse the raw text of a matched value as a whole number
pub(crate) fn parse_raw_int(field: &'static str, raw: &str) -> Result<i64, DecodeError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DecodeError::NotAnInteger(field, raw.to_string()))
}

pub(crate) fn invalid_json(err: impl std::fmt::Display) -> DecodeError {
    DecodeError::InvalidJson(err.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_checksum_truncates_toward_zero() {
        assert_eq!(float_checksum(1.9, 1.2), 3);
        assert_eq!(float_checksum(-1.9, -1.2), -3);
        assert_eq!(float_checksum(5.0, -2.0), 3);
    }

    #[test]
    fn test_float_checksum_saturates() {
        assert_eq!(float_checksum(f64::MAX, 0.0), i64::MAX);
        assert_eq!(float_checksum(f64::MIN, 0.0), i64::MIN);
        assert_eq!(float_checksum(f64::NAN, 1.0), 0);
    }

    #[test]
    fn test_float_checksum_loses_precision_above_2_pow_53() {
        // 2^53 + 1 is not representable as f64
        let big = 9_007_199_254_740_993_i64;
        assert_eq!(float_checksum(big as f64, 0.0), big - 1);
    }

    #[test]
    fn test_parse_raw_int() {
        assert_eq!(parse_raw_int("integer_1", "-42").unwrap(), -42);
        assert!(matches!(
            parse_raw_int("integer_1", "4.2"),
            Err(DecodeError::NotAnInteger("integer_1", _))
        ));
        assert!(parse_raw_int("integer_1", "\"7\"").is_err());
    }
}
