//! Reflection-style decoders: the whole record into a generic map

use std::collections::HashMap;

use sonic_rs::JsonValueTrait;

use super::{float_checksum, invalid_json};
use crate::errors::DecodeError;
use crate::record::{INTEGER_1, INTEGER_2};
use crate::strategy::Strategy;

/// `serde_json` into `HashMap<String, serde_json::Value>`
pub struct SerdeMapStrategy;

impl Strategy for SerdeMapStrategy {
    fn name(&self) -> &'static str {
        "UnstructuredJSON"
    }

    fn description(&self) -> &'static str {
        "serde_json into a generic map, integers read back through f64"
    }

    fn decode(&self, record: &[u8]) -> Result<i64, DecodeError> {
        let map: HashMap<String, serde_json::Value> =
            serde_json::from_slice(record).map_err(invalid_json)?;

        let number = |field: &'static str| -> Result<f64, DecodeError> {
            map.get(field)
                .ok_or(DecodeError::MissingField(field))?
                .as_f64()
                .ok_or(DecodeError::NotANumber(field))
        };

        Ok(float_checksum(number(INTEGER_1)?, number(INTEGER_2)?))
    }
}

/// `sonic-rs` into `HashMap<String, sonic_rs::Value>`
pub struct SonicMapStrategy;

impl Strategy for SonicMapStrategy {
    fn name(&self) -> &'static str {
        "UnstructuredSIOJSON"
    }

    fn description(&self) -> &'static str {
        "sonic-rs into a generic map, integers read back through f64"
    }

    fn decode(&self, record: &[u8]) -> Result<i64, DecodeError> {
        let map: HashMap<String, sonic_rs::Value> =
            sonic_rs::from_slice(record).map_err(invalid_json)?;

        let number = |field: &'static str| -> Result<f64, DecodeError> {
            map.get(field)
                .ok_or(DecodeError::MissingField(field))?
                .as_f64()
                .ok_or(DecodeError::NotANumber(field))
        };

        Ok(float_checksum(number(INTEGER_1)?, number(INTEGER_2)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::fixtures::{SAMPLE, record};

    fn both() -> [Box<dyn Strategy>; 2] {
        [Box::new(SerdeMapStrategy), Box::new(SonicMapStrategy)]
    }

    #[test]
    fn test_sample_checksum() {
        for strategy in both() {
            assert_eq!(strategy.decode(SAMPLE.as_bytes()).unwrap(), 3, "{}", strategy.name());
        }
    }

    #[test]
    fn test_fractional_values_truncate_after_sum() {
        let json = br#"{"integer_1": 1.9, "integer_2": 1.2}"#;
        for strategy in both() {
            assert_eq!(strategy.decode(json).unwrap(), 3, "{}", strategy.name());
        }
    }

    #[test]
    fn test_unused_fields_are_irrelevant() {
        for strategy in both() {
            assert_eq!(strategy.decode(br#"{"integer_1":1,"integer_2":1}"#).unwrap(), 2);
            assert_eq!(strategy.decode(record(1, 1).as_bytes()).unwrap(), 2);
        }
    }

    #[test]
    fn test_missing_field() {
        for strategy in both() {
            assert_eq!(
                strategy.decode(br#"{"integer_2": 1}"#),
                Err(DecodeError::MissingField("integer_1"))
            );
        }
    }

    #[test]
    fn test_non_number_field() {
        for strategy in both() {
            assert_eq!(
                strategy.decode(br#"{"integer_1": 1, "integer_2": "2"}"#),
                Err(DecodeError::NotANumber("integer_2"))
            );
        }
    }

    #[test]
    fn test_malformed_json() {
        for strategy in both() {
            assert!(matches!(
                strategy.decode(br#"{"integer_1": 1,"#),
                Err(DecodeError::InvalidJson(_))
            ));
            assert!(strategy.decode(b"").is_err());
        }
    }
}
