//! Selective key-path decoder
//!
//! Walks the top-level object lazily and only materialises the two
//! checksum values. It does strictly less work than every other strategy,
//! so its timings are not comparable with theirs.

use super::{invalid_json, parse_raw_int};
use crate::errors::DecodeError;
use crate::record::{INTEGER_1, INTEGER_2};
use crate::strategy::Strategy;

/// `sonic-rs` lazy object iterator, two keys only
pub struct SonicKeyScanStrategy;

impl Strategy for SonicKeyScanStrategy {
    fn name(&self) -> &'static str {
        "UnstructuredJSONParser"
    }

    fn description(&self) -> &'static str {
        "sonic-rs lazy key scan, parses only integer_1 and integer_2"
    }

    fn caveat(&self) -> Option<&'static str> {
        Some("unfair comparison: only the two checksum fields are ever parsed")
    }

    fn decode(&self, record: &[u8]) -> Result<i64, DecodeError> {
        // Keys never seen count as zero
        let mut int1: Option<i64> = None;
        let mut int2: Option<i64> = None;

        for entry in sonic_rs::to_object_iter(record) {
            let (key, value) = entry.map_err(invalid_json)?;
            match &*key {
                INTEGER_1 => int1 = Some(parse_raw_int(INTEGER_1, value.as_raw_str())?),
                INTEGER_2 => int2 = Some(parse_raw_int(INTEGER_2, value.as_raw_str())?),
                _ => continue,
            }
            if int1.is_some() && int2.is_some() {
                break;
            }
        }

        Ok(int1.unwrap_or(0).wrapping_add(int2.unwrap_or(0)))
    }
}
