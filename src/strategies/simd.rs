//! SIMD DOM decoder
//!
//! simd-json parses in place, so every record is first copied into a
//! freshly allocated buffer and the parser is set up from scratch. That
//! per-record overhead is what makes this strategy slow here; batching
//! records or reusing buffers would measure something else.

use simd_json::prelude::*;

use super::invalid_json;
use crate::errors::DecodeError;
use crate::record::{INTEGER_1, INTEGER_2};
use crate::strategy::Strategy;

/// `simd-json` borrowed DOM, one parse per record
pub struct SimdDomStrategy;

impl Strategy for SimdDomStrategy {
    fn name(&self) -> &'static str {
        "UnstructuredSIMDJSONParser"
    }

    fn description(&self) -> &'static str {
        "simd-json borrowed DOM, field lookup on the parsed document"
    }

    fn caveat(&self) -> Option<&'static str> {
        Some("slow by construction: per-record buffer copy and parser setup, no batching")
    }

    fn decode(&self, record: &[u8]) -> Result<i64, DecodeError> {
        let mut buffer = record.to_vec();
        let document = simd_json::to_borrowed_value(&mut buffer).map_err(invalid_json)?;

        Ok(field(&document, INTEGER_1)?.wrapping_add(field(&document, INTEGER_2)?))
    }
}

/// Integer value of a top-level field; absent fields count as zero
fn field(document: &simd_json::BorrowedValue<'_>, name: &'static str) -> Result<i64, DecodeError> {
    match document.get(name) {
        None => Ok(0),
        Some(value) => value
            .as_i64()
            .ok_or_else(|| DecodeError::NotAnInteger(name, value.to_string())),
    }
}
