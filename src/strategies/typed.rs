//! Schema-typed decoders: the whole record into [`Record`]

use super::invalid_json;
use crate::errors::DecodeError;
use crate::record::Record;
use crate::strategy::Strategy;

/// `serde_json` into the typed record
pub struct SerdeTypedStrategy;

impl Strategy for SerdeTypedStrategy {
    fn name(&self) -> &'static str {
        "StructuredJSON"
    }

    fn description(&self) -> &'static str {
        "serde_json into a fixed struct with native integer fields"
    }

    fn decode(&self, record: &[u8]) -> Result<i64, DecodeError> {
        let parsed: Record = serde_json::from_slice(record).map_err(invalid_json)?;
        Ok(parsed.checksum())
    }
}

/// `sonic-rs` into the typed record
pub struct SonicTypedStrategy;

impl Strategy for SonicTypedStrategy {
    fn name(&self) -> &'static str {
        "StructuredSIOJSON"
    }

    fn description(&self) -> &'static str {
        "sonic-rs into a fixed struct with native integer fields"
    }

    fn decode(&self, record: &[u8]) -> Result<i64, DecodeError> {
        let parsed: Record = sonic_rs::from_slice(record).map_err(invalid_json)?;
        Ok(parsed.checksum())
    }
}
