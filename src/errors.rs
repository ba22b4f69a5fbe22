//! Error types for jsonmark
//!
//! Every fault class aborts the run. The typed errors exist so the caller
//! decides how to abort and which exit code to use.

use std::path::PathBuf;

use thiserror::Error;

/// Command-line usage errors
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("usage: {0} <benchmark> <filename>")]
    WrongArguments(String),

    #[error("Unknown benchmark function: {0}")]
    UnknownBenchmark(String),

    #[error("Duplicate benchmark function: {0}")]
    DuplicateBenchmark(String),
}

/// Record source errors
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read failed after line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: std::io::Error,
    },
}

/// Per-record decode errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Field '{0}' is not a number")]
    NotANumber(&'static str),

    #[error("Field '{0}' is not an integer: {1}")]
    NotAnInteger(&'static str, String),
}

/// Errors raised by the benchmark driver
#[derive(Error, Debug)]
pub enum RunError {
    #[error("{strategy} failed on line {line}: {source}")]
    Decode {
        strategy: &'static str,
        line: u64,
        #[source]
        source: DecodeError,
    },

    #[error("Expected checksum {expected} but got back {actual}")]
    ChecksumMismatch { expected: i64, actual: i64 },
}

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USAGE: i32 = 1;
    pub const IO_FAILURE: i32 = 3;
    pub const DECODE_FAILURE: i32 = 4;
    pub const CHECKSUM_MISMATCH: i32 = 5;
}

/// Get exit code for an error
pub fn get_exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<UsageError>().is_some() {
        exit_codes::USAGE
    } else if err.downcast_ref::<SourceError>().is_some() {
        exit_codes::IO_FAILURE
    } else if let Some(e) = err.downcast_ref::<RunError>() {
        match e {
            RunError::Decode { .. } => exit_codes::DECODE_FAILURE,
            RunError::ChecksumMismatch { .. } => exit_codes::CHECKSUM_MISMATCH,
        }
    } else if err.downcast_ref::<DecodeError>().is_some() {
        exit_codes::DECODE_FAILURE
    } else if err.downcast_ref::<std::io::Error>().is_some() {
        exit_codes::IO_FAILURE
    } else {
        exit_codes::USAGE
    }
}
