//! jsonmark - JSON decoding micro-benchmark harness
//!
//! Reads newline-delimited JSON records and decodes each one with a
//! selectable strategy. Every strategy returns `integer_1 + integer_2` so
//! results can be cross-checked and the decode work cannot be optimised
//! away.

pub mod cli;
pub mod config;
pub mod driver;
pub mod errors;
pub mod generator;
pub mod logger;
pub mod record;
pub mod source;
pub mod strategies;
pub mod strategy;

pub use driver::{BenchmarkDriver, RunReport, run};
pub use errors::{DecodeError, RunError, SourceError, UsageError};
pub use record::Record;
pub use source::RecordSource;
pub use strategy::{Registry, Strategy};
