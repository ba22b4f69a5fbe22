//! Run configuration derived from the command line

use std::path::PathBuf;

use crate::cli::Cli;
use crate::errors::UsageError;

/// Validated benchmark run configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Strategy name, resolved against the registry by the driver
    pub benchmark: String,
    /// Input file
    pub file: PathBuf,
    /// Expected checksum, if validation was requested
    pub expect: Option<i64>,
}

impl Config {
    /// Create config from CLI arguments
    pub fn from_cli(cli: &Cli) -> Result<Self, UsageError> {
        match (&cli.benchmark, &cli.file) {
            (Some(benchmark), Some(file)) => Ok(Self {
                benchmark: benchmark.clone(),
                file: file.clone(),
                expect: cli.expect,
            }),
            _ => Err(UsageError::WrongArguments(program_name())),
        }
    }
}

/// Name the binary was invoked as
pub fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
