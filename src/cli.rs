//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::generator::{DEFAULT_COUNT, DEFAULT_SEED};

/// Measure the cost of decoding newline-delimited JSON with different strategies
#[derive(Parser, Debug, Clone)]
#[command(name = "jsonmark")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"Examples:
  jsonmark StructuredJSON records.jsonl
  jsonmark UnstructuredSIMDJSONParser records.jsonl --expect -969896
  jsonmark generate --count 1000000 records.jsonl
  jsonmark list
"#)]
pub struct Cli {
    /// Strategy to benchmark (see `jsonmark list`)
    #[arg(value_name = "BENCHMARK")]
    pub benchmark: Option<String>,

    /// Newline-delimited JSON input file
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Fail unless the final checksum equals this value
    #[arg(long, value_name = "CHECKSUM", allow_hyphen_values = true, env = "JSONMARK_EXPECT")]
    pub expect: Option<i64>,

    /// Only log errors
    #[arg(long, short = 'q', env = "JSONMARK_QUIET")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short = 'd', env = "JSONMARK_DEBUG")]
    pub debug: bool,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, value_name = "DIR", env = "JSONMARK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write a seeded input file and print its expected checksum
    Generate {
        /// Output file
        output: PathBuf,
        /// Number of records
        #[arg(long, short = 'n', default_value_t = DEFAULT_COUNT)]
        count: u64,
        /// RNG seed
        #[arg(long, short = 's', default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// List available benchmark strategies
    List,
}
