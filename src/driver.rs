//! Benchmark driver: one strategy over every record of a source

use std::io::BufRead;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::errors::RunError;
use crate::source::RecordSource;
use crate::strategy::{Registry, Strategy};

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Strategy name
    pub strategy: &'static str,
    /// Sum of every per-record checksum
    pub checksum: i64,
    /// Records decoded
    pub records: u64,
    /// Bytes read, line terminators included
    pub bytes: u64,
    /// Wall time spent reading and decoding
    pub elapsed: Duration,
}

impl RunReport {
    /// Decoded records per second
    pub fn records_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.records as f64 / secs
        } else {
            0.0
        }
    }

    /// Fail if the checksum differs from the expected one
    pub fn verify(&self, expected: Option<i64>) -> Result<(), RunError> {
        match expected {
            Some(expected) if expected != self.checksum => Err(RunError::ChecksumMismatch {
                expected,
                actual: self.checksum,
            }),
            _ => Ok(()),
        }
    }
}

/// Benchmark driver over an injected strategy table
pub struct BenchmarkDriver<'a> {
    registry: &'a Registry,
}

impl<'a> BenchmarkDriver<'a> {
    /// Create a new driver
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Resolve `name`, then open `path` and run over it.
    ///
    /// An unknown name fails before the file is opened.
    pub fn run_file(&self, name: &str, path: &Path) -> Result<RunReport> {
        let strategy = self.registry.get(name)?;
        let mut source = RecordSource::open(path)?;
        debug!(path = %path.display(), "Opened input");
        run(strategy, &mut source)
    }

    /// Resolve `name` and run over an already open source
    pub fn run_named<R: BufRead>(
        &self,
        name: &str,
        source: &mut RecordSource<R>,
    ) -> Result<RunReport> {
        let strategy = self.registry.get(name)?;
        run(strategy, source)
    }
}

/// Decode every record of `source` with `strategy` and sum the checksums
pub fn run<R: BufRead>(strategy: &dyn Strategy, source: &mut RecordSource<R>) -> Result<RunReport> {
    if let Some(caveat) = strategy.caveat() {
        warn!(strategy = strategy.name(), "{}", caveat);
    }
    info!(strategy = strategy.name(), "Running benchmark");

    let start = Instant::now();
    let mut checksum: i64 = 0;

    while let Some(record) = source.next_record() {
        let record = record?;
        let value = strategy.decode(record).map_err(|source_err| RunError::Decode {
            strategy: strategy.name(),
            line: source.records(),
            source: source_err,
        })?;
        checksum = checksum.wrapping_add(value);
    }

    let report = RunReport {
        strategy: strategy.name(),
        checksum,
        records: source.records(),
        bytes: source.bytes(),
        elapsed: start.elapsed(),
    };

    info!(
        strategy = report.strategy,
        records = report.records,
        bytes = report.bytes,
        "Deserialize time taken: {:.2}s ({:.2} lines/sec)",
        report.elapsed.as_secs_f64(),
        report.records_per_sec()
    );

    Ok(report)
}
