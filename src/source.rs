//! Line-oriented record source
//!
//! Pulls one newline-delimited record at a time from a buffered reader,
//! reusing a single line buffer. Single forward pass: once exhausted the
//! caller has to reopen the input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::trace;

use crate::errors::SourceError;

/// Initial capacity of the line buffer
const LINE_CAPACITY: usize = 4096;

/// Record source over any buffered reader
pub struct RecordSource<R> {
    reader: R,
    line_buffer: Vec<u8>,
    records: u64,
    bytes: u64,
}

impl RecordSource<BufReader<File>> {
    /// Open a file as a record source
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> RecordSource<R> {
    /// Create a new record source
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: Vec::with_capacity(LINE_CAPACITY),
            records: 0,
            bytes: 0,
        }
    }

    /// Get the next record, without its line terminator.
    ///
    /// The returned slice is only valid until the next call.
    pub fn next_record(&mut self) -> Option<Result<&[u8], SourceError>> {
        self.line_buffer.clear();

        match self.reader.read_until(b'\n', &mut self.line_buffer) {
            Ok(0) => None, // EOF
            Ok(n) => {
                self.records += 1;
                self.bytes += n as u64;

                let mut line = self.line_buffer.as_slice();
                if let Some(stripped) = line.strip_suffix(b"\n") {
                    line = stripped;
                }
                if let Some(stripped) = line.strip_suffix(b"\r") {
                    line = stripped;
                }

                trace!(line = self.records, len = line.len(), "Read record");
                Some(Ok(line))
            }
            Err(source) => Some(Err(SourceError::Read {
                line: self.records,
                source,
            })),
        }
    }

    /// Number of records handed out so far
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Number of bytes consumed so far, terminators included
    pub fn bytes(&self) -> u64 {
        self.bytes
    }
}
