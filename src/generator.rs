//! Synthetic input generator
//!
//! Writes seeded, reproducible newline-delimited records and reports the
//! checksum a correct strategy must produce for them.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::DateTime;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::record::{Coordinates, Record};

/// Default number of records
pub const DEFAULT_COUNT: u64 = 1000;
/// Default RNG seed
pub const DEFAULT_SEED: u64 = 42;

const VOCABULARY: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
    "kilo", "lima", "mike", "november", "oscar", "papa", "quebec", "romeo", "sierra", "tango",
    "uniform", "victor", "whiskey", "xray", "yankee", "zulu",
];

/// 2000-01-01T00:00:00Z
const EPOCH_START: i64 = 946_684_800;
/// 2030-01-01T00:00:00Z
const EPOCH_END: i64 = 1_893_456_000;

/// Seeded record generator
pub struct RecordGenerator {
    rng: StdRng,
}

impl RecordGenerator {
    /// Create a generator from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce the next record
    pub fn next_record(&mut self) -> Record {
        let word_count = self.rng.gen_range(1..=5);
        let sentence_len = self.rng.gen_range(4..=10);

        Record {
            integer_1: self.rng.gen_range(-1000..=1000),
            integer_2: self.rng.gen_range(-1000..=1000),
            float_1: self.rng.gen_range(-1000.0..1000.0),
            float_2: self.rng.gen_range(-1000.0..1000.0),
            bool: self.rng.r#gen(),
            words: self.words(word_count),
            str: self.sentence(sentence_len),
            datetime: self.datetime(),
            coordinates: Coordinates {
                longitude: self.rng.gen_range(-180.0..180.0),
                latitude: self.rng.gen_range(-90.0..90.0),
            },
            null: serde_json::Value::Null,
        }
    }

    fn words(&mut self, count: usize) -> Vec<String> {
        (0..count)
            .filter_map(|_| VOCABULARY.choose(&mut self.rng))
            .map(|w| w.to_string())
            .collect()
    }

    fn sentence(&mut self, count: usize) -> String {
        let mut sentence = self.words(count).join(" ");
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push('.');
        sentence
    }

    fn datetime(&mut self) -> String {
        let secs = self.rng.gen_range(EPOCH_START..EPOCH_END);
        DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S UTC").to_string())
            .unwrap_or_default()
    }
}

/// Write `count` records to `writer`, returning the expected checksum
pub fn write_records<W: Write>(writer: &mut W, count: u64, seed: u64) -> Result<i64> {
    let mut generator = RecordGenerator::new(seed);
    let mut checksum: i64 = 0;

    for _ in 0..count {
        let record = generator.next_record();
        checksum = checksum.wrapping_add(record.checksum());
        serde_json::to_writer(&mut *writer, &record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(checksum)
}

/// Generate an input file, returning the expected checksum
pub fn generate_file(path: &Path, count: u64, seed: u64) -> Result<i64> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let checksum = write_records(&mut writer, count, seed)
        .with_context(|| format!("Failed to write records to: {}", path.display()))?;

    info!(path = %path.display(), count, seed, checksum, "Input generated");
    Ok(checksum)
}
