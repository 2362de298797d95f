//! JSON persistence for hand records.
//!
//! Records are written as one pretty-printed top-level array. Reading also
//! accepts JSON Lines, and skips elements that do not decode as a
//! [`HandRecord`] instead of failing the whole file.

use std::io::Write;

use crate::errors::StoreError;
use crate::record::HandRecord;

/// Writes `records` as a pretty JSON array followed by a newline.
pub fn write_records<W: Write>(mut writer: W, records: &[HandRecord]) -> Result<(), StoreError> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Serializes records compactly, one per line.
pub fn write_records_jsonl<W: Write>(
    mut writer: W,
    records: &[HandRecord],
) -> Result<(), StoreError> {
    for rec in records {
        let line = serde_json::to_string(rec)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Records decoded from a file, plus how many entries were unusable.
#[derive(Debug, Default)]
pub struct LoadedRecords {
    pub records: Vec<HandRecord>,
    pub corrupted: usize,
}

/// Reads a JSON array or JSON Lines document.
///
/// An empty document yields no records. A document that starts with `[`
/// but is not a valid array is an error; a malformed JSON Lines entry only
/// counts as corrupted.
pub fn read_records(text: &str) -> Result<LoadedRecords, StoreError> {
    let trimmed = text.trim_start();
    let mut loaded = LoadedRecords::default();
    if trimmed.starts_with('[') {
        let values: Vec<serde_json::Value> = serde_json::from_str(trimmed)?;
        for v in values {
            loaded.push(serde_json::from_value(v));
        }
    } else {
        for line in trimmed.lines().filter(|l| !l.trim().is_empty()) {
            loaded.push(serde_json::from_str(line));
        }
    }
    if loaded.corrupted > 0 {
        tracing::warn!(corrupted = loaded.corrupted, "skipped undecodable records");
    }
    Ok(loaded)
}

impl LoadedRecords {
    fn push(&mut self, decoded: Result<HandRecord, serde_json::Error>) {
        match decoded {
            Ok(rec) => self.records.push(rec),
            Err(_) => self.corrupted += 1,
        }
    }
}
