//! Session log parsing command.
//!
//! Reads a raw session log, splits it into hands and writes the resulting
//! hand records either to stdout or to a file.

use crate::config::{Config, OutputFormat};
use crate::error::CliError;
use crate::io_utils::{ensure_parent_dir, log_lines, read_text_auto};
use handlog_engine::record::HandRecord;
use handlog_engine::session::{ParseOptions, parse_session};
use handlog_engine::store::{write_records, write_records_jsonl};
use std::io::Write;

/// Handles the parse command.
///
/// # Arguments
///
/// * `input` - Path to the session log (`.zst` is decompressed)
/// * `output` - Destination file; records go to `out` when `None`
/// * `config` - Resolved configuration (hero is required)
/// * `out` - Output stream for records when no file is given
/// * `err` - Output stream for status messages
///
/// # Returns
///
/// `Result<(), CliError>`: `Ok(())` once every record has been written.
pub fn handle_parse_command(
    input: &str,
    output: Option<&str>,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let options = config.parse_options()?;
    let records = parse_log_file(input, &options)?;
    match output {
        Some(path) => {
            save_records(path, &records, config.format)?;
            writeln!(err, "Parsed {} hand(s) into {}", records.len(), path)?;
        }
        None => emit_records(out, &records, config.format)?,
    }
    Ok(())
}

pub(crate) fn parse_log_file(
    input: &str,
    options: &ParseOptions,
) -> Result<Vec<HandRecord>, CliError> {
    let content = read_text_auto(input)
        .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", input, e)))?;
    let lines = log_lines(&content);
    Ok(parse_session(&lines, options))
}

pub(crate) fn emit_records(
    out: &mut dyn Write,
    records: &[HandRecord],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_records(out, records)?,
        OutputFormat::Jsonl => write_records_jsonl(out, records)?,
    }
    Ok(())
}

pub(crate) fn save_records(
    path: &str,
    records: &[HandRecord],
    format: OutputFormat,
) -> Result<(), CliError> {
    ensure_parent_dir(std::path::Path::new(path)).map_err(CliError::InvalidInput)?;
    let file = std::fs::File::create(path)?;
    let mut w = std::io::BufWriter::new(file);
    emit_records(&mut w, records, format)
}
