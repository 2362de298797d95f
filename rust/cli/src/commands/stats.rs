//! Hero statistics over saved hand records.
//!
//! Loads a record file written by `parse` (JSON array or JSON Lines) and
//! prints the hero's VPIP and flush-draw report as JSON.

use crate::config::Config;
use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::ui;
use handlog_engine::stats::HeroReport;
use handlog_engine::store::read_records;
use std::io::Write;

/// Computes hero statistics from a record file.
///
/// # Arguments
///
/// * `input` - Path to a JSON or JSONL record file
/// * `config` - Resolved configuration (hero is required)
/// * `out` - Output stream for the JSON report
/// * `err` - Output stream for warnings
///
/// # Returns
///
/// `Result<(), CliError>`: `Ok(())` when a report was written. A file whose
/// records are all corrupted is an error.
pub fn handle_stats_command(
    input: &str,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let hero = config.require_hero()?;
    let content = read_text_auto(input)
        .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", input, e)))?;
    let loaded = read_records(&content)
        .map_err(|e| CliError::InvalidInput(format!("{}: {}", input, e)))?;

    if loaded.corrupted > 0 {
        ui::display_warning(
            err,
            &format!("Skipped {} corrupted record(s)", loaded.corrupted),
        )?;
        if loaded.records.is_empty() {
            return Err(CliError::InvalidInput("Invalid record".to_string()));
        }
    }

    let report = HeroReport::compute(hero, &loaded.records);
    let json_output = serde_json::to_string_pretty(&report)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    Ok(())
}
