//! One-shot parse and report.
//!
//! Parses a session log, optionally saves the records, then prints the hero
//! summary lines.

use crate::commands::parse::{parse_log_file, save_records};
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_report;
use handlog_engine::stats::HeroReport;
use std::io::Write;

/// Handles the analyze command.
///
/// # Arguments
///
/// * `input` - Path to the session log
/// * `output` - Optional destination for the parsed records
/// * `config` - Resolved configuration (hero is required)
/// * `out` - Output stream for the summary lines
/// * `err` - Output stream for status messages
pub fn handle_analyze_command(
    input: &str,
    output: Option<&str>,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let options = config.parse_options()?;
    let records = parse_log_file(input, &options)?;
    if let Some(path) = output {
        save_records(path, &records, config.format)?;
        writeln!(err, "Saved {} hand(s) to {}", records.len(), path)?;
    }

    let report = HeroReport::compute(options.hero(), &records);
    for line in format_report(&report) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hero calls with suited hearts, then folds the next hand from the small blind.
    const LOG: &str = "\
\"\"\"Hero @ h1\"\" folds\",2025-04-09T20:01:05.000Z,9
\"\"\"Villain @ v1\"\" posts a big blind of 40\",2025-04-09T20:01:04.000Z,8
\"\"\"Hero @ h1\"\" posts a small blind of 20\",2025-04-09T20:01:03.000Z,7
\"Player stacks: #1 \"\"Hero @ h1\"\" (960) | #2 \"\"Villain @ v1\"\" (1040)\",2025-04-09T20:01:02.500Z,7
\"-- starting hand #2 (id: h2) (No Limit Texas Hold'em) (dealer: \"\"Hero @ h1\"\") --\",2025-04-09T20:01:02.000Z,6
\"-- ending hand #1 --\",2025-04-09T20:01:01.000Z,5
\"Flop:  [4h, 9h, Kc]\",2025-04-09T20:00:09.000Z,4
\"\"\"Hero @ h1\"\" calls 40\",2025-04-09T20:00:08.000Z,3
\"Your hand is 5h, 6h\",2025-04-09T20:00:07.000Z,2
\"Player stacks: #1 \"\"Villain @ v1\"\" (1000) | #2 \"\"Other @ o1\"\" (1000) | #3 \"\"Hero @ h1\"\" (1000)\",2025-04-09T20:00:04.000Z,1
\"-- starting hand #1 (id: h1) (No Limit Texas Hold'em) (dealer: \"\"Other @ o1\"\") --\",2025-04-09T20:00:02.000Z,0
";

    fn config() -> Config {
        Config {
            hero: Some("Hero".into()),
            ..Config::default()
        }
    }

    #[test]
    fn test_analyze_prints_summary() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(LOG.as_bytes()).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_analyze_command(f.path().to_str().unwrap(), None, &config(), &mut out, &mut err)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Hero: Hero (2 hand(s))");
        assert_eq!(lines[1], "Hero VPIP: 50.00%");
        assert_eq!(lines[2], "Flush Draw on Flop (Suited Hands Only): 100.00%");
        assert!(err.is_empty());
    }

    #[test]
    fn test_analyze_saves_records() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(LOG.as_bytes()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("hands.json");
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_analyze_command(
            f.path().to_str().unwrap(),
            Some(target.to_str().unwrap()),
            &config(),
            &mut out,
            &mut err,
        )
        .unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
        assert_eq!(saved.as_array().unwrap().len(), 2);
        assert_eq!(saved[0]["hand_id"], "h2");
        assert_eq!(saved[1]["hand_id"], "h1");
        assert!(String::from_utf8(err).unwrap().contains("Saved 2 hand(s)"));
    }
}
