//! # Handlog CLI Library
//!
//! Command-line interface for the handlog engine: turns exported poker
//! session logs into structured hand records and hero statistics.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["handlog", "analyze", "--input", "session.csv", "--hero", "Hero"];
//! let code = handlog_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `parse`: Parse a session log into hand records (JSON or JSON Lines)
//! - `stats`: Hero VPIP and flush-draw statistics from saved records
//! - `analyze`: Parse a session log and print the hero summary
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;

use cli::{Commands, HandlogCli};
use commands::{
    handle_analyze_command, handle_cfg_command, handle_parse_command, handle_stats_command,
};
use config::CliOverrides;

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["handlog", "--help"];
/// let code = handlog_cli::run(args, &mut io::sink(), &mut io::sink());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["parse", "stats", "analyze", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HandlogCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout with a success code
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Handlog session log parser");
                    write_or_exit!(err, "Usage: handlog <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: handlog --help");
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging(cli.verbose);

    let result = match &cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Parse {
            input,
            output,
            flags,
        } => config::load_with_overrides(&flags.overrides())
            .map_err(CliError::from)
            .and_then(|resolved| {
                handle_parse_command(input, output.as_deref(), &resolved.config, out, err)
            }),
        Commands::Analyze {
            input,
            output,
            flags,
        } => config::load_with_overrides(&flags.overrides())
            .map_err(CliError::from)
            .and_then(|resolved| {
                handle_analyze_command(input, output.as_deref(), &resolved.config, out, err)
            }),
        Commands::Stats { input, hero } => {
            let overrides = CliOverrides {
                hero: hero.clone(),
                ..CliOverrides::default()
            };
            config::load_with_overrides(&overrides)
                .map_err(CliError::from)
                .and_then(|resolved| handle_stats_command(input, &resolved.config, out, err))
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        // cfg already reported its own configuration error
        Err(CliError::Config(_)) if matches!(cli.cmd, Commands::Cfg) => exit_code::ERROR,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_capture(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.iter().copied(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let (code, out, err) = run_capture(&["handlog", "--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("parse"));
        assert!(out.contains("analyze"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_unknown_command_lists_commands() {
        let (code, out, err) = run_capture(&["handlog", "replay"]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.contains("Commands:"));
        for c in ["parse", "stats", "analyze", "cfg"] {
            assert!(err.contains(&format!("  {}", c)));
        }
    }

    #[test]
    fn test_zero_default_bb_rejected_by_parser() {
        let (code, _, err) = run_capture(&[
            "handlog",
            "parse",
            "--input",
            "x.csv",
            "--hero",
            "Hero",
            "--default-bb",
            "0",
        ]);
        assert_eq!(code, 2);
        assert!(err.contains("default-bb"));
    }
}
