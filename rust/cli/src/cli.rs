//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::config::{CliOverrides, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "handlog",
    version,
    about = "Parse poker session logs into hand records and hero statistics"
)]
pub struct HandlogCli {
    /// Log parser progress to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

/// Options shared by the commands that parse a session log.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ParseFlags {
    /// Hero identity (substring of the hero's table name)
    #[arg(long)]
    pub hero: Option<String>,

    /// Big blind used for bb stacks when a hand shows no big blind post
    #[arg(long = "default-bb", value_parser = clap::value_parser!(u64).range(1..))]
    pub default_bb: Option<u64>,

    /// Layout of saved records
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ParseFlags {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            hero: self.hero.clone(),
            default_big_blind: self.default_bb,
            format: self.format,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a session log into hand records
    Parse {
        /// Session log (CSV export, optionally .zst compressed)
        #[arg(long)]
        input: String,
        /// Write records here instead of stdout
        #[arg(long)]
        output: Option<String>,
        #[command(flatten)]
        flags: ParseFlags,
    },
    /// Compute hero statistics from saved hand records
    Stats {
        /// Record file (JSON array or JSON Lines)
        #[arg(long)]
        input: String,
        /// Hero identity
        #[arg(long)]
        hero: Option<String>,
    },
    /// Parse a session log and report hero statistics
    Analyze {
        /// Session log (CSV export, optionally .zst compressed)
        #[arg(long)]
        input: String,
        /// Also save the parsed records here
        #[arg(long)]
        output: Option<String>,
        #[command(flatten)]
        flags: ParseFlags,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
