//! Command handler modules for the handlog CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via `CliError`

mod analyze;
mod cfg;
mod parse;
mod stats;

pub use analyze::handle_analyze_command;
pub use cfg::handle_cfg_command;
pub use parse::handle_parse_command;
pub use stats::handle_stats_command;
