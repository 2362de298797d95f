//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of each value
//! (default, file, env or cli).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "hero": {
//!     "value": "Hero",
//!     "source": "env"
//!   },
//!   "default_big_blind": {
//!     "value": 40,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "hero": {
            "value": config.hero,
            "source": sources.hero,
        },
        "default_big_blind": {
            "value": config.default_big_blind,
            "source": sources.default_big_blind,
        },
        "format": {
            "value": config.format,
            "source": sources.format,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
