//! Configuration command handler.
//!
//! Prints each setting with the place it came from (default, config file,
//! or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "show_moves": {
//!     "value": true,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Loads the configuration with source tracking and prints it as JSON.
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
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "show_moves": {
            "value": config.show_moves,
            "source": sources.show_moves,
        },
        "symbols": {
            "value": config.symbols,
            "source": sources.symbols,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
