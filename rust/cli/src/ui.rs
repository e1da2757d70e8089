//! UI helper functions for terminal output formatting.
//!
//! Keeps the prefixes of error, warning and rejection lines consistent
//! across commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// A legal-but-refused request: the game state did not change.
pub fn write_rejected(out: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(out, "Rejected: {}", message)
}
