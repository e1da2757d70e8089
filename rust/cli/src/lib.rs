//! # Free Cell CLI Library
//!
//! This library provides the command-line interface for the Free Cell engine.
//! It exposes subcommands for dealing layouts, playing interactively, and
//! inspecting configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand. [`run_with_input`] does the same with an
//! explicit input stream for `play`.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["freecell", "deal", "--seed", "42"];
//! let code = freecell_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal a layout and print it as text or JSON
//! - `play`: Play a game, one command per line
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

mod macros;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, FreecellCli};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
/// `play` reads its commands from stdin.
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
/// ```no_run
/// use std::io;
/// let args = vec!["freecell", "deal", "--seed", "42", "--json"];
/// let code = freecell_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // Use stdin for real input (supports both TTY and piped stdin)
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], reading `play` input from `input` instead of stdin.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
/// let mut input = Cursor::new(b"show\nquit\n".to_vec());
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = freecell_cli::run_with_input(
///     ["freecell", "play", "--seed", "9"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Moves made: 0"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "play", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FreecellCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Free Cell CLI");
                    write_or_exit!(err, "Usage: freecell <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: freecell --help");
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging();
    tracing::debug!(command = ?cli.cmd, "dispatching");

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Deal { seed, json } => match load_config(err) {
            Ok(config) => handle_deal_command(seed, json, &config, out),
            Err(code) => return code,
        },
        Commands::Play { seed } => match load_config(err) {
            Ok(config) => handle_play_command(seed, &config, input, out, err),
            Err(code) => return code,
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        // cfg reports its own failures
        Err(CliError::Config(_)) => exit_code::ERROR,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

/// Resolves configuration for a command, reporting failures on `err`.
fn load_config(err: &mut dyn Write) -> Result<config::Config, i32> {
    match config::load_with_sources() {
        Ok(resolved) => Ok(resolved.config),
        Err(e) => {
            let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
            Err(exit_code::ERROR)
        }
    }
}
