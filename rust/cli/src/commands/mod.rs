//! Command handler modules for the freecell CLI.
//!
//! Each subcommand lives in its own file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and, for `play`,
//!   the input stream are passed in as parameters
//! - Error propagation: all errors propagated via `CliError`

mod cfg;
mod deal;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
