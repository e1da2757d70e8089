//! Deal command handler: deal one layout and print it.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_layout;
use freecell_engine::game::Game;
use std::io::Write;

/// Deals a layout and prints it as text, or as JSON with `json`.
///
/// The seed comes from the flag, then the configuration, then at random.
pub fn handle_deal_command(
    seed: Option<u64>,
    json: bool,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let game = Game::new(Some(seed))?;

    if json {
        let text = game.snapshot().to_json().map_err(std::io::Error::other)?;
        writeln!(out, "{}", text)?;
    } else {
        writeln!(out, "Seed: {}", seed)?;
        writeln!(
            out,
            "{}",
            format_layout(&game, config.symbols, config.show_moves)
        )?;
    }
    Ok(())
}
