//! # Play Command
//!
//! Interactive Free Cell from the terminal, one command per input line.
//!
//! Every command maps onto the engine's select → move/cancel protocol.
//! Illegal selections and moves print a `Rejected:` line and leave the table
//! as it was; misuse such as selecting twice prints an error and play goes on.
//! The session ends on `quit` or end of input.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_layout, format_run};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{HELP_TEXT, ParseResult, PlayCommand, parse_play_command};
use freecell_engine::area::AreaId;
use freecell_engine::errors::GameError;
use freecell_engine::game::Game;
use std::io::{BufRead, Write};

/// Handle the play command: interactive gameplay.
///
/// # Arguments
///
/// * `seed` - RNG seed for the deal; falls back to the configured seed, then random
/// * `config` - Display settings
/// * `stdin` - Input stream of play commands
/// * `out` - Output stream for the table and move results
/// * `err` - Error stream for parse errors and protocol misuse
///
/// # Examples
///
/// ```ignore
/// use std::io::Cursor;
///
/// let mut input = Cursor::new(b"sel c1 7\nmv f1\nquit\n");
/// handle_play_command(Some(1), &config, &mut input, &mut out, &mut err).unwrap();
/// ```
pub fn handle_play_command(
    seed: Option<u64>,
    config: &Config,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let mut game = Game::new(Some(seed))?;
    tracing::info!(seed, "play session started");

    writeln!(out, "play: seed={}", seed)?;
    writeln!(out, "{}", format_layout(&game, config.symbols, config.show_moves))?;
    writeln!(out, "Type 'help' for commands.")?;

    let mut moves = 0u32;
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(input) = read_stdin_line(stdin) else {
            writeln!(out)?;
            break;
        };
        if input.is_empty() {
            continue;
        }
        match parse_play_command(&input) {
            ParseResult::Command(cmd) => {
                let redeal = matches!(cmd, PlayCommand::New(_));
                if apply_command(&mut game, cmd, config, out, err)? {
                    moves += 1;
                }
                if redeal {
                    moves = 0;
                }
            }
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    if let Some(origin) = game.origin_area() {
        game.cancel_move()?;
        ui::display_warning(err, &format!("held cards returned to {}", origin))?;
    }
    tracing::info!(moves, "play session ended");
    writeln!(out, "Moves made: {}", moves)?;
    Ok(())
}

/// Runs one command against the game. Returns whether a move landed.
fn apply_command(
    game: &mut Game,
    cmd: PlayCommand,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool, CliError> {
    let symbols = config.symbols;
    match cmd {
        PlayCommand::SelectColumn { column, position } => {
            let result = game.select_from_column(column, position - 1);
            report_selection(
                game,
                result,
                &format!("card {} of {}", position, AreaId::column(column)),
                symbols,
                out,
                err,
            )?;
        }
        PlayCommand::SelectFreeCell { cell } => {
            let result = game.select_from_free_cell(cell);
            report_selection(
                game,
                result,
                &AreaId::free_cell(cell).to_string(),
                symbols,
                out,
                err,
            )?;
        }
        PlayCommand::SelectCard { card, area } => {
            let result = game.select(&card, area);
            report_selection(
                game,
                result,
                &format!("{} from {}", card.code(), area),
                symbols,
                out,
                err,
            )?;
        }
        PlayCommand::MoveTo(destination) => {
            let run = format_run(game.selection(), symbols);
            let origin = game.origin_area();
            match game.move_selection_to(destination.kind, destination.id) {
                Ok(true) => {
                    writeln!(out, "Moved {} to {}", run, destination)?;
                    writeln!(out, "{}", format_layout(game, symbols, config.show_moves))?;
                    return Ok(true);
                }
                Ok(false) => {
                    let back = origin.map(|o| o.to_string()).unwrap_or_default();
                    ui::write_rejected(
                        out,
                        &format!(
                            "{} cannot go on {}; returned to {}",
                            run, destination, back
                        ),
                    )?;
                }
                Err(e) => ui::write_error(err, &e.to_string())?,
            }
        }
        PlayCommand::Cancel => match game.cancel_move() {
            Ok(()) => {
                writeln!(out, "Selection returned")?;
            }
            Err(e) => ui::write_error(err, &e.to_string())?,
        },
        PlayCommand::Show => {
            writeln!(out, "{}", format_layout(game, symbols, config.show_moves))?;
        }
        PlayCommand::New(seed) => {
            game.redeal(seed)?;
            writeln!(out, "New game: seed={}", game.seed())?;
            writeln!(out, "{}", format_layout(game, symbols, config.show_moves))?;
        }
        PlayCommand::Help => {
            writeln!(out, "{}", HELP_TEXT)?;
        }
    }
    Ok(false)
}

fn report_selection(
    game: &Game,
    result: Result<bool, GameError>,
    what: &str,
    symbols: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match result {
        Ok(true) => {
            writeln!(out, "Selected {}", format_run(game.selection(), symbols))?;
        }
        Ok(false) => ui::write_rejected(out, &format!("cannot select {}", what))?,
        Err(e) => ui::write_error(err, &e.to_string())?,
    }
    Ok(())
}
