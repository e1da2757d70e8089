//! Input parsing and validation for the interactive `play` command.
//!
//! Each input line is turned into a [`ParseResult`]: a command for the game,
//! a quit request, or an error message to show the player.

use freecell_engine::area::{AreaId, AreaKind};
use freecell_engine::cards::Card;

/// One thing the player asked the table to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// Lift from a column starting at a 1-based position counted from the rear
    SelectColumn { column: usize, position: usize },
    /// Lift the card in a free cell
    SelectFreeCell { cell: usize },
    /// Lift a named card from an area
    SelectCard { card: Card, area: AreaId },
    /// Drop the held run on an area
    MoveTo(AreaId),
    Cancel,
    Show,
    New(Option<u64>),
    Help,
}

/// Result type for parsing user input into play commands.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid command parsed from input
    Command(PlayCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

pub const HELP_TEXT: &str = "\
Commands:
  sel c<N> <pos>    select from column N starting at card <pos> (1 = rearmost)
  sel f<N>          select the card in free cell N
  sel <card> <area> select a named card, e.g. 'sel 5C c3'
  mv f<N>|s<N>|c<N> drop the selection on a free cell, suit cell or column
  cancel            return the selection to where it came from
  show              print the table
  new [seed]        deal a new game
  help              print this help
  quit              leave";

/// Parses an area token such as `c3`, `f1` or `s4`.
///
/// The id is range-checked against the layout.
///
/// # Example
///
/// ```rust
/// use freecell_engine::area::AreaId;
/// # use freecell_cli::validation::parse_area;
///
/// assert_eq!(parse_area("c3"), Ok(AreaId::column(3)));
/// assert!(parse_area("c9").is_err());
/// assert!(parse_area("x1").is_err());
/// ```
pub fn parse_area(token: &str) -> Result<AreaId, String> {
    let mut chars = token.chars();
    let Some(prefix) = chars.next() else {
        return Err("Missing area (e.g. 'c3', 'f1', 's2')".to_string());
    };
    let kind: AreaKind = prefix.to_string().parse()?;
    let id: usize = chars
        .as_str()
        .parse()
        .map_err(|_| format!("Invalid area id in '{}'", token))?;
    let area = AreaId::new(kind, id);
    if !area.is_valid() {
        return Err(format!(
            "There is no {} {} (valid ids are 1-{})",
            kind,
            id,
            kind.count()
        ));
    }
    Ok(area)
}

/// Parse one line of `play` input (case-insensitive).
///
/// # Example
///
/// ```rust
/// use freecell_engine::area::AreaId;
/// # use freecell_cli::validation::{parse_play_command, ParseResult, PlayCommand};
///
/// assert_eq!(
///     parse_play_command("sel c2 5"),
///     ParseResult::Command(PlayCommand::SelectColumn { column: 2, position: 5 })
/// );
/// assert_eq!(
///     parse_play_command("mv f1"),
///     ParseResult::Command(PlayCommand::MoveTo(AreaId::free_cell(1)))
/// );
/// assert_eq!(parse_play_command("q"), ParseResult::Quit);
/// ```
pub fn parse_play_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" | "exit" => ParseResult::Quit,
        "cancel" | "x" => ParseResult::Command(PlayCommand::Cancel),
        "show" | "ls" => ParseResult::Command(PlayCommand::Show),
        "help" | "h" | "?" => ParseResult::Command(PlayCommand::Help),
        "new" => match parts.get(1) {
            None => ParseResult::Command(PlayCommand::New(None)),
            Some(seed) => match seed.parse::<u64>() {
                Ok(seed) => ParseResult::Command(PlayCommand::New(Some(seed))),
                Err(_) => ParseResult::Invalid(format!("Invalid seed '{}'", seed)),
            },
        },
        "mv" | "move" => match parts.get(1) {
            None => ParseResult::Invalid("Move requires a destination (e.g. 'mv c3')".to_string()),
            Some(token) => match parse_area(token) {
                Ok(area) => ParseResult::Command(PlayCommand::MoveTo(area)),
                Err(msg) => ParseResult::Invalid(msg),
            },
        },
        "sel" | "select" => parse_select(&parts[1..]),
        other => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Type 'help' for commands.",
            other
        )),
    }
}

fn parse_select(args: &[&str]) -> ParseResult {
    let Some(first) = args.first() else {
        return ParseResult::Invalid(
            "Select requires a source (e.g. 'sel c3 5' or 'sel f1')".to_string(),
        );
    };

    // area tokens end in a digit, card codes in a suit letter
    if let Some(card) = Card::parse_code(first) {
        return match args.get(1) {
            Some(token) => match parse_area(token) {
                Ok(area) => ParseResult::Command(PlayCommand::SelectCard { card, area }),
                Err(msg) => ParseResult::Invalid(msg),
            },
            None => ParseResult::Invalid(format!(
                "Say where {} is (e.g. 'sel {} c3')",
                card.code(),
                card.code()
            )),
        };
    }

    match parse_area(first) {
        Ok(area) => select_from_area(area, &args[1..]),
        Err(msg) => ParseResult::Invalid(msg),
    }
}

fn select_from_area(area: AreaId, rest: &[&str]) -> ParseResult {
    match area.kind {
        AreaKind::FreeCell => ParseResult::Command(PlayCommand::SelectFreeCell { cell: area.id }),
        AreaKind::SuitCell => {
            ParseResult::Invalid("Cards cannot be taken back from a suit cell".to_string())
        }
        AreaKind::Column => match rest.first().map(|p| p.parse::<usize>()) {
            Some(Ok(position)) if position >= 1 => {
                ParseResult::Command(PlayCommand::SelectColumn {
                    column: area.id,
                    position,
                })
            }
            Some(_) => ParseResult::Invalid("Card position must be a number from 1".to_string()),
            None => ParseResult::Invalid(format!(
                "Select from a column needs a card position (e.g. 'sel {} 1')",
                area
            )),
        },
    }
}
