//! Card and table formatters for terminal display.
//!
//! Pure functions turning engine state into text. Suits render as Unicode
//! glyphs (♣ ♠ ♦ ♥) or, with `symbols` off, as the letters C S D H used by
//! [`Card::code`] so output can be pasted back in as input.
//!
//! ## Example
//!
//! ```rust
//! use freecell_engine::cards::Card;
//! use freecell_cli::formatters::{format_card, format_run};
//!
//! let ten_hearts = Card::new(4, 10).unwrap();
//! assert_eq!(format_card(&ten_hearts, true), "10♥");
//! assert_eq!(format_card(&ten_hearts, false), "10H");
//! assert_eq!(format_run(&[ten_hearts], false), "[10H]");
//! ```

use freecell_engine::area::{AreaId, CardArea};
use freecell_engine::cards::{Card, Suit};
use freecell_engine::game::Game;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit, symbols: bool) -> String {
    if symbols {
        match suit {
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
        }
        .to_string()
    } else {
        suit.letter().to_string()
    }
}

pub fn format_card(card: &Card, symbols: bool) -> String {
    if symbols {
        let code = card.code();
        let rank = &code[..code.len() - 1];
        format!("{}{}", rank, format_suit(card.suit, true))
    } else {
        card.code()
    }
}

/// Cards rear to front in bracket notation, e.g. `[KH QS]`; `[]` when empty.
pub fn format_run(cards: &[Card], symbols: bool) -> String {
    let formatted: Vec<String> = cards.iter().map(|c| format_card(c, symbols)).collect();
    format!("[{}]", formatted.join(" "))
}

/// A single-slot view: the front card, or `--` when empty.
fn format_slot(area: &CardArea, symbols: bool) -> String {
    match area.front() {
        Some(card) => format_card(card, symbols),
        None => "--".to_string(),
    }
}

fn format_slots(prefix: char, areas: &[CardArea], symbols: bool) -> String {
    areas
        .iter()
        .enumerate()
        .map(|(i, area)| format!("{}{}:{}", prefix, i + 1, format_slot(area, symbols)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Multi-line picture of the table: free cells, suit cells (top card only),
/// every column, and the held run if any.
pub fn format_layout(game: &Game, symbols: bool, show_moves: bool) -> String {
    let layout = game.layout();
    let mut lines = Vec::new();
    lines.push(format!("Free:  {}", format_slots('f', layout.free_cells, symbols)));
    lines.push(format!("Suits: {}", format_slots('s', layout.suit_cells, symbols)));
    for (i, column) in layout.columns.iter().enumerate() {
        lines.push(format!(
            "{}: {}",
            AreaId::column(i + 1),
            format_run(column.contents(), symbols)
        ));
    }
    if let Some(held) = game.held() {
        lines.push(format!(
            "Held: {} (from {})",
            format_run(held.cards(), symbols),
            held.origin()
        ));
    }
    if show_moves {
        lines.push(format!("Moves available: {}", game.moves_available()));
    }
    lines.join("\n")
}
