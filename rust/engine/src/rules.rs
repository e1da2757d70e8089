//! Pure placement rules shared by the card areas and the game.

use crate::cards::{Card, Rank};

/// How many cards may move as one unit. Carrying `k` cards needs `k - 1`
/// empty free cells or columns, so capacity is the empty count plus one.
///
/// # Examples
///
/// ```
/// use freecell_engine::rules::move_capacity;
///
/// assert_eq!(move_capacity(4, 0), 5);
/// assert_eq!(move_capacity(0, 0), 1);
/// assert_eq!(move_capacity(4, 2), 7);
/// ```
pub fn move_capacity(empty_free_cells: usize, empty_columns: usize) -> usize {
    empty_free_cells + empty_columns + 1
}

/// True when `upper` may sit directly in front of `lower` in a column:
/// opposite color and exactly one rank lower.
pub fn stacks_on(lower: &Card, upper: &Card) -> bool {
    upper.color() != lower.color() && upper.rank.value() + 1 == lower.rank.value()
}

/// True when every adjacent pair of `run` alternates color and descends by one.
/// Empty and single-card runs are orderly.
pub fn is_orderly_run(run: &[Card]) -> bool {
    run.windows(2).all(|pair| stacks_on(&pair[0], &pair[1]))
}

/// True when `card` is the next card for a foundation whose top is `top`.
pub fn builds_on_foundation(top: Option<&Card>, card: &Card) -> bool {
    match top {
        None => card.rank == Rank::Ace,
        Some(top) => top.suit == card.suit && top.rank.value() + 1 == card.rank.value(),
    }
}
