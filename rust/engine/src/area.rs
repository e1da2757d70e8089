use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rules::{builds_on_foundation, is_orderly_run, stacks_on};

/// The three kinds of holding areas on the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaKind {
    /// Single-card parking space
    FreeCell,
    /// Foundation pile, built up by suit from Ace to King
    SuitCell,
    /// Tableau column
    Column,
}

impl AreaKind {
    /// How many areas of this kind the layout has.
    pub fn count(self) -> usize {
        match self {
            AreaKind::FreeCell | AreaKind::SuitCell => 4,
            AreaKind::Column => 8,
        }
    }

    /// One-letter prefix used by textual front ends (`f`, `s`, `c`).
    pub fn prefix(self) -> char {
        match self {
            AreaKind::FreeCell => 'f',
            AreaKind::SuitCell => 's',
            AreaKind::Column => 'c',
        }
    }
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AreaKind::FreeCell => "free cell",
            AreaKind::SuitCell => "suit cell",
            AreaKind::Column => "column",
        };
        f.write_str(s)
    }
}

impl FromStr for AreaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f" | "free" | "freecell" => Ok(AreaKind::FreeCell),
            "s" | "suit" | "suitcell" | "foundation" => Ok(AreaKind::SuitCell),
            "c" | "col" | "column" => Ok(AreaKind::Column),
            other => Err(format!("unknown area kind '{}'", other)),
        }
    }
}

/// Names one area of the fixed layout: its kind plus a 1-based id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AreaId {
    pub kind: AreaKind,
    pub id: usize,
}

impl AreaId {
    pub fn new(kind: AreaKind, id: usize) -> Self {
        Self { kind, id }
    }

    pub fn free_cell(id: usize) -> Self {
        Self::new(AreaKind::FreeCell, id)
    }

    pub fn suit_cell(id: usize) -> Self {
        Self::new(AreaKind::SuitCell, id)
    }

    pub fn column(id: usize) -> Self {
        Self::new(AreaKind::Column, id)
    }

    pub fn is_valid(&self) -> bool {
        (1..=self.kind.count()).contains(&self.id)
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.id)
    }
}

/// An ordered pile of cards. The last element is the front: the end a
/// player lifts from and drops onto.
///
/// All three kinds share storage and the plain container operations;
/// legality differs per kind and is decided by [`CardArea::can_select`]
/// and [`CardArea::can_accept`].
///
/// # Examples
///
/// ```
/// use freecell_engine::area::{AreaKind, CardArea};
/// use freecell_engine::cards::Card;
///
/// let mut column = CardArea::new(AreaKind::Column);
/// column.replace_contents(vec![Card::new(1, 10).unwrap()]);
///
/// // 9 of Diamonds, 8 of Spades onto 10 of Clubs
/// let run = [Card::new(3, 9).unwrap(), Card::new(2, 8).unwrap()];
/// assert!(column.can_accept(&run));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardArea {
    kind: AreaKind,
    cards: Vec<Card>,
}

impl CardArea {
    pub fn new(kind: AreaKind) -> Self {
        Self {
            kind,
            cards: Vec::new(),
        }
    }

    pub fn kind(&self) -> AreaKind {
        self.kind
    }

    pub fn contents(&self) -> &[Card] {
        &self.cards
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The accessible card, if any.
    pub fn front(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    /// Adds `card` to the front without checking any rule.
    pub fn append(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Overwrites the whole pile without checking any rule.
    pub fn replace_contents(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Appends `run` to the front, preserving its order.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, run: I) {
        self.cards.extend(run);
    }

    /// Detaches everything from `index` to the front.
    pub(crate) fn split_off(&mut self, index: usize) -> Vec<Card> {
        self.cards.split_off(index)
    }

    /// Whether lifting `card`, together with every card in front of it, is legal here.
    pub fn can_select(&self, card: &Card) -> bool {
        match self.kind {
            AreaKind::FreeCell => self.cards.first() == Some(card),
            AreaKind::Column => match self.position(card) {
                Some(idx) => is_orderly_run(&self.cards[idx..]),
                None => false,
            },
            // foundations are write-only
            AreaKind::SuitCell => false,
        }
    }

    /// Whether dropping `run` onto this area as one unit is legal.
    ///
    /// A column only compares its front card with the run's first card;
    /// the run's own ordering was checked when it was selected.
    pub fn can_accept(&self, run: &[Card]) -> bool {
        match self.kind {
            AreaKind::FreeCell => run.len() == 1 && self.cards.is_empty(),
            AreaKind::Column => match (self.front(), run.first()) {
                (_, None) => false,
                (None, Some(_)) => true,
                (Some(last), Some(first)) => stacks_on(last, first),
            },
            AreaKind::SuitCell => match run {
                [card] => builds_on_foundation(self.front(), card),
                _ => false,
            },
        }
    }
}
