use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Represents one of the four suits in a standard 52-card deck.
/// Discriminants follow the numeric encoding used by [`Card::new`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣), encoded as 1
    Clubs = 1,
    /// Spades suit (♠), encoded as 2
    Spades,
    /// Diamonds suit (♦), encoded as 3
    Diamonds,
    /// Hearts suit (♥), encoded as 4
    Hearts,
}

/// Card color derived from the suit. Column runs must alternate it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

impl Suit {
    pub fn from_u8(v: u8) -> Option<Suit> {
        match v {
            1 => Some(Suit::Clubs),
            2 => Some(Suit::Spades),
            3 => Some(Suit::Diamonds),
            4 => Some(Suit::Hearts),
            _ => None,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
        }
    }

    /// Single-letter code used by textual front ends.
    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
        }
    }

    fn from_letter(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            _ => None,
        }
    }
}

/// Represents the rank (face value) of a playing card from Ace (1) through King (13).
/// In Free Cell the Ace is always low: it opens a foundation pile.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            1 => Some(Rank::Ace),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Ace/Jack/Queen/King aliases, the number otherwise.
    pub fn name(self) -> String {
        match self {
            Rank::Ace => "Ace".to_string(),
            Rank::Jack => "Jack".to_string(),
            Rank::Queen => "Queen".to_string(),
            Rank::King => "King".to_string(),
            other => other.value().to_string(),
        }
    }

    fn code(self) -> String {
        match self {
            Rank::Ace => "A".to_string(),
            Rank::Jack => "J".to_string(),
            Rank::Queen => "Q".to_string(),
            Rank::King => "K".to_string(),
            other => other.value().to_string(),
        }
    }

    fn from_code(s: &str) -> Option<Rank> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Some(Rank::Ace),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            n => all_ranks().into_iter().find(|r| r.code() == n),
        }
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are plain values; equality is by (suit, rank), so each of the 52
/// distinct cards is its own identity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Spades, Diamonds, or Hearts)
    pub suit: Suit,
    /// The rank of the card (Ace through King)
    pub rank: Rank,
}

impl Card {
    /// Builds a card from its numeric encoding: suit in 1..=4, rank in 1..=13.
    ///
    /// # Examples
    ///
    /// ```
    /// use freecell_engine::cards::{Card, Color, Rank, Suit};
    /// use freecell_engine::errors::GameError;
    ///
    /// let card = Card::new(3, 12).unwrap();
    /// assert_eq!(card, Card { suit: Suit::Diamonds, rank: Rank::Queen });
    /// assert_eq!(card.color(), Color::Red);
    ///
    /// assert_eq!(Card::new(5, 1), Err(GameError::InvalidCard { suit: 5, rank: 1 }));
    /// ```
    pub fn new(suit: u8, rank: u8) -> Result<Card, GameError> {
        match (Suit::from_u8(suit), Rank::from_u8(rank)) {
            (Some(suit), Some(rank)) => Ok(Card { suit, rank }),
            _ => Err(GameError::InvalidCard { suit, rank }),
        }
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    /// Display name in the form "Queen of Diamonds".
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }

    /// Compact code such as `AC`, `10H` or `QS`.
    pub fn code(&self) -> String {
        format!("{}{}", self.rank.code(), self.suit.letter())
    }

    /// Parses a code produced by [`Card::code`]; case-insensitive.
    pub fn parse_code(code: &str) -> Option<Card> {
        let code = code.trim();
        let suit_char = code.chars().last()?;
        let suit = Suit::from_letter(suit_char)?;
        let rank = Rank::from_code(&code[..code.len() - suit_char.len_utf8()])?;
        Some(Card { suit, rank })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// All 52 cards in suit-major, rank-minor order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
