use thiserror::Error;

use crate::area::AreaKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card: suit {suit} (expected 1-4), rank {rank} (expected 1-13)")]
    InvalidCard { suit: u8, rank: u8 },
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Protocol violation: {0}")]
    ProtocolViolation(ProtocolViolation),
    #[error("No {kind} with id {id}")]
    UnknownArea { kind: AreaKind, id: usize },
}

/// Which part of the select/commit/cancel contract a caller broke.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolViolation {
    #[error("a selection is already being held")]
    AlreadyHolding,
    #[error("no selection is being held")]
    NothingHeld,
}

impl From<ProtocolViolation> for GameError {
    fn from(v: ProtocolViolation) -> Self {
        GameError::ProtocolViolation(v)
    }
}
