use serde::Serialize;
use tracing::{debug, info, trace};

use crate::area::{AreaId, AreaKind, CardArea};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{GameError, ProtocolViolation};
use crate::rules::move_capacity;

pub const FREE_CELLS: usize = 4;
pub const SUIT_CELLS: usize = 4;
pub const COLUMNS: usize = 8;

/// Cards dealt into each column, left to right.
pub const DEAL_COUNTS: [usize; COLUMNS] = [7, 7, 7, 7, 6, 6, 6, 6];

/// Cards currently lifted off the table, and the area they came from.
/// The run is contiguous and was front-aligned in its origin, so appending
/// it back to the origin restores that area exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    cards: Vec<Card>,
    origin: AreaId,
}

impl Selection {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn origin(&self) -> AreaId {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Read-only view over every area, grouped by kind. Index `i` of each slice
/// holds the area with id `i + 1`.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    pub free_cells: &'a [CardArea],
    pub suit_cells: &'a [CardArea],
    pub columns: &'a [CardArea],
}

impl<'a> Layout<'a> {
    pub fn get(&self, id: AreaId) -> Option<&'a CardArea> {
        let areas = match id.kind {
            AreaKind::FreeCell => self.free_cells,
            AreaKind::SuitCell => self.suit_cells,
            AreaKind::Column => self.columns,
        };
        id.id.checked_sub(1).and_then(|i| areas.get(i))
    }

    /// Every area with its id: free cells, then suit cells, then columns.
    pub fn iter(self) -> impl Iterator<Item = (AreaId, &'a CardArea)> + 'a {
        let free = self
            .free_cells
            .iter()
            .enumerate()
            .map(|(i, a)| (AreaId::free_cell(i + 1), a));
        let suit = self
            .suit_cells
            .iter()
            .enumerate()
            .map(|(i, a)| (AreaId::suit_cell(i + 1), a));
        let cols = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, a)| (AreaId::column(i + 1), a));
        free.chain(suit).chain(cols)
    }
}

/// Owned, serializable picture of a game position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub seed: u64,
    pub free_cells: Vec<Vec<Card>>,
    pub suit_cells: Vec<Vec<Card>>,
    pub columns: Vec<Vec<Card>>,
    pub selection: Vec<Card>,
    pub origin: Option<AreaId>,
    pub moves_available: usize,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A single game of Free Cell: the table layout plus the one selection that
/// may be in flight.
///
/// Every transfer between areas goes through the select → validate →
/// commit/cancel protocol below. Illegal selections and moves come back as
/// `Ok(false)` and leave the game untouched; calling a step out of order is a
/// [`GameError::ProtocolViolation`].
///
/// # Examples
///
/// ```
/// use freecell_engine::area::AreaId;
/// use freecell_engine::game::Game;
///
/// let mut game = Game::new(Some(7)).unwrap();
/// assert_eq!(game.moves_available(), 5);
///
/// // Lift the front card of column 1 and park it in free cell 1
/// assert!(game.select_from_column(1, 6).unwrap());
/// assert!(game.validate_move(AreaId::free_cell(1)).unwrap());
/// game.commit_move(AreaId::free_cell(1)).unwrap();
///
/// assert_eq!(game.contents(AreaId::free_cell(1)).unwrap().len(), 1);
/// assert_eq!(game.contents(AreaId::column(1)).unwrap().len(), 6);
/// assert!(game.selection().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Seed the current layout was dealt from
    seed: u64,
    free_cells: [CardArea; FREE_CELLS],
    suit_cells: [CardArea; SUIT_CELLS],
    columns: [CardArea; COLUMNS],
    /// `None` while idle
    selection: Option<Selection>,
}

impl Game {
    /// Deals a new game from a shuffled deck. Without a seed one is drawn at random.
    pub fn new(seed: Option<u64>) -> Result<Self, GameError> {
        let seed = seed.unwrap_or_else(rand::random);
        let mut game = Self::empty_with_seed(seed);
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        game.deal(&mut deck)?;
        info!(seed, "dealt new layout");
        Ok(game)
    }

    /// A table with every area empty, for arranging positions by hand.
    pub fn empty() -> Self {
        Self::empty_with_seed(0)
    }

    fn empty_with_seed(seed: u64) -> Self {
        Self {
            seed,
            free_cells: std::array::from_fn(|_| CardArea::new(AreaKind::FreeCell)),
            suit_cells: std::array::from_fn(|_| CardArea::new(AreaKind::SuitCell)),
            columns: std::array::from_fn(|_| CardArea::new(AreaKind::Column)),
            selection: None,
        }
    }

    // Round-robin, left to right, until every column reaches its count.
    fn deal(&mut self, deck: &mut Deck) -> Result<(), GameError> {
        let rounds = DEAL_COUNTS.iter().copied().max().unwrap_or(0);
        for _ in 0..rounds {
            for (column, &target) in self.columns.iter_mut().zip(DEAL_COUNTS.iter()) {
                if column.count() < target {
                    column.append(deck.draw()?);
                }
            }
        }
        Ok(())
    }

    /// Throws away the current position, held cards included, and deals again.
    pub fn redeal(&mut self, seed: Option<u64>) -> Result<(), GameError> {
        *self = Self::new(seed)?;
        Ok(())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn layout(&self) -> Layout<'_> {
        Layout {
            free_cells: &self.free_cells,
            suit_cells: &self.suit_cells,
            columns: &self.columns,
        }
    }

    fn areas(&self, kind: AreaKind) -> &[CardArea] {
        match kind {
            AreaKind::FreeCell => &self.free_cells,
            AreaKind::SuitCell => &self.suit_cells,
            AreaKind::Column => &self.columns,
        }
    }

    fn areas_mut(&mut self, kind: AreaKind) -> &mut [CardArea] {
        match kind {
            AreaKind::FreeCell => &mut self.free_cells,
            AreaKind::SuitCell => &mut self.suit_cells,
            AreaKind::Column => &mut self.columns,
        }
    }

    pub fn area(&self, id: AreaId) -> Result<&CardArea, GameError> {
        id.id
            .checked_sub(1)
            .and_then(|i| self.areas(id.kind).get(i))
            .ok_or(GameError::UnknownArea {
                kind: id.kind,
                id: id.id,
            })
    }

    /// Direct access for arranging a position. Bypasses every rule.
    pub fn area_mut(&mut self, id: AreaId) -> Result<&mut CardArea, GameError> {
        id.id
            .checked_sub(1)
            .and_then(|i| self.areas_mut(id.kind).get_mut(i))
            .ok_or(GameError::UnknownArea {
                kind: id.kind,
                id: id.id,
            })
    }

    pub fn contents(&self, id: AreaId) -> Result<&[Card], GameError> {
        self.area(id).map(CardArea::contents)
    }

    pub fn held(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// The lifted cards, rear first. Empty while idle.
    pub fn selection(&self) -> &[Card] {
        self.selection.as_ref().map_or(&[], |s| s.cards.as_slice())
    }

    pub fn origin_area(&self) -> Option<AreaId> {
        self.selection.as_ref().map(|s| s.origin)
    }

    pub fn is_holding(&self) -> bool {
        self.selection.is_some()
    }

    fn ensure_idle(&self) -> Result<(), GameError> {
        if self.selection.is_some() {
            return Err(ProtocolViolation::AlreadyHolding.into());
        }
        Ok(())
    }

    fn ensure_holding(&self) -> Result<&Selection, GameError> {
        self.selection
            .as_ref()
            .ok_or(GameError::ProtocolViolation(ProtocolViolation::NothingHeld))
    }

    /// Lifts `card` and every card in front of it out of `area`.
    ///
    /// Returns `Ok(false)` without touching anything when the lift is illegal.
    /// Suit cells are never a legal source.
    pub fn select(&mut self, card: &Card, area: AreaId) -> Result<bool, GameError> {
        self.ensure_idle()?;
        let source = self.area_mut(area)?;
        if area.kind == AreaKind::SuitCell || !source.can_select(card) {
            trace!(%card, area = %area, "selection rejected");
            return Ok(false);
        }
        let Some(index) = source.position(card) else {
            return Ok(false);
        };
        let cards = source.split_off(index);
        debug!(%card, area = %area, len = cards.len(), "selected run");
        self.selection = Some(Selection {
            cards,
            origin: area,
        });
        Ok(true)
    }

    /// Selects the card at `card_index` (0 = rearmost) of a column.
    pub fn select_from_column(
        &mut self,
        column_id: usize,
        card_index: usize,
    ) -> Result<bool, GameError> {
        self.ensure_idle()?;
        let id = AreaId::column(column_id);
        let Some(card) = self.area(id)?.contents().get(card_index).copied() else {
            return Ok(false);
        };
        self.select(&card, id)
    }

    /// Selects whatever sits in a free cell.
    pub fn select_from_free_cell(&mut self, cell_id: usize) -> Result<bool, GameError> {
        self.ensure_idle()?;
        let id = AreaId::free_cell(cell_id);
        let Some(card) = self.area(id)?.front().copied() else {
            return Ok(false);
        };
        self.select(&card, id)
    }

    /// Largest run that may move at once: empty free cells plus empty columns, plus one.
    pub fn moves_available(&self) -> usize {
        let empty_free = self.free_cells.iter().filter(|a| a.is_empty()).count();
        let empty_cols = self.columns.iter().filter(|a| a.is_empty()).count();
        move_capacity(empty_free, empty_cols)
    }

    /// Whether the held run may be dropped on `destination`. Never mutates.
    pub fn validate_move(&self, destination: AreaId) -> Result<bool, GameError> {
        let selection = self.ensure_holding()?;
        let area = self.area(destination)?;
        if selection.len() > self.moves_available() {
            trace!(
                len = selection.len(),
                capacity = self.moves_available(),
                "move exceeds capacity"
            );
            return Ok(false);
        }
        Ok(area.can_accept(&selection.cards))
    }

    /// Drops the held run on `destination` and returns to idle.
    ///
    /// No rule is checked here; callers run [`Game::validate_move`] first.
    pub fn commit_move(&mut self, destination: AreaId) -> Result<(), GameError> {
        self.ensure_holding()?;
        self.area(destination)?;
        let Some(selection) = self.selection.take() else {
            return Err(ProtocolViolation::NothingHeld.into());
        };
        debug!(
            from = %selection.origin,
            to = %destination,
            len = selection.len(),
            "committed move"
        );
        self.area_mut(destination)?.extend(selection.cards);
        Ok(())
    }

    /// Puts the held run back on its origin and returns to idle.
    pub fn cancel_move(&mut self) -> Result<(), GameError> {
        let Some(selection) = self.selection.take() else {
            return Err(ProtocolViolation::NothingHeld.into());
        };
        debug!(origin = %selection.origin, len = selection.len(), "cancelled move");
        self.area_mut(selection.origin)?.extend(selection.cards);
        Ok(())
    }

    /// Validates, then commits or reverts, in one call. Returns whether the
    /// held run landed on the requested area. An unknown area reverts the
    /// selection before reporting the error.
    pub fn move_selection_to(&mut self, kind: AreaKind, id: usize) -> Result<bool, GameError> {
        self.ensure_holding()?;
        let destination = AreaId::new(kind, id);
        if !destination.is_valid() {
            self.cancel_move()?;
            return Err(GameError::UnknownArea { kind, id });
        }
        if self.validate_move(destination)? {
            self.commit_move(destination)?;
            Ok(true)
        } else {
            self.cancel_move()?;
            Ok(false)
        }
    }

    /// Every card on the table plus any held cards.
    pub fn cards_in_play(&self) -> Vec<Card> {
        let layout = self.layout();
        layout
            .iter()
            .flat_map(|(_, area)| area.contents().iter().copied())
            .chain(self.selection().iter().copied())
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        let collect = |areas: &[CardArea]| -> Vec<Vec<Card>> {
            areas.iter().map(|a| a.contents().to_vec()).collect()
        };
        Snapshot {
            seed: self.seed,
            free_cells: collect(&self.free_cells),
            suit_cells: collect(&self.suit_cells),
            columns: collect(&self.columns),
            selection: self.selection().to_vec(),
            origin: self.origin_area(),
            moves_available: self.moves_available(),
        }
    }
}
