//! # freecell-engine: Free Cell Rules Engine
//!
//! Tracks the 52 cards of a Free Cell game across free cells, suit cells
//! (foundations) and columns, decides whether a selection or move is legal,
//! and performs it when it is. Rendering and input handling live elsewhere;
//! they talk to this crate only through the queries and commands on
//! [`game::Game`].
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Color, Card)
//! - [`deck`] - Seeded 52-card deck with ChaCha20 shuffling
//! - [`rules`] - Column, foundation and move-capacity predicates
//! - [`area`] - Card areas and their per-kind legality checks
//! - [`game`] - Layout and the select/validate/commit/cancel protocol
//! - [`errors`] - Error types for construction and protocol misuse
//!
//! ## Quick Start
//!
//! ```rust
//! use freecell_engine::area::{AreaId, AreaKind};
//! use freecell_engine::game::Game;
//!
//! let mut game = Game::new(Some(42)).unwrap();
//!
//! // Lift the front card of column 5 and try to drop it on column 2
//! let front = game.contents(AreaId::column(5)).unwrap().len() - 1;
//! if game.select_from_column(5, front).unwrap() {
//!     let landed = game.move_selection_to(AreaKind::Column, 2).unwrap();
//!     println!("moved: {}", landed);
//! }
//! assert!(!game.is_holding());
//! assert_eq!(game.cards_in_play().len(), 52);
//! ```
//!
//! ## Deterministic Deals
//!
//! ```rust
//! use freecell_engine::game::Game;
//!
//! let a = Game::new(Some(7)).unwrap();
//! let b = Game::new(Some(7)).unwrap();
//! assert_eq!(a.snapshot(), b.snapshot());
//! ```

pub mod area;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod rules;
