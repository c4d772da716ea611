//! Core value types: ids, players, elements, cells, RNG, configuration, errors.
//!
//! Everything here is shared by the board, the rules and the session, and
//! depends on nothing else in the crate.

pub mod entity;
pub mod player;
pub mod element;
pub mod cell;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::TokenId;
pub use player::{Hand, Player, PlayerId, PlayerMap};
pub use element::{Element, Operand, Token, TokenKind};
pub use cell::Cell;
pub use rng::GameRng;
pub use config::GameConfig;
pub use error::{BoardView, GameError, Result};
