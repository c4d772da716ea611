//! # thunder-truth
//!
//! Rules engine and board model for ThunderTruth, a two-player board game
//! played with boolean operators.
//!
//! The board is an `N×N` grid surrounded by a ring of stub cells. Half the
//! interior is seeded with random True/False operands in a checkerboard; the
//! other half is left empty. Players take turns dropping operator tokens
//! (AND, OR, XOR, IMPLIES) into the empty cells. A token scores one point for
//! every pair of neighboring operands it makes true, and an XOR can steal a
//! point from an opponent by closing a five-cell chain.
//!
//! ## Design Principles
//!
//! 1. **Board knows geometry, rules know scoring**: `Board` only enforces
//!    occupancy and bounds; `RulesEngine` reads the board and never mutates it.
//!
//! 2. **Ids over references**: tokens name their owner by `PlayerId`.
//!
//! 3. **Atomic moves**: a rejected move leaves the session exactly as it was.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: the grid is an `im::Vector`, so board
//!   snapshots clone in O(1). Moves are applied to a snapshot and committed
//!   only when every step succeeds.
//!
//! - **Deterministic Seeding**: the checkerboard comes from a ChaCha8 stream
//!   keyed by session seed and round number.
//!
//! ## Modules
//!
//! - `core`: ids, players, elements, cells, RNG, configuration, errors
//! - `board`: bordered grid with interior and buffered coordinates
//! - `rules`: `RulesEngine` trait, scoring pairs, XOR steal chains
//! - `game`: session orchestration, collaborator traits, game driver

pub mod core;
pub mod board;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    TokenId, PlayerId, PlayerMap, Player,
    Element, Operand, Token, TokenKind, Cell,
    GameRng, GameConfig,
    GameError, Result,
};

pub use crate::board::{Board, Direction, Neighbors};

pub use crate::rules::{GameResult, RulesEngine, StealOutcome, ThunderTruthRules};

pub use crate::game::{Game, InputHandler, MoveChoice, Phase, RandomInput, Session};
