//! Playing a game: the round orchestrator and the pieces that drive it.
//!
//! - [`Session`]: board, players and rules for one table, with phase checks
//!   and atomic moves
//! - [`Game`]: prompts players through a [`Display`] and an [`InputHandler`]
//!   until the round is decided
//! - [`RandomInput`]: an input handler that plays random legal moves

pub mod controller;
pub mod driver;
pub mod random;
pub mod session;

pub use controller::{Display, InputHandler, MoveChoice, TraceDisplay};
pub use driver::{Game, DEFAULT_MAX_ATTEMPTS};
pub use random::RandomInput;
pub use session::{apply_steal, MoveOutcome, MoveRecord, Phase, Session};
