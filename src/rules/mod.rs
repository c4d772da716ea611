//! Rules engine: scoring, steal chains, end-of-round decisions.
//!
//! `RulesEngine` is the seam the session talks to; `ThunderTruthRules` is
//! the implementation. Rules only read the board.

pub mod chain;
pub mod engine;
pub mod thunder;

pub use chain::{Axis, ChainMatch, StealOutcome};
pub use engine::{GameResult, RulesEngine};
pub use thunder::{ScoredPair, ThunderTruthRules, SCORING_PAIRS};
