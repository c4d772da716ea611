//! Token identification.
//!
//! Every token handed out during a session has a unique `TokenId`.
//!
//! ## ID Layout
//!
//! IDs are allocated sequentially by the session, starting at 0, and are
//! never reused within a session (not even across rounds). A token keeps its
//! ID when it moves from a player's hand onto the board.
//!
//! ```
//! use thunder_truth::core::TokenId;
//!
//! let first = TokenId::new(0);
//! assert_eq!(first.next(), TokenId::new(1));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u32);

impl TokenId {
    /// Create a token ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The ID allocated right after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}
