//! Session configuration.
//!
//! Everything the board and rules need to know about a session is passed in
//! through `GameConfig` when the session starts. There is no global state.
//!
//! ```
//! use thunder_truth::core::GameConfig;
//!
//! let config = GameConfig::default().with_board_size(7).with_initial_tokens(6);
//! assert_eq!(config.board_size, 7);
//! assert_eq!(config.players_amount, 2);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Default side length of the square board.
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Default number of tokens dealt to each player.
pub const DEFAULT_INITIAL_TOKENS: usize = 4;

/// Default number of players.
pub const DEFAULT_PLAYERS_AMOUNT: usize = 2;

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length N of the interior grid (at least 1).
    pub board_size: usize,

    /// Tokens each player picks before the round starts.
    pub initial_tokens_per_player: usize,

    /// Number of seats (at least 2).
    pub players_amount: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            initial_tokens_per_player: DEFAULT_INITIAL_TOKENS,
            players_amount: DEFAULT_PLAYERS_AMOUNT,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        assert!(size >= 1, "Board size must be at least 1");
        self.board_size = size;
        self
    }

    /// Set the number of tokens dealt per player.
    #[must_use]
    pub fn with_initial_tokens(mut self, count: usize) -> Self {
        self.initial_tokens_per_player = count;
        self
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        assert!(count >= 2, "At least 2 players required");
        assert!(count <= 255, "At most 255 players supported");
        self.players_amount = count;
        self
    }

    /// Check the invariants the builders enforce, for configs that came
    /// from deserialization.
    pub fn validate(&self) -> Result<()> {
        if self.board_size < 1 {
            return Err(GameError::InvalidConfig {
                reason: "board size must be at least 1".to_string(),
            });
        }
        if !(2..=255).contains(&self.players_amount) {
            return Err(GameError::InvalidConfig {
                reason: format!("players amount must be 2-255, got {}", self.players_amount),
            });
        }
        Ok(())
    }
}
