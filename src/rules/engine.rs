//! Rules engine trait.
//!
//! Rules read a board and the players; they never mutate either. The
//! session applies whatever they report.

use tracing::debug;

use super::chain::StealOutcome;
use crate::board::Board;
use crate::core::player::{Player, PlayerId};
use crate::core::{Result, Token};

/// Result of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Top scores tied.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `count_points`: the cell at `(row, col)` must hold the token just placed
/// - `exclude_and_steal_points`: return `None` when nothing fires
/// - `check_winner`: return `None` for a draw or while the board has room
pub trait RulesEngine {
    /// Points scored by the token at `(row, col)`.
    fn count_points(&self, board: &Board, row: usize, col: usize) -> Result<u32>;

    /// Check the XOR steal chain through `(row, col)`.
    fn exclude_and_steal_points(&self, board: &Board, row: usize, col: usize)
        -> Option<StealOutcome>;

    /// Winner of a finished board.
    fn check_winner<'a>(&self, board: &Board, players: &'a [Player]) -> Option<&'a Player>;

    // === Convenience Methods ===

    /// Does `token` belong to `player`?
    fn is_token_owned_by(&self, player: &Player, token: &Token) -> bool {
        let owned = token.owner == player.id();
        debug!(player = %player.id(), token = %token.id, owned, "ownership check");
        owned
    }

    /// Is every interior cell occupied?
    fn is_board_full(&self, board: &Board) -> bool {
        let full = board.cells().all(|(_, _, cell)| !cell.is_empty());
        if full {
            debug!("board is full");
        }
        full
    }

    /// Does any player still hold a token?
    fn are_tokens_left(&self, players: &[Player]) -> bool {
        players.iter().any(Player::has_tokens)
    }

    /// Highest scorer regardless of board state; `None` on a tie at the top.
    fn leader<'a>(&self, players: &'a [Player]) -> Option<&'a Player> {
        assert!(players.len() >= 2, "Ranking needs at least 2 players");

        let mut ranked: Vec<&Player> = players.iter().collect();
        ranked.sort_by(|a, b| b.points().cmp(&a.points()));
        if ranked[0].points() == ranked[1].points() {
            None
        } else {
            Some(ranked[0])
        }
    }

    /// Outcome of the round, once it is over.
    ///
    /// A full board is decided by `check_winner`. A round that ended because
    /// the hands ran out is decided by `leader`. Returns `None` while play
    /// continues.
    fn outcome(&self, board: &Board, players: &[Player]) -> Option<GameResult> {
        let winner = if self.is_board_full(board) {
            self.check_winner(board, players)
        } else if !self.are_tokens_left(players) {
            self.leader(players)
        } else {
            return None;
        };

        Some(match winner {
            Some(player) => GameResult::Winner(player.id()),
            None => GameResult::Draw,
        })
    }
}
