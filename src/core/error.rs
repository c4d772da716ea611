use thiserror::Error;

use super::entity::TokenId;
use super::player::PlayerId;

/// Which coordinate view a lookup was made against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardView {
    /// Interior cells only: `1..=size`.
    Interior,
    /// Interior plus the stub ring: `0..=size + 1`.
    Buffered,
}

impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardView::Interior => f.write_str("interior"),
            BoardView::Buffered => f.write_str("buffered"),
        }
    }
}

/// Errors raised by the board, the rules and the session.
///
/// None of these are fatal: the orchestrator rejects the move and asks the
/// same player again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("cell ({row}, {col}) is outside the {view} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        view: BoardView,
    },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("expected a token, found `{found}`")]
    InvalidToken { found: &'static str },

    #[error("expected an operand, found `{found}`")]
    InvalidOperand { found: &'static str },

    #[error("{token} does not belong to {player}")]
    Ownership { player: PlayerId, token: TokenId },

    #[error("token index {index} out of range (hand holds {hand_size})")]
    TokenIndex { index: usize, hand_size: usize },

    #[error("operation not allowed while the session is {phase}")]
    WrongPhase { phase: &'static str },

    #[error("no room for another player (limit {limit})")]
    PlayerLimit { limit: usize },

    #[error("expected {expected} tokens, got {got}")]
    TokenCount { expected: usize, got: usize },

    #[error("it is not {player}'s turn")]
    NotYourTurn { player: PlayerId },

    #[error("{player} is not seated in this session")]
    UnknownPlayer { player: PlayerId },

    #[error("expected {expected} players, {got} joined")]
    MissingPlayers { expected: usize, got: usize },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}

/// Convenience Result type for board and rules operations.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::OutOfBounds {
            row: 0,
            col: 3,
            view: BoardView::Interior,
        };
        assert_eq!(err.to_string(), "cell (0, 3) is outside the interior board");

        let err = GameError::Ownership {
            player: PlayerId::new(1),
            token: TokenId(4),
        };
        assert_eq!(err.to_string(), "Token(4) does not belong to Player 1");
    }
}
