//! Collaborator traits for the game driver.
//!
//! The driver never talks to a terminal directly. Output goes through a
//! `Display`, choices come from an `InputHandler`. Both are plain traits so a
//! scripted or random implementation can stand in for a human.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::core::{Player, TokenKind};

/// A move as chosen by a player: hand position and target cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveChoice {
    /// 0-based position in the player's hand.
    pub token_index: usize,
    pub row: usize,
    pub col: usize,
}

impl MoveChoice {
    #[must_use]
    pub const fn new(token_index: usize, row: usize, col: usize) -> Self {
        Self {
            token_index,
            row,
            col,
        }
    }
}

/// Output side of a game.
pub trait Display {
    fn show_board(&mut self, board: &Board);

    /// A message for the players: a turn prompt, a score line, an error.
    fn show_prompt(&mut self, message: &str);

    fn show_score(&mut self, players: &[Player]);

    /// `None` on a draw.
    fn show_winner(&mut self, winner: Option<&Player>);
}

/// Input side of a game.
pub trait InputHandler {
    /// Name for the player in seat `seat` (0-based).
    fn player_name(&mut self, seat: usize) -> String;

    /// `count` token kinds for `player`'s starting hand.
    fn choose_tokens(&mut self, player: &Player, count: usize) -> Vec<TokenKind>;

    /// Next move for `player`. `None` abandons the round.
    fn choose_move(&mut self, player: &Player, board: &Board) -> Option<MoveChoice>;

    /// Ask whether to play another round.
    fn play_again(&mut self) -> bool {
        false
    }
}

/// `Display` that writes everything to the `tracing` log.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceDisplay;

impl Display for TraceDisplay {
    fn show_board(&mut self, board: &Board) {
        debug!("\n{board}");
    }

    fn show_prompt(&mut self, message: &str) {
        info!("{message}");
    }

    fn show_score(&mut self, players: &[Player]) {
        for player in players {
            info!(player = %player.id(), name = %player.name, points = player.points(), "score");
        }
    }

    fn show_winner(&mut self, winner: Option<&Player>) {
        match winner {
            Some(player) => info!(name = %player.name, points = player.points(), "winner"),
            None => info!("draw"),
        }
    }
}
