//! Random input: plays legal but aimless moves.

use crate::board::Board;
use crate::core::{GameRng, Player, TokenKind};

use super::controller::{InputHandler, MoveChoice};

/// Input handler that picks token kinds and empty cells at random.
///
/// Deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct RandomInput {
    rng: GameRng,
    rounds: u32,
}

impl RandomInput {
    /// Single round only.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rounds(seed, 1)
    }

    /// Agree to play `rounds` rounds in total.
    #[must_use]
    pub fn with_rounds(seed: u64, rounds: u32) -> Self {
        Self {
            rng: GameRng::new(seed),
            rounds,
        }
    }
}

impl InputHandler for RandomInput {
    fn player_name(&mut self, seat: usize) -> String {
        format!("Bot {}", seat + 1)
    }

    fn choose_tokens(&mut self, _player: &Player, count: usize) -> Vec<TokenKind> {
        (0..count)
            .filter_map(|_| self.rng.choose(&TokenKind::ALL).copied())
            .collect()
    }

    fn choose_move(&mut self, player: &Player, board: &Board) -> Option<MoveChoice> {
        if !player.has_tokens() {
            return None;
        }
        let empty: Vec<(usize, usize)> = board.empty_cells().collect();
        let &(row, col) = self.rng.choose(&empty)?;
        let token_index = self.rng.gen_index(player.tokens().len());
        Some(MoveChoice::new(token_index, row, col))
    }

    fn play_again(&mut self) -> bool {
        if self.rounds > 1 {
            self.rounds -= 1;
            true
        } else {
            false
        }
    }
}
