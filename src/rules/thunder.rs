//! ThunderTruth rules.

use smallvec::SmallVec;
use tracing::debug;

use super::chain::{find_steal, StealOutcome};
use super::engine::RulesEngine;
use crate::board::{Board, Direction};
use crate::core::{Operand, Player, Result};

/// Neighbor pairs scored around a placed token, in evaluation order.
///
/// The first direction supplies the left operand.
pub const SCORING_PAIRS: [(Direction, Direction); 6] = [
    (Direction::Up, Direction::Left),
    (Direction::Up, Direction::Right),
    (Direction::Up, Direction::Down),
    (Direction::Left, Direction::Down),
    (Direction::Left, Direction::Right),
    (Direction::Right, Direction::Down),
];

/// One operand-token-operand triple formed around a placed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredPair {
    pub first: Direction,
    pub second: Direction,
    pub left: Operand,
    pub right: Operand,
    pub result: bool,
}

/// The ThunderTruth scoring rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThunderTruthRules;

impl ThunderTruthRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Every qualifying triple around the token at `(row, col)`.
    ///
    /// A pair qualifies only when both neighbors hold operands. Stubs,
    /// empty cells and tokens never do.
    pub fn scored_pairs(
        &self,
        board: &Board,
        row: usize,
        col: usize,
    ) -> Result<SmallVec<[ScoredPair; 6]>> {
        let token = *board.element(row, col)?.token()?;
        let neighbors = board.neighbors(row, col)?;

        let pairs = SCORING_PAIRS
            .iter()
            .filter_map(|&(first, second)| {
                let left = neighbors.get(first).as_operand()?;
                let right = neighbors.get(second).as_operand()?;
                let result = token.evaluate(left, right);
                debug!(
                    "{first} {} {} {} {second} -> {result}",
                    left.symbol(),
                    token.kind.symbol(),
                    right.symbol()
                );
                Some(ScoredPair {
                    first,
                    second,
                    left,
                    right,
                    result,
                })
            })
            .collect();
        Ok(pairs)
    }
}

impl RulesEngine for ThunderTruthRules {
    fn count_points(&self, board: &Board, row: usize, col: usize) -> Result<u32> {
        let pairs = self.scored_pairs(board, row, col)?;
        Ok(pairs.iter().filter(|p| p.result).count() as u32)
    }

    fn exclude_and_steal_points(
        &self,
        board: &Board,
        row: usize,
        col: usize,
    ) -> Option<StealOutcome> {
        find_steal(board, row, col)
    }

    fn check_winner<'a>(&self, board: &Board, players: &'a [Player]) -> Option<&'a Player> {
        if !self.is_board_full(board) {
            return None;
        }
        self.leader(players)
    }
}
