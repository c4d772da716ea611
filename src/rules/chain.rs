//! XOR steal chains.
//!
//! A chain is five consecutive interior cells on one axis holding
//! `Operand, Token, Operand, XOR, Operand`, where the XOR is the token just
//! placed. The chain sits at offsets `-3..=+1` from the placed cell. When the
//! two tokens belong to different players and
//! `(op1 <token1> op2) XOR op3` is true, the XOR's owner takes a point from
//! the first token's owner.
//!
//! The horizontal chain is tried before the vertical one; the first chain
//! that fires wins.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::board::Board;
use crate::core::{Element, Operand, PlayerId, Token, TokenKind};

/// Position of each chain cell relative to the placed token.
pub const CHAIN_OFFSETS: [isize; 5] = [-3, -2, -1, 0, 1];

/// Axis a chain runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Scan order.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    const fn step(self, offset: isize) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, offset),
            Axis::Vertical => (offset, 0),
        }
    }
}

/// Players affected by a fired chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StealOutcome {
    /// Owner of the first token. Loses a point.
    pub opponent: PlayerId,
    /// Owner of the XOR just placed. Gains a point.
    pub mover: PlayerId,
}

/// Elements of a chain that matched the type pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainMatch {
    pub axis: Axis,
    pub op1: Operand,
    pub token1: Token,
    pub op2: Operand,
    pub token2: Token,
    pub op3: Operand,
}

impl ChainMatch {
    /// Match five elements against `Operand, Token, Operand, XOR, Operand`.
    #[must_use]
    pub fn from_elements(axis: Axis, elements: &[Element; 5]) -> Option<Self> {
        match elements {
            [Element::Operand(op1), Element::Token(token1), Element::Operand(op2), Element::Token(token2), Element::Operand(op3)]
                if token2.kind == TokenKind::Xor =>
            {
                Some(Self {
                    axis,
                    op1: *op1,
                    token1: *token1,
                    op2: *op2,
                    token2: *token2,
                    op3: *op3,
                })
            }
            _ => None,
        }
    }

    /// Value of `(op1 <token1> op2) <token2> op3`.
    #[must_use]
    pub fn evaluate(&self) -> bool {
        let mid = Operand(self.token1.evaluate(self.op1, self.op2));
        self.token2.evaluate(mid, self.op3)
    }

    /// Do the two tokens belong to different players?
    #[must_use]
    pub fn is_contested(&self) -> bool {
        self.token1.owner != self.token2.owner
    }
}

impl std::fmt::Display for ChainMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.op1.symbol(),
            self.token1.kind.symbol(),
            self.op2.symbol(),
            self.token2.kind.symbol(),
            self.op3.symbol()
        )
    }
}

/// Interior coordinates of the chain through `(row, col)` on `axis`.
///
/// `None` if any of the five cells falls outside the interior.
#[must_use]
pub fn chain_coords(board: &Board, row: usize, col: usize, axis: Axis) -> Option<[(usize, usize); 5]> {
    let coords: SmallVec<[(usize, usize); 5]> = CHAIN_OFFSETS
        .iter()
        .map(|&offset| {
            let (dr, dc) = axis.step(offset);
            board.offset(row, col, dr, dc)
        })
        .collect::<Option<_>>()?;
    coords.into_inner().ok()
}

/// Type-matched chain through `(row, col)` on `axis`, if any.
#[must_use]
pub fn match_chain(board: &Board, row: usize, col: usize, axis: Axis) -> Option<ChainMatch> {
    let Some(coords) = chain_coords(board, row, col, axis) else {
        debug!(row, col, ?axis, "chain leaves the board");
        return None;
    };

    let mut elements = [Element::Empty; 5];
    for (slot, &(r, c)) in elements.iter_mut().zip(coords.iter()) {
        *slot = *board.cell_buffered(r, c).ok()?.value();
    }

    let found = ChainMatch::from_elements(axis, &elements);
    if found.is_none() {
        debug!(row, col, ?axis, ?elements, "chain pattern does not match");
    }
    found
}

/// Scan both axes through `(row, col)` and report the first chain that fires.
#[must_use]
pub fn find_steal(board: &Board, row: usize, col: usize) -> Option<StealOutcome> {
    for axis in Axis::ALL {
        let Some(chain) = match_chain(board, row, col, axis) else {
            continue;
        };

        if !chain.is_contested() {
            debug!(%chain, owner = %chain.token1.owner, "both chain tokens share an owner");
            continue;
        }

        let result = chain.evaluate();
        debug!(%chain, ?axis, result, "evaluated XOR chain");
        if result {
            return Some(StealOutcome {
                opponent: chain.token1.owner,
                mover: chain.token2.owner,
            });
        }
    }
    None
}
