//! Board elements: operands, tokens, stubs and empty cells.
//!
//! Everything a cell can hold is an [`Element`]. The set is closed, so every
//! consumer (scoring, chain matching, rendering) matches on it exhaustively.
//!
//! ## Operands
//!
//! Seeded by the board at setup. Immutable: never moved, never replaced.
//!
//! ## Tokens
//!
//! Boolean operators owned by a player. A token stays owned by the same
//! player after it is placed; the board keeps the owner id so the XOR steal
//! rule can tell whose operator sits in a chain.
//!
//! ```
//! use thunder_truth::core::{Operand, TokenKind};
//!
//! assert!(TokenKind::Imp.evaluate(Operand::FALSE, Operand::TRUE));
//! assert!(!TokenKind::Imp.evaluate(Operand::TRUE, Operand::FALSE));
//! ```

use serde::{Deserialize, Serialize};

use super::entity::TokenId;
use super::error::{GameError, Result};
use super::player::PlayerId;

/// Immutable True/False value occupying a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operand(pub bool);

impl Operand {
    pub const TRUE: Operand = Operand(true);
    pub const FALSE: Operand = Operand(false);

    /// Wrap a boolean.
    #[must_use]
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    /// The boolean value.
    #[must_use]
    pub const fn value(self) -> bool {
        self.0
    }

    /// Short board symbol: `1` or `0`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        if self.0 {
            "1"
        } else {
            "0"
        }
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

/// Boolean operator kind carried by a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    And,
    Or,
    Xor,
    Imp,
}

impl TokenKind {
    /// All kinds, in the order players are offered them.
    pub const ALL: [TokenKind; 4] = [TokenKind::And, TokenKind::Or, TokenKind::Xor, TokenKind::Imp];

    /// Truth table, indexed as `[left][right]` with `false = 0`, `true = 1`.
    #[must_use]
    pub const fn truth_table(self) -> [[bool; 2]; 2] {
        match self {
            TokenKind::And => [[false, false], [false, true]],
            TokenKind::Or => [[false, true], [true, true]],
            TokenKind::Xor => [[false, true], [true, false]],
            TokenKind::Imp => [[true, true], [false, true]],
        }
    }

    /// Evaluate `left <op> right`.
    #[must_use]
    pub const fn evaluate(self, left: Operand, right: Operand) -> bool {
        self.truth_table()[left.0 as usize][right.0 as usize]
    }

    /// Short board symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            TokenKind::And => "^",
            TokenKind::Or => "v",
            TokenKind::Xor => "⊕",
            TokenKind::Imp => "⇒",
        }
    }

    /// Name used when players pick tokens.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Xor => "XOR",
            TokenKind::Imp => "IMP",
        }
    }

    /// Parse a kind from its name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A boolean-operator token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Unique ID within the session.
    pub id: TokenId,

    /// Operator kind.
    pub kind: TokenKind,

    /// Player the token was dealt to. Kept after placement.
    pub owner: PlayerId,
}

impl Token {
    /// Create a token.
    #[must_use]
    pub const fn new(id: TokenId, kind: TokenKind, owner: PlayerId) -> Self {
        Self { id, kind, owner }
    }

    /// Evaluate this token's operator over two operands.
    #[must_use]
    pub const fn evaluate(&self, left: Operand, right: Operand) -> bool {
        self.kind.evaluate(left, right)
    }

    /// Evaluate over two elements, which must both be operands.
    pub fn evaluate_elements(&self, left: &Element, right: &Element) -> Result<bool> {
        Ok(self.evaluate(left.operand()?, right.operand()?))
    }
}

/// Anything a cell can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// Border ring filler. Never part of play.
    Stub,
    /// Interior cell with nothing placed.
    Empty,
    /// Seeded True/False value.
    Operand(Operand),
    /// Placed operator.
    Token(Token),
}

impl Element {
    /// Immutable elements can never be placed by a player.
    #[must_use]
    pub const fn is_immutable(&self) -> bool {
        !matches!(self, Element::Token(_))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Element::Empty)
    }

    #[must_use]
    pub const fn is_stub(&self) -> bool {
        matches!(self, Element::Stub)
    }

    /// The operand held, if any.
    #[must_use]
    pub const fn as_operand(&self) -> Option<Operand> {
        match self {
            Element::Operand(op) => Some(*op),
            _ => None,
        }
    }

    /// The token held, if any.
    #[must_use]
    pub const fn as_token(&self) -> Option<&Token> {
        match self {
            Element::Token(token) => Some(token),
            _ => None,
        }
    }

    /// The operand held, or `InvalidOperand`.
    pub fn operand(&self) -> Result<Operand> {
        self.as_operand()
            .ok_or(GameError::InvalidOperand { found: self.symbol() })
    }

    /// The token held, or `InvalidToken`.
    pub fn token(&self) -> Result<&Token> {
        self.as_token()
            .ok_or(GameError::InvalidToken { found: self.symbol() })
    }

    /// Short board symbol used by displays.
    ///
    /// `#` stub, `.` empty, `1`/`0` operands, `^ v ⊕ ⇒` tokens.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Element::Stub => "#",
            Element::Empty => ".",
            Element::Operand(op) => op.symbol(),
            Element::Token(token) => token.kind.symbol(),
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl From<Operand> for Element {
    fn from(op: Operand) -> Self {
        Element::Operand(op)
    }
}

impl From<Token> for Element {
    fn from(token: Token) -> Self {
        Element::Token(token)
    }
}
