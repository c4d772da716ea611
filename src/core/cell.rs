//! A single board cell.
//!
//! A cell holds exactly one [`Element`]. Players may only put tokens into
//! empty cells; stubs, operands and tokens already on the board stay put.

use serde::{Deserialize, Serialize};

use super::element::{Element, Operand};
use super::error::{GameError, Result};

/// One square of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    value: Element,
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

impl Cell {
    /// An interior cell with nothing placed.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            value: Element::Empty,
        }
    }

    /// A border cell.
    #[must_use]
    pub const fn stub() -> Self {
        Self {
            value: Element::Stub,
        }
    }

    /// An interior cell holding a seeded operand.
    #[must_use]
    pub const fn operand(operand: Operand) -> Self {
        Self {
            value: Element::Operand(operand),
        }
    }

    #[must_use]
    pub const fn value(&self) -> &Element {
        &self.value
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Place a player element. Only tokens qualify, and only into an empty
    /// cell.
    ///
    /// `row`/`col` are only used to label the error.
    pub fn set_value(&mut self, value: Element, row: usize, col: usize) -> Result<()> {
        if value.is_immutable() {
            return Err(GameError::InvalidToken {
                found: value.symbol(),
            });
        }
        self.assign(value, row, col)
    }

    /// Seed an operand. Used while setting the board up.
    pub fn seed(&mut self, operand: Operand, row: usize, col: usize) -> Result<()> {
        self.assign(Element::Operand(operand), row, col)
    }

    /// Reset to empty. Stubs stay stubs.
    pub fn clear(&mut self) {
        if !self.value.is_stub() {
            self.value = Element::Empty;
        }
    }

    fn assign(&mut self, value: Element, row: usize, col: usize) -> Result<()> {
        if !self.is_empty() {
            return Err(GameError::CellOccupied { row, col });
        }
        self.value = value;
        Ok(())
    }
}
