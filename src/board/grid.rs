//! The bordered board.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::neighbors::{Direction, Neighbors};
use crate::core::{BoardView, Cell, Element, GameError, GameRng, Operand, Result, Token};

/// Square grid of `size × size` playable cells surrounded by a ring of stubs.
///
/// Coordinates are 1-based: interior cells are `1..=size` on both axes, and
/// index `0` / `size + 1` is the stub ring. Cells live in a persistent vector
/// so cloning a board for a snapshot is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// Create an unseeded board: stub ring, empty interior.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "Board size must be at least 1");

        let buffered = size + 2;
        let cells = (0..buffered * buffered)
            .map(|i| {
                let (row, col) = (i / buffered, i % buffered);
                if Self::on_ring(size, row, col) {
                    Cell::stub()
                } else {
                    Cell::empty()
                }
            })
            .collect();

        debug!(size, buffered, "initialised board");
        Self { size, cells }
    }

    /// Side length N of the interior.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Side length N + 2 including the stub ring.
    #[must_use]
    pub const fn size_buffered(&self) -> usize {
        self.size + 2
    }

    /// Interior cell. Fails with `OutOfBounds` outside `1..=size`.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell> {
        self.check_interior(row, col)?;
        Ok(&self.cells[self.index(row, col)])
    }

    /// Any cell including the ring. Fails with `OutOfBounds` outside
    /// `0..=size + 1`.
    pub fn cell_buffered(&self, row: usize, col: usize) -> Result<&Cell> {
        if row > self.size + 1 || col > self.size + 1 {
            return Err(GameError::OutOfBounds {
                row,
                col,
                view: BoardView::Buffered,
            });
        }
        Ok(&self.cells[self.index(row, col)])
    }

    /// Element held by an interior cell.
    pub fn element(&self, row: usize, col: usize) -> Result<&Element> {
        self.cell(row, col).map(Cell::value)
    }

    /// The four cells around an interior cell.
    pub fn neighbors(&self, row: usize, col: usize) -> Result<Neighbors> {
        self.check_interior(row, col)?;
        // Interior coordinates keep every step inside the buffered view.
        let at = |direction: Direction| {
            let (dr, dc) = direction.delta();
            let r = row.wrapping_add_signed(dr);
            let c = col.wrapping_add_signed(dc);
            *self.cells[self.index(r, c)].value()
        };
        Ok(Neighbors {
            up: at(Direction::Up),
            down: at(Direction::Down),
            left: at(Direction::Left),
            right: at(Direction::Right),
        })
    }

    /// Interior coordinate `(row + d_row, col + d_col)`, if it exists.
    #[must_use]
    pub fn offset(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(d_row)?;
        let c = col.checked_add_signed(d_col)?;
        self.contains(r, c).then_some((r, c))
    }

    /// Is `(row, col)` an interior coordinate?
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= 1 && row <= self.size && col >= 1 && col <= self.size
    }

    /// Reset the interior and seed the checkerboard.
    ///
    /// Every cell with `(row + col)` even gets a random operand; the rest
    /// stay empty for tokens.
    pub fn setup(&mut self, rng: &mut GameRng) {
        let size = self.size;
        for row in 1..=size {
            for col in 1..=size {
                let idx = self.index(row, col);
                self.cells[idx] = if (row + col) % 2 == 0 {
                    Cell::operand(rng.gen_operand())
                } else {
                    Cell::empty()
                };
            }
        }
        debug!(size, seed = rng.seed(), "seeded checkerboard operands");
    }

    /// Put a token into an empty interior cell.
    pub fn place_token(&mut self, token: Token, row: usize, col: usize) -> Result<()> {
        self.place_element(Element::Token(token), row, col)
    }

    /// Put a player element into an empty interior cell.
    ///
    /// Only tokens are accepted; anything else fails with `InvalidToken`.
    pub fn place_element(&mut self, element: Element, row: usize, col: usize) -> Result<()> {
        self.check_interior(row, col)?;
        let idx = self.index(row, col);
        self.cells[idx].set_value(element, row, col)?;
        debug!(row, col, element = %element, "placed element");
        Ok(())
    }

    /// Seed an operand into an empty interior cell.
    pub fn place_operand(&mut self, operand: Operand, row: usize, col: usize) -> Result<()> {
        self.check_interior(row, col)?;
        let idx = self.index(row, col);
        self.cells[idx].seed(operand, row, col)
    }

    /// Empty an interior cell. Debug and test use only.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_interior(row, col)?;
        let idx = self.index(row, col);
        self.cells[idx].clear();
        Ok(())
    }

    /// Interior cells as `(row, col, cell)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        (1..=self.size).flat_map(move |row| {
            (1..=self.size).map(move |col| (row, col, &self.cells[self.index(row, col)]))
        })
    }

    /// Coordinates of the interior cells still empty.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells()
            .filter(|(_, _, cell)| cell.is_empty())
            .map(|(row, col, _)| (row, col))
    }

    fn check_interior(&self, row: usize, col: usize) -> Result<()> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                row,
                col,
                view: BoardView::Interior,
            })
        }
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * (self.size + 2) + col
    }

    const fn on_ring(size: usize, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row == size + 1 || col == size + 1
    }
}

impl std::fmt::Display for Board {
    /// One line per buffered row, symbols separated by spaces.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let buffered = self.size_buffered();
        for row in 0..buffered {
            let line: Vec<&str> = (0..buffered)
                .map(|col| self.cells[self.index(row, col)].value().symbol())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
