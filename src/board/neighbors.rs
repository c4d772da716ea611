//! Orthogonal neighbors of a cell.

use serde::{Deserialize, Serialize};

use crate::core::Element;

/// One of the four orthogonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(d_row, d_col)` step for this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// The four cells around an interior cell, read through the buffered view.
///
/// Any of them may be a stub when the cell touches the border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub up: Element,
    pub down: Element,
    pub left: Element,
    pub right: Element,
}

impl Neighbors {
    /// Element in the given direction.
    #[must_use]
    pub const fn get(&self, direction: Direction) -> &Element {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    /// Iterate in `up, down, left, right` order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &Element)> {
        Direction::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}
