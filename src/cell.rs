//! Grid coordinates, orthogonal directions and cells.

use std::fmt;

/// A (row, column) coordinate on the grid.
///
/// Coordinates are signed so that stepping off the top or left edge
/// produces a position the grid simply reports as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return the position one step away in the given direction
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.offset();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal unit vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Up,
    Down,
    Left,
}

impl Direction {
    /// All directions, in neighbor evaluation order
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Down,
        Direction::Left,
    ];

    /// (row, column) delta of a single step
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Direction of a single orthogonal step from `from` to `to`.
    ///
    /// Returns `None` unless the two positions are adjacent.
    pub fn between(from: Pos, to: Pos) -> Option<Self> {
        Self::ALL.into_iter().find(|&dir| from.step(dir) == to)
    }
}

/// A grid position together with the character drawn there.
///
/// Cells are plain values produced on demand by the grid; two cells are
/// the same cell when their positions match.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub pos: Pos,
    pub ch: char,
}

impl Cell {
    pub fn new(pos: Pos, ch: char) -> Self {
        Self { pos, ch }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}
