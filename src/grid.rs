//! Character grid built from the input drawing.

use tracing::debug;

use crate::cell::{Cell, Pos};
use crate::chars::BLANK;

/// Immutable grid of characters.
///
/// Rows may have different lengths. Anything past the end of a row, or
/// outside the grid altogether, is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a grid from text, one row per line
    pub fn new(text: &str) -> Self {
        Self::from_rows(text.lines())
    }

    /// Create a grid from a sequence of rows
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cells: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();
        let cols = cells.iter().map(Vec::len).max().unwrap_or(0);
        let rows = cells.len();
        debug!(rows, cols, "parsed grid");

        Self { cells, rows, cols }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Length of the longest row
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if a position lies within the grid's bounding box
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    /// Get the character at a position.
    ///
    /// Out-of-bounds positions, positions past the end of a short row and
    /// blank cells all yield `None`.
    pub fn get(&self, pos: Pos) -> Option<char> {
        if !self.contains(pos) {
            return None;
        }
        self.cells[pos.row as usize]
            .get(pos.col as usize)
            .copied()
            .filter(|&c| c != BLANK)
    }

    /// Get the cell at a position, if it holds a character
    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        self.get(pos).map(|ch| Cell::new(pos, ch))
    }

    /// Iterate over every present cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, chars)| {
            chars.iter().enumerate().filter_map(move |(col, &ch)| {
                (ch != BLANK).then(|| Cell::new(Pos::new(row as i32, col as i32), ch))
            })
        })
    }
}
