//! Marker discovery and next-step resolution.
//!
//! The resolver answers every question the traversal asks about the grid:
//! where the path starts and ends, which cells border a given cell, whether
//! a cell is a crossing the path may re-enter, and which single neighbor
//! continues the path from where it currently is.

use tracing::{debug, trace};

use crate::cell::{Cell, Direction, Pos};
use crate::chars::{is_line, is_path_char, END, JUNCTION, START};
use crate::error::{PathError, Result};
use crate::grid::Grid;
use crate::traversal::VisitedSet;

/// Number of path neighbors that makes a cell an intersection
const INTERSECTION_NEIGHBORS: usize = 4;

/// Read-only view of a grid with its start and end markers located.
#[derive(Debug, Clone)]
pub struct PathResolver {
    grid: Grid,
    start: Option<Cell>,
    end: Option<Cell>,
}

impl PathResolver {
    /// Scan the grid for markers.
    ///
    /// Fails on a second `@` or a second `x`. Missing markers are allowed
    /// and leave [`start`](Self::start) or [`end`](Self::end) empty.
    pub fn new(grid: Grid) -> Result<Self> {
        let mut start: Option<Cell> = None;
        let mut end: Option<Cell> = None;

        for cell in grid.cells() {
            match cell.ch {
                START => {
                    if let Some(first) = start {
                        return Err(PathError::DuplicateStartMarker {
                            first: first.pos,
                            second: cell.pos,
                        });
                    }
                    start = Some(cell);
                }
                END => {
                    if let Some(first) = end {
                        return Err(PathError::DuplicateEndMarker {
                            first: first.pos,
                            second: cell.pos,
                        });
                    }
                    end = Some(cell);
                }
                _ => {}
            }
        }

        debug!(
            start = ?start.map(|c| c.pos),
            end = ?end.map(|c| c.pos),
            "located markers"
        );

        Ok(Self { grid, start, end })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Look up a cell by row and column
    pub fn cell_at(&self, row: i32, col: i32) -> Option<Cell> {
        self.grid.cell(Pos::new(row, col))
    }

    /// The `@` cell, if the grid has one
    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    /// The `x` cell, if the grid has one
    pub fn end(&self) -> Option<Cell> {
        self.end
    }

    /// Orthogonal neighbors that hold path characters.
    ///
    /// Always evaluated right, up, down, left.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.grid.cell(cell.pos.step(dir)))
            .filter(|n| is_path_char(n.ch))
            .collect()
    }

    /// Check if a cell is a crossing that the path may pass through more
    /// than once: a path character with path characters on all four sides.
    pub fn is_intersection(&self, cell: Cell) -> bool {
        is_path_char(cell.ch) && self.neighbors(cell).len() == INTERSECTION_NEIGHBORS
    }

    /// Check if `candidate` is excluded as a continuation.
    ///
    /// The cell just left is always excluded. Other cells are excluded once
    /// visited, except intersections.
    fn is_visited(&self, candidate: Cell, previous: Option<Cell>, visited: &VisitedSet) -> bool {
        if previous == Some(candidate) {
            return true;
        }
        if self.is_intersection(candidate) {
            return false;
        }
        visited.contains(candidate.pos)
    }

    /// Pick the single cell that continues the path from `current`.
    ///
    /// When more than one unvisited neighbor remains, only the one straight
    /// ahead of the previous step survives. Anything other than exactly one
    /// survivor means the drawing is broken.
    pub fn next_cell(
        &self,
        current: Cell,
        previous: Option<Cell>,
        visited: &VisitedSet,
    ) -> Result<Cell> {
        let mut candidates: Vec<Cell> = self
            .neighbors(current)
            .into_iter()
            .filter(|&n| !self.is_visited(n, previous, visited))
            .collect();

        if candidates.len() > 1 {
            candidates.retain(|&n| is_straight(previous, current, n));
        }

        let next = match candidates.as_slice() {
            [next] => *next,
            _ => {
                debug!(at = %current.pos, candidates = candidates.len(), "ambiguous continuation");
                return Err(PathError::AmbiguousPath {
                    at: current.pos,
                    candidates: candidates.len(),
                });
            }
        };

        if let Some(previous) = previous {
            check_fake_turn(previous, current, next)?;
        }

        trace!(from = %current.pos, to = %next.pos, ch = %next.ch, "resolved step");
        Ok(next)
    }
}

/// Check if `next` lies one step past `current` on the line from `previous`
fn is_straight(previous: Option<Cell>, current: Cell, next: Cell) -> bool {
    previous
        .and_then(|prev| Direction::between(prev.pos, current.pos))
        .is_some_and(|dir| current.pos.step(dir) == next.pos)
}

/// A `+` entered and left through the same kind of line is not a turn
fn check_fake_turn(previous: Cell, current: Cell, next: Cell) -> Result<()> {
    if current.ch == JUNCTION && is_line(next.ch) && previous.ch == next.ch {
        return Err(PathError::FakeTurn { at: current.pos });
    }
    Ok(())
}
