//! The walk from `@` to `x`.
//!
//! [`Traversal`] is a small state machine driven by a [`PathResolver`]:
//!
//! ```text
//! NotStarted --markers found--> Running --current is x--> Reached
//!     |                          |   ^
//!     | marker missing           |   | resolved next cell
//!     v                          v   |
//!   NoPath                     Failed (malformed drawing)
//! ```
//!
//! Each traversal owns its visited set, so any number of traversals can
//! run over the same resolver.

use tracing::{debug, trace};

use crate::cell::{Cell, Pos};
use crate::error::{PathError, Result};
use crate::grid::Grid;
use crate::resolver::PathResolver;

/// Multiplier applied to the grid area to bound the number of steps
const STEP_BOUND_FACTOR: usize = 4;

/// Options for running a traversal.
///
/// # Example
///
/// ```rust
/// use asciipath::{find_path_with_options, TraversalOptions};
///
/// let options = TraversalOptions::new().with_max_steps(100);
/// let result = find_path_with_options("@-A-x", &options).unwrap().unwrap();
/// assert_eq!(result.letters, "A");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraversalOptions {
    /// Maximum number of cells to visit before giving up.
    /// Defaults to four times the grid's area.
    pub max_steps: Option<usize>,
}

impl TraversalOptions {
    pub fn new() -> Self {
        Self { max_steps: None }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Step bound to use for a particular grid
    pub fn step_bound(&self, grid: &Grid) -> usize {
        self.max_steps.unwrap_or_else(|| {
            (grid.rows() * grid.cols())
                .saturating_mul(STEP_BOUND_FACTOR)
                .max(1)
        })
    }
}

/// Cells already consumed by a traversal, laid out like the grid
#[derive(Debug, Clone)]
pub struct VisitedSet {
    visited: Vec<bool>,
    cols: usize,
}

impl VisitedSet {
    /// Create an empty set sized to the grid
    pub fn new(grid: &Grid) -> Self {
        Self {
            visited: vec![false; grid.rows() * grid.cols()],
            cols: grid.cols(),
        }
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.row < 0 || pos.col < 0 || pos.col as usize >= self.cols {
            return None;
        }
        let idx = pos.row as usize * self.cols + pos.col as usize;
        (idx < self.visited.len()).then_some(idx)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.index(pos).is_some_and(|idx| self.visited[idx])
    }

    pub fn insert(&mut self, pos: Pos) {
        if let Some(idx) = self.index(pos) {
            self.visited[idx] = true;
        }
    }
}

/// Where a traversal currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalState {
    NotStarted,
    Running {
        current: Cell,
        previous: Option<Cell>,
    },
    /// The end marker was reached
    Reached(Cell),
    /// The grid has no start or no end marker
    NoPath,
    Failed(PathError),
}

impl TraversalState {
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            TraversalState::Reached(_) | TraversalState::NoPath | TraversalState::Failed(_)
        )
    }
}

/// Cells visited from start to end, in order.
///
/// Intersections crossed twice appear twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversedPath {
    cells: Vec<Cell>,
}

impl TraversedPath {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A single walk over a resolver's grid
pub struct Traversal<'a> {
    resolver: &'a PathResolver,
    state: TraversalState,
    visited: VisitedSet,
    path: Vec<Cell>,
    max_steps: usize,
}

impl<'a> Traversal<'a> {
    pub fn new(resolver: &'a PathResolver, options: &TraversalOptions) -> Self {
        Self {
            resolver,
            state: TraversalState::NotStarted,
            visited: VisitedSet::new(resolver.grid()),
            path: Vec::new(),
            max_steps: options.step_bound(resolver.grid()),
        }
    }

    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    /// Cells visited so far
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Perform one state transition. Does nothing once finished.
    pub fn step(&mut self) {
        let next = match self.state {
            TraversalState::NotStarted => self.begin(),
            TraversalState::Running { current, previous } => self.advance(current, previous),
            _ => return,
        };
        self.state = next;
    }

    fn begin(&mut self) -> TraversalState {
        match (self.resolver.start(), self.resolver.end()) {
            (Some(start), Some(_)) => TraversalState::Running {
                current: start,
                previous: None,
            },
            _ => {
                debug!("start or end marker missing, nothing to traverse");
                TraversalState::NoPath
            }
        }
    }

    fn advance(&mut self, current: Cell, previous: Option<Cell>) -> TraversalState {
        if self.path.len() >= self.max_steps {
            debug!(steps = self.max_steps, "step bound exceeded");
            return TraversalState::Failed(PathError::DidNotTerminate {
                steps: self.max_steps,
            });
        }

        trace!(pos = %current.pos, ch = %current.ch, "visit");
        self.path.push(current);
        if !self.resolver.is_intersection(current) {
            self.visited.insert(current.pos);
        }

        if Some(current) == self.resolver.end() {
            debug!(steps = self.path.len(), "reached end");
            return TraversalState::Reached(current);
        }

        match self.resolver.next_cell(current, previous, &self.visited) {
            Ok(next) => TraversalState::Running {
                current: next,
                previous: Some(current),
            },
            Err(err) => TraversalState::Failed(err),
        }
    }

    /// Step until finished.
    ///
    /// Returns `Ok(None)` when a marker is missing. A failed traversal
    /// yields only the error, never a partial path.
    pub fn run(mut self) -> Result<Option<TraversedPath>> {
        while !self.state.is_finished() {
            self.step();
        }

        match self.state {
            TraversalState::Reached(_) => Ok(Some(TraversedPath { cells: self.path })),
            TraversalState::Failed(err) => Err(err),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(rows: &[&str]) -> PathResolver {
        PathResolver::new(Grid::from_rows(rows)).unwrap()
    }

    #[test]
    fn test_visited_set() {
        let grid = Grid::from_rows(["@--", "x"]);
        let mut visited = VisitedSet::new(&grid);
        assert!(!visited.contains(Pos::new(0, 1)));
        visited.insert(Pos::new(0, 1));
        assert!(visited.contains(Pos::new(0, 1)));
        assert!(!visited.contains(Pos::new(1, 1)));
        // out of range positions are ignored
        visited.insert(Pos::new(-1, 0));
        visited.insert(Pos::new(0, 3));
        assert!(!visited.contains(Pos::new(-1, 0)));
        assert!(!visited.contains(Pos::new(0, 3)));
    }

    #[test]
    fn test_state_transitions() {
        let r = resolver(&["@-x"]);
        let mut t = Traversal::new(&r, &TraversalOptions::new());
        assert_eq!(t.state(), &TraversalState::NotStarted);

        t.step();
        assert!(matches!(t.state(), TraversalState::Running { previous: None, .. }));
        assert!(t.path().is_empty());

        t.step();
        t.step();
        assert!(matches!(t.state(), TraversalState::Running { .. }));
        assert_eq!(t.path().len(), 2);

        t.step();
        assert_eq!(t.state(), &TraversalState::Reached(r.end().unwrap()));

        // finished traversals stay put
        t.step();
        assert!(t.state().is_finished());
        assert_eq!(t.path().len(), 3);
    }

    #[test]
    fn test_missing_end_is_no_path() {
        let r = resolver(&["@-A-+", "    |"]);
        let mut t = Traversal::new(&r, &TraversalOptions::new());
        t.step();
        assert_eq!(t.state(), &TraversalState::NoPath);
        assert!(t.path().is_empty());
    }

    #[test]
    fn test_run_collects_cells() {
        let r = resolver(&["@-A", "  |", "  x"]);
        let path = Traversal::new(&r, &TraversalOptions::new())
            .run()
            .unwrap()
            .unwrap();
        let chars: String = path.cells().iter().map(|c| c.ch).collect();
        assert_eq!(chars, "@-A|x");
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn test_run_fails_without_partial_path() {
        let r = resolver(&["@-A-+-B-x"]);
        let err = Traversal::new(&r, &TraversalOptions::new())
            .run()
            .unwrap_err();
        assert_eq!(err, PathError::FakeTurn { at: Pos::new(0, 4) });
    }

    #[test]
    fn test_step_bound() {
        let r = resolver(&["@---x"]);
        let options = TraversalOptions::new().with_max_steps(3);
        let err = Traversal::new(&r, &options).run().unwrap_err();
        assert_eq!(err, PathError::DidNotTerminate { steps: 3 });
    }

    #[test]
    fn test_default_step_bound() {
        let grid = Grid::from_rows(["@---x", "  |"]);
        assert_eq!(TraversalOptions::new().step_bound(&grid), 40);
        assert_eq!(TraversalOptions::new().step_bound(&Grid::new("")), 1);
        assert_eq!(
            TraversalOptions::new().with_max_steps(7).step_bound(&grid),
            7
        );
    }
}
