//! # asciipath
//!
//! Follow a path drawn with ASCII line-art from its start marker `@` to its
//! end marker `x`, collecting the letters it passes over.
//!
//! ```text
//!   @---A---+
//!           |
//!   x-B-+   C
//!       |   |
//!       +---+
//! ```
//!
//! The path is fully determined by the drawing: at a junction it follows
//! the only way on, at a crossing it keeps going straight. Drawings that
//! fork, break off, or turn on a `+` that doesn't actually turn are
//! rejected.
//!
//! ## Usage
//!
//! ```rust
//! let maze = "  @---A---+\n          |\n  x-B-+   C\n      |   |\n      +---+";
//! let result = asciipath::find_path(maze).unwrap().unwrap();
//! assert_eq!(result.letters, "ACB");
//! assert_eq!(result.traversed_chars, "@---A---+|C|+---+|+-B-x");
//! ```
//!
//! A drawing without a start or end marker has no path, which is reported
//! as `Ok(None)` rather than an error.

mod cell;
mod chars;
mod error;
mod format;
mod grid;
mod resolver;
mod traversal;

pub use cell::{Cell, Direction, Pos};
pub use error::{PathError, Result};
pub use format::{format_path, PathResult};
pub use grid::Grid;
pub use resolver::PathResolver;
pub use traversal::{Traversal, TraversalOptions, TraversalState, TraversedPath, VisitedSet};

/// Follow the path drawn in `text` with default options.
pub fn find_path(text: &str) -> Result<Option<PathResult>> {
    find_path_with_options(text, &TraversalOptions::default())
}

/// Follow the path drawn in `text` with custom options.
pub fn find_path_with_options(
    text: &str,
    options: &TraversalOptions,
) -> Result<Option<PathResult>> {
    let resolver = PathResolver::new(Grid::new(text))?;
    let path = Traversal::new(&resolver, options).run()?;
    Ok(path.as_ref().map(format_path))
}
