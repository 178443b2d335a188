//! Projection of a finished traversal into its two outputs.

use std::fmt;

use itertools::Itertools;

use crate::chars::is_collectable;
use crate::traversal::TraversedPath;

/// Letters and characters collected along a path
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathResult {
    /// Letters in the order first reached, each position counted once
    pub letters: String,
    /// Every traversed character in order, repeats included
    pub traversed_chars: String,
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "letters: {}", self.letters)?;
        write!(f, "path: {}", self.traversed_chars)
    }
}

/// Build the [`PathResult`] for a traversed path.
///
/// A letter sitting on an intersection is reached once per crossing but
/// only contributes at its first visit.
pub fn format_path(path: &TraversedPath) -> PathResult {
    let traversed_chars = path.cells().iter().map(|cell| cell.ch).collect();

    let letters = path
        .cells()
        .iter()
        .filter(|cell| is_collectable(cell.ch))
        .unique_by(|cell| cell.pos)
        .map(|cell| cell.ch)
        .collect();

    PathResult {
        letters,
        traversed_chars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::resolver::PathResolver;
    use crate::traversal::{Traversal, TraversalOptions};

    fn traverse(rows: &[&str]) -> TraversedPath {
        let resolver = PathResolver::new(Grid::from_rows(rows)).unwrap();
        Traversal::new(&resolver, &TraversalOptions::new())
            .run()
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_straight_line() {
        let result = format_path(&traverse(&["@-A-B-x"]));
        assert_eq!(result.letters, "AB");
        assert_eq!(result.traversed_chars, "@-A-B-x");
    }

    #[test]
    fn test_letter_on_crossing_counted_once() {
        // the path crosses B twice
        let path = traverse(&[
            "  @   ",
            "  |   ",
            "+-B-+ ",
            "| | | ",
            "+-+ | ",
            "    x ",
        ]);
        let result = format_path(&path);
        assert_eq!(result.traversed_chars, "@|B|+-+|+-B-+||x");
        assert_eq!(result.letters, "B");
    }

    #[test]
    fn test_display() {
        let result = PathResult {
            letters: "ACB".to_string(),
            traversed_chars: "@-A-C-B-x".to_string(),
        };
        assert_eq!(result.to_string(), "letters: ACB\npath: @-A-C-B-x");
    }
}
