//! Character classification for path drawings.

/// Start marker
pub const START: char = '@';

/// End marker
pub const END: char = 'x';

/// Horizontal line segment
pub const HORIZONTAL: char = '-';

/// Vertical line segment
pub const VERTICAL: char = '|';

/// Junction where the path may turn
pub const JUNCTION: char = '+';

/// Blank cell, never part of a path
pub const BLANK: char = ' ';

/// Characters that are drawn path but never collected as letters
const NON_LETTERS: [char; 5] = [END, START, HORIZONTAL, JUNCTION, VERTICAL];

/// Check if a character can be part of a drawn path.
///
/// Line segments, junctions, both markers and any ASCII letter qualify.
pub fn is_path_char(c: char) -> bool {
    matches!(c, HORIZONTAL | VERTICAL | JUNCTION | START | END) || c.is_ascii_alphabetic()
}

/// Check if a traversed character is collected as a letter
pub fn is_collectable(c: char) -> bool {
    !NON_LETTERS.contains(&c)
}

/// Check if a character is a straight line segment (- or |)
pub fn is_line(c: char) -> bool {
    c == HORIZONTAL || c == VERTICAL
}
