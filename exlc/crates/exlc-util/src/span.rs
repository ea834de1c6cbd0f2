//! Span module - Source location tracking.
//!
//! The exl pipeline reads a sequential character stream, so there are no byte
//! offsets to keep; a location is just the 1-based line and column of a
//! character as seen by the source reader.

use std::fmt;

/// Line/column position of a character in the input.
///
/// Both fields are 1-based. Column counts characters, not bytes.
///
/// # Examples
///
/// ```
/// use exlc_util::Location;
///
/// let loc = Location::new(2, 7);
/// assert_eq!(loc.line, 2);
/// assert_eq!(loc.column, 7);
/// assert_eq!(loc.to_string(), "line 2, column 7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Line number (1-based).
    pub line: u32,

    /// Column number (1-based, in characters).
    pub column: u32,
}

impl Location {
    /// Creates a location from a line and column.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
