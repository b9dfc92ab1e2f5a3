//! Positions in a line-addressable document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A zero-based (line, column) position. Columns count characters, not bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct TextLocation {
    pub line: usize,
    pub column: usize,
}

impl TextLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_line_major() {
        assert!(TextLocation::new(1, 0) > TextLocation::new(0, 99));
        assert!(TextLocation::new(2, 3) < TextLocation::new(2, 4));
    }

    #[test]
    fn display_format() {
        assert_eq!(TextLocation::new(4, 17).to_string(), "4:17");
    }
}
