// Span types - some constructors only exercised by tests
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// A line/column position in source code (1-indexed line, 0-indexed column,
/// as produced by ESTree-compatible parsers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source span of a node, mirroring the ESTree `loc` object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loc {
    pub start: Position,
    pub end: Position,
}

impl Loc {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Single-point span, convenient for synthesized nodes
    pub fn at(line: usize, column: usize) -> Self {
        let pos = Position::new(line, column);
        Self::new(pos, pos)
    }
}

impl std::fmt::Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loc_display() {
        let loc = Loc::at(12, 4);
        assert_eq!(loc.to_string(), "12:4");
    }
}
