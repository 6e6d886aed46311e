/// A position in a buffer: zero-based line and char column.
///
/// Ordering is by line, then column, which is the order regions are
/// normalized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub const ZERO: Position = Position { line: 0, col: 0 };

    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Ordered pair of positions, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: Position,
    pub end: Position,
}

impl Region {
    /// Build a region from two endpoints in any order.
    pub fn between(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of lines the region touches.
    pub fn line_span(&self) -> usize {
        self.end.line - self.start.line + 1
    }
}

/// Position reached after inserting `text` at `start`.
pub fn end_after_insert(start: Position, text: &str) -> Position {
    let mut line = start.line;
    let mut col = start.col;
    for ch in text.chars() {
        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    Position::new(line, col)
}
