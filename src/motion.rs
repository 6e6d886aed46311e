// src/motion.rs - Word and paragraph boundaries

use crate::buffer::LineStore;
use crate::cursor::Position;

/// Character classes for word movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    /// Alphanumeric and underscore
    Alphanumeric,
    Whitespace,
    /// Punctuation and everything else
    Other,
}

pub fn char_kind(c: char) -> WordKind {
    if c.is_alphanumeric() || c == '_' {
        WordKind::Alphanumeric
    } else if c.is_whitespace() {
        WordKind::Whitespace
    } else {
        WordKind::Other
    }
}

fn line_chars(store: &LineStore, line: usize) -> Vec<char> {
    store.line(line).unwrap_or_default().chars().collect()
}

fn skip_forward(chars: &[char], mut col: usize, kind: WordKind) -> usize {
    while col < chars.len() && char_kind(chars[col]) == kind {
        col += 1;
    }
    col
}

fn skip_backward(chars: &[char], mut col: usize, kind: WordKind) -> usize {
    while col > 0 && char_kind(chars[col - 1]) == kind {
        col -= 1;
    }
    col
}

/// Column reached by skipping a word run, then a punctuation run, then a
/// whitespace run, without leaving the line.
pub fn word_end_in_line(chars: &[char], col: usize) -> usize {
    let col = skip_forward(chars, col.min(chars.len()), WordKind::Alphanumeric);
    let col = skip_forward(chars, col, WordKind::Other);
    skip_forward(chars, col, WordKind::Whitespace)
}

/// Mirror of [`word_end_in_line`]: whitespace, punctuation, then word chars.
pub fn word_start_in_line(chars: &[char], col: usize) -> usize {
    let col = skip_backward(chars, col.min(chars.len()), WordKind::Whitespace);
    let col = skip_backward(chars, col, WordKind::Other);
    skip_backward(chars, col, WordKind::Alphanumeric)
}

/// Forward word motion (`M-f`).
///
/// Reaching the end of a line moves to the start of the next one, unless
/// this is the last line.
pub fn word_forward(store: &LineStore, pos: Position) -> Position {
    let chars = line_chars(store, pos.line);
    let col = word_end_in_line(&chars, pos.col);
    if col >= chars.len() && pos.line + 1 < store.line_count() {
        Position::new(pos.line + 1, 0)
    } else {
        Position::new(pos.line, col)
    }
}

/// Backward word motion (`M-b`).
///
/// Landing on column 0 of a line that has a predecessor continues to the
/// end of the previous line, skipping its trailing whitespace and
/// punctuation.
pub fn word_backward(store: &LineStore, pos: Position) -> Position {
    let chars = line_chars(store, pos.line);
    let col = word_start_in_line(&chars, pos.col);
    if col > 0 || pos.line == 0 {
        return Position::new(pos.line, col);
    }
    let prev = line_chars(store, pos.line - 1);
    let col = skip_backward(&prev, prev.len(), WordKind::Whitespace);
    let col = skip_backward(&prev, col, WordKind::Other);
    Position::new(pos.line - 1, col)
}

/// Move down to the next empty line, or the last line.
pub fn paragraph_forward(store: &LineStore, pos: Position) -> Position {
    let mut line = pos.line;
    while line + 1 < store.line_count() {
        line += 1;
        if store.line_len(line) == 0 {
            break;
        }
    }
    Position::new(line, 0)
}

/// Move up to the previous empty line, or the first line.
pub fn paragraph_backward(store: &LineStore, pos: Position) -> Position {
    let mut line = pos.line;
    while line > 0 {
        line -= 1;
        if store.line_len(line) == 0 {
            break;
        }
    }
    Position::new(line, 0)
}

pub fn line_start(pos: Position) -> Position {
    Position::new(pos.line, 0)
}

pub fn line_end(store: &LineStore, pos: Position) -> Position {
    Position::new(pos.line, store.line_len(pos.line))
}

/// One line up, clamping the column to the new line.
pub fn line_up(store: &LineStore, pos: Position) -> Position {
    if pos.line == 0 {
        return pos;
    }
    let line = pos.line - 1;
    Position::new(line, pos.col.min(store.line_len(line)))
}

pub fn line_down(store: &LineStore, pos: Position) -> Position {
    if pos.line + 1 >= store.line_count() {
        return pos;
    }
    let line = pos.line + 1;
    Position::new(line, pos.col.min(store.line_len(line)))
}

pub fn char_left(pos: Position) -> Position {
    Position::new(pos.line, pos.col.saturating_sub(1))
}

pub fn char_right(store: &LineStore, pos: Position) -> Position {
    Position::new(pos.line, (pos.col + 1).min(store.line_len(pos.line)))
}
