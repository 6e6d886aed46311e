// src/search.rs - Incremental forward search

use crate::buffer::LineStore;
use crate::cursor::Position;

/// Query state for an incremental literal search.
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    active: bool,
    query: String,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn start(&mut self) {
        self.active = true;
        self.query.clear();
    }

    pub fn end(&mut self) {
        self.active = false;
        self.query.clear();
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop(&mut self) {
        self.query.pop();
    }

    pub fn status(&self) -> String {
        format!("Search: {}", self.query)
    }

    /// First occurrence of the query at or after `from`: the rest of the
    /// current line, then each following line. Never wraps to the top.
    pub fn find_from(&self, store: &LineStore, from: Position) -> Option<Position> {
        if self.query.is_empty() {
            return None;
        }
        (from.line..store.line_count()).find_map(|line| {
            let text = store.line(line)?;
            let start_col = if line == from.line { from.col } else { 0 };
            find_in_line(&text, start_col, &self.query).map(|col| Position::new(line, col))
        })
    }
}

/// Char column of `query` in `line`, searching from char column `from`.
fn find_in_line(line: &str, from: usize, query: &str) -> Option<usize> {
    let byte_start = line
        .char_indices()
        .nth(from)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    if from > line.chars().count() {
        return None;
    }
    let found = line[byte_start..].find(query)?;
    Some(from + line[byte_start..byte_start + found].chars().count())
}
