//! Single-level undo log.
//!
//! Every primitive buffer mutation pushes exactly one [`UndoEntry`] holding
//! an owned copy of whatever is needed to reverse it. Undo pops the most
//! recent entry and applies its inverse; applying never pushes, so there is
//! no redo.

use crate::buffer::LineStore;
use crate::cursor::{Position, end_after_insert};
use log::{debug, warn};

/// The inverse of one primitive mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoEntry {
    /// `ch` was typed at `at`. Inverse removes it.
    CharInsert { at: Position, ch: char },

    /// `ch` was removed from `at` while the cursor sat at `cursor`.
    /// Inverse puts it back.
    CharDelete {
        at: Position,
        ch: char,
        cursor: Position,
    },

    /// Line `at.line` was split at `at.col`. Inverse merges it back.
    LineMerge { at: Position },

    /// Two lines were joined at `at`. Inverse splits them again.
    LineSplit { at: Position, cursor: Position },

    /// `text` was pasted at `at`. Inverse removes it.
    BulkInsert {
        at: Position,
        text: String,
        cursor: Position,
    },

    /// `saved` (spanning `line_count` lines) was cut from `at`. Inverse
    /// restores it verbatim.
    BulkRemove {
        at: Position,
        line_count: usize,
        saved: String,
        cursor: Position,
    },
}

impl UndoEntry {
    /// Where the recorded edit happened.
    pub fn at(&self) -> Position {
        match self {
            UndoEntry::CharInsert { at, .. }
            | UndoEntry::CharDelete { at, .. }
            | UndoEntry::LineMerge { at }
            | UndoEntry::LineSplit { at, .. }
            | UndoEntry::BulkInsert { at, .. }
            | UndoEntry::BulkRemove { at, .. } => *at,
        }
    }

    /// Apply the inverse edit and return where the cursor goes.
    ///
    /// Returns `None` (leaving the store untouched) if the entry no longer
    /// fits the store.
    pub fn revert(&self, store: &mut LineStore) -> Option<Position> {
        match self {
            UndoEntry::CharInsert { at, ch } => {
                if store.char_at(*at) != Some(*ch) {
                    return None;
                }
                store.remove_char(*at);
                Some(*at)
            }
            UndoEntry::CharDelete { at, ch, cursor } => {
                if !store.is_valid(*at) {
                    return None;
                }
                store.insert_text(*at, &ch.to_string());
                Some(*cursor)
            }
            UndoEntry::LineMerge { at } => {
                if at.col != store.line_len(at.line) {
                    return None;
                }
                store.join_with_next(at.line).ok().flatten()?;
                Some(*at)
            }
            UndoEntry::LineSplit { at, cursor } => {
                if !store.is_valid(*at) {
                    return None;
                }
                store.insert_text(*at, "\n");
                Some(*cursor)
            }
            UndoEntry::BulkInsert { at, text, cursor } => {
                let end = end_after_insert(*at, text);
                if !store.is_valid(*at) || !store.is_valid(end) {
                    return None;
                }
                store.remove_text(*at, end);
                Some(*cursor)
            }
            UndoEntry::BulkRemove {
                at,
                line_count,
                saved,
                cursor,
            } => {
                debug_assert_eq!(saved.matches('\n').count() + 1, *line_count);
                if !store.is_valid(*at) {
                    return None;
                }
                store.insert_text(*at, saved);
                Some(*cursor)
            }
        }
    }
}

/// Outcome of an undo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoResult {
    Applied(Position),
    Empty,
    Stale,
}

/// Capacity-bounded stack of undo entries.
#[derive(Debug, Clone)]
pub struct UndoLog {
    entries: Vec<UndoEntry>,
    capacity: usize,
}

impl UndoLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Record an entry. Once the log is full further entries are dropped;
    /// older history is never evicted.
    pub fn push(&mut self, entry: UndoEntry) {
        if self.entries.len() >= self.capacity {
            debug!("undo log full ({}), dropping {:?}", self.capacity, entry);
            return;
        }
        self.entries.push(entry);
    }

    /// Pop the latest entry and apply its inverse to `store`.
    pub fn pop_and_apply(&mut self, store: &mut LineStore) -> UndoResult {
        let Some(entry) = self.entries.pop() else {
            return UndoResult::Empty;
        };
        match entry.revert(store) {
            Some(cursor) => UndoResult::Applied(cursor),
            None => {
                warn!("undo entry no longer matches buffer: {:?}", entry);
                UndoResult::Stale
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&UndoEntry> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
