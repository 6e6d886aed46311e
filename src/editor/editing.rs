// Character, line and word edits, each recorded for undo

use super::Editor;
use crate::cursor::{Position, Region};
use crate::motion;
use crate::undo::{UndoEntry, UndoResult};
use log::{debug, warn};

impl Editor {
    /// Push an undo entry for the active buffer and invalidate highlight
    /// state from the edited line.
    pub(super) fn record(&mut self, entry: UndoEntry) {
        let slot = self.slot_mut();
        slot.touched(entry.at().line);
        slot.undo.push(entry);
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.cursor();
        let slot = self.slot_mut();
        if !slot.store.insert_char(at, ch) {
            debug!("insert of {ch:?} at {at:?} refused");
            return;
        }
        slot.cursor.col += 1;
        self.record(UndoEntry::CharInsert { at, ch });
    }

    pub fn insert_newline(&mut self) {
        let at = self.cursor();
        if let Err(err) = self.slot_mut().store.split_line(at) {
            self.set_status(err.to_string());
            return;
        }
        self.slot_mut().cursor = Position::new(at.line + 1, 0);
        self.record(UndoEntry::LineMerge { at });
    }

    /// Backspace: remove the char before the cursor, or join with the
    /// previous line at column 0.
    pub fn delete_char_before(&mut self) {
        let cursor = self.cursor();
        if cursor == Position::ZERO {
            return;
        }
        if cursor.col == 0 {
            let col = match self.slot_mut().store.join_with_next(cursor.line - 1) {
                Ok(Some(col)) => col,
                Ok(None) => return,
                Err(err) => {
                    self.set_status(err.to_string());
                    return;
                }
            };
            let at = Position::new(cursor.line - 1, col);
            self.slot_mut().cursor = at;
            self.record(UndoEntry::LineSplit { at, cursor });
            return;
        }
        let at = Position::new(cursor.line, cursor.col - 1);
        if let Some(ch) = self.slot_mut().store.remove_char(at) {
            self.slot_mut().cursor = at;
            self.record(UndoEntry::CharDelete { at, ch, cursor });
        }
    }

    /// Delete forward: remove the char under the cursor, or pull the next
    /// line up at end of line.
    pub fn delete_char_after(&mut self) {
        let cursor = self.cursor();
        let store = &mut self.slot_mut().store;
        if cursor.col >= store.line_len(cursor.line) {
            match store.join_with_next(cursor.line) {
                Ok(Some(_)) => self.record(UndoEntry::LineSplit { at: cursor, cursor }),
                Ok(None) => {}
                Err(err) => self.set_status(err.to_string()),
            }
            return;
        }
        if let Some(ch) = store.remove_char(cursor) {
            self.record(UndoEntry::CharDelete {
                at: cursor,
                ch,
                cursor,
            });
        }
    }

    pub fn delete_word_left(&mut self) {
        let cursor = self.cursor();
        let target = motion::word_backward(&self.slot().store, cursor);
        self.remove_span(Region::between(target, cursor), cursor);
    }

    pub fn delete_word_right(&mut self) {
        let cursor = self.cursor();
        let target = motion::word_forward(&self.slot().store, cursor);
        self.remove_span(Region::between(cursor, target), cursor);
    }

    /// Cut `region` out of the buffer, recording it for undo. The cursor
    /// moves to the region start. Returns the removed text.
    pub(super) fn remove_span(&mut self, region: Region, cursor: Position) -> String {
        if region.is_empty() {
            return String::new();
        }
        let slot = self.slot_mut();
        let saved = slot.store.remove_text(region.start, region.end);
        slot.cursor = region.start;
        self.record(UndoEntry::BulkRemove {
            at: region.start,
            line_count: region.line_span(),
            saved: saved.clone(),
            cursor,
        });
        saved
    }

    pub fn undo(&mut self) {
        let slot = self.slot_mut();
        let from_line = slot.undo.last().map(|entry| entry.at().line);
        match slot.undo.pop_and_apply(&mut slot.store) {
            UndoResult::Applied(cursor) => {
                slot.cursor = slot.store.clamp(cursor);
                slot.mark = slot.mark.map(|m| slot.store.clamp(m));
                if let Some(line) = from_line {
                    slot.touched(line);
                }
                self.set_status("Undo performed");
            }
            UndoResult::Empty => self.set_status("Nothing to undo"),
            UndoResult::Stale => {
                warn!("dropped stale undo entry");
                self.set_status("Undo entry no longer applies");
            }
        }
    }
}
