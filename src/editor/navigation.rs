// Cursor motion and incremental search

use super::Editor;
use crate::buffer::LineStore;
use crate::cursor::Position;
use crate::motion;
use log::debug;

impl Editor {
    fn move_with(&mut self, step: impl FnOnce(&LineStore, Position) -> Position) {
        let slot = self.slot_mut();
        slot.cursor = step(&slot.store, slot.cursor);
    }

    pub fn move_left(&mut self) {
        self.move_with(|_, pos| motion::char_left(pos));
    }

    pub fn move_right(&mut self) {
        self.move_with(motion::char_right);
    }

    pub fn move_up(&mut self) {
        self.move_with(motion::line_up);
    }

    pub fn move_down(&mut self) {
        self.move_with(motion::line_down);
    }

    pub fn move_line_start(&mut self) {
        self.move_with(|_, pos| motion::line_start(pos));
    }

    pub fn move_line_end(&mut self) {
        self.move_with(motion::line_end);
    }

    pub fn move_word_forward(&mut self) {
        self.move_with(motion::word_forward);
    }

    pub fn move_word_backward(&mut self) {
        self.move_with(motion::word_backward);
    }

    pub fn move_paragraph_forward(&mut self) {
        self.move_with(motion::paragraph_forward);
    }

    pub fn move_paragraph_backward(&mut self) {
        self.move_with(motion::paragraph_backward);
    }

    pub fn start_search(&mut self) {
        self.search.start();
        self.dispatcher.begin_search();
        self.set_status(self.search.status());
    }

    /// Jump to the first match at or after the cursor. The cursor stays
    /// put when nothing matches.
    pub fn update_search(&mut self) {
        let slot = self.buffers.active_mut();
        if let Some(found) = self.search.find_from(&slot.store, slot.cursor) {
            debug!("search {:?} hit {found:?}", self.search.query());
            slot.cursor = found;
        }
        self.set_status(self.search.status());
    }

    pub fn end_search(&mut self) {
        self.search.end();
        self.dispatcher.reset();
        self.set_status("Search ended");
    }
}
