// Mark, kill and yank

use super::Editor;
use crate::buffer::block_text;
use crate::cursor::{Position, Region};
use crate::undo::UndoEntry;

impl Editor {
    pub fn set_mark(&mut self) {
        let cursor = self.cursor();
        self.slot_mut().mark = Some(cursor);
        self.set_status("Mark set");
    }

    /// Kill from the cursor to the end of the line, or the region when a
    /// mark is set. Killing at end of line stores an empty kill.
    pub fn kill_line(&mut self) {
        if self.mark().is_some() {
            self.delete_region();
            return;
        }
        let cursor = self.cursor();
        let eol = Position::new(cursor.line, self.slot().store.line_len(cursor.line));
        let killed = self.remove_span(Region::between(cursor, eol), cursor);
        self.kill_ring.kill(killed);
        self.set_status("Line cut to kill-ring");
    }

    pub fn delete_region(&mut self) {
        let Some(mark) = self.mark() else {
            self.set_status("No region selected");
            return;
        };
        let cursor = self.cursor();
        let mark = self.slot().store.clamp(mark);
        let region = Region::between(mark, cursor);
        let killed = self.remove_span(region, cursor);
        let slot = self.slot_mut();
        slot.cursor = region.start;
        slot.mark = None;
        self.kill_ring.kill(killed);
        self.set_status("Region cut to kill-ring");
    }

    pub fn yank(&mut self) {
        let Some(lines) = self.kill_ring.lines() else {
            self.set_status("Nothing to yank");
            return;
        };
        let text = block_text(&lines);
        let cursor = self.cursor();
        let slot = self.buffers.active_mut();
        match slot.store.insert_block(cursor, &lines) {
            Ok(end) => {
                slot.cursor = end;
                self.record(UndoEntry::BulkInsert {
                    at: cursor,
                    text,
                    cursor,
                });
                self.set_status("Yanked from kill-ring");
            }
            Err(err) => self.set_status(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(lines: &[&str], cursor: Position) -> Editor {
        let mut editor = Editor::default();
        editor
            .slot_mut()
            .store
            .replace_lines(lines.iter().map(|l| l.to_string()).collect());
        editor.slot_mut().cursor = cursor;
        editor
    }

    #[test]
    fn test_kill_line_tail() {
        let mut editor = editor_with(&["hello world", "next"], Position::new(0, 5));
        editor.kill_line();
        assert_eq!(editor.lines(), vec!["hello", "next"]);
        assert_eq!(editor.kill_ring.get(), Some(" world"));
        assert_eq!(editor.status_message.as_deref(), Some("Line cut to kill-ring"));
        assert_eq!(editor.cursor(), Position::new(0, 5));
    }

    #[test]
    fn test_kill_at_end_of_line_stores_empty() {
        let mut editor = editor_with(&["abc", "def"], Position::new(0, 3));
        editor.kill_line();
        assert_eq!(editor.lines(), vec!["abc", "def"]);
        assert_eq!(editor.kill_ring.get(), Some(""));
        assert!(editor.slot().undo.is_empty());
    }

    #[test]
    fn test_kill_line_undo() {
        let mut editor = editor_with(&["hello world"], Position::new(0, 5));
        editor.kill_line();
        editor.undo();
        assert_eq!(editor.lines(), vec!["hello world"]);
        assert_eq!(editor.cursor(), Position::new(0, 5));
    }

    #[test]
    fn test_region_without_mark() {
        let mut editor = editor_with(&["abc"], Position::new(0, 1));
        editor.delete_region();
        assert_eq!(editor.status_message.as_deref(), Some("No region selected"));
        assert_eq!(editor.lines(), vec!["abc"]);
        assert!(!editor.kill_ring.has_content());
    }

    #[test]
    fn test_region_roundtrip_single_line() {
        let mut editor = editor_with(&["the quick fox"], Position::new(0, 4));
        editor.set_mark();
        assert_eq!(editor.status_message.as_deref(), Some("Mark set"));
        editor.slot_mut().cursor = Position::new(0, 10);
        editor.delete_region();
        assert_eq!(editor.lines(), vec!["the fox"]);
        assert_eq!(editor.cursor(), Position::new(0, 4));
        assert_eq!(editor.mark(), None);
        assert_eq!(editor.kill_ring.get(), Some("quick "));

        editor.yank();
        assert_eq!(editor.lines(), vec!["the quick fox"]);
        assert_eq!(editor.cursor(), Position::new(0, 10));
        assert_eq!(editor.status_message.as_deref(), Some("Yanked from kill-ring"));
    }

    #[test]
    fn test_region_roundtrip_multi_line_mark_after_cursor() {
        let mut editor = editor_with(&["alpha", "beta", "gamma"], Position::new(2, 2));
        editor.set_mark();
        editor.slot_mut().cursor = Position::new(0, 3);
        editor.delete_region();
        assert_eq!(editor.lines(), vec!["alpmma"]);
        assert_eq!(editor.kill_ring.get(), Some("ha\nbeta\nga"));
        assert_eq!(editor.cursor(), Position::new(0, 3));

        editor.yank();
        assert_eq!(editor.lines(), vec!["alpha", "beta", "gamma"]);
        assert_eq!(editor.cursor(), Position::new(2, 2));
    }

    #[test]
    fn test_kill_line_with_mark_kills_region() {
        let mut editor = editor_with(&["abcdef"], Position::new(0, 1));
        editor.set_mark();
        editor.slot_mut().cursor = Position::new(0, 3);
        editor.kill_line();
        assert_eq!(editor.lines(), vec!["adef"]);
        assert_eq!(editor.status_message.as_deref(), Some("Region cut to kill-ring"));
    }

    #[test]
    fn test_yank_empty_ring() {
        let mut editor = editor_with(&["abc"], Position::new(0, 1));
        editor.yank();
        assert_eq!(editor.status_message.as_deref(), Some("Nothing to yank"));
        assert_eq!(editor.lines(), vec!["abc"]);
    }

    #[test]
    fn test_yank_empty_kill_breaks_line() {
        let mut editor = editor_with(&["abcd"], Position::new(0, 4));
        editor.kill_line();
        editor.slot_mut().cursor = Position::new(0, 2);
        editor.yank();
        assert_eq!(editor.lines(), vec!["ab", "cd"]);
        assert_eq!(editor.cursor(), Position::new(1, 0));
        editor.undo();
        assert_eq!(editor.lines(), vec!["abcd"]);
        assert_eq!(editor.cursor(), Position::new(0, 2));
    }

    #[test]
    fn test_kill_ring_shared_between_buffers() {
        let mut editor = editor_with(&["shared text"], Position::new(0, 6));
        editor.kill_line();
        editor.switch_buffer();
        editor.yank();
        assert_eq!(editor.lines(), vec![" text"]);
    }

    #[test]
    fn test_yank_refused_at_line_limit() {
        let mut editor = Editor::new(crate::config::EditorConfig {
            max_lines: 2,
            ..Default::default()
        });
        editor.kill_ring.kill("a\nb\nc".to_string());
        editor.yank();
        assert_eq!(editor.lines(), vec![""]);
        assert_eq!(
            editor.status_message.as_deref(),
            Some("Buffer line limit reached")
        );
    }
}
