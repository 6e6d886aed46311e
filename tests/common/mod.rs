// Common test utilities for driving the editor

use micrn::cursor::Position;
use micrn::editor::Editor;
use micrn::key::Key;

/// Builders for editors in a known state
pub mod boundary {
    use super::*;

    /// Editor whose active buffer holds `lines`, cursor at `cursor`
    pub fn editor_with_lines(lines: &[&str], cursor: Position) -> Editor {
        let mut editor = Editor::default();
        editor
            .slot_mut()
            .store
            .replace_lines(lines.iter().map(|l| l.to_string()).collect());
        editor.slot_mut().cursor = cursor;
        editor
    }

    /// Positions worth probing: the start, one-past-end and last char of
    /// every line
    #[allow(dead_code)]
    pub fn boundary_positions(editor: &Editor) -> Vec<Position> {
        let store = &editor.slot().store;
        let mut positions = Vec::new();
        for line in 0..store.line_count() {
            let len = store.line_len(line);
            positions.push(Position::new(line, 0));
            if len > 0 {
                positions.push(Position::new(line, len - 1));
            }
            positions.push(Position::new(line, len));
        }
        positions
    }
}

/// Key-level input helpers
pub mod keys {
    use super::*;

    /// Type printable text one key at a time
    #[allow(dead_code)]
    pub fn type_str(editor: &mut Editor, text: &str) {
        for c in text.chars() {
            let key = if c == '\n' { Key::Enter } else { Key::Char(c) };
            editor.handle_key(key);
        }
    }

    /// Escape followed by `c`, as the terminal sends Alt+c
    #[allow(dead_code)]
    pub fn meta(editor: &mut Editor, c: char) {
        editor.handle_key(Key::Escape);
        editor.handle_key(Key::Char(c));
    }

    /// `C-x` followed by `key`
    #[allow(dead_code)]
    pub fn ctrl_x(editor: &mut Editor, key: Key) -> bool {
        editor.handle_key(Key::Ctrl('x'));
        editor.handle_key(key)
    }
}

/// Validation utilities for checking invariants
pub mod validation {
    use super::*;

    /// Assert cursor is in valid position
    #[allow(dead_code)]
    pub fn assert_cursor_valid(editor: &Editor) {
        let store = &editor.slot().store;
        let cursor = editor.cursor();
        assert!(
            cursor.line < store.line_count(),
            "Cursor line {} out of bounds (line_count: {})",
            cursor.line,
            store.line_count()
        );
        assert!(
            cursor.col <= store.line_len(cursor.line),
            "Cursor col {} out of bounds for line {} (line_len: {})",
            cursor.col,
            cursor.line,
            store.line_len(cursor.line)
        );
    }
}
