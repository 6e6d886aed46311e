// tests/integration_test.rs - Whole-editor sessions driven by keys

mod common;
use common::{boundary, keys, validation};

use micrn::cursor::Position;
use micrn::editor::Editor;
use micrn::key::Key;
use micrn::mode::InputState;
use micrn::syntax::{HighlightKind, Language};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_newline_then_undo() {
    let mut editor = boundary::editor_with_lines(&["abc"], Position::new(0, 3));

    editor.handle_key(Key::Enter);
    assert_eq!(editor.lines(), vec!["abc", ""]);
    assert_eq!(editor.cursor(), Position::new(1, 0));

    editor.handle_key(Key::Ctrl('u'));
    assert_eq!(editor.lines(), vec!["abc"]);
    assert_eq!(editor.cursor(), Position::new(0, 3));
}

#[test]
fn test_forward_word_twice_then_delete_word_right() {
    let mut editor = boundary::editor_with_lines(&["one two three"], Position::ZERO);

    keys::meta(&mut editor, 'f');
    keys::meta(&mut editor, 'f');
    assert_eq!(editor.cursor(), Position::new(0, 8));

    editor.handle_key(Key::Escape);
    editor.handle_key(Key::Delete);
    assert_eq!(editor.lines(), vec!["one two "]);
    assert_eq!(editor.cursor(), Position::new(0, 8));
}

#[test]
fn test_yank_with_empty_kill_ring() {
    let mut editor = boundary::editor_with_lines(&["unchanged"], Position::new(0, 2));
    editor.handle_key(Key::Ctrl('y'));
    assert_eq!(editor.status_message.as_deref(), Some("Nothing to yank"));
    assert_eq!(editor.lines(), vec!["unchanged"]);
}

#[test]
fn test_incremental_search() {
    let mut editor =
        boundary::editor_with_lines(&["one", "two three", "four two"], Position::ZERO);

    editor.handle_key(Key::Ctrl('s'));
    keys::type_str(&mut editor, "two");
    assert_eq!(editor.cursor(), Position::new(1, 0));

    // Still matches at the same place
    keys::type_str(&mut editor, " ");
    assert_eq!(editor.cursor(), Position::new(1, 0));

    // No match: the last hit stays
    keys::type_str(&mut editor, "x");
    assert_eq!(editor.cursor(), Position::new(1, 0));
    assert_eq!(editor.status_message.as_deref(), Some("Search: two x"));

    editor.handle_key(Key::Escape);
    assert_eq!(editor.status_message.as_deref(), Some("Search ended"));
    assert_eq!(editor.dispatcher.state(), InputState::Normal);

    // Keys edit the buffer again
    editor.handle_key(Key::Char('!'));
    assert_eq!(editor.lines()[1], "!two three");
}

#[test]
fn test_type_kill_and_yank_session() {
    let mut editor = Editor::default();
    keys::type_str(&mut editor, "first line\nsecond line");
    assert_eq!(editor.lines(), vec!["first line", "second line"]);

    editor.handle_key(Key::Up);
    editor.handle_key(Key::Ctrl('a'));
    editor.handle_key(Key::Ctrl(' '));
    editor.handle_key(Key::Down);
    editor.handle_key(Key::Ctrl('w'));
    assert_eq!(editor.lines(), vec!["second line"]);
    assert_eq!(editor.status_message.as_deref(), Some("Region cut to kill-ring"));

    editor.handle_key(Key::Ctrl('e'));
    editor.handle_key(Key::Enter);
    editor.handle_key(Key::Ctrl('y'));
    assert_eq!(editor.lines(), vec!["second line", "first line", ""]);
    validation::assert_cursor_valid(&editor);
}

#[test]
fn test_kill_ring_survives_buffer_switch() {
    let mut editor = boundary::editor_with_lines(&["copy me"], Position::ZERO);
    editor.handle_key(Key::Ctrl('k'));
    assert_eq!(editor.lines(), vec![""]);

    keys::ctrl_x(&mut editor, Key::Ctrl('x'));
    assert_eq!(editor.status_message.as_deref(), Some("Switched to buffer 2"));
    editor.handle_key(Key::Ctrl('y'));
    assert_eq!(editor.lines(), vec!["copy me"]);

    // Undo history stays with its buffer
    keys::ctrl_x(&mut editor, Key::Ctrl('x'));
    editor.handle_key(Key::Ctrl('u'));
    assert_eq!(editor.lines(), vec!["copy me"]);
    keys::ctrl_x(&mut editor, Key::Ctrl('x'));
    assert_eq!(editor.lines(), vec!["copy me"]);
    editor.handle_key(Key::Ctrl('u'));
    assert_eq!(editor.lines(), vec![""]);
}

#[test]
fn test_load_edit_save_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("test.txt");
    fs::write(&file_path, "Hello\nWorld\n").unwrap();

    let mut editor = Editor::default();
    editor.open_files(&[file_path.clone()]);
    assert_eq!(editor.lines(), vec!["Hello", "World"]);

    editor.handle_key(Key::Ctrl('e'));
    editor.handle_key(Key::Char('!'));
    assert!(!keys::ctrl_x(&mut editor, Key::Ctrl('s')));

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "Hello!\nWorld\n");
    assert_eq!(
        editor.status_message,
        Some(format!("Saved {}", file_path.display()))
    );
}

#[test]
fn test_load_latin1_source_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("latin1.c");
    fs::write(&file_path, b"int caf\xe9 = 1;\nreturn 0;\n").unwrap();

    let mut editor = Editor::default();
    editor.load_file(&file_path);
    assert_eq!(
        editor.status_message,
        Some(format!("Loaded {}", file_path.display()))
    );
    assert_eq!(editor.lines(), vec!["int caf\u{fffd} = 1;", "return 0;"]);
    assert_eq!(editor.slot().language(), Language::CLike);
}

#[test]
fn test_highlighting_follows_file_type() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("main.c");
    fs::write(&file_path, "#include <stdio.h>\nint x = 42; // answer\n").unwrap();

    let mut editor = Editor::default();
    editor.load_file(&file_path);
    assert_eq!(editor.slot().language(), Language::CLike);

    let lines = editor.visible_lines();
    assert_eq!(lines[0].runs[0].1, HighlightKind::Preprocessor);
    let kinds: Vec<HighlightKind> = lines[1].runs.iter().map(|(_, k)| *k).collect();
    assert!(kinds.contains(&HighlightKind::Keyword));
    assert!(kinds.contains(&HighlightKind::Number));
    assert_eq!(lines[1].runs.last().unwrap().1, HighlightKind::Comment);
}

#[test]
fn test_edit_reopens_block_comment_below() {
    let mut editor = boundary::editor_with_lines(&["x", "int y;"], Position::ZERO);
    editor.slot_mut().highlighter.set_language(Language::CLike);
    let before = editor.visible_lines();
    assert_eq!(before[1].runs[0].1, HighlightKind::Keyword);

    keys::type_str(&mut editor, "/*");
    let after = editor.visible_lines();
    assert_eq!(
        after[1].runs,
        vec![("int y;".to_string(), HighlightKind::Comment)]
    );
}

#[test]
fn test_quit_sequence() {
    let mut editor = Editor::default();
    assert!(!editor.handle_key(Key::Ctrl('c')));
    assert!(keys::ctrl_x(&mut editor, Key::Ctrl('c')));
}
