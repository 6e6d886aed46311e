// src/key.rs - Abstract key events

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::fmt;

/// One key as the dispatcher sees it, independent of the terminal layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Control chord; letters are lowercase, `' '` is Ctrl-Space.
    Ctrl(char),
    Enter,
    Backspace,
    Delete,
    Escape,
    Up,
    Down,
    Left,
    Right,
    /// Anything the editor has no use for.
    Unknown,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{c}"),
            Key::Ctrl(' ') => f.write_str("C-SPC"),
            Key::Ctrl(c) => write!(f, "C-{c}"),
            Key::Enter => f.write_str("RET"),
            Key::Backspace => f.write_str("DEL"),
            Key::Delete => f.write_str("<delete>"),
            Key::Escape => f.write_str("ESC"),
            Key::Up => f.write_str("<up>"),
            Key::Down => f.write_str("<down>"),
            Key::Left => f.write_str("<left>"),
            Key::Right => f.write_str("<right>"),
            Key::Unknown => f.write_str("<unknown>"),
        }
    }
}

/// Translate a crossterm key event. Alt chords become Escape followed by
/// the plain key; releases produce nothing.
pub fn translate(event: &KeyEvent) -> Vec<Key> {
    if event.kind == KeyEventKind::Release {
        return Vec::new();
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let base = match event.code {
        KeyCode::Char(' ') | KeyCode::Char('@') if ctrl => Key::Ctrl(' '),
        KeyCode::Char('h') if ctrl => Key::Backspace,
        KeyCode::Char(c) if ctrl => Key::Ctrl(c.to_ascii_lowercase()),
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Tab => Key::Ctrl('i'),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Null => Key::Ctrl(' '),
        _ => Key::Unknown,
    };

    if event.modifiers.contains(KeyModifiers::ALT) && base != Key::Escape {
        vec![Key::Escape, base]
    } else {
        vec![base]
    }
}
