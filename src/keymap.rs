// src/keymap.rs - Key to command tables

use crate::command::Command;
use crate::key::Key;
use std::collections::HashMap;

/// Fixed binding tables, one per input state that uses a table.
#[derive(Debug, Clone)]
pub struct KeyMap {
    normal: HashMap<Key, Command>,
    meta: HashMap<Key, Command>,
    ctrl_x: HashMap<Key, Command>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let normal = HashMap::from([
            (Key::Ctrl('u'), Command::Undo),
            (Key::Ctrl('k'), Command::KillLine),
            (Key::Ctrl('y'), Command::Yank),
            (Key::Ctrl(' '), Command::SetMark),
            (Key::Ctrl('w'), Command::DeleteRegion),
            (Key::Ctrl('s'), Command::StartSearch),
            (Key::Ctrl('a'), Command::MoveLineStart),
            (Key::Ctrl('e'), Command::MoveLineEnd),
            (Key::Ctrl('i'), Command::ShowInfo),
            (Key::Ctrl('j'), Command::InsertNewline),
            (Key::Enter, Command::InsertNewline),
            (Key::Backspace, Command::DeleteCharBefore),
            (Key::Delete, Command::DeleteCharAfter),
            (Key::Ctrl('d'), Command::DeleteCharBefore),
            (Key::Up, Command::MoveUp),
            (Key::Ctrl('p'), Command::MoveUp),
            (Key::Down, Command::MoveDown),
            (Key::Ctrl('n'), Command::MoveDown),
            (Key::Left, Command::MoveLeft),
            (Key::Ctrl('b'), Command::MoveLeft),
            (Key::Right, Command::MoveRight),
            (Key::Ctrl('f'), Command::MoveRight),
        ]);

        let meta = HashMap::from([
            (Key::Char('b'), Command::MoveWordBackward),
            (Key::Char('f'), Command::MoveWordForward),
            (Key::Char('{'), Command::MoveParagraphBackward),
            (Key::Char('}'), Command::MoveParagraphForward),
            (Key::Backspace, Command::DeleteWordLeft),
            (Key::Delete, Command::DeleteWordRight),
        ]);

        let ctrl_x = HashMap::from([
            (Key::Ctrl('s'), Command::SaveFile),
            (Key::Ctrl('c'), Command::Quit),
            (Key::Ctrl('x'), Command::SwitchBuffer),
        ]);

        Self {
            normal,
            meta,
            ctrl_x,
        }
    }
}

impl KeyMap {
    /// Binding in the normal table, falling back to self-insertion for
    /// printable characters.
    pub fn lookup(&self, key: Key) -> Option<Command> {
        if let Some(cmd) = self.normal.get(&key) {
            return Some(cmd.clone());
        }
        match key {
            Key::Char(c) if !c.is_control() => Some(Command::InsertChar(c)),
            _ => None,
        }
    }

    pub fn lookup_meta(&self, key: Key) -> Option<Command> {
        self.meta.get(&key).cloned()
    }

    pub fn lookup_ctrl_x(&self, key: Key) -> Option<Command> {
        self.ctrl_x.get(&key).cloned()
    }
}
