// src/buffer_set.rs - The two editing buffers

use crate::buffer::LineStore;
use crate::config::EditorConfig;
use crate::cursor::Position;
use crate::syntax::{Language, SyntaxHighlighter};
use crate::undo::UndoLog;
use crate::viewport::Viewport;
use log::debug;
use std::path::{Path, PathBuf};

pub const BUFFER_COUNT: usize = 2;

/// Everything that belongs to one buffer.
#[derive(Debug, Clone)]
pub struct BufferSlot {
    pub store: LineStore,
    pub filename: Option<PathBuf>,
    pub highlighter: SyntaxHighlighter,
    pub cursor: Position,
    pub mark: Option<Position>,
    pub viewport: Viewport,
    pub undo: UndoLog,
}

impl BufferSlot {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            store: LineStore::new(config),
            filename: None,
            highlighter: SyntaxHighlighter::default(),
            cursor: Position::ZERO,
            mark: None,
            viewport: Viewport::default(),
            undo: UndoLog::new(config.undo_capacity),
        }
    }

    pub fn language(&self) -> Language {
        self.highlighter.language()
    }

    /// Set the filename and re-derive the language from its extension.
    pub fn set_filename(&mut self, path: &Path) {
        self.filename = Some(path.to_path_buf());
        self.refresh_language();
    }

    pub fn refresh_language(&mut self) {
        let language = self
            .filename
            .as_deref()
            .map(Language::from_path)
            .unwrap_or_default();
        self.highlighter.set_language(language);
    }

    /// Name for status messages.
    pub fn display_name(&self) -> String {
        self.filename
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "[No Name]".to_string())
    }

    /// Call after any change to the text at or below `line`.
    pub fn touched(&mut self, line: usize) {
        self.highlighter.invalidate_from(line);
    }
}

/// Two buffers and the index of the one being edited.
#[derive(Debug, Clone)]
pub struct BufferSet {
    slots: [BufferSlot; BUFFER_COUNT],
    active: usize,
}

impl BufferSet {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            slots: [BufferSlot::new(config), BufferSlot::new(config)],
            active: 0,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &BufferSlot {
        &self.slots[self.active]
    }

    pub fn active_mut(&mut self) -> &mut BufferSlot {
        &mut self.slots[self.active]
    }

    /// Make the other buffer active and return its index.
    pub fn switch(&mut self) -> usize {
        self.active = (self.active + 1) % BUFFER_COUNT;
        let viewport = self.slots[1 - self.active].viewport;
        let slot = &mut self.slots[self.active];
        slot.viewport.resize(viewport.rows, viewport.cols);
        slot.refresh_language();
        debug!("switched to buffer {}", self.active + 1);
        self.active
    }
}
