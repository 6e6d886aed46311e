// src/editor/mod.rs - Core editor coordinator

mod editing;
mod file;
mod navigation;
mod region;

use crate::buffer_set::{BufferSet, BufferSlot};
use crate::command::Command;
use crate::config::EditorConfig;
use crate::cursor::Position;
use crate::dispatcher::{Dispatch, InputDispatcher};
use crate::key::Key;
use crate::keymap::KeyMap;
use crate::kill_ring::KillRing;
use crate::search::SearchController;
use crate::syntax::{HighlightKind, styled_runs};
use log::debug;

pub const INFO_MESSAGE: &str = "Micrn Editor, Version 1.0";

/// One screen row of the editor pane.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleLine {
    /// 1-based line number for the gutter.
    pub number: usize,
    pub runs: Vec<(String, HighlightKind)>,
}

/// Owns both buffers and everything shared between them, and runs
/// commands against whichever buffer is active.
pub struct Editor {
    pub buffers: BufferSet,
    pub kill_ring: KillRing,
    pub search: SearchController,
    pub dispatcher: InputDispatcher,
    pub status_message: Option<String>,
    /// Filename typed so far while the save prompt is open.
    pub prompt: Option<String>,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            buffers: BufferSet::new(&config),
            kill_ring: KillRing::new(),
            search: SearchController::new(),
            dispatcher: InputDispatcher::new(KeyMap::default(), config.prefix_timeout()),
            status_message: None,
            prompt: None,
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn slot(&self) -> &BufferSlot {
        self.buffers.active()
    }

    pub fn slot_mut(&mut self) -> &mut BufferSlot {
        self.buffers.active_mut()
    }

    pub fn cursor(&self) -> Position {
        self.slot().cursor
    }

    pub fn mark(&self) -> Option<Position> {
        self.slot().mark
    }

    /// Text of the active buffer.
    pub fn lines(&self) -> Vec<String> {
        self.slot().store.lines()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Feed one key through the dispatcher. Returns true if the editor
    /// should quit.
    pub fn handle_key(&mut self, key: Key) -> bool {
        self.status_message = None;
        let quit = match self.dispatcher.process_key(key) {
            Dispatch::Command(cmd) => self.execute_command(cmd),
            Dispatch::Message(message) => {
                debug!("{message}");
                self.set_status(message);
                false
            }
            Dispatch::Pending | Dispatch::Ignored => false,
        };
        self.scroll_to_cursor();
        quit
    }

    /// Run one command. Returns true if the editor should quit.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Quit => return true,
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MoveUp => self.move_up(),
            Command::MoveDown => self.move_down(),
            Command::MoveLineStart => self.move_line_start(),
            Command::MoveLineEnd => self.move_line_end(),
            Command::MoveWordForward => self.move_word_forward(),
            Command::MoveWordBackward => self.move_word_backward(),
            Command::MoveParagraphForward => self.move_paragraph_forward(),
            Command::MoveParagraphBackward => self.move_paragraph_backward(),
            Command::InsertChar(c) => self.insert_char(c),
            Command::InsertNewline => self.insert_newline(),
            Command::DeleteCharBefore => self.delete_char_before(),
            Command::DeleteCharAfter => self.delete_char_after(),
            Command::DeleteWordLeft => self.delete_word_left(),
            Command::DeleteWordRight => self.delete_word_right(),
            Command::Undo => self.undo(),
            Command::SetMark => self.set_mark(),
            Command::KillLine => self.kill_line(),
            Command::DeleteRegion => self.delete_region(),
            Command::Yank => self.yank(),
            Command::StartSearch => self.start_search(),
            Command::SearchInput(c) => {
                self.search.push(c);
                self.update_search();
            }
            Command::SearchBackspace => {
                self.search.pop();
                self.update_search();
            }
            Command::EndSearch => self.end_search(),
            Command::PromptInput(c) => self.prompt_input(c),
            Command::PromptBackspace => self.prompt_backspace(),
            Command::PromptSubmit => self.prompt_submit(),
            Command::PromptCancel => self.prompt_cancel(),
            Command::SaveFile => self.save_file(),
            Command::SwitchBuffer => self.switch_buffer(),
            Command::ShowInfo => self.set_status(INFO_MESSAGE),
        }
        false
    }

    pub fn switch_buffer(&mut self) {
        let index = self.buffers.switch();
        self.set_status(format!("Switched to buffer {}", index + 1));
    }

    /// Terminal size changed; the text area excludes the status row and
    /// the gutter.
    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        let text_rows = rows.saturating_sub(1).max(1) as usize;
        let text_cols = cols.saturating_sub(self.config.gutter_width).max(1) as usize;
        self.slot_mut().viewport.resize(text_rows, text_cols);
        self.scroll_to_cursor();
    }

    pub fn scroll_to_cursor(&mut self) {
        let slot = self.slot_mut();
        slot.viewport.scroll_to_cursor(slot.cursor.line, slot.cursor.col);
    }

    /// Styled runs for every line in the viewport, clipped to its
    /// horizontal offset.
    pub fn visible_lines(&mut self) -> Vec<VisibleLine> {
        let slot = self.buffers.active_mut();
        let range = slot.viewport.visible_range(slot.store.line_count());
        let skip = slot.viewport.offset_col;
        let mut lines = Vec::with_capacity(range.len());
        for line in range {
            let tokens = slot.highlighter.highlight_line(&slot.store, line);
            let text = slot.store.line(line).unwrap_or_default();
            lines.push(VisibleLine {
                number: line + 1,
                runs: clip_runs(styled_runs(&text, &tokens), skip),
            });
        }
        lines
    }

    /// Cursor as `(column, row)` inside the text area.
    pub fn cursor_screen_position(&self) -> (usize, usize) {
        let slot = self.slot();
        (
            slot.cursor.col.saturating_sub(slot.viewport.offset_col),
            slot.cursor.line.saturating_sub(slot.viewport.offset_line),
        )
    }

    /// Summary shown on the status line when there is no message.
    pub fn status_summary(&self) -> String {
        let slot = self.slot();
        let modified = if slot.store.modified { " [+]" } else { "" };
        format!(
            "[{}] {}{} | {} | Ln {}, Col {}",
            self.buffers.active_index() + 1,
            slot.display_name(),
            modified,
            slot.language(),
            slot.cursor.line + 1,
            slot.cursor.col + 1,
        )
    }
}

/// Drop the first `skip` chars across a sequence of runs.
fn clip_runs(runs: Vec<(String, HighlightKind)>, mut skip: usize) -> Vec<(String, HighlightKind)> {
    if skip == 0 {
        return runs;
    }
    let mut out = Vec::with_capacity(runs.len());
    for (text, kind) in runs {
        let len = text.chars().count();
        if skip >= len {
            skip -= len;
            continue;
        }
        out.push((text.chars().skip(skip).collect(), kind));
        skip = 0;
    }
    out
}
