// Loading, saving and the filename prompt

use super::Editor;
use crate::buffer_set::BUFFER_COUNT;
use crate::cursor::Position;
use crate::error::EditorError;
use log::{info, warn};
use std::path::{Path, PathBuf};

const SAVE_PROMPT: &str = "Enter filename to save: ";

impl Editor {
    /// Replace the active buffer with the contents of `path`. On failure
    /// the buffer and its filename are left as they were.
    pub fn load_file(&mut self, path: &Path) {
        let slot = self.slot_mut();
        match slot.store.load_from_file(path) {
            Ok(()) => {
                slot.set_filename(path);
                slot.cursor = Position::ZERO;
                slot.mark = None;
                slot.viewport.offset_line = 0;
                slot.viewport.offset_col = 0;
                slot.undo.clear();
                slot.touched(0);
                info!("loaded {} ({} lines)", path.display(), slot.store.line_count());
                let name = slot.display_name();
                self.set_status(format!("Loaded {name}"));
            }
            Err(err) => {
                warn!("{err}: {:?}", std::error::Error::source(&err));
                self.set_status(err.to_string());
            }
        }
    }

    /// Load up to one file per buffer, then return to buffer 1. The status
    /// line reports buffer 1's load.
    pub fn open_files(&mut self, files: &[PathBuf]) {
        let mut first_status = None;
        for (index, path) in files.iter().take(BUFFER_COUNT).enumerate() {
            if self.buffers.active_index() != index {
                self.buffers.switch();
            }
            self.load_file(path);
            if index == 0 {
                first_status = self.status_message.clone();
            }
        }
        if self.buffers.active_index() != 0 {
            self.buffers.switch();
        }
        self.status_message = first_status;
    }

    /// Write the active buffer to its file, or open the filename prompt
    /// when it has none.
    pub fn save_file(&mut self) {
        let Some(path) = self.slot().filename.clone() else {
            self.prompt = Some(String::new());
            self.dispatcher.begin_prompt();
            self.set_status(SAVE_PROMPT);
            return;
        };
        self.write_to(&path);
    }

    fn write_to(&mut self, path: &Path) {
        match self.slot_mut().store.save_to_file(path) {
            Ok(()) => {
                info!("saved {}", path.display());
                self.set_status(format!("Saved {}", path.display()));
            }
            Err(err) => {
                warn!("{err}: {:?}", std::error::Error::source(&err));
                self.set_status(err.to_string());
            }
        }
    }

    pub fn prompt_input(&mut self, c: char) {
        if let Some(name) = self.prompt.as_mut() {
            name.push(c);
        }
        self.show_prompt();
    }

    pub fn prompt_backspace(&mut self) {
        if let Some(name) = self.prompt.as_mut() {
            name.pop();
        }
        self.show_prompt();
    }

    fn show_prompt(&mut self) {
        let name = self.prompt.clone().unwrap_or_default();
        self.set_status(format!("{SAVE_PROMPT}{name}"));
    }

    /// Accept the typed filename, attach it to the buffer and save.
    pub fn prompt_submit(&mut self) {
        let name = self.prompt.take().unwrap_or_default();
        match validate_filename(&name) {
            Ok(path) => {
                self.slot_mut().set_filename(&path);
                self.write_to(&path);
            }
            Err(err) => self.set_status(err.to_string()),
        }
    }

    pub fn prompt_cancel(&mut self) {
        self.prompt = None;
        self.dispatcher.reset();
    }
}

fn validate_filename(name: &str) -> Result<PathBuf, EditorError> {
    let name = name.trim();
    if name.is_empty() || name.contains('\n') {
        return Err(EditorError::InvalidFilename);
    }
    Ok(PathBuf::from(name))
}
