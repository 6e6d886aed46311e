use std::time::Instant;

/// Where the next key goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputState {
    Normal,
    /// Escape was pressed; the next key picks a Meta command.
    MetaPrefix,
    /// Ctrl-X was pressed at `since`; the next key picks a file command.
    CtrlXPrefix { since: Instant },
    /// Keys edit the incremental search query.
    Searching,
    /// Keys edit the filename prompt.
    Prompting,
}

impl InputState {
    /// Short label for the status line.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            InputState::Normal => None,
            InputState::MetaPrefix => Some("M-"),
            InputState::CtrlXPrefix { .. } => Some("C-x-"),
            InputState::Searching => Some("I-search"),
            InputState::Prompting => Some("Prompt"),
        }
    }
}
