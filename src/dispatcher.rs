// src/dispatcher.rs - Emacs-style prefix key state machine

use crate::command::Command;
use crate::key::Key;
use crate::keymap::KeyMap;
use crate::mode::InputState;
use log::trace;
use std::time::{Duration, Instant};

/// Result of feeding one key to the dispatcher
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// Complete command ready to execute
    Command(Command),
    /// A prefix key was consumed; more keys needed
    Pending,
    /// Nothing to run; show this on the status line
    Message(String),
    /// Key has no meaning in the current state
    Ignored,
}

/// Turns a stream of keys into commands.
///
/// Prefix states consume exactly one further key and always fall back to
/// `Normal`, whatever that key was.
#[derive(Debug, Clone)]
pub struct InputDispatcher {
    state: InputState,
    keymap: KeyMap,
    prefix_timeout: Duration,
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new(KeyMap::default(), Duration::from_secs(1))
    }
}

impl InputDispatcher {
    pub fn new(keymap: KeyMap, prefix_timeout: Duration) -> Self {
        Self {
            state: InputState::Normal,
            keymap,
            prefix_timeout,
        }
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    /// Back to `Normal`, dropping any pending prefix
    pub fn reset(&mut self) {
        self.state = InputState::Normal;
    }

    /// Route following keys to the search query.
    pub fn begin_search(&mut self) {
        self.state = InputState::Searching;
    }

    /// Route following keys to the filename prompt.
    pub fn begin_prompt(&mut self) {
        self.state = InputState::Prompting;
    }

    pub fn process_key(&mut self, key: Key) -> Dispatch {
        self.process_key_at(key, Instant::now())
    }

    /// Same as [`process_key`](Self::process_key) with an explicit clock.
    pub fn process_key_at(&mut self, key: Key, now: Instant) -> Dispatch {
        trace!("key {key} in {:?}", self.state);
        match self.state {
            InputState::Normal => self.process_normal(key, now),
            InputState::MetaPrefix => self.process_meta(key),
            InputState::CtrlXPrefix { since } => self.process_ctrl_x(key, since, now),
            InputState::Searching => self.process_search(key),
            InputState::Prompting => self.process_prompt(key),
        }
    }

    fn process_normal(&mut self, key: Key, now: Instant) -> Dispatch {
        match key {
            Key::Escape => {
                self.state = InputState::MetaPrefix;
                Dispatch::Pending
            }
            Key::Ctrl('x') => {
                self.state = InputState::CtrlXPrefix { since: now };
                Dispatch::Pending
            }
            _ => match self.keymap.lookup(key) {
                Some(cmd) => Dispatch::Command(cmd),
                None => Dispatch::Message(format!("Unknown key: {key}")),
            },
        }
    }

    fn process_meta(&mut self, key: Key) -> Dispatch {
        self.reset();
        match self.keymap.lookup_meta(key) {
            Some(cmd) => Dispatch::Command(cmd),
            None => Dispatch::Message(format!("Unknown Alt sequence: {key}")),
        }
    }

    fn process_ctrl_x(&mut self, key: Key, since: Instant, now: Instant) -> Dispatch {
        self.reset();
        if now.saturating_duration_since(since) > self.prefix_timeout {
            return Dispatch::Message("Ctrl+X timeout".to_string());
        }
        match self.keymap.lookup_ctrl_x(key) {
            Some(cmd) => Dispatch::Command(cmd),
            None => Dispatch::Message(format!("Unknown Ctrl+X sequence: {key}")),
        }
    }

    fn process_search(&mut self, key: Key) -> Dispatch {
        match key {
            Key::Escape | Key::Enter => {
                self.reset();
                Dispatch::Command(Command::EndSearch)
            }
            Key::Backspace => Dispatch::Command(Command::SearchBackspace),
            Key::Char(c) if !c.is_control() => Dispatch::Command(Command::SearchInput(c)),
            _ => Dispatch::Ignored,
        }
    }

    fn process_prompt(&mut self, key: Key) -> Dispatch {
        match key {
            Key::Enter => {
                self.reset();
                Dispatch::Command(Command::PromptSubmit)
            }
            Key::Escape | Key::Ctrl('g') => {
                self.reset();
                Dispatch::Command(Command::PromptCancel)
            }
            Key::Backspace => Dispatch::Command(Command::PromptBackspace),
            Key::Char(c) if !c.is_control() => Dispatch::Command(Command::PromptInput(c)),
            _ => Dispatch::Ignored,
        }
    }
}
