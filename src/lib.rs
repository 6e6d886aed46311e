// lib.rs - Library root for the micrn editor

pub mod buffer;
pub mod buffer_set;
pub mod cli;
pub mod command;
pub mod config;
pub mod cursor;
pub mod dispatcher;
pub mod editor;
pub mod error;
pub mod key;
pub mod keymap;
pub mod kill_ring;
pub mod mode;
pub mod motion;
pub mod search;
pub mod syntax;
pub mod ui;
pub mod undo;
pub mod viewport;
