// buffer.rs - Line store backing one editor buffer

use crate::config::EditorConfig;
use crate::cursor::{Position, end_after_insert};
use crate::error::EditorError;
use log::debug;
use ropey::Rope;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// A mutation refused because it would break a configured ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CapacityError {
    #[error("Line length limit reached")]
    LineTooLong,
    #[error("Buffer line limit reached")]
    TooManyLines,
}

/// Ordered sequence of lines for one buffer.
///
/// The text lives in a rope whose only line break is `\n`, so line `i` of
/// the store is line `i` of the rope without its terminator. There is
/// always at least one line.
#[derive(Debug, Clone)]
pub struct LineStore {
    rope: Rope,
    max_lines: usize,
    max_line_len: usize,
    pub modified: bool,
}

impl Default for LineStore {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

/// Chars that may be typed into a line.
pub fn is_printable(ch: char) -> bool {
    !ch.is_control()
}

impl LineStore {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            rope: Rope::new(),
            max_lines: config.max_lines,
            max_line_len: config.max_line_len,
            modified: false,
        }
    }

    /// Build a store holding exactly `lines`, with default limits.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut store = Self::default();
        store.replace_lines(lines.iter().map(|l| l.as_ref().to_string()).collect());
        store
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx < self.line_count() {
            let mut line = self.rope.line(line_idx).to_string();
            if line.ends_with('\n') {
                line.pop();
            }
            Some(line)
        } else {
            None
        }
    }

    /// Length of a line in chars, excluding its terminator.
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx >= self.line_count() {
            return 0;
        }
        let slice = self.rope.line(line_idx);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    pub fn char_at(&self, pos: Position) -> Option<char> {
        if pos.col < self.line_len(pos.line) {
            Some(self.rope.char(self.char_index(pos)))
        } else {
            None
        }
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count()).filter_map(|i| self.line(i)).collect()
    }

    /// Whole buffer joined with `\n`, no trailing terminator.
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    pub fn end_position(&self) -> Position {
        let last = self.line_count() - 1;
        Position::new(last, self.line_len(last))
    }

    pub fn is_valid(&self, pos: Position) -> bool {
        pos.line < self.line_count() && pos.col <= self.line_len(pos.line)
    }

    /// Nearest valid position.
    pub fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.line_count() - 1);
        Position::new(line, pos.col.min(self.line_len(line)))
    }

    fn char_index(&self, pos: Position) -> usize {
        debug_assert!(self.is_valid(pos), "position {pos:?} out of bounds");
        self.rope.line_to_char(pos.line) + pos.col
    }

    /// Insert one printable char. Returns `false` when the char is not
    /// printable or the line is already at its length limit.
    pub fn insert_char(&mut self, pos: Position, ch: char) -> bool {
        if !is_printable(ch) || self.line_len(pos.line) >= self.max_line_len {
            return false;
        }
        let idx = self.char_index(pos);
        self.rope.insert_char(idx, ch);
        self.modified = true;
        true
    }

    /// Remove the char at `pos` within its line.
    pub fn remove_char(&mut self, pos: Position) -> Option<char> {
        let ch = self.char_at(pos)?;
        let idx = self.char_index(pos);
        self.rope.remove(idx..idx + 1);
        self.modified = true;
        Some(ch)
    }

    /// Break the line at `pos`, moving the tail onto a new following line.
    pub fn split_line(&mut self, pos: Position) -> Result<(), CapacityError> {
        if self.line_count() >= self.max_lines {
            debug!("split refused at {pos:?}: {} lines", self.line_count());
            return Err(CapacityError::TooManyLines);
        }
        let idx = self.char_index(pos);
        self.rope.insert_char(idx, '\n');
        self.modified = true;
        Ok(())
    }

    /// Append line `line_idx + 1` onto `line_idx`. Returns the join column,
    /// or `None` when `line_idx` is the last line. A join whose result
    /// would exceed `max_line_len` is refused.
    pub fn join_with_next(&mut self, line_idx: usize) -> Result<Option<usize>, CapacityError> {
        if line_idx + 1 >= self.line_count() {
            return Ok(None);
        }
        let col = self.line_len(line_idx);
        if col + self.line_len(line_idx + 1) > self.max_line_len {
            debug!("join refused at line {line_idx}");
            return Err(CapacityError::LineTooLong);
        }
        let idx = self.rope.line_to_char(line_idx) + col;
        self.rope.remove(idx..idx + 1);
        self.modified = true;
        Ok(Some(col))
    }

    /// Insert `lines` at `pos` as a paste: the first line continues the
    /// prefix, the line's tail follows the last one. A single empty line
    /// stands for a bare line break. Returns the cursor after the paste.
    pub fn insert_block<S: AsRef<str>>(
        &mut self,
        pos: Position,
        lines: &[S],
    ) -> Result<Position, CapacityError> {
        let text = block_text(lines);
        let added = text.matches('\n').count();
        if self.line_count() + added > self.max_lines {
            return Err(CapacityError::TooManyLines);
        }

        let prefix = pos.col;
        let tail = self.line_len(pos.line) - pos.col;
        let pieces: Vec<&str> = text.split('\n').collect();
        let first = prefix + pieces[0].chars().count();
        let last = pieces[pieces.len() - 1].chars().count() + tail;
        let widest_middle = pieces
            .iter()
            .skip(1)
            .take(pieces.len().saturating_sub(2))
            .map(|p| p.chars().count())
            .max()
            .unwrap_or(0);
        let too_long = if pieces.len() == 1 {
            first + tail > self.max_line_len
        } else {
            first > self.max_line_len || last > self.max_line_len || widest_middle > self.max_line_len
        };
        if too_long {
            return Err(CapacityError::LineTooLong);
        }

        Ok(self.insert_text(pos, &text))
    }

    /// Raw inline insertion of `text` (which may contain `\n`) without
    /// limit checks. Returns the position just past the inserted text.
    pub fn insert_text(&mut self, pos: Position, text: &str) -> Position {
        let idx = self.char_index(pos);
        self.rope.insert(idx, text);
        self.modified = true;
        end_after_insert(pos, text)
    }

    /// Text between two positions, lines joined with `\n`.
    pub fn text_range(&self, start: Position, end: Position) -> String {
        let from = self.char_index(start);
        let to = self.char_index(end);
        self.rope.slice(from..to).to_string()
    }

    /// Remove and return the text between two positions.
    pub fn remove_text(&mut self, start: Position, end: Position) -> String {
        let from = self.char_index(start);
        let to = self.char_index(end);
        let removed = self.rope.slice(from..to).to_string();
        if from < to {
            self.rope.remove(from..to);
            self.modified = true;
        }
        removed
    }

    /// Delete `count` whole lines starting at `line_idx`. The store keeps
    /// at least one (empty) line.
    pub fn remove_range(&mut self, line_idx: usize, count: usize) {
        let total = self.line_count();
        if count == 0 || line_idx >= total {
            return;
        }
        let end_line = (line_idx + count).min(total);
        let (from, to) = if end_line < total {
            (
                self.rope.line_to_char(line_idx),
                self.rope.line_to_char(end_line),
            )
        } else if line_idx > 0 {
            // Dropping the tail of the buffer also drops the break before it.
            (self.rope.line_to_char(line_idx) - 1, self.rope.len_chars())
        } else {
            (0, self.rope.len_chars())
        };
        self.rope.remove(from..to);
        self.modified = true;
    }

    /// Replace the whole content.
    pub fn replace_lines(&mut self, lines: Vec<String>) {
        self.rope = Rope::from_str(&lines.join("\n"));
        self.modified = false;
    }

    /// Read a file line by line, truncating overlong lines and stopping at
    /// the line limit. An empty file yields one empty line. Bytes that are
    /// not UTF-8 become U+FFFD; the rest of the line is kept.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), EditorError> {
        let path = path.as_ref();
        let open_err = |source| EditorError::Open {
            path: path.to_path_buf(),
            source,
        };
        let reader = BufReader::new(File::open(path).map_err(open_err)?);
        let mut lines: Vec<String> = Vec::new();
        for raw in reader.split(b'\n') {
            if lines.len() >= self.max_lines {
                debug!("{} truncated at {} lines", path.display(), self.max_lines);
                break;
            }
            let mut raw = raw.map_err(open_err)?;
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
            let line = String::from_utf8_lossy(&raw);
            lines.push(line.chars().take(self.max_line_len).collect());
        }
        self.replace_lines(lines);
        Ok(())
    }

    /// Write every line followed by `\n`.
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), EditorError> {
        let path = path.as_ref();
        let save_err = |source| EditorError::Save {
            path: path.to_path_buf(),
            source,
        };
        let mut writer = BufWriter::new(File::create(path).map_err(save_err)?);
        for chunk in self.rope.chunks() {
            writer.write_all(chunk.as_bytes()).map_err(save_err)?;
        }
        writer.write_all(b"\n").map_err(save_err)?;
        writer.flush().map_err(save_err)?;
        self.modified = false;
        Ok(())
    }
}

/// Join paste lines into inline text; a lone empty line is a line break.
pub fn block_text<S: AsRef<str>>(lines: &[S]) -> String {
    match lines {
        [] => String::new(),
        [only] if only.as_ref().is_empty() => "\n".to_string(),
        _ => lines
            .iter()
            .map(|l| l.as_ref())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
