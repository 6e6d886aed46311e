// src/kill_ring.rs - Single-slot kill-ring shared by both buffers

use log::debug;

/// Holds the most recently killed text.
///
/// Every kill overwrites the slot; yanking only reads it. The text may
/// contain embedded `\n` when the kill spanned several lines, and may be
/// empty (killing at the end of a line), which is different from never
/// having killed anything.
#[derive(Debug, Clone, Default)]
pub struct KillRing {
    slot: Option<String>,
}

impl KillRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store killed text, replacing whatever was there.
    pub fn kill(&mut self, text: String) {
        debug!("kill-ring <- {} chars", text.chars().count());
        self.slot = Some(text);
    }

    pub fn get(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// The stored text split on line breaks, ready for a block insert.
    pub fn lines(&self) -> Option<Vec<&str>> {
        self.get().map(|text| text.split('\n').collect())
    }

    pub fn has_content(&self) -> bool {
        self.slot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ring() {
        let ring = KillRing::new();
        assert!(!ring.has_content());
        assert_eq!(ring.get(), None);
        assert_eq!(ring.lines(), None);
    }

    #[test]
    fn test_kill_overwrites() {
        let mut ring = KillRing::new();
        ring.kill("first".to_string());
        ring.kill("second".to_string());
        assert_eq!(ring.get(), Some("second"));
    }

    #[test]
    fn test_empty_kill_is_content() {
        let mut ring = KillRing::new();
        ring.kill(String::new());
        assert!(ring.has_content());
        assert_eq!(ring.lines(), Some(vec![""]));
    }

    #[test]
    fn test_multi_line_split() {
        let mut ring = KillRing::new();
        ring.kill("ne\ntwo\nth".to_string());
        assert_eq!(ring.lines(), Some(vec!["ne", "two", "th"]));
    }
}
