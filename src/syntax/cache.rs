// Block-comment carry state per line

use crate::buffer::LineStore;
use crate::syntax::Language;
use crate::syntax::highlighter::highlight;

/// Remembers, for a prefix of the buffer, whether each line starts inside
/// a block comment.
///
/// Entry `i` is the flag carried into line `i`. Entries are only ever
/// computed in order from line 0, so the cached prefix is always
/// consistent with the lines above it. Editing line `n` truncates the
/// prefix to `n + 1` entries.
#[derive(Debug, Clone, Default)]
pub struct CarryCache {
    carried: Vec<bool>,
}

impl CarryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop flags for every line after `line`. The flag carried into
    /// `line` itself only depends on earlier lines and stays valid.
    pub fn invalidate_from(&mut self, line: usize) {
        self.carried.truncate(line + 1);
    }

    pub fn clear(&mut self) {
        self.carried.clear();
    }

    /// Number of lines whose incoming flag is known.
    pub fn len(&self) -> usize {
        self.carried.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carried.is_empty()
    }

    /// Flag carried into `line`, lexing any lines above it not yet seen.
    pub fn carry_into(&mut self, line: usize, store: &LineStore, language: Language) -> bool {
        if self.carried.is_empty() {
            self.carried.push(false);
        }
        while self.carried.len() <= line {
            let prev = self.carried.len() - 1;
            let text = store.line(prev).unwrap_or_default();
            let (_, out) = highlight(&text, language, self.carried[prev]);
            self.carried.push(out);
        }
        self.carried[line]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carry_through_comment() {
        let store = LineStore::from_lines(&["/* start", "still in comment", "end */ code", "x"]);
        let mut cache = CarryCache::new();
        assert!(!cache.carry_into(0, &store, Language::CLike));
        assert!(cache.carry_into(1, &store, Language::CLike));
        assert!(cache.carry_into(2, &store, Language::CLike));
        assert!(!cache.carry_into(3, &store, Language::CLike));
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_invalidate_keeps_prefix() {
        let store = LineStore::from_lines(&["a", "b", "c", "d"]);
        let mut cache = CarryCache::new();
        cache.carry_into(3, &store, Language::CLike);
        cache.invalidate_from(1);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_recomputes_after_edit() {
        let mut store = LineStore::from_lines(&["int x;", "y"]);
        let mut cache = CarryCache::new();
        assert!(!cache.carry_into(1, &store, Language::CLike));

        store.insert_text(crate::cursor::Position::new(0, 0), "/* ");
        cache.invalidate_from(0);
        assert!(cache.carry_into(1, &store, Language::CLike));
    }
}
