use crate::buffer::LineStore;
use crate::syntax::Language;
use crate::syntax::cache::CarryCache;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Normal,
    Keyword,
    String,
    Comment,
    Number,
    Preprocessor,
}

/// A styled span of one line, in char columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightToken {
    pub start: usize,
    pub end: usize,
    pub kind: HighlightKind,
}

struct Lexer<'a> {
    chars: &'a [char],
    language: Language,
    tokens: Vec<HighlightToken>,
}

impl<'a> Lexer<'a> {
    fn new(chars: &'a [char], language: Language) -> Self {
        Self {
            chars,
            language,
            tokens: Vec::new(),
        }
    }

    /// Append a span, merging it into the previous one when the kinds match.
    fn push(&mut self, start: usize, end: usize, kind: HighlightKind) {
        if start >= end {
            return;
        }
        if let Some(last) = self.tokens.last_mut()
            && last.kind == kind
            && last.end == start
        {
            last.end = end;
            return;
        }
        self.tokens.push(HighlightToken { start, end, kind });
    }

    fn starts_with(&self, at: usize, marker: &str) -> bool {
        let mut idx = at;
        for m in marker.chars() {
            if self.chars.get(idx) != Some(&m) {
                return false;
            }
            idx += 1;
        }
        true
    }

    fn find(&self, from: usize, marker: &str) -> Option<usize> {
        (from..self.chars.len()).find(|&i| self.starts_with(i, marker))
    }

    fn scan_while(&self, from: usize, pred: impl Fn(char) -> bool) -> usize {
        let mut i = from;
        while i < self.chars.len() && pred(self.chars[i]) {
            i += 1;
        }
        i
    }

    /// End (exclusive) of a string opened by the quote at `open`.
    fn string_end(&self, open: usize) -> usize {
        let quote = self.chars[open];
        let mut i = open + 1;
        while i < self.chars.len() {
            if self.chars[i] == quote && self.chars[i - 1] != '\\' {
                return i + 1;
            }
            i += 1;
        }
        self.chars.len()
    }

    fn run(mut self, carried_in: bool) -> (Vec<HighlightToken>, bool) {
        let len = self.chars.len();
        let lang = self.language;
        let mut in_comment = carried_in;
        let mut i = 0;

        while i < len {
            if in_comment {
                let start = i;
                match self.find(i, "*/") {
                    Some(close) => {
                        i = close + 2;
                        in_comment = false;
                    }
                    None => i = len,
                }
                self.push(start, i, HighlightKind::Comment);
                continue;
            }

            let c = self.chars[i];

            if lang == Language::CLike && i == 0 && c == '#' {
                let end = self.scan_while(i, |c| !c.is_whitespace());
                self.push(i, end, HighlightKind::Preprocessor);
                i = end;
                continue;
            }

            if lang.has_block_comments() && self.starts_with(i, "/*") {
                in_comment = true;
                self.push(i, i + 2, HighlightKind::Comment);
                i += 2;
                continue;
            }

            if let Some(marker) = lang.line_comment()
                && self.starts_with(i, marker)
            {
                self.push(i, len, HighlightKind::Comment);
                break;
            }

            if lang.has_strings() && (c == '"' || c == '\'') {
                let end = self.string_end(i);
                self.push(i, end, HighlightKind::String);
                i = end;
                continue;
            }

            if lang == Language::Html
                && c == '<'
                && self
                    .chars
                    .get(i + 1)
                    .is_some_and(|&n| n.is_alphabetic() || n == '!')
            {
                let close = self.scan_while(i, |c| c != '>');
                let end = (close + 1).min(len);
                self.push(i, end, HighlightKind::Keyword);
                i = end;
                continue;
            }

            if c.is_ascii_digit() {
                let end = self.scan_while(i, |c| c.is_ascii_digit() || c == '.');
                self.push(i, end, HighlightKind::Number);
                i = end;
                continue;
            }

            if c.is_alphabetic() || c == '_' {
                let end = self.scan_while(i, |c| lang.is_ident_char(c));
                let word: String = self.chars[i..end].iter().collect();
                let kind = if lang.is_keyword(&word) {
                    HighlightKind::Keyword
                } else {
                    HighlightKind::Normal
                };
                self.push(i, end, kind);
                i = end;
                continue;
            }

            self.push(i, i + 1, HighlightKind::Normal);
            i += 1;
        }

        (self.tokens, in_comment)
    }
}

/// Tokenize one line.
///
/// `carried_in` says whether the line starts inside a block comment; the
/// returned flag says whether the next line does. The flag depends only on
/// this line and `carried_in`.
pub fn highlight(line: &str, language: Language, carried_in: bool) -> (Vec<HighlightToken>, bool) {
    let chars: Vec<char> = line.chars().collect();
    Lexer::new(&chars, language).run(carried_in)
}

/// Cut `line` into `(text, kind)` runs following `tokens`.
pub fn styled_runs(line: &str, tokens: &[HighlightToken]) -> Vec<(String, HighlightKind)> {
    let chars: Vec<char> = line.chars().collect();
    tokens
        .iter()
        .filter(|t| t.start < t.end && t.end <= chars.len())
        .map(|t| (chars[t.start..t.end].iter().collect(), t.kind))
        .collect()
}

/// Per-buffer highlighter: a language plus the block-comment carry state
/// threaded through the buffer's lines.
#[derive(Debug, Clone, Default)]
pub struct SyntaxHighlighter {
    language: Language,
    carry: CarryCache,
}

impl SyntaxHighlighter {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            carry: CarryCache::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switching language invalidates every carried flag.
    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            trace!("language {} -> {}", self.language, language);
            self.language = language;
            self.carry.clear();
        }
    }

    /// Forget carry state for every line after `line`.
    pub fn invalidate_from(&mut self, line: usize) {
        self.carry.invalidate_from(line);
    }

    pub fn highlight_line(&mut self, store: &LineStore, line: usize) -> Vec<HighlightToken> {
        let carried_in = self.carry.carry_into(line, store, self.language);
        let text = store.line(line).unwrap_or_default();
        highlight(&text, self.language, carried_in).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str, language: Language, carried_in: bool) -> Vec<(String, HighlightKind)> {
        let (tokens, _) = highlight(line, language, carried_in);
        styled_runs(line, &tokens)
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(highlight("", Language::CLike, false), (vec![], false));
        assert_eq!(highlight("", Language::CLike, true), (vec![], true));
    }

    #[test]
    fn test_c_keywords_and_numbers() {
        assert_eq!(
            kinds("int x = 3.14;", Language::CLike, false),
            vec![
                ("int".into(), HighlightKind::Keyword),
                (" x = ".into(), HighlightKind::Normal),
                ("3.14".into(), HighlightKind::Number),
                (";".into(), HighlightKind::Normal),
            ]
        );
    }

    #[test]
    fn test_preprocessor_only_at_column_zero() {
        assert_eq!(
            kinds("#include <stdio.h>", Language::CLike, false),
            vec![
                ("#include".into(), HighlightKind::Preprocessor),
                (" <stdio.h>".into(), HighlightKind::Normal),
            ]
        );
        assert_eq!(
            kinds(" #x", Language::CLike, false),
            vec![(" #x".into(), HighlightKind::Normal)]
        );
    }

    #[test]
    fn test_block_comment_carry() {
        let (_, carry) = highlight("/* start", Language::CLike, false);
        assert!(carry);
        let (tokens, carry) = highlight("still in comment", Language::CLike, true);
        assert!(carry);
        assert_eq!(
            tokens,
            vec![HighlightToken {
                start: 0,
                end: 16,
                kind: HighlightKind::Comment
            }]
        );
        assert_eq!(
            kinds("end */ code", Language::CLike, true),
            vec![
                ("end */".into(), HighlightKind::Comment),
                (" code".into(), HighlightKind::Normal),
            ]
        );
    }

    #[test]
    fn test_comment_closed_on_same_line() {
        let (_, carry) = highlight("a /* b */ c", Language::CLike, false);
        assert!(!carry);
    }

    #[test]
    fn test_line_comments() {
        assert_eq!(
            kinds("x // if", Language::CLike, false),
            vec![
                ("x ".into(), HighlightKind::Normal),
                ("// if".into(), HighlightKind::Comment),
            ]
        );
        assert_eq!(
            kinds("pass # note", Language::Python, false),
            vec![
                ("pass".into(), HighlightKind::Keyword),
                (" ".into(), HighlightKind::Normal),
                ("# note".into(), HighlightKind::Comment),
            ]
        );
        assert_eq!(
            kinds("<!-- hi -->", Language::Html, false),
            vec![("<!-- hi -->".into(), HighlightKind::Comment)]
        );
    }

    #[test]
    fn test_python_has_no_block_comments() {
        let (_, carry) = highlight("/* nope", Language::Python, false);
        assert!(!carry);
    }

    #[test]
    fn test_strings_with_escapes() {
        assert_eq!(
            kinds(r#"s = "a\"b" + 'c'"#, Language::Python, false),
            vec![
                ("s = ".into(), HighlightKind::Normal),
                (r#""a\"b""#.into(), HighlightKind::String),
                (" + ".into(), HighlightKind::Normal),
                ("'c'".into(), HighlightKind::String),
            ]
        );
        assert_eq!(
            kinds("\"open", Language::CLike, false),
            vec![("\"open".into(), HighlightKind::String)]
        );
    }

    #[test]
    fn test_plain_has_no_strings() {
        assert_eq!(
            kinds("say \"hi\" 42", Language::Plain, false),
            vec![
                ("say \"hi\" ".into(), HighlightKind::Normal),
                ("42".into(), HighlightKind::Number),
            ]
        );
    }

    #[test]
    fn test_html_tags() {
        assert_eq!(
            kinds("<div>text</div> a < b", Language::Html, false),
            vec![
                ("<div>".into(), HighlightKind::Keyword),
                ("text</".into(), HighlightKind::Normal),
                ("div".into(), HighlightKind::Keyword),
                ("> ".into(), HighlightKind::Normal),
                ("a".into(), HighlightKind::Keyword),
                (" < b".into(), HighlightKind::Normal),
            ]
        );
    }

    #[test]
    fn test_css_dashed_keyword() {
        assert_eq!(
            kinds("text-align: left;", Language::Css, false),
            vec![
                ("text-align".into(), HighlightKind::Keyword),
                (": left;".into(), HighlightKind::Normal),
            ]
        );
    }

    #[test]
    fn test_adjacent_spans_coalesce() {
        let (tokens, _) = highlight("a b c", Language::CLike, false);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, HighlightKind::Normal);
    }

    #[test]
    fn test_highlighter_follows_edits() {
        let mut store = LineStore::from_lines(&["/* start", "still", "end */ x"]);
        let mut hl = SyntaxHighlighter::new(Language::CLike);
        assert_eq!(hl.highlight_line(&store, 1)[0].kind, HighlightKind::Comment);

        store.replace_lines(vec!["int a;".into(), "still".into(), "end */ x".into()]);
        hl.invalidate_from(0);
        assert_eq!(
            hl.highlight_line(&store, 1),
            vec![HighlightToken {
                start: 0,
                end: 5,
                kind: HighlightKind::Normal
            }]
        );
    }

    #[test]
    fn test_language_change_resets_carry() {
        let store = LineStore::from_lines(&["/* open", "int"]);
        let mut hl = SyntaxHighlighter::new(Language::CLike);
        assert_eq!(hl.highlight_line(&store, 1)[0].kind, HighlightKind::Comment);
        hl.set_language(Language::Python);
        assert_eq!(hl.highlight_line(&store, 1)[0].kind, HighlightKind::Normal);
    }
}
