use std::fmt;
use std::path::Path;

/// Language tag of a buffer, derived from its filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// No highlighting beyond numbers.
    #[default]
    Plain,
    Html,
    Css,
    CLike,
    Python,
}

const HTML_KEYWORDS: &[&str] = &[
    "html", "head", "body", "div", "span", "a", "img", "p", "h1", "h2", "h3", "h4", "h5", "h6",
    "ul", "li", "ol", "table", "tr", "td", "th", "form", "input", "button", "script", "style",
    "link", "meta",
];

const CSS_KEYWORDS: &[&str] = &[
    "color",
    "background",
    "margin",
    "padding",
    "border",
    "width",
    "height",
    "display",
    "position",
    "float",
    "clear",
    "font",
    "text-align",
    "overflow",
    "transition",
    "transform",
    "animation",
];

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else", "except",
    "False", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "None",
    "nonlocal", "not", "or", "pass", "raise", "return", "True", "try", "while", "with", "yield",
];

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "html" => Language::Html,
            "css" => Language::Css,
            "c" | "cpp" => Language::CLike,
            "py" => Language::Python,
            _ => Language::Plain,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Language::Plain => &[],
            Language::Html => HTML_KEYWORDS,
            Language::Css => CSS_KEYWORDS,
            Language::CLike => C_KEYWORDS,
            Language::Python => PYTHON_KEYWORDS,
        }
    }

    /// Case-sensitive keyword lookup.
    pub fn is_keyword(self, word: &str) -> bool {
        self.keywords().contains(&word)
    }

    pub fn line_comment(self) -> Option<&'static str> {
        match self {
            Language::CLike => Some("//"),
            Language::Python => Some("#"),
            Language::Html => Some("<!--"),
            Language::Plain | Language::Css => None,
        }
    }

    /// Whether `/* ... */` opens a comment that may span lines.
    pub fn has_block_comments(self) -> bool {
        matches!(self, Language::CLike | Language::Html)
    }

    pub fn has_strings(self) -> bool {
        self != Language::Plain
    }

    /// Css identifiers such as `text-align` contain dashes.
    pub fn is_ident_char(self, c: char) -> bool {
        c.is_alphanumeric() || c == '_' || (self == Language::Css && c == '-')
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Plain => "text",
            Language::Html => "html",
            Language::Css => "css",
            Language::CLike => "c",
            Language::Python => "python",
        };
        f.write_str(name)
    }
}
