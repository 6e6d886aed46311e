pub mod cache;
pub mod highlighter;
pub mod language;

pub use cache::CarryCache;
pub use highlighter::{HighlightKind, HighlightToken, SyntaxHighlighter, highlight, styled_runs};
pub use language::Language;
