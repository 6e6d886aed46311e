// ui/theme.rs - Colors for the editor pane and status line

use ratatui::style::{Color, Style};

use crate::syntax::HighlightKind;

/// Theme configuration
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub general: GeneralTheme,
    pub syntax: SyntaxTheme,
    pub ui: UiTheme,
}

#[derive(Debug, Clone)]
pub struct GeneralTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone)]
pub struct SyntaxTheme {
    pub keyword: Color,
    pub string: Color,
    pub comment: Color,
    pub number: Color,
    pub preprocessor: Color,
}

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub gutter_fg: Color,
    pub empty_line_fg: Color,
}

impl Default for GeneralTheme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Reset,
        }
    }
}

// Terminal palette colors, so the scheme follows the user's terminal.
impl Default for SyntaxTheme {
    fn default() -> Self {
        Self {
            keyword: Color::Cyan,
            string: Color::Green,
            comment: Color::Yellow,
            number: Color::Magenta,
            preprocessor: Color::Red,
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            status_bar_bg: Color::Blue,
            status_bar_fg: Color::White,
            gutter_fg: Color::DarkGray,
            empty_line_fg: Color::DarkGray,
        }
    }
}

impl Theme {
    pub fn syntax_color(&self, kind: HighlightKind) -> Color {
        match kind {
            HighlightKind::Normal => self.general.foreground,
            HighlightKind::Keyword => self.syntax.keyword,
            HighlightKind::String => self.syntax.string,
            HighlightKind::Comment => self.syntax.comment,
            HighlightKind::Number => self.syntax.number,
            HighlightKind::Preprocessor => self.syntax.preprocessor,
        }
    }

    pub fn syntax_style(&self, kind: HighlightKind) -> Style {
        Style::default()
            .fg(self.syntax_color(kind))
            .bg(self.general.background)
    }

    pub fn status_style(&self) -> Style {
        Style::default()
            .bg(self.ui.status_bar_bg)
            .fg(self.ui.status_bar_fg)
    }
}
