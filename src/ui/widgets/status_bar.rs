// ui/widgets/status_bar.rs - Status bar widget

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use crate::editor::Editor;
use crate::ui::theme::Theme;

/// Bottom line: the pending status message, or a summary of the active
/// buffer with the input state.
pub struct StatusBar<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }

    pub fn text(&self) -> String {
        if let Some(msg) = &self.editor.status_message {
            return format!(" {msg}");
        }
        let summary = self.editor.status_summary();
        match self.editor.dispatcher.state().label() {
            Some(label) => format!(" {summary} | {label}"),
            None => format!(" {summary}"),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.theme.status_style();
        // Fill the whole row so the bar spans the terminal width
        buf.set_style(area, style);
        let line_widget = Line::from(self.text()).style(style);
        buf.set_line(area.x, area.y, &line_widget, area.width);
    }
}
