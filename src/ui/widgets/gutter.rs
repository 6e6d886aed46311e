// ui/widgets/gutter.rs - Line number column

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::editor::VisibleLine;
use crate::ui::theme::Theme;

/// Shows `%4d: ` for every visible buffer line.
pub struct Gutter<'a> {
    pub lines: &'a [VisibleLine],
    pub theme: &'a Theme,
}

impl<'a> Gutter<'a> {
    pub fn new(lines: &'a [VisibleLine], theme: &'a Theme) -> Self {
        Self { lines, theme }
    }
}

pub fn line_label(number: usize) -> String {
    format!("{number:4}: ")
}

impl Widget for Gutter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(self.theme.ui.gutter_fg);
        for (row, line) in self.lines.iter().take(area.height as usize).enumerate() {
            let label = Line::from(Span::styled(line_label(line.number), style));
            buf.set_line(area.x, area.y + row as u16, &label, area.width);
        }
    }
}
