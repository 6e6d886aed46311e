// ui/widgets/editor_pane.rs - Editor pane widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::editor::VisibleLine;
use crate::ui::theme::Theme;

/// Renders the highlighted text of the visible lines. Rows past the end
/// of the buffer show `~`.
pub struct EditorPane<'a> {
    pub lines: &'a [VisibleLine],
    pub theme: &'a Theme,
}

impl<'a> EditorPane<'a> {
    pub fn new(lines: &'a [VisibleLine], theme: &'a Theme) -> Self {
        Self { lines, theme }
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear first so switching buffers leaves no stale characters
        buf.set_style(area, Style::default().bg(self.theme.general.background));
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf.get_mut(x, y).set_char(' ');
            }
        }

        for row in 0..area.height as usize {
            let y = area.y + row as u16;
            let line = match self.lines.get(row) {
                Some(visible) => Line::from(
                    visible
                        .runs
                        .iter()
                        .map(|(text, kind)| {
                            Span::styled(text.as_str(), self.theme.syntax_style(*kind))
                        })
                        .collect::<Vec<_>>(),
                ),
                None => Line::from(Span::styled(
                    "~",
                    Style::default().fg(self.theme.ui.empty_line_fg),
                )),
            };
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}
