// ui/renderer.rs - Ratatui-based renderer for the text editor

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
};
use std::io::Stdout;

use crate::editor::Editor;
use crate::ui::theme::Theme;
use crate::ui::widgets::editor_pane::EditorPane;
use crate::ui::widgets::gutter::Gutter;
use crate::ui::widgets::status_bar::StatusBar;

/// Ratatui-based renderer for the text editor
pub struct TuiRenderer<B: Backend> {
    terminal: Terminal<B>,
    theme: Theme,
}

impl TuiRenderer<CrosstermBackend<Stdout>> {
    /// Renderer drawing to stdout
    pub fn new() -> std::io::Result<Self> {
        Self::with_backend(CrosstermBackend::new(std::io::stdout()))
    }
}

impl<B: Backend> TuiRenderer<B> {
    pub fn with_backend(backend: B) -> std::io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            theme: Theme::default(),
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Draw the editor UI: gutter and text above, status line below
    pub fn draw(&mut self, editor: &mut Editor) -> std::io::Result<()> {
        let lines = editor.visible_lines();
        let (cursor_col, cursor_row) = editor.cursor_screen_position();
        let gutter_width = editor.config().gutter_width;
        let theme = &self.theme;
        let editor = &*editor;

        self.terminal.draw(|f| {
            let size = f.size();

            let vertical_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Editor area
                    Constraint::Length(1), // Status bar (1 line)
                ])
                .split(size);

            let editor_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(gutter_width), Constraint::Min(1)])
                .split(vertical_chunks[0]);

            f.render_widget(Gutter::new(&lines, theme), editor_chunks[0]);
            let text_area = editor_chunks[1];
            f.render_widget(EditorPane::new(&lines, theme), text_area);
            f.render_widget(StatusBar::new(editor, theme), vertical_chunks[1]);

            let (col, row) = (cursor_col as u16, cursor_row as u16);
            if row < text_area.height && col < text_area.width {
                f.set_cursor(text_area.x + col, text_area.y + row);
            }
        })?;
        Ok(())
    }
}
