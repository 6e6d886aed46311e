/// Window onto a buffer: the first visible line/column and the size of
/// the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub offset_line: usize,
    pub offset_col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(24, 80)
    }
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            offset_line: 0,
            offset_col: 0,
            rows,
            cols,
        }
    }

    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }

    /// Scroll just far enough to bring the cursor into view.
    pub fn scroll_to_cursor(&mut self, cursor_line: usize, cursor_col: usize) {
        let rows = self.rows.max(1);
        let cols = self.cols.max(1);

        if cursor_line < self.offset_line {
            self.offset_line = cursor_line;
        } else if cursor_line >= self.offset_line + rows {
            self.offset_line = cursor_line + 1 - rows;
        }

        if cursor_col < self.offset_col {
            self.offset_col = cursor_col;
        } else if cursor_col >= self.offset_col + cols {
            self.offset_col = cursor_col + 1 - cols;
        }
    }

    /// Lines `offset_line..` that fit on screen, capped by `line_count`.
    pub fn visible_range(&self, line_count: usize) -> std::ops::Range<usize> {
        let start = self.offset_line.min(line_count);
        start..(start + self.rows).min(line_count)
    }
}
