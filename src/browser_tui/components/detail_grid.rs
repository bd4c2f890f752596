//! Detail grid component: the lines of the current record as a table

use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::browser::Grid;
use crate::browser_tui::{traits::Scrollable, ui::Styles};

/// Widest a column may grow before its text is cut
const MAX_COLUMN_WIDTH: usize = 40;

/// Scroll state for the detail grid
#[derive(Debug, Clone, Default)]
pub struct DetailGridView {
    pub scroll_offset: usize,
    body_rows: usize,
    viewport_rows: usize,
}

impl DetailGridView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick up the size of a freshly rendered grid and go back to the top
    pub fn reset(&mut self, grid: &Grid) {
        self.body_rows = body_rows(grid);
        self.scroll_offset = 0;
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, grid: &Grid) {
        self.body_rows = body_rows(grid);
        let has_header = has_header(grid);

        let chrome = 2 + usize::from(has_header);
        self.viewport_rows = (area.height as usize).saturating_sub(chrome);
        let max_scroll = self.calculate_max_scroll();
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let widths: Vec<Constraint> = grid
            .column_widths(MAX_COLUMN_WIDTH)
            .into_iter()
            .map(|w| Constraint::Length(w.max(1) as u16))
            .collect();

        let to_row = |cells: &[crate::browser::GridCell]| {
            Row::new(cells.iter().map(|cell| Cell::from(cell.text.clone())))
        };

        let mut rows = grid.rows();
        let header = if has_header { rows.next() } else { None };

        let body: Vec<Row> = rows
            .skip(self.scroll_offset)
            .take(self.viewport_rows.max(1))
            .map(to_row)
            .collect();

        let mut table = Table::new(body, widths)
            .column_spacing(2)
            .block(
                Block::default()
                    .title(self.title())
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            );

        if let Some(header) = header {
            table = table.header(to_row(header).style(Styles::header()));
        }

        f.render_widget(table, area);
    }

    fn title(&self) -> String {
        if self.body_rows == 0 {
            return "Lines".to_string();
        }
        let first = self.scroll_offset + 1;
        let last = (self.scroll_offset + self.viewport_rows.max(1)).min(self.body_rows);
        format!("Lines ({}-{} of {})", first, last, self.body_rows)
    }
}

impl Scrollable for DetailGridView {
    fn get_scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset.min(self.calculate_max_scroll());
    }

    fn calculate_max_scroll(&self) -> usize {
        self.body_rows.saturating_sub(self.viewport_rows.max(1))
    }

    fn get_page_size(&self) -> usize {
        self.viewport_rows.max(1)
    }
}

fn has_header(grid: &Grid) -> bool {
    grid.cells.first().map_or(false, |cell| cell.header)
}

fn body_rows(grid: &Grid) -> usize {
    grid.row_count() - usize::from(has_header(grid))
}
