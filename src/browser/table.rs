//! Detail table model
//!
//! `/mahal_line` answers with a list of row objects whose keys are the
//! columns. The column set is taken from the first row, in the order the
//! server sent it; later rows are laid out against that schema.

use serde_json::Value;
use thiserror::Error;
use tracing::warn;
use unicode_width::UnicodeWidthStr;

use crate::shaper::Shaper;

/// Placeholder shown when there are no detail lines.
pub const NO_DATA: &str = "لا توجد بيانات";

#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    #[error("row {row} is not an object")]
    RowNotObject { row: usize },

    #[error("row {row} has column '{column}' that the first row does not have")]
    UnexpectedColumn { row: usize, column: String },
}

/// Rows laid out against one explicit column list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DetailTable {
    /// Build a table from row objects.
    ///
    /// A row missing one of the first row's columns gets an empty cell there.
    /// A row bringing a column of its own is rejected.
    pub fn from_rows(rows: &[Value]) -> Result<Self, TableError> {
        let Some(first) = rows.first() else {
            return Ok(Self::default());
        };
        let first = first
            .as_object()
            .ok_or(TableError::RowNotObject { row: 0 })?;
        let columns: Vec<String> = first.keys().cloned().collect();

        let mut table_rows = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let object = row
                .as_object()
                .ok_or(TableError::RowNotObject { row: index })?;

            if let Some(extra) = object.keys().find(|k| !columns.contains(k)) {
                return Err(TableError::UnexpectedColumn {
                    row: index,
                    column: extra.clone(),
                });
            }

            let cells: Vec<String> = columns
                .iter()
                .map(|column| object.get(column).map(cell_text).unwrap_or_default())
                .collect();
            table_rows.push(cells);
        }

        Ok(Self {
            columns,
            rows: table_rows,
        })
    }
}

/// Text for one cell value.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// One label in the detail grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub text: String,
    pub header: bool,
}

/// Row-major grid of shaped labels, `cols` wide.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub cols: usize,
    pub cells: Vec<GridCell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cols: 1,
            cells: Vec::new(),
        }
    }
}

impl Grid {
    /// Rebuild the grid from a `/mahal_line` response.
    ///
    /// Anything other than a non-empty list of consistent row objects gives
    /// the single "no data" cell.
    pub fn render(rows: Option<&Value>, shaper: &dyn Shaper) -> Self {
        let rows = match rows {
            Some(Value::Array(rows)) if !rows.is_empty() => rows,
            _ => return Self::placeholder(shaper),
        };

        match DetailTable::from_rows(rows) {
            Ok(table) => Self::from_table(&table, shaper),
            Err(e) => {
                warn!("Discarding detail lines: {}", e);
                Self::placeholder(shaper)
            }
        }
    }

    pub fn from_table(table: &DetailTable, shaper: &dyn Shaper) -> Self {
        if table.columns.is_empty() {
            return Self::placeholder(shaper);
        }

        let header = table.columns.iter().map(|column| GridCell {
            text: shaper.shape(column),
            header: true,
        });
        let body = table.rows.iter().flatten().map(|value| GridCell {
            text: shaper.shape(value),
            header: false,
        });

        Self {
            cols: table.columns.len(),
            cells: header.chain(body).collect(),
        }
    }

    pub fn placeholder(shaper: &dyn Shaper) -> Self {
        Self {
            cols: 1,
            cells: vec![GridCell {
                text: shaper.shape(NO_DATA),
                header: false,
            }],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.cols == 1 && self.cells.len() == 1 && !self.cells[0].header
    }

    /// Cells grouped into display rows.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(self.cols.max(1))
    }

    pub fn row_count(&self) -> usize {
        self.rows().count()
    }

    /// Display width of each column, capped at `max_width` cells.
    pub fn column_widths(&self, max_width: usize) -> Vec<usize> {
        let mut widths = vec![0; self.cols.max(1)];
        for row in self.rows() {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.text.width());
            }
        }
        widths.iter().map(|w| (*w).min(max_width)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaper::ArabicShaper;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn texts(grid: &Grid) -> Vec<&str> {
        grid.cells.iter().map(|c| c.text.as_str()).collect()
    }

    #[rstest]
    #[case(None)]
    #[case(Some(json!([])))]
    #[case(Some(json!(null)))]
    #[case(Some(json!({"a": 1})))]
    #[case(Some(json!("rows")))]
    fn test_no_rows_gives_single_placeholder(#[case] rows: Option<Value>) {
        let shaper = ArabicShaper::default();
        let grid = Grid::render(rows.as_ref(), &shaper);

        assert_eq!(grid.cols, 1);
        assert_eq!(grid.cells.len(), 1);
        assert_eq!(grid.cells[0].text, shaper.shape(NO_DATA));
        assert!(grid.is_placeholder());
    }

    #[test]
    fn test_rows_render_header_then_values_row_major() {
        let shaper = ArabicShaper::default();
        let rows = json!([{"a": 1, "b": 2}, {"a": 3, "b": 4}]);
        let grid = Grid::render(Some(&rows), &shaper);

        assert_eq!(grid.cols, 2);
        assert_eq!(texts(&grid), vec!["a", "b", "1", "2", "3", "4"]);
        assert_eq!(
            grid.cells.iter().map(|c| c.header).collect::<Vec<_>>(),
            vec![true, true, false, false, false, false]
        );
        assert_eq!(grid.row_count(), 3);
    }

    #[test]
    fn test_column_order_follows_first_row() {
        let rows = json!([{"z": 1, "a": 2, "m": 3}]);
        let table = DetailTable::from_rows(rows.as_array().unwrap()).unwrap();
        assert_eq!(table.columns, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_arabic_headers_and_values_are_shaped() {
        let shaper = ArabicShaper::default();
        let rows = json!([{"الاسم": "باب"}]);
        let grid = Grid::render(Some(&rows), &shaper);

        assert_eq!(texts(&grid), vec![shaper.shape("الاسم").as_str(), "\u{FE8F}\u{FE8E}\u{FE91}"]);
    }

    #[test]
    fn test_missing_column_is_filled_with_empty_cell() {
        let rows = json!([{"a": 1, "b": 2}, {"b": 5}]);
        let table = DetailTable::from_rows(rows.as_array().unwrap()).unwrap();
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["", "5"]]);
    }

    #[test]
    fn test_later_rows_use_first_row_order() {
        let rows = json!([{"a": 1, "b": 2}, {"b": 4, "a": 3}]);
        let table = DetailTable::from_rows(rows.as_array().unwrap()).unwrap();
        assert_eq!(table.rows[1], vec!["3", "4"]);
    }

    #[test]
    fn test_extra_column_is_rejected() {
        let rows = json!([{"a": 1}, {"a": 2, "c": 3}]);
        assert_eq!(
            DetailTable::from_rows(rows.as_array().unwrap()),
            Err(TableError::UnexpectedColumn { row: 1, column: "c".to_string() })
        );

        let grid = Grid::render(Some(&rows), &ArabicShaper::default());
        assert!(grid.is_placeholder());
    }

    #[test]
    fn test_non_object_row_is_rejected() {
        let rows = json!([{"a": 1}, 7]);
        assert_eq!(
            DetailTable::from_rows(rows.as_array().unwrap()),
            Err(TableError::RowNotObject { row: 1 })
        );
    }

    #[test]
    fn test_first_row_without_columns_gives_placeholder() {
        let rows = json!([{}]);
        let grid = Grid::render(Some(&rows), &ArabicShaper::default());
        assert!(grid.is_placeholder());
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!("x")), "x");
        assert_eq!(cell_text(&json!(2.5)), "2.5");
        assert_eq!(cell_text(&json!(false)), "false");
        assert_eq!(cell_text(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_column_widths_use_display_width() {
        let shaper = ArabicShaper::new(false);
        let rows = json!([{"id": 1, "name": "long value here"}, {"id": 12345, "name": "x"}]);
        let grid = Grid::render(Some(&rows), &shaper);

        assert_eq!(grid.column_widths(80), vec![5, 15]);
        assert_eq!(grid.column_widths(4), vec![4, 4]);
        assert_eq!(Grid::placeholder(&shaper).column_widths(80), vec![shaper.shape(NO_DATA).width()]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let shaper = ArabicShaper::default();
        let rows = json!([{"a": "نص", "b": null}]);
        assert_eq!(Grid::render(Some(&rows), &shaper), Grid::render(Some(&rows), &shaper));
    }
}
