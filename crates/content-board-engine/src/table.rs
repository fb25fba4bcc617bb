//! Table content codec.
//!
//! A table block stores its grid as text: rows separated by `\n`, cells
//! separated by `,`. The first row is the header. There is no quoting or
//! escaping, so a comma or newline typed into a cell value splits that cell
//! the next time the content is decoded. Rows are not padded; a ragged grid
//! survives a decode/encode cycle unchanged.

pub const ROW_SEPARATOR: char = '\n';
pub const CELL_SEPARATOR: char = ',';

/// Decoded table: header row plus body rows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableGrid {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of header cells, which is the width new rows are created with
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn encode(&self) -> String {
        std::iter::once(&self.headers)
            .chain(self.rows.iter())
            .map(|row| join_row(row))
            .collect::<Vec<_>>()
            .join(&ROW_SEPARATOR.to_string())
    }
}

fn join_row(row: &[String]) -> String {
    row.join(&CELL_SEPARATOR.to_string())
}

fn split_row(row: &str) -> Vec<String> {
    row.split(CELL_SEPARATOR).map(str::to_string).collect()
}

/// Split table content into header and body rows.
///
/// Empty content decodes to a single empty header cell and no rows.
pub fn decode(content: &str) -> TableGrid {
    let mut rows = content.split(ROW_SEPARATOR).map(split_row);
    let headers = rows.next().unwrap_or_default();
    TableGrid {
        headers,
        rows: rows.collect(),
    }
}

/// Content with header `index` replaced by `text`.
///
/// Returns the content unchanged when `index` is outside the header row.
pub fn with_header(content: &str, index: usize, text: &str) -> String {
    let mut grid = decode(content);
    match grid.headers.get_mut(index) {
        Some(header) => {
            *header = text.to_string();
            grid.encode()
        }
        None => content.to_string(),
    }
}

/// Content with body cell (`row`, `cell`) replaced by `text`.
///
/// `row` counts body rows only, so row 0 is the line after the header.
/// Returns the content unchanged when the cell does not exist.
pub fn with_cell(content: &str, row: usize, cell: usize, text: &str) -> String {
    let mut grid = decode(content);
    match grid.rows.get_mut(row).and_then(|r| r.get_mut(cell)) {
        Some(value) => {
            *value = text.to_string();
            grid.encode()
        }
        None => content.to_string(),
    }
}

/// Content with one empty row appended, as wide as the header row
pub fn with_empty_row(content: &str) -> String {
    let mut grid = decode(content);
    grid.rows.push(vec![String::new(); grid.width()]);
    grid.encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_encode_then_decode_returns_same_grid() {
        let grid = TableGrid::new(
            strings(&["Procedure", "Duration", "Recovery Time"]),
            vec![strings(&["Arm Lift", "2-3 hours", "2-3 weeks"])],
        );

        let content = grid.encode();
        assert_eq!(
            content,
            "Procedure,Duration,Recovery Time\nArm Lift,2-3 hours,2-3 weeks"
        );
        assert_eq!(decode(&content), grid);
    }

    #[test]
    fn test_decode_empty_content() {
        let grid = decode("");
        assert_eq!(grid.headers, strings(&[""]));
        assert!(grid.rows.is_empty());
        assert_eq!(grid.encode(), "");
    }

    #[test]
    fn test_ragged_rows_are_preserved() {
        let content = "A,B,C\n1\n1,2,3,4";
        let grid = decode(content);

        assert_eq!(grid.rows[0], strings(&["1"]));
        assert_eq!(grid.rows[1], strings(&["1", "2", "3", "4"]));
        assert_eq!(grid.encode(), content);
    }

    #[test]
    fn test_add_row_matches_header_width() {
        assert_eq!(with_empty_row("A,B\n1,2"), "A,B\n1,2\n,");
        assert_eq!(with_empty_row("A,B,C"), "A,B,C\n,,");
    }

    #[test]
    fn test_add_row_to_empty_table() {
        // A single empty header yields a single empty cell
        assert_eq!(with_empty_row(""), "\n");
    }

    #[test]
    fn test_edit_cell() {
        assert_eq!(with_cell("A,B\n1,2", 0, 1, "X"), "A,B\n1,X");
    }

    #[test]
    fn test_edit_header() {
        assert_eq!(with_header("A,B\n1,2", 0, "Name"), "Name,B\n1,2");
    }

    #[rstest]
    #[case::header_past_end(with_header("A,B\n1,2", 2, "X"))]
    #[case::row_past_end(with_cell("A,B\n1,2", 1, 0, "X"))]
    #[case::cell_past_end(with_cell("A,B\n1,2", 0, 5, "X"))]
    fn test_edit_outside_grid_is_noop(#[case] result: String) {
        assert_eq!(result, "A,B\n1,2");
    }

    #[test]
    fn test_comma_in_cell_value_splits_cell_on_next_decode() {
        // Values are not escaped; the extra comma becomes a cell boundary
        let content = with_cell("A,B\n1,2", 0, 0, "x,y");
        assert_eq!(content, "A,B\nx,y,2");
        assert_eq!(decode(&content).rows[0], strings(&["x", "y", "2"]));
    }

    #[test]
    fn test_newline_in_header_value_adds_a_row_on_next_decode() {
        let content = with_header("A,B\n1,2", 1, "B\nC");
        let grid = decode(&content);
        assert_eq!(grid.headers, strings(&["A", "B"]));
        assert_eq!(grid.rows, vec![strings(&["C"]), strings(&["1", "2"])]);
    }
}
