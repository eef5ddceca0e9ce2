//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from a header row and data rows, sizing each column
    /// to its widest cell.
    pub fn from_rows(header: &[String], rows: &[Vec<String>]) -> Self {
        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if i >= widths.len() {
                    widths.push(0);
                }
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let columns = widths
            .iter()
            .enumerate()
            .map(|(i, w)| Column {
                header: header.get(i).cloned().unwrap_or_default(),
                width: *w,
            })
            .collect();

        Self {
            columns,
            rows: rows.to_vec(),
        }
    }

    pub fn render(&self) -> String {
        self.render_styled(|_, _, cell| cell.to_string())
    }

    /// Render with a styling hook: `(row index, column index, padded cell)`
    /// returns the final cell text. Styling is applied after padding so
    /// ANSI escapes never break the alignment.
    pub fn render_styled<F>(&self, style: F) -> String
    where
        F: Fn(usize, usize, &str) -> String,
    {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        // Rows
        for (ri, row) in self.rows.iter().enumerate() {
            for (ci, col) in self.columns.iter().enumerate() {
                let text = row.get(ci).map(String::as_str).unwrap_or("");
                let padded = format!("{:<width$} ", text, width = col.width);
                out.push_str(&style(ri, ci, &padded));
            }
            out.push('\n');
        }

        out
    }
}
