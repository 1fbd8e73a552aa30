//! Fixed-width table rendering for the schedule output.

use crate::utils::colors::{BOLD, GREEN, RESET};

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    // Row to render highlighted (the currently open window).
    pub highlight: Option<usize>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            highlight: None,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn highlight_row(&mut self, idx: usize) {
        self.highlight = Some(idx);
    }

    /// Render with padded columns; color is applied to the whole line
    /// after padding so ANSI codes never skew the widths.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        for (r, row) in self.rows.iter().enumerate() {
            let mut line = String::new();
            for (i, col) in self.columns.iter().enumerate() {
                line.push_str(&format!("{:<width$} ", row[i], width = col.width));
            }
            if self.highlight == Some(r) {
                out.push_str(&format!("{}{}{}{}", GREEN, BOLD, line, RESET));
            } else {
                out.push_str(&line);
            }
            out.push('\n');
        }

        out
    }
}
