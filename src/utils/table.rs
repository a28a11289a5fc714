//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::strip_ansi;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn new(header: &str, align: Align) -> Self {
        Self {
            header: header.to_string(),
            align,
        }
    }
}

/// Plain-text grid; column widths follow the widest visible cell.
pub struct TextTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|v| visible_width(v))
                    .chain(std::iter::once(col.header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w, col.align));
            out.push(' ');
        }
        out.push('\n');
        let total: usize = widths.iter().map(|w| w + 1).sum();
        out.push_str(&"-".repeat(total.saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, (col, w)) in self.columns.iter().zip(&widths).enumerate() {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad(value, *w, col.align));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Display width ignoring ANSI color sequences.
fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn pad(value: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(visible_width(value)));
    match align {
        Align::Left => format!("{value}{fill}"),
        Align::Right => format!("{fill}{value}"),
    }
}
