//! Column-named table of cells, the in-memory form of one worksheet.

use crate::errors::{AppError, AppResult};
use crate::models::cell::Cell;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column lookup: case-insensitive, surrounding blanks ignored.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(wanted))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at `row` in column `name`; missing columns read as Empty.
    pub fn cell(&self, row: usize, name: &str) -> &Cell {
        const EMPTY: &Cell = &Cell::Empty;
        self.column_index(name)
            .and_then(|c| self.rows.get(row).and_then(|r| r.get(c)))
            .unwrap_or(EMPTY)
    }

    /// Numeric value with missing / unparseable treated as zero.
    pub fn number(&self, row: usize, name: &str) -> f64 {
        self.cell(row, name).as_number().unwrap_or(0.0)
    }

    pub fn text(&self, row: usize, name: &str) -> Option<String> {
        self.cell(row, name).as_text()
    }

    /// Sum of a column; values that cannot be read as numbers are skipped.
    pub fn column_sum(&self, name: &str) -> f64 {
        (0..self.len())
            .filter_map(|r| self.cell(r, name).as_number())
            .sum()
    }

    /// Append a row, padded or truncated to the header width.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.headers.len(), Cell::Empty);
        self.rows.push(row);
    }

    /// Add a column (if absent) and return its index.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column_index(name) {
            return idx;
        }
        self.headers.push(name.trim().to_string());
        for row in &mut self.rows {
            row.push(Cell::Empty);
        }
        self.headers.len() - 1
    }

    /// Write one cell. `row == len()` appends a blank row first.
    pub fn set(&mut self, row: usize, name: &str, value: Cell) -> AppResult<()> {
        if row > self.rows.len() {
            return Err(AppError::InvalidRow(row));
        }
        let col = self.ensure_column(name);
        if row == self.rows.len() {
            self.push_row(Vec::new());
        }
        self.rows[row][col] = value;
        Ok(())
    }

    /// Copy of the table without the named columns.
    pub fn without_columns(&self, names: &[&str]) -> Table {
        let keep: Vec<usize> = (0..self.headers.len())
            .filter(|&i| {
                !names
                    .iter()
                    .any(|n| self.headers[i].trim().eq_ignore_ascii_case(n))
            })
            .collect();

        Table {
            headers: keep.iter().map(|&i| self.headers[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|r| {
                    keep.iter()
                        .map(|&i| r.get(i).cloned().unwrap_or_default())
                        .collect()
                })
                .collect(),
        }
    }
}
