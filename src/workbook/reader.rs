// src/workbook/reader.rs

use crate::errors::{AppError, AppResult};
use crate::models::cell::Cell;
use crate::models::table::Table;
use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use std::collections::BTreeMap;
use std::path::Path;

/// Non-empty cells keyed by absolute (row, column).
pub(crate) type CellGrid = BTreeMap<(u32, u16), Cell>;

/// A sheet exactly as stored: typed values and formulas at their positions.
pub(crate) struct RawSheet {
    pub name: String,
    pub cells: CellGrid,
}

impl RawSheet {
    /// First used row → headers; fully blank rows are dropped.
    pub fn to_table(&self) -> Table {
        let Some(first_row) = self.cells.keys().map(|(r, _)| *r).min() else {
            return Table::default();
        };
        let first_col = self.cells.keys().map(|(_, c)| *c).min().unwrap_or(0);
        let last_col = self.cells.keys().map(|(_, c)| *c).max().unwrap_or(0);
        let last_row = self.cells.keys().map(|(r, _)| *r).max().unwrap_or(first_row);

        let row_cells = |row: u32| -> Vec<Cell> {
            (first_col..=last_col)
                .map(|col| self.cells.get(&(row, col)).cloned().unwrap_or_default())
                .collect()
        };

        let headers: Vec<String> = row_cells(first_row)
            .iter()
            .map(|c| c.to_string().trim().to_string())
            .collect();
        let mut table = Table::new(&headers);

        for row in first_row + 1..=last_row {
            let cells = row_cells(row);
            if cells.iter().all(Cell::is_empty) {
                continue;
            }
            table.push_row(cells);
        }
        table
    }
}

/// Read every sheet of a workbook, in workbook order.
pub(crate) fn read_raw_sheets(path: &Path) -> AppResult<Vec<RawSheet>> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(to_workbook_error)?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let values = workbook
            .worksheet_range(&name)
            .map_err(to_workbook_error)?;
        let formulas = workbook
            .worksheet_formula(&name)
            .map_err(to_workbook_error)?;
        let cells = merge_grid(&values, &formulas);
        sheets.push(RawSheet { name, cells });
    }
    Ok(sheets)
}

/// Read every sheet of a workbook as header-named tables.
pub(crate) fn read_all_sheets(path: &Path) -> AppResult<Vec<(String, Table)>> {
    Ok(read_raw_sheets(path)?
        .into_iter()
        .map(|sheet| {
            let table = sheet.to_table();
            (sheet.name, table)
        })
        .collect())
}

/// Read the first sheet of an uploaded workbook.
pub fn read_first_sheet(path: &Path) -> AppResult<Table> {
    read_all_sheets(path)?
        .into_iter()
        .next()
        .map(|(_, table)| table)
        .ok_or_else(|| AppError::Workbook(format!("{} has no sheets", path.display())))
}

/// Values and formulas on one grid; a formula keeps its value as cached result.
fn merge_grid(values: &Range<Data>, formulas: &Range<String>) -> CellGrid {
    let mut grid = CellGrid::new();

    if let Some((row0, col0)) = values.start() {
        for (r, c, data) in values.used_cells() {
            let cell = to_cell(data);
            if !cell.is_empty() {
                grid.insert((row0 + r as u32, (col0 + c as u32) as u16), cell);
            }
        }
    }

    if let Some((row0, col0)) = formulas.start() {
        for (r, c, formula) in formulas.used_cells() {
            if formula.trim().is_empty() {
                continue;
            }
            let key = (row0 + r as u32, (col0 + c as u32) as u16);
            let cached = grid.remove(&key).unwrap_or_default();
            grid.insert(
                key,
                Cell::Formula {
                    formula: formula.clone(),
                    cached: Box::new(cached),
                },
            );
        }
    }

    grid
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::String(s) if s.trim().is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) if dt.is_duration() => Cell::Duration(dt.as_f64()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(Cell::DateTime)
            .unwrap_or(Cell::Number(dt.as_f64())),
        other => Cell::Text(other.to_string()),
    }
}

fn to_workbook_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Workbook(e.to_string())
}
