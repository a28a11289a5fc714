// src/workbook/writer.rs

use super::reader::CellGrid;
use crate::errors::{AppError, AppResult};
use crate::models::cell::Cell;
use crate::models::table::Table;
use chrono::NaiveTime;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Formula, Workbook, Worksheet,
};
use std::fs;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const AMOUNT_FORMAT: &str = "#,##0.00";
const DATE_FORMAT: &str = "yyyy-mm-dd";
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";
const DURATION_FORMAT: &str = "[h]:mm:ss";

/// Content of one sheet to be written.
pub(crate) enum SheetData {
    /// Header-named table, written with the dashboard styling.
    Table(Table),
    /// Cells written back at their original positions, unstyled.
    Raw(CellGrid),
}

/// Write `sheets` as a new workbook, replacing `path` atomically.
pub(crate) fn write_workbook(path: &Path, sheets: &[(String, SheetData)]) -> AppResult<()> {
    let mut workbook = build_workbook(sheets)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("xlsx.tmp");
    workbook.save(&tmp).map_err(to_workbook_error)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Serialize a single table as an in-memory XLSX file.
pub(crate) fn table_to_bytes(sheet_name: &str, table: &Table) -> AppResult<Vec<u8>> {
    let sheets = [(sheet_name.to_string(), SheetData::Table(table.clone()))];
    let mut workbook = build_workbook(&sheets)?;
    workbook.save_to_buffer().map_err(to_workbook_error)
}

fn build_workbook(sheets: &[(String, SheetData)]) -> AppResult<Workbook> {
    let mut workbook = Workbook::new();
    for (name, data) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name).map_err(to_workbook_error)?;
        match data {
            SheetData::Table(table) => write_sheet(worksheet, table)?,
            SheetData::Raw(cells) => write_raw_sheet(worksheet, cells)?,
        }
    }
    Ok(workbook)
}

fn write_raw_sheet(worksheet: &mut Worksheet, cells: &CellGrid) -> AppResult<()> {
    for (&(row, col), cell) in cells {
        let fmt = value_format(cell, Format::new(), None);
        write_value(worksheet, row, col, cell, &fmt)?;
    }
    Ok(())
}

/// Styled header, banded rows, right-aligned amounts, auto column widths.
fn write_sheet(worksheet: &mut Worksheet, table: &Table) -> AppResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_workbook_error)?;
    }

    if table.headers.is_empty() {
        return Ok(());
    }
    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = table
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, cells) in table.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in cells.iter().enumerate().take(col_widths.len()) {
            write_cell(worksheet, row, col as u16, cell, band_color)?;
            let shown = match cell.as_number() {
                Some(n) if cell.is_number() => format!("{n:.2}"),
                _ => cell.to_string(),
            };
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(shown.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_workbook_error)?;
    }

    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    let fmt = value_format(cell, base, Some(AMOUNT_FORMAT));
    write_value(worksheet, row, col, cell, &fmt)
}

/// Number format matching the value type; formulas follow their cached result.
fn value_format(cell: &Cell, base: Format, amount: Option<&str>) -> Format {
    match cell {
        Cell::Number(_) => match amount {
            Some(pattern) => base.set_align(FormatAlign::Right).set_num_format(pattern),
            None => base,
        },
        Cell::DateTime(dt) if dt.time() == NaiveTime::MIN => base.set_num_format(DATE_FORMAT),
        Cell::DateTime(_) => base.set_num_format(DATETIME_FORMAT),
        Cell::Duration(_) => base.set_num_format(DURATION_FORMAT),
        Cell::Formula { cached, .. } => value_format(cached, base, amount),
        _ => base,
    }
}

fn write_value(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    fmt: &Format,
) -> AppResult<()> {
    let written = match cell {
        Cell::Empty => worksheet.write_blank(row, col, fmt),
        Cell::Number(n) => worksheet.write_number_with_format(row, col, *n, fmt),
        Cell::Text(s) => worksheet.write_string_with_format(row, col, s, fmt),
        Cell::Bool(b) => worksheet.write_boolean_with_format(row, col, *b, fmt),
        Cell::DateTime(dt) => {
            worksheet.write_number_with_format(row, col, Cell::excel_serial(dt), fmt)
        }
        Cell::Duration(days) => worksheet.write_number_with_format(row, col, *days, fmt),
        Cell::Formula { formula, cached } => {
            let mut formula = Formula::new(formula);
            if !cached.is_empty() {
                formula = formula.set_result(stored_result(cached));
            }
            worksheet.write_formula_with_format(row, col, formula, fmt)
        }
    };
    written.map_err(to_workbook_error)?;
    Ok(())
}

/// Cached formula result as Excel stores it: dates and durations as serials.
fn stored_result(cell: &Cell) -> String {
    match cell {
        Cell::DateTime(dt) => Cell::excel_serial(dt).to_string(),
        Cell::Duration(days) => days.to_string(),
        other => other.to_string(),
    }
}

fn to_workbook_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Workbook(e.to_string())
}
