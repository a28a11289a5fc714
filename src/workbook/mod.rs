//! Shared budget workbook: one sheet per line-item table.
//!
//! Reads go through `calamine`, writes through `rust_xlsxwriter`. Writing is
//! read-modify-write: the file is re-read right before a save so that only
//! the edited sheet is replaced, then written to a temp file and renamed.
//! Other sheets are written back cell by cell with their types and formulas;
//! their cell styling is not carried over.

mod reader;
mod writer;

use crate::errors::{AppError, AppResult};
use crate::models::sheet::{CATALOG, Sheet};
use crate::models::table::Table;
use crate::ui::messages::warning;
use std::collections::BTreeMap;
use std::path::Path;

pub use reader::read_first_sheet;
pub(crate) use writer::table_to_bytes;
use writer::SheetData;

/// Catalog sheets loaded into a session, keyed by sheet name.
pub type SheetTables = BTreeMap<&'static str, Table>;

/// Load every catalog sheet present in the workbook.
///
/// A missing optional sheet is replaced by an empty table (with a warning);
/// a missing required sheet is left out of the result (with a warning).
pub fn load_catalog(path: &Path) -> AppResult<SheetTables> {
    if !path.exists() {
        return Err(AppError::Workbook(format!(
            "workbook not found: {}",
            path.display()
        )));
    }

    let mut found: Vec<(String, Table)> = reader::read_all_sheets(path)?;
    let mut tables = SheetTables::new();

    for sheet in CATALOG {
        match take_sheet(&mut found, sheet.name) {
            Some(table) => {
                tables.insert(sheet.name, table);
            }
            None if sheet.optional => {
                warning(format!(
                    "Sheet '{}' not found: using an empty table.",
                    sheet.name
                ));
                tables.insert(sheet.name, Table::new(sheet.input_headers()));
            }
            None => {
                warning(format!(
                    "Sheet '{}' not found: it will be skipped.",
                    sheet.name
                ));
            }
        }
    }

    Ok(tables)
}

/// Replace (or add) one sheet in the workbook, keeping all the others.
pub fn save_sheet(path: &Path, sheet_name: &str, table: &Table) -> AppResult<()> {
    let stored = if path.exists() {
        reader::read_raw_sheets(path)?
    } else {
        Vec::new()
    };

    let mut replaced = false;
    let mut sheets: Vec<(String, SheetData)> = stored
        .into_iter()
        .map(|raw| {
            if !replaced && raw.name.trim().eq_ignore_ascii_case(sheet_name) {
                replaced = true;
                (raw.name, SheetData::Table(table.clone()))
            } else {
                (raw.name, SheetData::Raw(raw.cells))
            }
        })
        .collect();
    if !replaced {
        sheets.push((sheet_name.to_string(), SheetData::Table(table.clone())));
    }

    writer::write_workbook(path, &sheets)
}

/// Fresh workbook with every catalog sheet and its input headers.
pub fn write_template(path: &Path) -> AppResult<()> {
    let sheets: Vec<(String, SheetData)> = CATALOG
        .iter()
        .map(|s: &Sheet| {
            let table = Table::new(s.input_headers());
            (s.name.to_string(), SheetData::Table(table))
        })
        .collect();
    writer::write_workbook(path, &sheets)
}

fn take_sheet(found: &mut Vec<(String, Table)>, name: &str) -> Option<Table> {
    let idx = found
        .iter()
        .position(|(n, _)| n.trim().eq_ignore_ascii_case(name))?;
    Some(found.remove(idx).1)
}
