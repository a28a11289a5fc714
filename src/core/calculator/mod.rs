//! Cost calculators: pure functions from raw line items to calculated tables.
//! Missing input columns read as zero; every function is total, including on
//! empty tables.

pub mod consultancy;
pub mod mission;

use crate::models::mission::TOTAL;
use crate::models::sheet::{Sheet, SheetKind};
use crate::models::table::Table;

/// Calculated view of a catalog sheet, as shown and downloaded.
pub fn calculate_sheet(sheet: &Sheet, table: &Table) -> Table {
    match sheet.kind {
        SheetKind::Mission if sheet.is_formula_free() => table.clone(),
        SheetKind::Mission => mission::calculate_missions(table),
        SheetKind::Consultancy => consultancy::calculate_consultancies(table),
        SheetKind::FreeForm => table.clone(),
    }
}

/// Requested amount of a catalog sheet.
///
/// Formula-free and free-form sheets sum their typed-in `total` column;
/// non-numeric entries are skipped.
pub fn sheet_total(sheet: &Sheet, table: &Table) -> f64 {
    match sheet.kind {
        SheetKind::Mission if sheet.is_formula_free() => table.column_sum(TOTAL),
        SheetKind::Mission => mission::missions_total(table),
        SheetKind::Consultancy => consultancy::consultancies_total(table),
        SheetKind::FreeForm => table.column_sum(TOTAL),
    }
}
