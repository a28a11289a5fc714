// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::table::Table;
use crate::ui::messages::info;
use crate::workbook::table_to_bytes;
use std::fs;
use std::path::Path;

/// Export XLSX: the table is serialized to an in-memory byte stream
/// (the same bytes a browser download would receive), then written out.
pub(crate) fn export_xlsx(sheet_name: &str, table: &Table, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let bytes = table_to_bytes(sheet_name, table)?;
    fs::write(path, bytes)?;

    notify_export_success("XLSX", path);
    Ok(())
}
