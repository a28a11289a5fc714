// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{table_to_records, table_to_strings};
use crate::export::notify_export_success;
use crate::models::table::Table;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed (array of row objects).
pub(crate) fn export_json(table: &Table, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&table_to_records(table))
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with a header row.
pub(crate) fn export_csv(table: &Table, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(&table.headers)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    for row in table_to_strings(table) {
        wtr.write_record(&row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
