// src/export/model.rs

use crate::export::ExportFormat;
use crate::models::table::Table;
use serde_json::{Map, Value};

/// Download file name: `<sheet><suffix>.<ext>`.
pub fn file_name(sheet_name: &str, suffix: &str, format: ExportFormat) -> String {
    format!("{sheet_name}{suffix}.{}", format.as_str())
}

/// One JSON object per row, keyed by header.
pub(crate) fn table_to_records(table: &Table) -> Vec<Map<String, Value>> {
    table
        .rows
        .iter()
        .map(|row| {
            table
                .headers
                .iter()
                .zip(row)
                .map(|(h, cell)| {
                    let value = serde_json::to_value(cell).unwrap_or(Value::Null);
                    (h.clone(), value)
                })
                .collect()
        })
        .collect()
}

/// Rows as strings, for CSV.
pub(crate) fn table_to_strings(table: &Table) -> Vec<Vec<String>> {
    table
        .rows
        .iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect()
}
