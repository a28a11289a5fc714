// src/export/logic.rs

use crate::auth::policy::Section;
use crate::core::calculator::calculate_sheet;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::file_name;
use crate::export::xlsx::export_xlsx;
use crate::models::ledger::LedgerKind;
use crate::models::sheet::Sheet;
use crate::models::table::Table;
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

/// High-level download logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Download the calculated view of a sheet the user can see.
    pub fn export_sheet(
        session: &Session,
        sheet: &'static Sheet,
        format: ExportFormat,
        dir: &Path,
        suffix: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        session.require_view(Section::for_unit(sheet.unit))?;

        let table = session
            .table(sheet)
            .ok_or_else(|| AppError::UnknownSheet(format!("{} (not in workbook)", sheet.name)))?;

        Self::export(&calculate_sheet(sheet, table), sheet.name, format, dir, suffix, force)
    }

    /// Download a reconciliation ledger (Consolidated section).
    pub fn export_ledger(
        session: &Session,
        kind: LedgerKind,
        format: ExportFormat,
        dir: &Path,
        suffix: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        session.require_view(Section::Consolidated)?;

        let table = session.ledger(kind).to_table();
        Self::export(&table, kind.sheet_name(), format, dir, suffix, force)
    }

    /// Serialize `table` into `dir/<name><suffix>.<ext>`.
    pub fn export(
        table: &Table,
        name: &str,
        format: ExportFormat,
        dir: &Path,
        suffix: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(file_name(name, suffix, format));

        ensure_writable(&path, "download", force)?;

        if table.is_empty() {
            warning(format!("{name} has no rows: exporting headers only."));
        }

        match format {
            ExportFormat::Xlsx => export_xlsx(name, table, &path)?,
            ExportFormat::Csv => export_csv(table, &path)?,
            ExportFormat::Json => export_json(table, &path)?,
        }

        Ok(path)
    }
}
