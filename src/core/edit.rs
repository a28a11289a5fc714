//! Write actions on a sheet: single-cell edits and wholesale replacement
//! from an uploaded workbook. Both need edit permission on the sheet's
//! section; without it the table is shown read-only and nothing changes.

use crate::auth::policy::Section;
use crate::config::Config;
use crate::core::session::Session;
use crate::core::show::ShowLogic;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::models::cell::Cell;
use crate::models::sheet::Sheet;
use crate::models::table::Table;
use crate::ui::messages::{success, warning};
use crate::workbook;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Saved,
    Rejected,
}

pub struct EditLogic;

impl EditLogic {
    /// Set one cell. `row == rows` appends a new row.
    pub fn set_cell(
        session: &mut Session,
        cfg: &Config,
        sheet: &'static Sheet,
        row: usize,
        column: &str,
        value: &str,
    ) -> AppResult<EditOutcome> {
        if !Self::check_permission(session, sheet)? {
            return Ok(EditOutcome::Rejected);
        }
        if sheet.is_derived_column(column) {
            return Err(AppError::DerivedColumn(column.to_string()));
        }

        let mut table = session
            .table(sheet)
            .cloned()
            .unwrap_or_else(|| Table::new(sheet.input_headers()));
        table.set(row, column, Cell::parse(value))?;

        Self::save(session, cfg, sheet, table)?;
        success(format!("{}: row {row}, column '{column}' saved.", sheet.name));
        Ok(EditOutcome::Saved)
    }

    /// Replace the whole sheet with the first sheet of `upload`.
    pub fn replace(
        session: &mut Session,
        cfg: &Config,
        sheet: &'static Sheet,
        upload: &Path,
    ) -> AppResult<EditOutcome> {
        if !Self::check_permission(session, sheet)? {
            return Ok(EditOutcome::Rejected);
        }

        let uploaded = workbook::read_first_sheet(upload)?;
        let table = uploaded.without_columns(sheet.derived_headers());
        let rows = table.len();

        Self::save(session, cfg, sheet, table)?;
        success(format!(
            "{} replaced with {rows} rows from {}.",
            sheet.name,
            upload.display()
        ));
        Ok(EditOutcome::Saved)
    }

    /// `Ok(false)` (after a warning and a read-only render) when the user
    /// may see but not edit the sheet; `Err` when the section is hidden.
    fn check_permission(session: &Session, sheet: &'static Sheet) -> AppResult<bool> {
        let section = Section::for_unit(sheet.unit);
        session.require_view(section)?;

        if session.can_edit(section) {
            return Ok(true);
        }

        warning(format!(
            "You don't have permission to edit {} (section {section}). Showing read-only data.",
            sheet.name
        ));
        if session.table(sheet).is_some() {
            ShowLogic::print_sheet(session, sheet)?;
        }
        Ok(false)
    }

    /// Persist the sheet, then refresh the session and its ledgers.
    fn save(
        session: &mut Session,
        cfg: &Config,
        sheet: &'static Sheet,
        table: Table,
    ) -> AppResult<()> {
        workbook::save_sheet(&cfg.workbook_path(), sheet.name, &table)?;
        session.insert_table(sheet, table);

        let writes = session.synchronize(&cfg.targets());
        audit(
            &cfg.database_path(),
            "sync",
            sheet.name,
            &format!("{writes} ledger rows refreshed"),
        );
        Ok(())
    }
}
