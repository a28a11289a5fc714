use crate::auth::policy::{Section, visible_sections};
use crate::core::calculator::{calculate_sheet, sheet_total};
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::cell::Cell;
use crate::models::ledger::{Ledger, LedgerKind};
use crate::models::sheet::{CATALOG, Sheet};
use crate::models::table::Table;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{RESET, color_for_difference, colorize_optional};
use crate::utils::formatting::{bold, format_amount, format_cell, format_signed_amount};
use crate::utils::table::{Align, Column, TextTable};

pub struct ShowLogic;

impl ShowLogic {
    /// List the sections the user can see, with the sheets behind each one.
    pub fn print_sections(session: &Session) {
        let user = session.user();
        header(
            "Sections",
            Some(&format!("user={} role={} area={}", user.username, user.role, user.area)),
        );

        for section in visible_sections(&user.area) {
            let access = if session.can_edit(section) {
                "edit"
            } else {
                "view"
            };
            match section {
                Section::Unit(unit) => {
                    println!("{} [{}] {}", bold(&section.to_string()), access, unit.description())
                }
                _ => println!("{} [{}]", bold(&section.to_string()), access),
            }

            for sheet in sheets_of(section) {
                let status = match session.table(sheet) {
                    Some(t) => format!("{} rows", t.len()),
                    None => "missing".to_string(),
                };
                println!("    {:<26} {}", sheet.name, status);
            }
        }
    }

    /// Render the calculated view of one sheet.
    pub fn print_sheet(session: &Session, sheet: &'static Sheet) -> AppResult<()> {
        let section = Section::for_unit(sheet.unit);
        session.require_view(section)?;

        let table = session
            .table(sheet)
            .ok_or_else(|| AppError::UnknownSheet(format!("{} (not in workbook)", sheet.name)))?;

        let mode = if session.can_edit(section) {
            "editable"
        } else {
            "read-only"
        };
        header(sheet.name, Some(&format!("[{section}] {mode}")));

        if table.is_empty() {
            warning("No rows.");
            return Ok(());
        }

        print!("{}", render_table(&calculate_sheet(sheet, table)));
        println!(
            "\n{} {}",
            bold("Total:"),
            format_amount(sheet_total(sheet, table))
        );
        Ok(())
    }

    /// Render one reconciliation ledger (Consolidated section).
    pub fn print_ledger(session: &Session, kind: LedgerKind) -> AppResult<()> {
        session.require_view(Section::Consolidated)?;

        let ledger = session.ledger(kind);
        header(kind.sheet_name(), Some(&format!("[{}]", Section::Consolidated)));

        if ledger.is_empty() {
            info("No reconciliation rows: no sheets loaded for this ledger.");
            return Ok(());
        }
        print!("{}", render_ledger(ledger));
        Ok(())
    }
}

/// Catalog sheets shown in `section`.
pub fn sheets_of(section: Section) -> impl Iterator<Item = &'static Sheet> {
    CATALOG
        .iter()
        .filter(move |s| Section::for_unit(s.unit) == section)
}

pub fn render_table(table: &Table) -> String {
    let columns = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let numeric = table
                .rows
                .iter()
                .any(|r| r.get(i).is_some_and(Cell::is_number));
            Column::new(h, if numeric { Align::Right } else { Align::Left })
        })
        .collect();

    let mut grid = TextTable::new(columns);
    for row in &table.rows {
        grid.add_row(row.iter().map(|c| colorize_optional(&format_cell(c))).collect());
    }
    grid.render()
}

fn render_ledger(ledger: &Ledger) -> String {
    let mut grid = TextTable::new(vec![
        Column::new("Unidad", Align::Left),
        Column::new("Solicitado", Align::Right),
        Column::new("Aprobado DPP", Align::Right),
        Column::new("Diferencia", Align::Right),
    ]);

    for row in ledger.rows() {
        grid.add_row(vec![
            row.unit().to_string(),
            format_amount(row.requested()),
            format_amount(row.approved()),
            colored_difference(row.difference()),
        ]);
    }

    let (requested, approved, difference) = ledger.totals();
    grid.add_row(vec![
        bold("TOTAL"),
        format_amount(requested),
        format_amount(approved),
        colored_difference(difference),
    ]);

    grid.render()
}

fn colored_difference(value: f64) -> String {
    format!(
        "{}{}{}",
        color_for_difference(value),
        format_signed_amount(value),
        RESET
    )
}
