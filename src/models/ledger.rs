//! Reconciliation ledger: requested vs approved (DPP) amounts per unit label.

use crate::models::cell::Cell;
use crate::models::table::Table;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum LedgerKind {
    Missions,
    Consultancies,
}

impl LedgerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerKind::Missions => "missions",
            LedgerKind::Consultancies => "consultancies",
        }
    }

    /// Name used for downloads and sheet titles.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            LedgerKind::Missions => "Conciliacion_Misiones",
            LedgerKind::Consultancies => "Conciliacion_Consultorias",
        }
    }
}

impl fmt::Display for LedgerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reconciled unit. `difference` always equals `approved - requested`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconciliationRow {
    unit: String,
    requested: f64,
    approved: f64,
    difference: f64,
}

impl ReconciliationRow {
    fn new(unit: &str, requested: f64, approved: f64) -> Self {
        Self {
            unit: unit.to_string(),
            requested,
            approved,
            difference: approved - requested,
        }
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn requested(&self) -> f64 {
        self.requested
    }

    pub fn approved(&self) -> f64 {
        self.approved
    }

    pub fn difference(&self) -> f64 {
        self.difference
    }
}

pub const LEDGER_HEADERS: [&str; 4] = ["unidad", "solicitado", "aprobado_dpp", "diferencia"];

/// At most one row per unit label; rows keep first-insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ledger {
    kind: LedgerKind,
    rows: Vec<ReconciliationRow>,
}

impl Ledger {
    pub fn new(kind: LedgerKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
        }
    }

    pub fn kind(&self) -> LedgerKind {
        self.kind
    }

    /// Overwrite the unit's row in place, or append it when new.
    pub fn upsert(&mut self, unit: &str, requested: f64, approved: f64) {
        let row = ReconciliationRow::new(unit, requested, approved);
        match self.rows.iter_mut().find(|r| r.unit == unit) {
            Some(existing) => *existing = row,
            None => self.rows.push(row),
        }
    }

    pub fn get(&self, unit: &str) -> Option<&ReconciliationRow> {
        self.rows.iter().find(|r| r.unit == unit)
    }

    pub fn rows(&self) -> &[ReconciliationRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column totals: (requested, approved, difference).
    pub fn totals(&self) -> (f64, f64, f64) {
        self.rows.iter().fold((0.0, 0.0, 0.0), |(r, a, d), row| {
            (r + row.requested, a + row.approved, d + row.difference)
        })
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new(&LEDGER_HEADERS);
        for row in &self.rows {
            table.push_row(vec![
                Cell::Text(row.unit.clone()),
                Cell::Number(row.requested),
                Cell::Number(row.approved),
                Cell::Number(row.difference),
            ]);
        }
        table
    }
}
