//! Synchronization pass: rebuild both ledgers from the session tables.
//!
//! Runs on every application load and after every saved edit. Every write is
//! an upsert keyed by label, so running it again on unchanged tables leaves
//! the ledgers identical.

use crate::core::calculator::consultancy::consultancies_total_for;
use crate::core::calculator::mission::missions_total_for;
use crate::core::calculator::sheet_total;
use crate::core::session::Session;
use crate::core::targets::{Targets, labels};
use crate::models::ledger::LedgerKind;
use crate::models::sheet::{
    Sheet, VPE_CONSULTANCIES, VPE_CONSULTANT_MISSIONS, VPE_PERSONNEL_MISSIONS,
};
use crate::models::unit::Unit;

impl Session {
    /// Returns the number of ledger rows written.
    pub fn synchronize(&mut self, targets: &Targets) -> usize {
        let mut writes = 0;

        // 1) Standard units, from their own sheets.
        for unit in Unit::STANDARD {
            for (sheet, kind) in [
                (Sheet::missions_of(unit), LedgerKind::Missions),
                (Sheet::consultancies_of(unit), LedgerKind::Consultancies),
            ] {
                let Some(sheet) = sheet else { continue };
                let Some(table) = self.tables.get(sheet.name) else {
                    continue;
                };
                let requested = sheet_total(sheet, table);
                self.upsert(kind, unit.code(), requested, targets);
                writes += 1;
            }
        }

        // 2) VPE: only rows attributed to VPE itself, one row per sub-category.
        if let Some(t) = self.tables.get(VPE_PERSONNEL_MISSIONS) {
            let requested = missions_total_for(t, Unit::Vpe);
            self.upsert(LedgerKind::Missions, labels::VPE_PERSONNEL_MISSIONS, requested, targets);
            writes += 1;
        }
        if let Some(t) = self.tables.get(VPE_CONSULTANT_MISSIONS) {
            let requested = missions_total_for(t, Unit::Vpe);
            self.upsert(LedgerKind::Missions, labels::VPE_CONSULTANT_MISSIONS, requested, targets);
            writes += 1;
        }
        if let Some(t) = self.tables.get(VPE_CONSULTANCIES) {
            let requested = consultancies_total_for(t, Unit::Vpe);
            self.upsert(LedgerKind::Consultancies, labels::VPE_CONSULTANCIES, requested, targets);
            writes += 1;
        }

        for unit in Unit::CENTRALLY_BOOKED {
            // 3) Consultancies booked by VPE on the unit's behalf.
            if let Some(t) = self.tables.get(VPE_CONSULTANCIES) {
                let requested = consultancies_total_for(t, unit);
                let label = labels::central_consultancies(unit);
                self.upsert(LedgerKind::Consultancies, &label, requested, targets);
                writes += 1;
            }

            // 4) Personnel + consultant missions booked by VPE on its behalf.
            let personnel = self.tables.get(VPE_PERSONNEL_MISSIONS);
            let consultants = self.tables.get(VPE_CONSULTANT_MISSIONS);
            if personnel.is_some() || consultants.is_some() {
                let requested = personnel.map_or(0.0, |t| missions_total_for(t, unit))
                    + consultants.map_or(0.0, |t| missions_total_for(t, unit));
                let label = labels::centralized_expense(unit);
                self.upsert(LedgerKind::Missions, &label, requested, targets);
                writes += 1;
            }
        }

        writes
    }

    fn upsert(&mut self, kind: LedgerKind, label: &str, requested: f64, targets: &Targets) {
        let approved = targets.approved(kind, label);
        self.ledger_mut(kind).upsert(label, requested, approved);
    }
}
