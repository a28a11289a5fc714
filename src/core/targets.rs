//! DPP targets: approved budget ceilings per ledger label.
//!
//! The figures below are the planning defaults; the application config may
//! override any label through its `targets` section.

use crate::models::ledger::LedgerKind;
use crate::models::unit::Unit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ledger labels for rows that are not a plain unit code.
pub mod labels {
    use crate::models::unit::Unit;

    pub const VPE_PERSONNEL_MISSIONS: &str = "VPE - Misiones de personal";
    pub const VPE_CONSULTANT_MISSIONS: &str = "VPE - Misiones de consultores";
    pub const VPE_CONSULTANCIES: &str = "VPE - Consultorias";

    /// Personnel + consultant missions booked by VPE on behalf of `unit`.
    pub fn centralized_expense(unit: Unit) -> String {
        format!("{} - Gasto centralizado", unit.code())
    }

    /// Consultancies booked by VPE on behalf of `unit`.
    pub fn central_consultancies(unit: Unit) -> String {
        format!("{} - Consultorias VPE", unit.code())
    }
}

/// Per-label overrides read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetOverrides {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub missions: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub consultancies: BTreeMap<String, f64>,
}

impl TargetOverrides {
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty() && self.consultancies.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Targets {
    missions: BTreeMap<String, f64>,
    consultancies: BTreeMap<String, f64>,
}

impl Default for Targets {
    fn default() -> Self {
        Self::dpp()
    }
}

impl Targets {
    /// The fixed DPP planning figures.
    pub fn dpp() -> Self {
        let mut missions = BTreeMap::new();
        let mut consultancies = BTreeMap::new();

        for (unit, m, c) in [
            (Unit::Vpd, 450_000.0, 900_000.0),
            (Unit::Vpo, 380_000.0, 750_000.0),
            (Unit::Vpf, 210_000.0, 400_000.0),
            (Unit::Pre, 520_000.0, 650_000.0),
        ] {
            missions.insert(unit.code().to_string(), m);
            consultancies.insert(unit.code().to_string(), c);
        }

        missions.insert(labels::VPE_PERSONNEL_MISSIONS.to_string(), 300_000.0);
        missions.insert(labels::VPE_CONSULTANT_MISSIONS.to_string(), 150_000.0);
        consultancies.insert(labels::VPE_CONSULTANCIES.to_string(), 500_000.0);

        for (unit, central_missions, central_consultancies) in [
            (Unit::Vpd, 120_000.0, 200_000.0),
            (Unit::Vpo, 95_000.0, 180_000.0),
            (Unit::Vpf, 60_000.0, 90_000.0),
        ] {
            missions.insert(labels::centralized_expense(unit), central_missions);
            consultancies.insert(labels::central_consultancies(unit), central_consultancies);
        }

        Self {
            missions,
            consultancies,
        }
    }

    pub fn with_overrides(overrides: &TargetOverrides) -> Self {
        let mut targets = Self::dpp();
        targets
            .missions
            .extend(overrides.missions.iter().map(|(k, v)| (k.clone(), *v)));
        targets
            .consultancies
            .extend(overrides.consultancies.iter().map(|(k, v)| (k.clone(), *v)));
        targets
    }

    /// Approved amount for `label`; unknown labels have no budget (0).
    pub fn approved(&self, kind: LedgerKind, label: &str) -> f64 {
        let map = match kind {
            LedgerKind::Missions => &self.missions,
            LedgerKind::Consultancies => &self.consultancies,
        };
        map.get(label).copied().unwrap_or(0.0)
    }
}
