//! Catalog of the workbook sheets the dashboard knows about.
//!
//! Sheet names are stable identifiers: they key the session tables and are
//! the replace key when a sheet is written back to the workbook.

use crate::models::consultancy;
use crate::models::mission;
use crate::models::unit::Unit;

pub const VPE_PERSONNEL_MISSIONS: &str = "VPE_MisionesPersonal";
pub const VPE_CONSULTANT_MISSIONS: &str = "VPE_MisionesConsultores";
pub const VPE_CONSULTANCIES: &str = "VPE_Consultorias";
pub const PRE_COMMUNICATIONS: &str = "PRE_Comunicaciones";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetKind {
    Mission,
    Consultancy,
    /// Rows carry a hand-entered `total`; nothing is calculated.
    FreeForm,
}

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Sheet {
    pub name: &'static str,
    pub kind: SheetKind,
    pub unit: Unit,
    /// Optional sheets are replaced by an empty table when absent.
    pub optional: bool,
}

pub const CATALOG: &[Sheet] = &[
    Sheet::required("VPD_Misiones", SheetKind::Mission, Unit::Vpd),
    Sheet::required("VPD_Consultorias", SheetKind::Consultancy, Unit::Vpd),
    Sheet::required("VPO_Misiones", SheetKind::Mission, Unit::Vpo),
    Sheet::required("VPO_Consultorias", SheetKind::Consultancy, Unit::Vpo),
    Sheet::required("VPF_Misiones", SheetKind::Mission, Unit::Vpf),
    Sheet::required("VPF_Consultorias", SheetKind::Consultancy, Unit::Vpf),
    Sheet::required("PRE_Misiones", SheetKind::Mission, Unit::Pre),
    Sheet::required("PRE_Consultorias", SheetKind::Consultancy, Unit::Pre),
    Sheet {
        name: PRE_COMMUNICATIONS,
        kind: SheetKind::FreeForm,
        unit: Unit::Pre,
        optional: true,
    },
    Sheet::required(VPE_PERSONNEL_MISSIONS, SheetKind::Mission, Unit::Vpe),
    Sheet::required(VPE_CONSULTANT_MISSIONS, SheetKind::Mission, Unit::Vpe),
    Sheet::required(VPE_CONSULTANCIES, SheetKind::Consultancy, Unit::Vpe),
];

const FREE_FORM_HEADERS: &[&str] = &["descripcion", "total"];

impl Sheet {
    const fn required(name: &'static str, kind: SheetKind, unit: Unit) -> Self {
        Self {
            name,
            kind,
            unit,
            optional: false,
        }
    }

    /// Catalog lookup by sheet name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Sheet> {
        CATALOG
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }

    /// The unit's own mission sheet (standard units only).
    pub fn missions_of(unit: Unit) -> Option<&'static Sheet> {
        Self::own_sheet(unit, SheetKind::Mission)
    }

    /// The unit's own consultancy sheet (standard units only).
    pub fn consultancies_of(unit: Unit) -> Option<&'static Sheet> {
        Self::own_sheet(unit, SheetKind::Consultancy)
    }

    fn own_sheet(unit: Unit, kind: SheetKind) -> Option<&'static Sheet> {
        if unit == Unit::Vpe {
            // VPE books centrally; see the VPE_* sheets.
            return None;
        }
        CATALOG.iter().find(|s| s.unit == unit && s.kind == kind)
    }

    /// Mission sheet whose totals are typed in rather than calculated.
    pub fn is_formula_free(&self) -> bool {
        self.kind == SheetKind::Mission && self.unit.is_formula_free()
    }

    /// Columns a user fills in; a fresh sheet is created with these headers.
    pub fn input_headers(&self) -> &'static [&'static str] {
        match self.kind {
            SheetKind::Mission if self.is_formula_free() => mission::FORMULA_FREE_HEADERS,
            SheetKind::Mission => mission::INPUT_HEADERS,
            SheetKind::Consultancy => consultancy::INPUT_HEADERS,
            SheetKind::FreeForm => FREE_FORM_HEADERS,
        }
    }

    /// Columns produced by the cost calculators; never edited by hand.
    pub fn derived_headers(&self) -> &'static [&'static str] {
        match self.kind {
            SheetKind::Mission if self.is_formula_free() => &[],
            SheetKind::Mission => mission::DERIVED_HEADERS,
            SheetKind::Consultancy => consultancy::DERIVED_HEADERS,
            SheetKind::FreeForm => &[],
        }
    }

    pub fn is_derived_column(&self, column: &str) -> bool {
        self.derived_headers()
            .iter()
            .any(|h| h.eq_ignore_ascii_case(column.trim()))
    }
}
