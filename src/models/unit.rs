use serde::Serialize;
use std::fmt;

/// Organizational units owning budget lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Unit {
    Vpd, // Vicepresidencia de Desarrollo
    Vpo, // Vicepresidencia de Operaciones
    Vpf, // Vicepresidencia de Finanzas
    Vpe, // Vicepresidencia Ejecutiva
    Pre, // Presidencia
}

impl Unit {
    /// Units in dashboard order.
    pub const ALL: [Unit; 5] = [Unit::Vpd, Unit::Vpo, Unit::Vpf, Unit::Vpe, Unit::Pre];

    /// Units with their own mission and consultancy sheets.
    pub const STANDARD: [Unit; 4] = [Unit::Vpd, Unit::Vpo, Unit::Vpf, Unit::Pre];

    /// Units whose spend is partly booked centrally in the VPE sheets
    /// and attributed back through `area_imputacion`.
    pub const CENTRALLY_BOOKED: [Unit; 3] = [Unit::Vpd, Unit::Vpo, Unit::Vpf];

    pub fn code(&self) -> &'static str {
        match self {
            Unit::Vpd => "VPD",
            Unit::Vpo => "VPO",
            Unit::Vpf => "VPF",
            Unit::Vpe => "VPE",
            Unit::Pre => "PRE",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Unit::Vpd => "Vicepresidencia de Desarrollo",
            Unit::Vpo => "Vicepresidencia de Operaciones",
            Unit::Vpf => "Vicepresidencia de Finanzas",
            Unit::Vpe => "Vicepresidencia Ejecutiva",
            Unit::Pre => "Presidencia",
        }
    }

    /// Parse a unit code (case-insensitive, surrounding blanks ignored).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "VPD" => Some(Unit::Vpd),
            "VPO" => Some(Unit::Vpo),
            "VPF" => Some(Unit::Vpf),
            "VPE" => Some(Unit::Vpe),
            "PRE" => Some(Unit::Pre),
            _ => None,
        }
    }

    /// PRE enters mission totals by hand: no subtotal formulas are applied.
    pub fn is_formula_free(&self) -> bool {
        matches!(self, Unit::Pre)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// True when an `area_imputacion` tag names `unit`.
pub fn is_attributed_to(tag: Option<&str>, unit: Unit) -> bool {
    tag.and_then(Unit::from_code) == Some(unit)
}
