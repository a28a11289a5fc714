use crate::models::table::Table;
use crate::models::unit::{Unit, is_attributed_to};
use serde::Serialize;

pub const DESCRIPCION: &str = "descripcion";
pub const AREA_IMPUTACION: &str = "area_imputacion";
pub const FUNCIONARIOS: &str = "funcionarios";
pub const COSTO_PASAJE: &str = "costo_pasaje";
pub const DIAS: &str = "dias";
pub const ALOJAMIENTO: &str = "alojamiento";
pub const PERDIEM_OTROS: &str = "perdiem_otros";
pub const MOVILIDAD: &str = "movilidad";

pub const TOTAL_PASAJE: &str = "total_pasaje";
pub const TOTAL_ALOJAMIENTO: &str = "total_alojamiento";
pub const TOTAL_PERDIEM_OTROS: &str = "total_perdiem_otros";
pub const TOTAL_MOVILIDAD: &str = "total_movilidad";
pub const TOTAL: &str = "total";

pub const INPUT_HEADERS: &[&str] = &[
    DESCRIPCION,
    AREA_IMPUTACION,
    FUNCIONARIOS,
    COSTO_PASAJE,
    DIAS,
    ALOJAMIENTO,
    PERDIEM_OTROS,
    MOVILIDAD,
];

/// Mission sheets of the formula-free unit: totals are typed in.
pub const FORMULA_FREE_HEADERS: &[&str] = &[DESCRIPCION, FUNCIONARIOS, DIAS, TOTAL];

pub const DERIVED_HEADERS: &[&str] = &[
    TOTAL_PASAJE,
    TOTAL_ALOJAMIENTO,
    TOTAL_PERDIEM_OTROS,
    TOTAL_MOVILIDAD,
    TOTAL,
];

/// One funded trip. Numeric fields default to zero when missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MissionRow {
    pub descripcion: String,
    pub area_imputacion: Option<String>,
    pub funcionarios: f64,
    pub costo_pasaje: f64,
    pub dias: f64,
    pub alojamiento: f64,
    pub perdiem_otros: f64,
    pub movilidad: f64,
}

impl MissionRow {
    pub fn from_table(table: &Table) -> Vec<MissionRow> {
        (0..table.len())
            .map(|r| MissionRow {
                descripcion: table.text(r, DESCRIPCION).unwrap_or_default(),
                area_imputacion: table.text(r, AREA_IMPUTACION),
                funcionarios: table.number(r, FUNCIONARIOS),
                costo_pasaje: table.number(r, COSTO_PASAJE),
                dias: table.number(r, DIAS),
                alojamiento: table.number(r, ALOJAMIENTO),
                perdiem_otros: table.number(r, PERDIEM_OTROS),
                movilidad: table.number(r, MOVILIDAD),
            })
            .collect()
    }

    pub fn is_attributed_to(&self, unit: Unit) -> bool {
        is_attributed_to(self.area_imputacion.as_deref(), unit)
    }
}

/// Derived cost columns of a mission row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MissionCosts {
    pub total_pasaje: f64,
    pub total_alojamiento: f64,
    pub total_perdiem_otros: f64,
    pub total_movilidad: f64,
    pub total: f64,
}

impl MissionCosts {
    pub fn as_columns(&self) -> [f64; 5] {
        [
            self.total_pasaje,
            self.total_alojamiento,
            self.total_perdiem_otros,
            self.total_movilidad,
            self.total,
        ]
    }
}
