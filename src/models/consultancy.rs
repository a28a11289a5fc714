use crate::models::table::Table;
use crate::models::unit::{Unit, is_attributed_to};
use serde::Serialize;

pub const DESCRIPCION: &str = "descripcion";
pub const AREA_IMPUTACION: &str = "area_imputacion";
pub const FUNCIONARIOS: &str = "funcionarios";
pub const MESES: &str = "meses";
pub const MONTO_MENSUAL: &str = "monto_mensual";
pub const TOTAL: &str = "total";

pub const INPUT_HEADERS: &[&str] = &[
    DESCRIPCION,
    AREA_IMPUTACION,
    FUNCIONARIOS,
    MESES,
    MONTO_MENSUAL,
];

pub const DERIVED_HEADERS: &[&str] = &[TOTAL];

/// Contracted personnel. Numeric fields default to zero when missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConsultancyRow {
    pub descripcion: String,
    pub area_imputacion: Option<String>,
    pub funcionarios: f64,
    pub meses: f64,
    pub monto_mensual: f64,
}

impl ConsultancyRow {
    pub fn from_table(table: &Table) -> Vec<ConsultancyRow> {
        (0..table.len())
            .map(|r| ConsultancyRow {
                descripcion: table.text(r, DESCRIPCION).unwrap_or_default(),
                area_imputacion: table.text(r, AREA_IMPUTACION),
                funcionarios: table.number(r, FUNCIONARIOS),
                meses: table.number(r, MESES),
                monto_mensual: table.number(r, MONTO_MENSUAL),
            })
            .collect()
    }

    pub fn is_attributed_to(&self, unit: Unit) -> bool {
        is_attributed_to(self.area_imputacion.as_deref(), unit)
    }
}
