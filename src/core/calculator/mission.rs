//! Mission cost calculator.

use crate::models::cell::Cell;
use crate::models::mission::{self, MissionCosts, MissionRow};
use crate::models::table::Table;
use crate::models::unit::Unit;

/// Subtotals are `count × rate` products; `total` is their sum.
pub fn mission_costs(row: &MissionRow) -> MissionCosts {
    let total_pasaje = row.funcionarios * row.costo_pasaje;
    let total_alojamiento = row.funcionarios * row.dias * row.alojamiento;
    let total_perdiem_otros = row.funcionarios * row.dias * row.perdiem_otros;
    let total_movilidad = row.funcionarios * row.movilidad;

    MissionCosts {
        total_pasaje,
        total_alojamiento,
        total_perdiem_otros,
        total_movilidad,
        total: total_pasaje + total_alojamiento + total_perdiem_otros + total_movilidad,
    }
}

/// Return a copy of `table` with the derived cost columns recomputed.
///
/// Any derived columns already present (e.g. from an uploaded sheet) are
/// discarded first; the input table is never modified.
pub fn calculate_missions(table: &Table) -> Table {
    let mut out = table.without_columns(mission::DERIVED_HEADERS);
    let costs: Vec<MissionCosts> = MissionRow::from_table(table)
        .iter()
        .map(mission_costs)
        .collect();

    out.headers
        .extend(mission::DERIVED_HEADERS.iter().map(|h| h.to_string()));
    for (row, c) in out.rows.iter_mut().zip(&costs) {
        row.extend(c.as_columns().into_iter().map(Cell::Number));
    }
    out
}

/// Sum of the calculated `total` over every row.
pub fn missions_total(table: &Table) -> f64 {
    MissionRow::from_table(table)
        .iter()
        .map(|r| mission_costs(r).total)
        .sum()
}

/// Sum of the calculated `total` over rows attributed to `unit`.
pub fn missions_total_for(table: &Table, unit: Unit) -> f64 {
    MissionRow::from_table(table)
        .iter()
        .filter(|r| r.is_attributed_to(unit))
        .map(|r| mission_costs(r).total)
        .sum()
}
