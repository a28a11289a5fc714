use crate::models::cell::Cell;
use crate::models::consultancy::{self, ConsultancyRow};
use crate::models::table::Table;
use crate::models::unit::Unit;

/// `total = funcionarios × meses × monto_mensual`
pub fn consultancy_total(row: &ConsultancyRow) -> f64 {
    row.funcionarios * row.meses * row.monto_mensual
}

/// Copy of `table` with a freshly computed `total` column.
pub fn calculate_consultancies(table: &Table) -> Table {
    let mut out = table.without_columns(consultancy::DERIVED_HEADERS);
    let totals: Vec<f64> = ConsultancyRow::from_table(table)
        .iter()
        .map(consultancy_total)
        .collect();

    out.headers.push(consultancy::TOTAL.to_string());
    for (row, total) in out.rows.iter_mut().zip(totals) {
        row.push(Cell::Number(total));
    }
    out
}

pub fn consultancies_total(table: &Table) -> f64 {
    ConsultancyRow::from_table(table)
        .iter()
        .map(consultancy_total)
        .sum()
}

pub fn consultancies_total_for(table: &Table, unit: Unit) -> f64 {
    ConsultancyRow::from_table(table)
        .iter()
        .filter(|r| r.is_attributed_to(unit))
        .map(consultancy_total)
        .sum()
}
