mod common;
use common::{consultancy_table, mission_table, table};
use rbudget::core::calculator::consultancy::{calculate_consultancies, consultancies_total};
use rbudget::core::calculator::mission::{calculate_missions, missions_total, missions_total_for};
use rbudget::core::calculator::{calculate_sheet, sheet_total};
use rbudget::models::cell::Cell;
use rbudget::models::sheet::Sheet;
use rbudget::models::unit::Unit;

#[test]
fn test_mission_costs_worked_example() {
    let calc = calculate_missions(&mission_table("VPD"));

    assert_eq!(calc.number(0, "total_pasaje"), 1000.0);
    assert_eq!(calc.number(0, "total_alojamiento"), 600.0);
    assert_eq!(calc.number(0, "total_perdiem_otros"), 300.0);
    assert_eq!(calc.number(0, "total_movilidad"), 40.0);
    assert_eq!(calc.number(0, "total"), 1940.0);
    assert_eq!(missions_total(&mission_table("VPD")), 1940.0);
}

#[test]
fn test_mission_calculation_keeps_input_untouched() {
    let input = mission_table("VPD");
    let calc = calculate_missions(&input);

    assert!(!input.has_column("total"));
    assert_eq!(calc.headers.len(), input.headers.len() + 5);
    assert_eq!(calc.text(0, "descripcion").as_deref(), Some("Audit trip"));
}

#[test]
fn test_mission_stale_totals_are_recomputed() {
    let mut input = mission_table("VPD");
    input.set(0, "total", Cell::Number(99.0)).unwrap();

    let calc = calculate_missions(&input);
    let totals = calc
        .headers
        .iter()
        .filter(|h| h.eq_ignore_ascii_case("total"))
        .count();

    assert_eq!(totals, 1);
    assert_eq!(calc.number(0, "total"), 1940.0);
}

#[test]
fn test_mission_missing_columns_read_as_zero() {
    let input = table(
        &["descripcion", "funcionarios", "costo_pasaje"],
        &[&["Flight only", "2", "500"]],
    );

    let calc = calculate_missions(&input);
    assert_eq!(calc.number(0, "total_pasaje"), 1000.0);
    assert_eq!(calc.number(0, "total_alojamiento"), 0.0);
    assert_eq!(calc.number(0, "total"), 1000.0);
}

#[test]
fn test_mission_empty_table() {
    let input = table(&["descripcion", "funcionarios"], &[]);
    let calc = calculate_missions(&input);

    assert!(calc.is_empty());
    assert!(calc.has_column("total"));
    assert_eq!(missions_total(&input), 0.0);
}

#[test]
fn test_mission_total_by_attribution() {
    let mut input = mission_table("VPD");
    input.push_row(mission_table(" vpo ").rows[0].clone());

    assert_eq!(missions_total_for(&input, Unit::Vpd), 1940.0);
    assert_eq!(missions_total_for(&input, Unit::Vpo), 1940.0);
    assert_eq!(missions_total_for(&input, Unit::Vpf), 0.0);
}

#[test]
fn test_consultancy_worked_example() {
    let calc = calculate_consultancies(&consultancy_table("VPF"));

    assert_eq!(calc.number(0, "total"), 36000.0);
    assert_eq!(consultancies_total(&consultancy_table("VPF")), 36000.0);
}

#[test]
fn test_consultancy_non_numeric_inputs_count_as_zero() {
    let input = table(
        &["descripcion", "funcionarios", "meses", "monto_mensual"],
        &[&["Pending", "n/a", "6", "2000"], &["Review", "1", "2", " 1500 "]],
    );

    let calc = calculate_consultancies(&input);
    assert_eq!(calc.number(0, "total"), 0.0);
    assert_eq!(calc.number(1, "total"), 3000.0);
}

#[test]
fn test_formula_free_sheet_uses_typed_totals() {
    let sheet = Sheet::by_name("PRE_Misiones").unwrap();
    let input = table(
        &["descripcion", "funcionarios", "dias", "total"],
        &[
            &["Summit", "4", "2", "1200"],
            &["Visit", "1", "1", "not a number"],
            &["Forum", "2", "1", "300.5"],
        ],
    );

    assert_eq!(calculate_sheet(sheet, &input), input);
    assert_eq!(sheet_total(sheet, &input), 1500.5);
}

#[test]
fn test_calculated_sheet_total() {
    let sheet = Sheet::by_name("vpd_misiones").unwrap();
    let mut input = mission_table("VPD");
    input.push_row(mission_table("VPD").rows[0].clone());

    assert_eq!(sheet_total(sheet, &input), 3880.0);
}
