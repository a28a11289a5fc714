mod common;
use calamine::{Data, Reader, Xlsx, open_workbook};
use chrono::NaiveDate;
use common::{consultancy_table, mission_table, temp_path};
use rbudget::errors::AppError;
use rbudget::models::cell::Cell;
use rbudget::models::sheet::CATALOG;
use rbudget::workbook::{load_catalog, read_first_sheet, save_sheet, write_template};
use rust_xlsxwriter::{ExcelDateTime, Format, Formula, Workbook};
use std::path::Path;

/// Workbook as a user would keep it: a notes sheet with a date, a formula
/// and a flag, plus a mission sheet with an extra date column.
fn write_user_workbook(path: &Path) {
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let date = ExcelDateTime::from_ymd(2025, 3, 1).unwrap();
    let mut workbook = Workbook::new();

    let notes = workbook.add_worksheet();
    notes.set_name("Notas").unwrap();
    notes.write(0, 0, "tema").unwrap();
    notes.write(0, 1, "fecha").unwrap();
    notes.write(0, 2, "siguiente").unwrap();
    notes.write(0, 3, "cerrado").unwrap();
    notes.write(1, 0, "Kick-off").unwrap();
    notes
        .write_datetime_with_format(1, 1, &date, &date_format)
        .unwrap();
    notes
        .write_formula_with_format(1, 2, Formula::new("=B2+1").set_result("45718"), &date_format)
        .unwrap();
    notes.write_boolean(1, 3, true).unwrap();
    // a gap row and a cell away from the header block
    notes.write(4, 5, "apart").unwrap();

    let missions = workbook.add_worksheet();
    missions.set_name("VPD_Misiones").unwrap();
    missions.write(0, 0, "descripcion").unwrap();
    missions.write(0, 1, "fecha").unwrap();
    missions.write(1, 0, "Audit trip").unwrap();
    missions
        .write_datetime_with_format(1, 1, &date, &date_format)
        .unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_template_contains_every_catalog_sheet() {
    let path = temp_path("wb_template", "xlsx");
    let path = Path::new(&path);
    write_template(path).unwrap();

    let tables = load_catalog(path).unwrap();
    assert_eq!(tables.len(), CATALOG.len());
    for sheet in CATALOG {
        let t = &tables[sheet.name];
        assert!(t.is_empty());
        assert_eq!(t.headers, sheet.input_headers());
    }
}

#[test]
fn test_save_sheet_keeps_other_sheets() {
    let path = temp_path("wb_keep_others", "xlsx");
    let path = Path::new(&path);

    save_sheet(path, "VPD_Misiones", &mission_table("VPD")).unwrap();
    save_sheet(path, "VPD_Consultorias", &consultancy_table("VPD")).unwrap();
    save_sheet(path, "VPD_Misiones", &mission_table("VPO")).unwrap();

    let tables = load_catalog(path).unwrap();
    assert_eq!(
        tables["VPD_Misiones"].text(0, "area_imputacion").as_deref(),
        Some("VPO")
    );
    assert_eq!(tables["VPD_Consultorias"].number(0, "monto_mensual"), 2000.0);
}

#[test]
fn test_missing_sheets_on_load() {
    let path = temp_path("wb_missing", "xlsx");
    let path = Path::new(&path);
    save_sheet(path, "VPD_Misiones", &mission_table("VPD")).unwrap();

    let tables = load_catalog(path).unwrap();

    // optional sheet: empty stand-in
    let comms = &tables["PRE_Comunicaciones"];
    assert!(comms.is_empty());
    assert!(comms.has_column("total"));

    // required sheet: skipped
    assert!(!tables.contains_key("VPO_Misiones"));
    assert!(tables.contains_key("VPD_Misiones"));
}

#[test]
fn test_load_missing_workbook_fails() {
    let path = temp_path("wb_absent", "xlsx");
    let err = load_catalog(Path::new(&path)).err().unwrap();
    assert!(matches!(err, AppError::Workbook(_)));
}

#[test]
fn test_read_first_sheet_of_upload() {
    let path = temp_path("wb_upload", "xlsx");
    let path = Path::new(&path);
    save_sheet(path, "Anything", &consultancy_table("VPF")).unwrap();

    let t = read_first_sheet(path).unwrap();
    assert_eq!(t.len(), 1);
    assert_eq!(t.number(0, "funcionarios"), 3.0);
    assert_eq!(t.text(0, "descripcion").as_deref(), Some("Data review"));
}

#[test]
fn test_save_sheet_preserves_types_of_other_sheets() {
    let path = temp_path("wb_typed_others", "xlsx");
    let path = Path::new(&path);
    write_user_workbook(path);

    save_sheet(path, "VPD_Consultorias", &consultancy_table("VPD")).unwrap();

    let mut wb: Xlsx<_> = open_workbook(path).unwrap();
    let notes = wb.worksheet_range("Notas").unwrap();
    match notes.get_value((1, 1)) {
        Some(Data::DateTime(dt)) => assert_eq!(dt.as_f64(), 45717.0),
        other => panic!("date cell changed type: {other:?}"),
    }
    assert_eq!(notes.get_value((1, 3)), Some(&Data::Bool(true)));
    assert_eq!(
        notes.get_value((4, 5)),
        Some(&Data::String("apart".to_string()))
    );
    assert!(matches!(notes.get_value((1, 2)), Some(Data::DateTime(_))));

    let formulas = wb.worksheet_formula("Notas").unwrap();
    assert_eq!(
        formulas.get_value((1, 2)).map(String::as_str),
        Some("B2+1")
    );

    let missions = wb.worksheet_range("VPD_Misiones").unwrap();
    assert!(matches!(missions.get_value((1, 1)), Some(Data::DateTime(_))));
}

#[test]
fn test_catalog_date_column_survives_unrelated_save() {
    let path = temp_path("wb_catalog_dates", "xlsx");
    let path = Path::new(&path);
    write_user_workbook(path);

    save_sheet(path, "VPO_Misiones", &mission_table("VPO")).unwrap();

    let tables = load_catalog(path).unwrap();
    let expected = NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let cell = tables["VPD_Misiones"].cell(0, "fecha");
    assert_eq!(cell, &Cell::DateTime(expected));
    assert_eq!(cell.to_string(), "2025-03-01");
    assert_eq!(Cell::excel_serial(&expected), 45717.0);
}
