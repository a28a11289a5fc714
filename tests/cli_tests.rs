use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{Fixture, PASSWORD, mission_table, rbd, table, temp_dir, temp_path};

#[test]
fn test_init_creates_all_files() {
    let fx = Fixture::init("cli_init");

    assert!(Path::new(&fx.workbook).exists());
    assert!(Path::new(&fx.credentials).exists());
    assert!(Path::new(&fx.db).exists());

    let creds = fs::read_to_string(&fx.credentials).unwrap();
    assert!(creds.contains("cookie:"));
    assert!(creds.contains("rbudget_session"));
}

#[test]
fn test_init_never_overwrites() {
    let fx = Fixture::init("cli_init_twice");
    fx.add_user("jdoe", "editor", "VPF");
    let before = fs::read_to_string(&fx.credentials).unwrap();

    rbd()
        .args(fx.global())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already present"));

    assert_eq!(fs::read_to_string(&fx.credentials).unwrap(), before);
}

#[test]
fn test_register_and_duplicate() {
    let fx = Fixture::init("cli_register");

    rbd()
        .args(fx.global())
        .args([
            "register",
            "jdoe",
            "--first-name",
            "Jane",
            "--new-password",
            PASSWORD,
            "--role",
            "editor",
            "--area",
            "VPF",
        ])
        .assert()
        .success()
        .stdout(contains("User 'jdoe' registered"));

    rbd()
        .args(fx.global())
        .args(["register", "jdoe", "--new-password", "x", "--area", "VPD"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    let creds = fs::read_to_string(&fx.credentials).unwrap();
    assert!(creds.contains("VPF"));
    assert!(!creds.contains(PASSWORD));
}

#[test]
fn test_register_unknown_area_warns() {
    let fx = Fixture::init("cli_register_unknown");

    rbd()
        .args(fx.global())
        .args(["register", "guest", "--new-password", PASSWORD, "--area", "XYZ"])
        .assert()
        .success()
        .stdout(contains("only shared sections"));
}

#[test]
fn test_login_required_and_bad_password() {
    let fx = Fixture::init("cli_login");
    fx.add_user("jdoe", "editor", "VPD");

    rbd()
        .args(fx.global())
        .arg("sections")
        .assert()
        .failure()
        .stderr(contains("Login required"));

    rbd()
        .args(fx.global())
        .args(["--user", "jdoe", "--password", "wrong", "sections"])
        .assert()
        .failure()
        .stderr(contains("Invalid username or password"));
}

#[test]
fn test_sections_follow_area() {
    let fx = Fixture::init("cli_sections");
    fx.add_user("jdoe", "editor", "VPF");

    rbd()
        .args(fx.as_user("jdoe"))
        .arg("sections")
        .assert()
        .success()
        .stdout(contains("VPF_Misiones").and(contains("VPD_Misiones").not()));
}

#[test]
fn test_show_calculated_sheet() {
    let fx = Fixture::init("cli_show");
    fx.add_user("jdoe", "viewer", "VPD");
    fx.put_sheet("VPD_Misiones", &mission_table("VPD"));

    rbd()
        .args(fx.as_user("jdoe"))
        .args(["show", "VPD_Misiones"])
        .assert()
        .success()
        .stdout(contains("read-only").and(contains("1,940.00")));
}

#[test]
fn test_show_hidden_section_fails() {
    let fx = Fixture::init("cli_show_hidden");
    fx.add_user("jdoe", "admin", "VPO");

    rbd()
        .args(fx.as_user("jdoe"))
        .args(["show", "VPD_Misiones"])
        .assert()
        .failure()
        .stderr(contains("not visible"));
}

#[test]
fn test_set_cell_updates_workbook_and_ledger() {
    let fx = Fixture::init("cli_set");
    fx.add_user("jdoe", "editor", "VPD");
    fx.put_sheet("VPD_Misiones", &mission_table("VPD"));

    rbd()
        .args(fx.as_user("jdoe"))
        .args([
            "set",
            "VPD_Misiones",
            "--row",
            "0",
            "--column",
            "funcionarios",
            "--value",
            "4",
        ])
        .assert()
        .success()
        .stdout(contains("saved"));

    rbd()
        .args(fx.as_user("jdoe"))
        .args(["ledger", "missions"])
        .assert()
        .success()
        .stdout(contains("3,880.00"));

    rbd()
        .args(fx.global())
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("VPD_Misiones"));
}

#[test]
fn test_set_without_permission_changes_nothing() {
    let fx = Fixture::init("cli_set_viewer");
    fx.add_user("jdoe", "viewer", "VPD");
    fx.put_sheet("VPD_Misiones", &mission_table("VPD"));
    let before = fs::read(&fx.workbook).unwrap();

    rbd()
        .args(fx.as_user("jdoe"))
        .args([
            "set",
            "VPD_Misiones",
            "--row",
            "0",
            "--column",
            "dias",
            "--value",
            "10",
        ])
        .assert()
        .success()
        .stdout(contains("permission").and(contains("read-only")));

    assert_eq!(fs::read(&fx.workbook).unwrap(), before);
}

#[test]
fn test_set_derived_column_rejected() {
    let fx = Fixture::init("cli_set_derived");
    fx.add_user("jdoe", "admin", "VPE");
    fx.put_sheet("VPD_Misiones", &mission_table("VPD"));

    rbd()
        .args(fx.as_user("jdoe"))
        .args([
            "set",
            "VPD_Misiones",
            "--row",
            "0",
            "--column",
            "total",
            "--value",
            "1",
        ])
        .assert()
        .failure()
        .stderr(contains("calculated"));
}

#[test]
fn test_replace_strips_derived_columns() {
    let fx = Fixture::init("cli_replace");
    fx.add_user("jdoe", "editor", "VPO");

    let upload = temp_path("cli_replace_upload", "xlsx");
    let mut uploaded = mission_table("VPO");
    uploaded.set(0, "total", rbudget::models::cell::Cell::Number(5.0)).unwrap();
    rbudget::workbook::save_sheet(Path::new(&upload), "Hoja1", &uploaded).unwrap();

    rbd()
        .args(fx.as_user("jdoe"))
        .args(["replace", "VPO_Misiones", "--file", &upload])
        .assert()
        .success()
        .stdout(contains("replaced with 1 rows"));

    let tables = rbudget::workbook::load_catalog(Path::new(&fx.workbook)).unwrap();
    assert!(!tables["VPO_Misiones"].has_column("total"));
    assert_eq!(tables["VPO_Misiones"].number(0, "funcionarios"), 2.0);
}

#[test]
fn test_export_sheet_file_name_and_content() {
    let fx = Fixture::init("cli_export_sheet");
    fx.add_user("jdoe", "viewer", "VPD");
    fx.put_sheet("VPD_Misiones", &mission_table("VPD"));
    let dir = temp_dir("cli_export_sheet");

    rbd()
        .args(fx.as_user("jdoe"))
        .args(["export", "--sheet", "VPD_Misiones", "--format", "csv", "--dir"])
        .arg(&dir)
        .assert()
        .success();

    let content = fs::read_to_string(dir.join("VPD_Misiones_export.csv")).unwrap();
    assert!(content.starts_with("descripcion,"));
    assert!(content.contains("1940"));
}

#[test]
fn test_export_declined_overwrite_keeps_previous_download() {
    let fx = Fixture::init("cli_export_declined");
    fx.add_user("jdoe", "viewer", "VPD");
    fx.put_sheet("VPD_Misiones", &mission_table("VPD"));
    let dir = temp_dir("cli_export_declined");
    let target = dir.join("VPD_Misiones_export.csv");
    fs::write(&target, "previous download").unwrap();

    rbd()
        .args(fx.as_user("jdoe"))
        .args(["export", "--sheet", "VPD_Misiones", "--format", "csv", "--dir"])
        .arg(&dir)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stdout(contains("A previous download is already at"))
        .stderr(contains("download cancelled"));

    assert_eq!(fs::read_to_string(&target).unwrap(), "previous download");
}

#[test]
fn test_export_ledger_json_and_xlsx() {
    let fx = Fixture::init("cli_export_ledger");
    fx.add_user("boss", "admin", "PRE");
    fx.put_sheet(
        "PRE_Misiones",
        &table(
            &["descripcion", "funcionarios", "dias", "total"],
            &[&["Summit", "4", "2", "1200"]],
        ),
    );
    let dir = temp_dir("cli_export_ledger");

    for format in ["json", "xlsx"] {
        rbd()
            .args(fx.as_user("boss"))
            .args(["export", "--ledger", "missions", "--format", format, "--force", "--dir"])
            .arg(&dir)
            .assert()
            .success();
    }

    let json = fs::read_to_string(dir.join("Conciliacion_Misiones_export.json")).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
    let pre = rows
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["unidad"] == "PRE")
        .unwrap();
    assert_eq!(pre["solicitado"], 1200.0);
    assert_eq!(pre["diferencia"], 518_800.0);

    let xlsx = rbudget::workbook::read_first_sheet(&dir.join("Conciliacion_Misiones_export.xlsx"))
        .unwrap();
    assert!(xlsx.has_column("aprobado_dpp"));
}

#[test]
fn test_backup_compressed() {
    let fx = Fixture::init("cli_backup");
    let dest = temp_path("cli_backup_copy", "xlsx");
    let zip = temp_path("cli_backup_copy", "zip");

    rbd()
        .args(fx.global())
        .args(["backup", "--file", &dest, "--compress", "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(Path::new(&zip).exists());
    assert!(!Path::new(&dest).exists());
}

#[test]
fn test_config_check_reports_missing_workbook() {
    let fx = Fixture::init("cli_config_check");
    fs::remove_file(&fx.workbook).unwrap();

    rbd()
        .args(fx.global())
        .args(["config", "--check"])
        .assert()
        .failure()
        .stderr(contains("workbook not found"));
}
