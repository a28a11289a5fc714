#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rbudget::auth::cookie::CookieSettings;
use rbudget::auth::credentials::{CredentialStore, Profile};
use rbudget::models::cell::Cell;
use rbudget::models::table::Table;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const PASSWORD: &str = "s3cret-pass";

pub fn rbd() -> Command {
    cargo_bin_cmd!("rbudget")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_rbudget.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh temp directory (emptied if it already exists).
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_rbudget_dir"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Workbook, credentials and audit database of one test.
pub struct Fixture {
    pub workbook: String,
    pub credentials: String,
    pub db: String,
}

impl Fixture {
    /// Run `init` in test mode against fresh temp paths.
    pub fn init(name: &str) -> Self {
        let fx = Fixture {
            workbook: temp_path(name, "xlsx"),
            credentials: temp_path(name, "yaml"),
            db: temp_path(name, "sqlite"),
        };

        rbd().args(fx.global()).arg("init").assert().success();
        fx
    }

    /// Global path flags (test mode included).
    pub fn global(&self) -> Vec<String> {
        vec![
            "--test".into(),
            "--workbook".into(),
            self.workbook.clone(),
            "--credentials".into(),
            self.credentials.clone(),
            "--db".into(),
            self.db.clone(),
        ]
    }

    /// Global flags plus a login as `user`.
    pub fn as_user(&self, user: &str) -> Vec<String> {
        let mut args = self.global();
        args.extend(["--user".into(), user.into(), "--password".into(), PASSWORD.into()]);
        args
    }

    pub fn add_user(&self, username: &str, role: &str, area: &str) {
        add_user(Path::new(&self.credentials), username, role, area);
    }

    pub fn put_sheet(&self, name: &str, table: &Table) {
        rbudget::workbook::save_sheet(Path::new(&self.workbook), name, table)
            .expect("save sheet");
    }
}

pub fn add_user(credentials: &Path, username: &str, role: &str, area: &str) {
    let mut store = match CredentialStore::load(credentials) {
        Ok(store) => store,
        Err(_) => CredentialStore::create(credentials, &CookieSettings::generate())
            .expect("create credentials"),
    };
    store
        .register(username, Profile::default(), PASSWORD, role, area)
        .expect("register user");
}

/// Build a table from headers and rows of raw strings (parsed like user input).
pub fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    let mut t = Table::new(headers);
    for row in rows {
        t.push_row(row.iter().map(|v| Cell::parse(v)).collect());
    }
    t
}

/// The worked mission example: 2 people, 3 days.
pub fn mission_table(area: &str) -> Table {
    table(
        &[
            "descripcion",
            "area_imputacion",
            "funcionarios",
            "costo_pasaje",
            "dias",
            "alojamiento",
            "perdiem_otros",
            "movilidad",
        ],
        &[&["Audit trip", area, "2", "500", "3", "100", "50", "20"]],
    )
}

/// The worked consultancy example: 3 consultants, 6 months.
pub fn consultancy_table(area: &str) -> Table {
    table(
        &[
            "descripcion",
            "area_imputacion",
            "funcionarios",
            "meses",
            "monto_mensual",
        ],
        &[&["Data review", area, "3", "6", "2000"]],
    )
}
