mod common;
use common::{PASSWORD, temp_path};
use rbudget::auth::Authenticator;
use rbudget::auth::cookie::CookieSettings;
use rbudget::auth::credentials::{CredentialStore, Profile};
use rbudget::auth::password::{hash_password, verify_password};
use rbudget::auth::policy::{Section, can_edit, can_view, visible_sections};
use rbudget::errors::AppError;
use rbudget::models::unit::Unit;
use std::fs;
use std::path::Path;

fn jane() -> Profile {
    Profile {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        email: "jdoe@example.org".into(),
    }
}

#[test]
fn test_visible_sections_for_standard_unit() {
    assert_eq!(
        visible_sections("VPF"),
        vec![Section::Main, Section::Unit(Unit::Vpf), Section::Consolidated]
    );
}

#[test]
fn test_visible_sections_for_unknown_area() {
    assert_eq!(
        visible_sections("XYZ"),
        vec![Section::Main, Section::Consolidated]
    );
    assert!(!can_view("XYZ", Section::Unit(Unit::Vpd)));
}

#[test]
fn test_full_access_areas_see_everything() {
    assert_eq!(visible_sections("VPE"), Section::all());
    assert_eq!(visible_sections("pre"), Section::all());
}

#[test]
fn test_edit_requires_role_and_visible_unit_section() {
    let vpd = Section::Unit(Unit::Vpd);

    assert!(can_edit("editor", "VPD", vpd));
    assert!(can_edit("admin", "VPE", vpd));
    assert!(!can_edit("viewer", "VPD", vpd));
    assert!(!can_edit("editor", "VPO", vpd));
    assert!(!can_edit("admin", "VPD", Section::Consolidated));
    assert!(!can_edit("superuser", "VPD", vpd));
}

#[test]
fn test_password_hash_is_salted_and_verifiable() {
    let a = hash_password(PASSWORD).unwrap();
    let b = hash_password(PASSWORD).unwrap();

    assert_ne!(a, b);
    assert!(a.starts_with("$argon2id$"));
    assert!(verify_password(PASSWORD, &a).unwrap());
    assert!(!verify_password("wrong", &a).unwrap());
}

#[test]
fn test_load_missing_credentials_file() {
    let path = temp_path("creds_missing", "yaml");
    let err = CredentialStore::load(Path::new(&path)).err().unwrap();
    assert!(matches!(err, AppError::ConfigNotFound(_)));
}

#[test]
fn test_register_and_authenticate() {
    let path = temp_path("creds_register", "yaml");
    let path = Path::new(&path);
    let mut store = CredentialStore::create(path, &CookieSettings::generate()).unwrap();

    store
        .register("jdoe", jane(), PASSWORD, "editor", "VPF")
        .unwrap();

    let record = store.user("jdoe").unwrap();
    assert_ne!(record.password, PASSWORD);
    assert_eq!(record.role, "editor");

    let reloaded = CredentialStore::load(path).unwrap();
    let user = reloaded.authenticate("jdoe", PASSWORD).unwrap();
    assert_eq!(user.username, "jdoe");
    assert_eq!(user.area, "VPF");

    assert!(matches!(
        reloaded.authenticate("jdoe", "nope"),
        Err(AppError::InvalidCredentials)
    ));
    assert!(matches!(
        reloaded.authenticate("ghost", PASSWORD),
        Err(AppError::UnknownUser(_))
    ));
}

#[test]
fn test_register_duplicate_username_changes_nothing() {
    let path = temp_path("creds_duplicate", "yaml");
    let path = Path::new(&path);
    let mut store = CredentialStore::create(path, &CookieSettings::generate()).unwrap();
    store
        .register("jdoe", jane(), PASSWORD, "editor", "VPF")
        .unwrap();

    let before = fs::read_to_string(path).unwrap();
    let err = store
        .register("jdoe", Profile::default(), "other", "admin", "VPE")
        .err()
        .unwrap();

    assert!(matches!(err, AppError::DuplicateUser(ref u) if u == "jdoe"));
    assert_eq!(fs::read_to_string(path).unwrap(), before);
    assert_eq!(store.user("jdoe").unwrap().role, "editor");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_register_blank_username_is_rejected() {
    let path = temp_path("creds_blank_user", "yaml");
    let path = Path::new(&path);
    let mut store = CredentialStore::create(path, &CookieSettings::generate()).unwrap();
    let before = fs::read_to_string(path).unwrap();

    let err = store
        .register("   ", jane(), PASSWORD, "editor", "VPF")
        .err()
        .unwrap();

    assert!(matches!(err, AppError::InvalidUsername(_)));
    assert_eq!(fs::read_to_string(path).unwrap(), before);
    assert_eq!(store.len(), 0);
}

#[test]
fn test_register_preserves_cookie_section() {
    let path = temp_path("creds_cookie", "yaml");
    let path = Path::new(&path);
    let cookie = CookieSettings::generate();
    let mut store = CredentialStore::create(path, &cookie).unwrap();

    store
        .register("jdoe", jane(), PASSWORD, "viewer", "XYZ")
        .unwrap();
    store
        .register("asmith", Profile::default(), PASSWORD, "admin", "VPE")
        .unwrap();

    assert_eq!(CookieSettings::load(path).unwrap(), cookie);
    assert_eq!(
        CredentialStore::load(path).unwrap().usernames().collect::<Vec<_>>(),
        vec!["asmith", "jdoe"]
    );
}

#[test]
fn test_cookie_validation_and_masking() {
    let cookie = CookieSettings {
        name: "rbudget_session".into(),
        key: "abcdefgh".into(),
        expiry_days: 0,
    };

    assert_eq!(cookie.masked_key(), "abcd****");
    assert_eq!(cookie.validate().len(), 1);
    assert!(CookieSettings::generate().validate().is_empty());
}
