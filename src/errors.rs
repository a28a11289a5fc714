//! Unified application error type.
//! All modules (auth, workbook, core, cli, db) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Audit log database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Config / credentials
    // ---------------------------
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Username '{0}' already exists")]
    DuplicateUser(String),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Login required: pass --user and --password")]
    LoginRequired,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    // ---------------------------
    // Workbook / tables
    // ---------------------------
    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Unknown sheet: {0}")]
    UnknownSheet(String),

    #[error("Section '{0}' is not visible for your area")]
    SectionNotVisible(String),

    #[error("Column '{0}' is calculated and cannot be edited")]
    DerivedColumn(String),

    #[error("Invalid row index: {0}")]
    InvalidRow(usize),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
