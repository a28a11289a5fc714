use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;
use std::path::Path;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // Timestamp locale, formattato in ISO 8601
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Record an operation in the audit log at `db_path`.
/// Non-blocking: failures are reported as a warning and otherwise ignored.
pub fn audit(db_path: &Path, operation: &str, target: &str, message: &str) {
    let result =
        DbPool::new(db_path).and_then(|pool| ttlog(&pool.conn, operation, target, message));

    if let Err(e) = result {
        warning(format!("Failed to write internal log: {e}"));
    }
}
