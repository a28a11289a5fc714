use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the audit log schema. Safe to call on every open.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation);",
    )?;
    Ok(())
}
