use crate::auth::cookie::CookieSettings;
use crate::auth::credentials::CredentialStore;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::workbook;

/// Handle the `init` command
///
/// Creates whatever is missing, never overwriting:
///  - the configuration file (skipped in test mode)
///  - the credentials file with fresh cookie settings
///  - an empty template workbook
///  - the audit log database
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    header("Initializing rbudget", None);

    if cfg.init_all(cli.test)? {
        success(format!("Config file  : {}", Config::config_file().display()));
    } else if !cli.test {
        info(format!(
            "Config file  : {} (already present)",
            Config::config_file().display()
        ));
    }

    let credentials = cfg.credentials_path();
    if credentials.exists() {
        info(format!("Credentials  : {} (already present)", credentials.display()));
    } else {
        CredentialStore::create(&credentials, &CookieSettings::generate())?;
        success(format!("Credentials  : {}", credentials.display()));
    }

    let workbook_path = cfg.workbook_path();
    if workbook_path.exists() {
        info(format!("Workbook     : {} (already present)", workbook_path.display()));
    } else {
        workbook::write_template(&workbook_path)?;
        success(format!("Workbook     : {} (template)", workbook_path.display()));
    }

    let db_path = cfg.database_path();
    let pool = DbPool::new(&db_path)?;
    success(format!("Audit log    : {}", db_path.display()));

    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        &workbook_path.to_string_lossy(),
        "rbudget initialized",
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success("rbudget initialization completed!");
    Ok(())
}
