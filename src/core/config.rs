use crate::auth::cookie::CookieSettings;
use crate::auth::credentials::CredentialStore;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, header, success, warning};

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        header("Configuration", Some(&Config::config_file().display().to_string()));
        print!("{}", serde_yaml::to_string(cfg)?);

        header("Session cookie", Some(&cfg.credentials));
        match CookieSettings::load(&cfg.credentials_path()) {
            Ok(cookie) => {
                println!("name: {}", cookie.name);
                println!("key: {}", cookie.masked_key());
                println!("expiry_days: {}", cookie.expiry_days);
            }
            Err(e) => warning(e),
        }
        Ok(())
    }

    /// Validate config, credentials and workbook locations.
    /// Returns the list of problems found (also printed).
    pub fn check(cfg: &Config) -> Vec<String> {
        let mut problems = Vec::new();

        let credentials = cfg.credentials_path();
        match CredentialStore::load(&credentials) {
            Ok(store) if store.is_empty() => {
                warning("No users registered yet.");
            }
            Ok(_) => {}
            Err(e) => problems.push(e.to_string()),
        }
        match CookieSettings::load(&credentials) {
            Ok(cookie) => problems.extend(cookie.validate()),
            Err(AppError::ConfigNotFound(_)) => {}
            Err(e) => problems.push(e.to_string()),
        }

        if !cfg.workbook_path().exists() {
            problems.push(format!("workbook not found: {}", cfg.workbook));
        }
        if cfg.export_suffix.contains(['/', '\\']) {
            problems.push("export_suffix must not contain path separators".to_string());
        }

        if problems.is_empty() {
            success("Configuration OK.");
        } else {
            for p in &problems {
                error(p);
            }
        }
        problems
    }
}
