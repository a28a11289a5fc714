use crate::core::targets::{TargetOverrides, Targets};
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_workbook")]
    pub workbook: String,
    #[serde(default = "default_credentials")]
    pub credentials: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_export_suffix")]
    pub export_suffix: String,
    #[serde(default, skip_serializing_if = "TargetOverrides::is_empty")]
    pub targets: TargetOverrides,
}

fn default_workbook() -> String {
    Config::config_dir()
        .join("budget.xlsx")
        .to_string_lossy()
        .to_string()
}
fn default_credentials() -> String {
    Config::config_dir()
        .join("credentials.yaml")
        .to_string_lossy()
        .to_string()
}
fn default_database() -> String {
    Config::config_dir()
        .join("rbudget.sqlite")
        .to_string_lossy()
        .to_string()
}
fn default_export_suffix() -> String {
    "_export".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: default_workbook(),
            credentials: default_credentials(),
            database: default_database(),
            export_suffix: default_export_suffix(),
            targets: TargetOverrides::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rbudget")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rbudget")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbudget.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn workbook_path(&self) -> PathBuf {
        expand_tilde(&self.workbook)
    }

    pub fn credentials_path(&self) -> PathBuf {
        expand_tilde(&self.credentials)
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// DPP targets with this config's overrides applied.
    pub fn targets(&self) -> Targets {
        Targets::with_overrides(&self.targets)
    }

    /// Write the config file (unless in test mode or already present).
    /// Returns true when a file was written.
    pub fn init_all(&self, is_test: bool) -> AppResult<bool> {
        if is_test {
            return Ok(false);
        }
        fs::create_dir_all(Self::config_dir())?;

        let path = Self::config_file();
        if path.exists() {
            return Ok(false);
        }

        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(true)
    }
}
