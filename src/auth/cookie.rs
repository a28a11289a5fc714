//! Session-cookie parameters consumed by the authentication front end.
//!
//! Stored in the `cookie` section of the credentials file but read-only here:
//! only `init` writes it, and registrations preserve it verbatim.

use crate::auth::password::random_key;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_COOKIE_NAME: &str = "rbudget_session";
pub const DEFAULT_EXPIRY_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookieSettings {
    pub name: String,
    pub key: String,
    pub expiry_days: u32,
}

#[derive(Deserialize)]
struct CookieSection {
    cookie: Option<CookieSettings>,
}

impl CookieSettings {
    /// Fresh settings with a random signing key.
    pub fn generate() -> Self {
        Self {
            name: DEFAULT_COOKIE_NAME.to_string(),
            key: random_key(),
            expiry_days: DEFAULT_EXPIRY_DAYS,
        }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::ConfigNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let section: CookieSection = serde_yaml::from_str(&content)?;
        section
            .cookie
            .ok_or_else(|| AppError::Config("missing 'cookie' section".into()))
    }

    /// Human-readable problems; empty when the settings are usable.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("cookie.name is empty".to_string());
        }
        if self.key.trim().is_empty() {
            problems.push("cookie.key is empty".to_string());
        }
        if self.expiry_days == 0 {
            problems.push("cookie.expiry_days must be greater than 0".to_string());
        }
        problems
    }

    pub fn masked_key(&self) -> String {
        let visible: String = self.key.chars().take(4).collect();
        format!("{visible}{}", "*".repeat(self.key.chars().count().saturating_sub(4)))
    }
}
