//! File-backed user registry.
//!
//! Layout of the credentials file:
//!
//! ```yaml
//! credentials:
//!   usernames:
//!     jdoe:
//!       first_name: Jane
//!       last_name: Doe
//!       email: jdoe@example.org
//!       password: $argon2id$v=19$...
//!       role: editor
//!       area: VPF
//! cookie:
//!   name: rbudget_session
//!   key: ...
//!   expiry_days: 30
//! ```
//!
//! Records are created and read, never updated or deleted. Every registration
//! rewrites the whole file; keys other than `credentials.usernames` are kept.

use crate::auth::cookie::CookieSettings;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::{AuthenticatedUser, Authenticator};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Argon2id PHC string.
    pub password: String,
    pub role: String,
    pub area: String,
}

/// Personal details collected by the registration form.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

pub struct CredentialStore {
    path: PathBuf,
    document: Value,
    users: BTreeMap<String, UserRecord>,
}

impl CredentialStore {
    /// Read the store. A missing file is fatal (`ConfigNotFound`).
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::ConfigNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let document: Value = if content.trim().is_empty() {
            Value::Mapping(Mapping::new())
        } else {
            serde_yaml::from_str(&content)?
        };

        let users = match document.get("credentials").and_then(|c| c.get("usernames")) {
            Some(v) if !v.is_null() => serde_yaml::from_value(v.clone())?,
            _ => BTreeMap::new(),
        };

        Ok(Self {
            path: path.to_path_buf(),
            document,
            users,
        })
    }

    /// Write a brand-new, empty store holding only the cookie settings.
    pub fn create(path: &Path, cookie: &CookieSettings) -> AppResult<Self> {
        let mut root = Mapping::new();
        root.insert(
            Value::String("cookie".into()),
            serde_yaml::to_value(cookie)?,
        );

        let store = Self {
            path: path.to_path_buf(),
            document: Value::Mapping(root),
            users: BTreeMap::new(),
        };
        store.persist(&store.users)?;
        Self::load(path)
    }

    pub fn user(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Add a user and persist the whole store.
    ///
    /// Role and area are stored as given. On any failure nothing is written
    /// and the in-memory store is unchanged.
    pub fn register(
        &mut self,
        username: &str,
        profile: Profile,
        password: &str,
        role: &str,
        area: &str,
    ) -> AppResult<()> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::InvalidUsername("must not be empty".into()));
        }
        if self.users.contains_key(username) {
            return Err(AppError::DuplicateUser(username.to_string()));
        }

        let record = UserRecord {
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            password: hash_password(password)?,
            role: role.to_string(),
            area: area.to_string(),
        };

        let mut next = self.users.clone();
        next.insert(username.to_string(), record);
        self.persist(&next)?;
        self.users = next;

        Ok(())
    }

    fn persist(&self, users: &BTreeMap<String, UserRecord>) -> AppResult<()> {
        let mut document = self.document.clone();
        let root = document
            .as_mapping_mut()
            .ok_or_else(|| AppError::Config("credentials file is not a YAML mapping".into()))?;

        let credentials_key = Value::String("credentials".into());
        let mut credentials = match root.get(&credentials_key) {
            Some(Value::Mapping(m)) => m.clone(),
            _ => Mapping::new(),
        };
        credentials.insert(
            Value::String("usernames".into()),
            serde_yaml::to_value(users)?,
        );
        root.insert(credentials_key, Value::Mapping(credentials));

        let yaml = serde_yaml::to_string(&document)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("yaml.tmp");
        fs::write(&tmp, yaml)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}

impl Authenticator for CredentialStore {
    fn authenticate(&self, username: &str, password: &str) -> AppResult<AuthenticatedUser> {
        let record = self
            .users
            .get(username)
            .ok_or_else(|| AppError::UnknownUser(username.to_string()))?;

        if !verify_password(password, &record.password)? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(AuthenticatedUser {
            username: username.to_string(),
            role: record.role.clone(),
            area: record.area.clone(),
        })
    }
}
