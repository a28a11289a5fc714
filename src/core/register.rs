use crate::auth::credentials::{CredentialStore, Profile};
use crate::auth::policy::{ROLES, Role};
use crate::errors::AppResult;
use crate::models::unit::Unit;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub struct RegisterLogic;

impl RegisterLogic {
    /// Register a new user in the credential store at `path`.
    ///
    /// Role and area are stored exactly as given; values outside the known
    /// sets only produce a warning (such users get no edit rights and see
    /// only the shared sections).
    pub fn register(
        path: &Path,
        username: &str,
        profile: Profile,
        password: &str,
        role: &str,
        area: &str,
    ) -> AppResult<()> {
        let mut store = CredentialStore::load(path)?;

        if Role::parse(role).is_none() {
            warning(format!(
                "Role '{role}' is not one of {}: the user will not be able to edit.",
                ROLES.join(", ")
            ));
        }
        if Unit::from_code(area).is_none() {
            let known: Vec<&str> = Unit::ALL.iter().map(|u| u.code()).collect();
            warning(format!(
                "Area '{area}' is not one of {}: only shared sections will be visible.",
                known.join(", ")
            ));
        }

        store.register(username, profile, password, role, area)?;
        success(format!("User '{}' registered.", username.trim()));
        Ok(())
    }
}
