//! Identity: credential registry, cookie settings, password hashing and the
//! access policy that decides which dashboard sections a user may see/edit.

pub mod cookie;
pub mod credentials;
pub mod password;
pub mod policy;

use crate::errors::AppResult;
use serde::Serialize;

/// What the rest of the application knows about the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    pub username: String,
    pub role: String,
    pub area: String,
}

/// Credential verification front end.
pub trait Authenticator {
    fn authenticate(&self, username: &str, password: &str) -> AppResult<AuthenticatedUser>;
}
