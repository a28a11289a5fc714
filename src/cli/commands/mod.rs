pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod ledger;
pub mod log;
pub mod register;
pub mod replace;
pub mod sections;
pub mod set;
pub mod show;

use crate::auth::Authenticator;
use crate::auth::credentials::CredentialStore;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::sheet::Sheet;

/// Authenticate with `--user`/`--password` and load the session.
pub(crate) fn login(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let (Some(username), Some(password)) = (cli.user.as_deref(), cli.password.as_deref()) else {
        return Err(AppError::LoginRequired);
    };

    let store = CredentialStore::load(&cfg.credentials_path())?;
    let user = store.authenticate(username.trim(), password)?;
    Session::open(cfg, user)
}

pub(crate) fn resolve_sheet(name: &str) -> AppResult<&'static Sheet> {
    Sheet::by_name(name).ok_or_else(|| AppError::UnknownSheet(name.to_string()))
}
