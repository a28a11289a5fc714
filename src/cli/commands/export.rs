use crate::cli::commands::{login, resolve_sheet};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        sheet,
        ledger,
        format,
        dir,
        force,
    } = &cli.command
    {
        let dir = expand_tilde(dir);
        let suffix = cfg.export_suffix.as_str();

        let path = match (sheet, ledger) {
            (Some(name), _) => {
                let sheet = resolve_sheet(name)?;
                let session = login(cli, cfg)?;
                ExportLogic::export_sheet(&session, sheet, *format, &dir, suffix, *force)?
            }
            (None, Some(kind)) => {
                let session = login(cli, cfg)?;
                ExportLogic::export_ledger(&session, *kind, *format, &dir, suffix, *force)?
            }
            (None, None) => {
                return Err(AppError::Export(
                    "pass --sheet <SHEET> or --ledger <KIND>".to_string(),
                ));
            }
        };

        audit(
            &cfg.database_path(),
            "export",
            &path.to_string_lossy(),
            &format!("format={}", format.as_str()),
        );
    }
    Ok(())
}
