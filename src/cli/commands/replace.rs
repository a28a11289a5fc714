use crate::cli::commands::{login, resolve_sheet};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::edit::{EditLogic, EditOutcome};
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Replace { sheet, file } = &cli.command {
        let sheet = resolve_sheet(sheet)?;
        let mut session = login(cli, cfg)?;
        let upload = expand_tilde(file);

        let outcome = EditLogic::replace(&mut session, cfg, sheet, &upload)?;

        if outcome == EditOutcome::Saved {
            audit(
                &cfg.database_path(),
                "replace",
                sheet.name,
                &format!(
                    "user={} file={}",
                    session.user().username,
                    upload.display()
                ),
            );
        }
    }
    Ok(())
}
