use crate::cli::commands::{login, resolve_sheet};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::edit::{EditLogic, EditOutcome};
use crate::db::log::audit;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        sheet,
        row,
        column,
        value,
    } = &cli.command
    {
        let sheet = resolve_sheet(sheet)?;
        let mut session = login(cli, cfg)?;

        let outcome = EditLogic::set_cell(&mut session, cfg, sheet, *row, column, value)?;

        if outcome == EditOutcome::Saved {
            audit(
                &cfg.database_path(),
                "set",
                sheet.name,
                &format!(
                    "user={} row={row} column={column} value={value}",
                    session.user().username
                ),
            );
        }
    }
    Ok(())
}
