use crate::cli::commands::{login, resolve_sheet};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::show::ShowLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { sheet } = &cli.command {
        let sheet = resolve_sheet(sheet)?;
        let session = login(cli, cfg)?;
        ShowLogic::print_sheet(&session, sheet)?;
    }
    Ok(())
}
