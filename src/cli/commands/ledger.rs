use crate::cli::commands::login;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::show::ShowLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Ledger { kind } = &cli.command {
        let session = login(cli, cfg)?;
        ShowLogic::print_ledger(&session, *kind)?;
    }
    Ok(())
}
