use crate::cli::commands::login;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::show::ShowLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = login(cli, cfg)?;
    ShowLogic::print_sections(&session);
    Ok(())
}
