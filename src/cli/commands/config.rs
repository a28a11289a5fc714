use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if !*print_config && !*check {
            info("Nothing to do: pass --print or --check.");
            return Ok(());
        }

        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if *check {
            let problems = ConfigLogic::check(cfg);
            if !problems.is_empty() {
                return Err(AppError::Config(format!(
                    "{} problem(s) found",
                    problems.len()
                )));
            }
        }
    }

    Ok(())
}
