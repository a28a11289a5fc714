//! rbudget library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;
pub mod workbook;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Register(args) => cli::commands::register::handle(args, cfg),
        Commands::Sections => cli::commands::sections::handle(cli, cfg),
        Commands::Show { .. } => cli::commands::show::handle(cli, cfg),
        Commands::Ledger { .. } => cli::commands::ledger::handle(cli, cfg),
        Commands::Set { .. } => cli::commands::set::handle(cli, cfg),
        Commands::Replace { .. } => cli::commands::replace::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // test mode never reads the user's config file
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(workbook) = &cli.workbook {
        cfg.workbook = workbook.clone();
    }
    if let Some(credentials) = &cli.credentials {
        cfg.credentials = credentials.clone();
    }
    if let Some(db) = &cli.db {
        cfg.database = db.clone();
    }

    dispatch(&cli, &cfg)
}
