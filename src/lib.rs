//! giftlog library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (recurrence engine, storage, export).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, reference: NaiveDate) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Person { action } => cli::commands::person::handle(action, cfg, reference),
        Commands::Event { action } => cli::commands::event::handle(action, cfg, reference),
        Commands::Gift { action } => cli::commands::gift::handle(action, cfg),
        Commands::Birthdays { .. } => {
            cli::commands::birthdays::handle(&cli.command, cfg, reference)
        }
        Commands::Dashboard => cli::commands::dashboard::handle(cfg, reference),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, reference),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // --test never reads the user's config file
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    let reference = utils::date::reference_date(cli.today.as_deref())?;

    dispatch(&cli, &cfg, reference)
}
