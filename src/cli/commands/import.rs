use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut pool = open_pool(cfg)?;
        let summary = ImportLogic::import_file(&mut pool, file)?;

        success(format!(
            "Imported {} people, {} events, {} gift ideas from {}",
            summary.people, summary.events, summary.gift_ideas, file
        ));
        if summary.skipped > 0 {
            warning(format!(
                "{} gift idea(s) skipped (unknown person)",
                summary.skipped
            ));
        }
    }

    Ok(())
}
