use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, reference: NaiveDate) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        what,
        force,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;
        ExportLogic::export(&mut pool, *format, file, *what, *force, reference)?;
    }

    Ok(())
}
