// src/export/logic.rs

use crate::db::log::write_log_or_warn;
use crate::db::pool::DbPool;
use crate::db::{events, gift_ideas, people};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{GiftlogDocument, event_rows, gift_rows, person_rows};
use crate::export::{ExportFormat, ExportTarget};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::{Local, NaiveDate};

fn csv_needs_single_table() -> AppError {
    AppError::Export("CSV holds a single table: use --what people, events or gifts".to_string())
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one collection (or, for JSON, everything).
    ///
    /// - `file` must be an absolute path
    /// - `what = None` means `all` for JSON and `events` for CSV
    /// - CSV holds a single table, so `--what all` is rejected for it
    /// - `reference` is used for the computed next-occurrence columns
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        what: Option<ExportTarget>,
        force: bool,
        reference: NaiveDate,
    ) -> AppResult<()> {
        let path_buf = expand_tilde(file);
        let path = path_buf.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let target = match (format, what) {
            (ExportFormat::Csv, Some(ExportTarget::All)) => return Err(csv_needs_single_table()),
            (ExportFormat::Csv, None) => ExportTarget::Events,
            (ExportFormat::Json, None) => ExportTarget::All,
            (_, Some(t)) => t,
        };

        ensure_writable(path, force)?;
        ensure_parent_dir(path)?;

        let all_people = people::load_people(&pool.conn)?;
        let all_events = events::load_events(&pool.conn)?;
        let all_gifts = gift_ideas::load_gift_ideas(&pool.conn)?;

        let count = match target {
            ExportTarget::People => all_people.len(),
            ExportTarget::Events => all_events.len(),
            ExportTarget::Gifts => all_gifts.len(),
            ExportTarget::All => all_people.len() + all_events.len() + all_gifts.len(),
        };
        if count == 0 {
            warning(format!("No {} to export.", target.as_str()));
        }

        match format {
            ExportFormat::Csv => match target {
                ExportTarget::People => export_csv(&person_rows(&all_people, reference), path)?,
                ExportTarget::Events => export_csv(&event_rows(&all_events, reference), path)?,
                ExportTarget::Gifts => {
                    export_csv(&gift_rows(&all_gifts, &all_people, &all_events), path)?
                }
                ExportTarget::All => return Err(csv_needs_single_table()),
            },
            ExportFormat::Json => {
                let wants = |t: ExportTarget| target == ExportTarget::All || target == t;
                let doc = GiftlogDocument {
                    exported_at: Some(Local::now().to_rfc3339()),
                    people: if wants(ExportTarget::People) { all_people } else { Vec::new() },
                    events: if wants(ExportTarget::Events) { all_events } else { Vec::new() },
                    gift_ideas: if wants(ExportTarget::Gifts) { all_gifts } else { Vec::new() },
                };
                export_json(&doc, path)?
            }
        }

        write_log_or_warn(
            &pool.conn,
            "export",
            file,
            &format!(
                "Exported {} as {} ({} records)",
                target.as_str(),
                format.as_str(),
                count
            ),
        );

        Ok(())
    }
}
