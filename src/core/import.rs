//! Load a JSON document (as written by `export --format json`) into the
//! database.

use crate::db::log::write_log_or_warn;
use crate::db::pool::DbPool;
use crate::db::{events, gift_ideas, people};
use crate::errors::{AppError, AppResult};
use crate::export::GiftlogDocument;
use crate::ui::messages::warning;
use chrono::Local;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub people: usize,
    pub events: usize,
    pub gift_ideas: usize,
    /// Gift ideas dropped because their person is not in the document.
    pub skipped: usize,
}

fn stamp(value: &mut String, now: &str) {
    if value.trim().is_empty() {
        *value = now.to_string();
    }
}

pub fn parse_document(content: &str) -> AppResult<GiftlogDocument> {
    serde_json::from_str(content).map_err(|e| AppError::Import(format!("invalid document: {e}")))
}

pub struct ImportLogic;

impl ImportLogic {
    pub fn import_file(pool: &mut DbPool, file: &str) -> AppResult<ImportSummary> {
        let path = Path::new(file);
        if !path.exists() {
            return Err(AppError::Import(format!("file not found: {file}")));
        }

        let content = fs::read_to_string(path)?;
        let doc = parse_document(&content)?;
        let summary = Self::import(pool, doc)?;

        write_log_or_warn(
            &pool.conn,
            "import",
            file,
            &format!(
                "Imported {} people, {} events, {} gift ideas",
                summary.people, summary.events, summary.gift_ideas
            ),
        );

        Ok(summary)
    }

    /// Insert every record of `doc` in one transaction.
    ///
    /// Records get fresh ids; references between them are remapped. Dates
    /// are stored as they are, even when they do not parse.
    pub fn import(pool: &mut DbPool, doc: GiftlogDocument) -> AppResult<ImportSummary> {
        let now = Local::now().to_rfc3339();
        let mut summary = ImportSummary::default();

        let tx = pool.conn.transaction()?;

        let mut person_ids: HashMap<i64, i64> = HashMap::new();
        for mut p in doc.people {
            let old_id = p.id;
            p.id = 0;
            stamp(&mut p.created_at, &now);
            stamp(&mut p.updated_at, &now);
            person_ids.insert(old_id, people::insert_person(&tx, &p)?);
            summary.people += 1;
        }

        let mut event_ids: HashMap<i64, i64> = HashMap::new();
        for mut e in doc.events {
            let old_id = e.id;
            e.id = 0;
            stamp(&mut e.created_at, &now);
            stamp(&mut e.updated_at, &now);
            event_ids.insert(old_id, events::insert_event(&tx, &e)?);
            summary.events += 1;
        }

        for mut g in doc.gift_ideas {
            let Some(&person_id) = person_ids.get(&g.person_id) else {
                warning(format!(
                    "Skipping gift idea '{}': person #{} is not in the document",
                    g.idea, g.person_id
                ));
                summary.skipped += 1;
                continue;
            };

            g.id = 0;
            g.person_id = person_id;
            g.event_id = g.event_id.and_then(|id| event_ids.get(&id).copied());
            stamp(&mut g.created_at, &now);
            stamp(&mut g.updated_at, &now);
            gift_ideas::insert_gift_idea(&tx, &g)?;
            summary.gift_ideas += 1;
        }

        tx.commit()?;
        Ok(summary)
    }
}
