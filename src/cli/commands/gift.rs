use crate::cli::commands::{ask_confirmation, open_pool};
use crate::cli::parser::GiftAction;
use crate::config::Config;
use crate::core::gift::{GiftChanges, GiftLogic};
use crate::core::search::search_gift_ideas;
use crate::db::{events, gift_ideas, people};
use crate::errors::{AppError, AppResult};
use crate::models::gift_status::GiftStatus;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREEN, RESET, YELLOW, colorize};
use crate::utils::formatting::{format_price, optional, truncate};
use crate::utils::table::Table;
use std::collections::HashMap;

pub(crate) fn status_cell(status: GiftStatus) -> String {
    let color = match status {
        GiftStatus::Idea => RESET,
        GiftStatus::Purchased => YELLOW,
        GiftStatus::Given => GREEN,
    };
    format!("{}{} {}{}", color, status.icon(), status.to_db_str(), RESET)
}

pub fn handle(action: &GiftAction, cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;

    match action {
        GiftAction::Add {
            idea,
            person,
            event,
            status,
            price,
            url,
            notes,
        } => {
            let gift = GiftLogic::add(
                &mut pool,
                *person,
                idea,
                GiftChanges {
                    event_id: Some(*event),
                    status: status.clone(),
                    price: *price,
                    url: url.clone(),
                    notes: notes.clone(),
                    ..GiftChanges::default()
                },
            )?;
            success(format!("Added gift idea #{}: {}", gift.id, gift.idea));
        }

        GiftAction::Edit {
            id,
            idea,
            person,
            event,
            no_event,
            status,
            price,
            url,
            notes,
        } => {
            let event_id = if *no_event { Some(None) } else { event.map(Some) };
            let gift = GiftLogic::edit(
                &mut pool,
                *id,
                GiftChanges {
                    person_id: *person,
                    idea: idea.clone(),
                    event_id,
                    status: status.clone(),
                    price: *price,
                    url: url.clone(),
                    notes: notes.clone(),
                },
            )?;
            success(format!("Updated gift idea #{}: {}", gift.id, gift.idea));
        }

        GiftAction::Del { id, yes } => {
            let gift =
                gift_ideas::load_gift_idea(&pool.conn, *id)?.ok_or(AppError::GiftIdeaNotFound(*id))?;
            let prompt = format!("Delete gift idea '{}' (#{})?", gift.idea, gift.id);
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            GiftLogic::delete(&mut pool, *id)?;
            success(format!("Gift idea #{} has been deleted.", id));
        }

        GiftAction::List { search, person } => {
            let all_people = people::load_people(&pool.conn)?;
            let all_events = events::load_events(&pool.conn)?;
            let gifts = match person {
                Some(pid) => {
                    if !people::person_exists(&pool.conn, *pid)? {
                        return Err(AppError::PersonNotFound(*pid));
                    }
                    gift_ideas::load_gift_ideas_by_person(&pool.conn, *pid)?
                }
                None => gift_ideas::load_gift_ideas(&pool.conn)?,
            };

            let found = search_gift_ideas(
                &gifts,
                &all_people,
                &all_events,
                search.as_deref().unwrap_or(""),
            );

            header("🎁 Gift ideas");
            if found.is_empty() {
                info("No gift ideas found.");
                return Ok(());
            }

            let person_names: HashMap<i64, &str> =
                all_people.iter().map(|p| (p.id, p.name.as_str())).collect();
            let event_names: HashMap<i64, &str> =
                all_events.iter().map(|e| (e.id, e.name.as_str())).collect();

            let mut table = Table::new(&["ID", "Idea", "For", "Event", "Status", "Price"])
                .with_separator(&cfg.separator_char);
            for g in &found {
                table.add_row(vec![
                    g.id.to_string(),
                    truncate(&g.idea, 40),
                    person_names
                        .get(&g.person_id)
                        .copied()
                        .unwrap_or("Unknown Person")
                        .to_string(),
                    colorize(
                        &optional(g.event_id.and_then(|id| event_names.get(&id).copied())),
                        RESET,
                    ),
                    status_cell(g.status),
                    format_price(g.price),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
