use crate::cli::commands::{ask_confirmation, open_pool};
use crate::cli::parser::EventAction;
use crate::config::Config;
use crate::core::calendar::{self, CalendarEvent, EventKey};
use crate::core::countdown::day_count_label;
use crate::core::event::{DateStatus, EventChanges, EventLogic};
use crate::core::filter::{self, Occurrence, ViewMode};
use crate::core::recurrence::{days_between, next_occurrence_of};
use crate::core::search::{search_events, text_matches};
use crate::db::pool::DbPool;
use crate::db::{events, gift_ideas, people};
use crate::errors::{AppError, AppResult};
use crate::models::gift_idea::GiftIdea;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREY, RESET, color_for_days, colorize};
use crate::utils::date::format_date;
use crate::utils::formatting::{bold, describe_category, format_price, optional};
use crate::utils::table::Table;
use chrono::NaiveDate;

/// Display name: birthdays read "Alice's birthday".
pub(crate) fn display_label(ev: &CalendarEvent) -> String {
    if ev.is_birthday() {
        format!("{}'s birthday", ev.label)
    } else {
        ev.label.clone()
    }
}

/// Coloured day-count cell; the festive mark is reserved for birthdays.
pub(crate) fn days_cell(o: &Occurrence, cfg: &Config) -> String {
    let festive = cfg.festive_today && o.event.is_birthday();
    colorize(&day_count_label(o.days, festive), color_for_days(o.days))
}

fn render_occurrences(list: &[Occurrence], cfg: &Config) {
    let mut table = Table::new(&["When", "", "Event", "Type", "ID"]).with_separator(&cfg.separator_char);
    for o in list {
        table.add_row(vec![
            format_date(o.date, &cfg.date_format),
            days_cell(o, cfg),
            display_label(&o.event),
            describe_category(o.event.category),
            format!("{GREY}{}{RESET}", o.event.key),
        ]);
    }
    print!("{}", table.render());
}

fn render_gifts(gifts: &[GiftIdea], cfg: &Config) {
    if gifts.is_empty() {
        println!("{}No gift ideas linked.{}", GREY, RESET);
        return;
    }
    let mut table = Table::new(&["ID", "Idea", "Status", "Price"]).with_separator(&cfg.separator_char);
    for g in gifts {
        table.add_row(vec![
            g.id.to_string(),
            g.idea.clone(),
            format!("{} {}", g.status.icon(), g.status.to_db_str()),
            format_price(g.price),
        ]);
    }
    print!("{}", table.render());
}

fn show(pool: &DbPool, key: EventKey, cfg: &Config, reference: NaiveDate) -> AppResult<()> {
    let (ev, gifts) = match key {
        EventKey::Stored(id) => {
            let stored = events::load_event(&pool.conn, id)?.ok_or(AppError::EventNotFound(id))?;
            (
                CalendarEvent::from_event(&stored),
                gift_ideas::load_gift_ideas_by_event(&pool.conn, id)?,
            )
        }
        EventKey::Birthday(pid) => {
            let person = people::load_person(&pool.conn, pid)?.ok_or(AppError::PersonNotFound(pid))?;
            let ev = CalendarEvent::birthday_of(&person).ok_or_else(|| {
                AppError::Validation(format!("{} has no birthday on record", person.name))
            })?;
            (ev, gift_ideas::load_gift_ideas_by_person(&pool.conn, pid)?)
        }
    };

    header(format!("📅 {}", bold(&display_label(&ev))));
    println!("ID:          {}", ev.key);
    println!("Date:        {}", optional(ev.anchor.as_deref()));
    println!("Type:        {}", optional(Some(describe_category(ev.category).as_str())));
    println!("Recurring:   {}", if ev.recurring { "yearly" } else { "no" });
    if let Some(d) = &ev.description {
        println!("Description: {}", d);
    }

    match ev.anchor_date() {
        None => println!("Status:      {}invalid date{}", GREY, RESET),
        Some(anchor) => {
            println!("Status:      {}", DateStatus::of(anchor, reference).label());
            match next_occurrence_of(anchor, ev.recurring, reference) {
                Some(next) => {
                    let days = days_between(reference, next);
                    println!(
                        "Next:        {} ({}{}{})",
                        format_date(next, &cfg.date_format),
                        color_for_days(days),
                        day_count_label(days, cfg.festive_today && ev.is_birthday()),
                        RESET
                    );
                }
                None => println!("Next:        {}none (one-off, already passed){}", GREY, RESET),
            }
        }
    }

    println!();
    render_gifts(&gifts, cfg);
    Ok(())
}

pub fn handle(action: &EventAction, cfg: &Config, reference: NaiveDate) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;

    match action {
        EventAction::Add {
            name,
            date,
            event_type,
            description,
            once,
        } => {
            let ev = EventLogic::add(
                &mut pool,
                name,
                date,
                event_type.as_deref(),
                description.as_deref(),
                !*once,
            )?;
            success(format!("Added event #{}: {} ({})", ev.id, ev.name, date));
        }

        EventAction::Edit {
            id,
            name,
            date,
            event_type,
            description,
            recurring,
        } => {
            let ev = EventLogic::edit(
                &mut pool,
                *id,
                EventChanges {
                    name: name.clone(),
                    date: date.clone(),
                    event_type: event_type.clone(),
                    description: description.clone(),
                    recurring: *recurring,
                },
            )?;
            success(format!("Updated event #{}: {}", ev.id, ev.name));
        }

        EventAction::Del { id, yes } => {
            let ev = events::load_event(&pool.conn, *id)?.ok_or(AppError::EventNotFound(*id))?;
            let prompt = format!(
                "Delete event '{}' (#{})? Its gift ideas are kept.",
                ev.name, ev.id
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            EventLogic::delete(&mut pool, *id)?;
            success(format!("Event #{} ({}) has been deleted.", id, ev.name));
        }

        EventAction::List {
            past,
            search,
            months,
            birthdays,
        } => {
            let query = search.as_deref().unwrap_or("");
            let window = months.unwrap_or(cfg.window_months);
            let mode = if *past { ViewMode::Past } else { ViewMode::Upcoming };

            let stored = search_events(&events::load_events(&pool.conn)?, query);
            let mut all = calendar::from_events(&stored);
            if *birthdays {
                all.extend(
                    calendar::birthdays(&people::load_people(&pool.conn)?)
                        .into_iter()
                        .filter(|b| text_matches(query, &[Some(b.label.as_str())])),
                );
            }

            let list = filter::bucket(&all, mode, window, reference);

            match mode {
                ViewMode::Upcoming => header(format!(
                    "📅 Upcoming events (next {} month{})",
                    window,
                    if window == 1 { "" } else { "s" }
                )),
                ViewMode::Past => header("🕰️  Past events"),
            }

            if list.is_empty() {
                info("No events found.");
                return Ok(());
            }
            render_occurrences(&list, cfg);
        }

        EventAction::Show { id } => {
            let key = EventKey::parse(id)
                .ok_or_else(|| AppError::Validation(format!("Invalid event id: {id}")))?;
            show(&pool, key, cfg, reference)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birthday_labels_are_possessive() {
        let mut p = crate::models::person::Person::new("Alice");
        p.id = 7;
        p.birthday = Some("1990-03-15".into());
        let ev = CalendarEvent::birthday_of(&p).unwrap();
        assert_eq!(display_label(&ev), "Alice's birthday");
        assert_eq!(ev.key.to_string(), "birthday-7");
    }

    #[test]
    fn stored_labels_are_unchanged() {
        let ev = crate::models::event::Event::new("Anniversary", "2010-06-12");
        assert_eq!(display_label(&CalendarEvent::from_event(&ev)), "Anniversary");
    }
}
