use crate::db::events;
use crate::db::log::write_log_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::category::EventCategory;
use crate::models::event::Event;
use crate::utils::date::normalize_date;
use chrono::{Local, NaiveDate};
use std::cmp::Ordering;

#[derive(Debug, Default, Clone)]
pub struct EventChanges {
    pub name: Option<String>,
    pub date: Option<String>,
    pub event_type: Option<String>,
    pub description: Option<String>,
    pub recurring: Option<bool>,
}

impl EventChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.event_type.is_none()
            && self.description.is_none()
            && self.recurring.is_none()
    }
}

/// Where an event's literal stored date sits relative to the reference
/// date, ignoring recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStatus {
    Today,
    Upcoming,
    Past,
}

impl DateStatus {
    pub fn of(date: NaiveDate, reference: NaiveDate) -> Self {
        match date.cmp(&reference) {
            Ordering::Equal => DateStatus::Today,
            Ordering::Greater => DateStatus::Upcoming,
            Ordering::Less => DateStatus::Past,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateStatus::Today => "Today",
            DateStatus::Upcoming => "Upcoming",
            DateStatus::Past => "Past",
        }
    }
}

fn parse_category(code: &str) -> AppResult<Option<EventCategory>> {
    if code.trim().is_empty() {
        return Ok(None);
    }
    EventCategory::from_code(code)
        .map(Some)
        .ok_or_else(|| AppError::InvalidCategory(code.to_string()))
}

fn validate_name(name: &str) -> AppResult<String> {
    let n = name.trim();
    if n.is_empty() {
        return Err(AppError::Validation(
            "Event name must not be empty".to_string(),
        ));
    }
    Ok(n.to_string())
}

pub struct EventLogic;

impl EventLogic {
    /// Add an event. `date` must be `YYYY-MM-DD`; `recurring = false`
    /// makes it a one-off.
    pub fn add(
        pool: &mut DbPool,
        name: &str,
        date: &str,
        event_type: Option<&str>,
        description: Option<&str>,
        recurring: bool,
    ) -> AppResult<Event> {
        let mut ev = Event::new(&validate_name(name)?, &normalize_date(date)?);
        if let Some(code) = event_type {
            ev.event_type = parse_category(code)?;
        }
        ev.description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        ev.recurring = Some(recurring);

        ev.id = events::insert_event(&pool.conn, &ev)?;

        write_log_or_warn(
            &pool.conn,
            "add_event",
            &ev.id.to_string(),
            &format!("Added event '{}' on {}", ev.name, date),
        );

        Ok(ev)
    }

    pub fn edit(pool: &mut DbPool, id: i64, changes: EventChanges) -> AppResult<Event> {
        if changes.is_empty() {
            return Err(AppError::Validation("Nothing to update".to_string()));
        }

        let mut ev = events::load_event(&pool.conn, id)?.ok_or(AppError::EventNotFound(id))?;

        if let Some(name) = &changes.name {
            ev.name = validate_name(name)?;
        }
        if let Some(date) = &changes.date {
            ev.event_date = Some(normalize_date(date)?);
        }
        if let Some(code) = &changes.event_type {
            ev.event_type = parse_category(code)?;
        }
        if let Some(desc) = &changes.description {
            let d = desc.trim();
            ev.description = (!d.is_empty()).then(|| d.to_string());
        }
        if let Some(r) = changes.recurring {
            ev.recurring = Some(r);
        }
        ev.updated_at = Local::now().to_rfc3339();

        events::update_event(&pool.conn, &ev)?;

        write_log_or_warn(
            &pool.conn,
            "edit_event",
            &id.to_string(),
            &format!("Updated event '{}'", ev.name),
        );

        Ok(ev)
    }

    /// Delete an event. Linked gift ideas are kept and detached.
    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<Event> {
        let ev = events::load_event(&pool.conn, id)?.ok_or(AppError::EventNotFound(id))?;
        events::delete_event(&pool.conn, id)?;

        write_log_or_warn(
            &pool.conn,
            "del_event",
            &id.to_string(),
            &format!("Deleted event '{}'", ev.name),
        );

        Ok(ev)
    }
}
