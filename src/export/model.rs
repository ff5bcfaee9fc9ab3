// src/export/model.rs

use crate::core::recurrence::next_occurrence;
use crate::models::event::Event;
use crate::models::gift_idea::GiftIdea;
use crate::models::person::Person;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whole-database JSON document, written by `export --format json` and read
/// back by `import`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct GiftlogDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub gift_ideas: Vec<GiftIdea>,
}

/// Flat person row for CSV.
#[derive(Serialize, Clone, Debug)]
pub struct PersonRow {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub relationship: Option<String>,
    pub birthday: Option<String>,
    pub next_birthday: Option<String>,
    pub notes: Option<String>,
}

/// Flat event row for CSV. `next_occurrence` is empty for elapsed one-off
/// events and for dates that do not parse.
#[derive(Serialize, Clone, Debug)]
pub struct EventRow {
    pub id: i64,
    pub name: String,
    pub event_date: Option<String>,
    pub event_type: Option<String>,
    pub recurring: bool,
    pub next_occurrence: Option<String>,
    pub description: Option<String>,
}

/// Flat gift idea row for CSV, with person and event names resolved.
#[derive(Serialize, Clone, Debug)]
pub struct GiftRow {
    pub id: i64,
    pub person_id: i64,
    pub person_name: Option<String>,
    pub event_id: Option<i64>,
    pub event_name: Option<String>,
    pub idea: String,
    pub status: String,
    pub price: Option<f64>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

fn iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub(crate) fn person_rows(people: &[Person], reference: NaiveDate) -> Vec<PersonRow> {
    people
        .iter()
        .map(|p| PersonRow {
            id: p.id,
            name: p.name.clone(),
            email: p.email.clone(),
            relationship: p.relationship.map(|r| r.to_db_str().to_string()),
            birthday: p.birthday.clone(),
            next_birthday: next_occurrence(p.birthday.as_deref(), true, reference).map(iso),
            notes: p.notes.clone(),
        })
        .collect()
}

pub(crate) fn event_rows(events: &[Event], reference: NaiveDate) -> Vec<EventRow> {
    events
        .iter()
        .map(|e| EventRow {
            id: e.id,
            name: e.name.clone(),
            event_date: e.event_date.clone(),
            event_type: e.event_type.map(|t| t.to_db_str().to_string()),
            recurring: e.is_recurring(),
            next_occurrence: next_occurrence(e.event_date.as_deref(), e.is_recurring(), reference)
                .map(iso),
            description: e.description.clone(),
        })
        .collect()
}

pub(crate) fn gift_rows(gifts: &[GiftIdea], people: &[Person], events: &[Event]) -> Vec<GiftRow> {
    let person_names: HashMap<i64, &str> = people.iter().map(|p| (p.id, p.name.as_str())).collect();
    let event_names: HashMap<i64, &str> = events.iter().map(|e| (e.id, e.name.as_str())).collect();

    gifts
        .iter()
        .map(|g| GiftRow {
            id: g.id,
            person_id: g.person_id,
            person_name: person_names.get(&g.person_id).map(|s| s.to_string()),
            event_id: g.event_id,
            event_name: g
                .event_id
                .and_then(|id| event_names.get(&id))
                .map(|s| s.to_string()),
            idea: g.idea.clone(),
            status: g.status.to_db_str().to_string(),
            price: g.price,
            url: g.url.clone(),
            notes: g.notes.clone(),
            created_at: g.created_at.clone(),
        })
        .collect()
}
