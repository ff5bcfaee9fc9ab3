//! Calendar events: the common shape shared by stored events and the
//! birthday pseudo-events derived from people.

use crate::core::recurrence::parse_anchor;
use crate::models::category::EventCategory;
use crate::models::event::Event;
use crate::models::person::Person;
use chrono::NaiveDate;
use std::fmt;

const BIRTHDAY_PREFIX: &str = "birthday-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKey {
    Stored(i64),
    /// Keyed by the person's id.
    Birthday(i64),
}

impl EventKey {
    /// Parse `42` or `birthday-42`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.strip_prefix(BIRTHDAY_PREFIX) {
            Some(id) => id.parse().ok().map(EventKey::Birthday),
            None => s.parse().ok().map(EventKey::Stored),
        }
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKey::Stored(id) => write!(f, "{id}"),
            EventKey::Birthday(id) => write!(f, "{BIRTHDAY_PREFIX}{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub key: EventKey,
    pub label: String,
    /// Raw anchor text; see `recurrence::parse_anchor`.
    pub anchor: Option<String>,
    pub recurring: bool,
    pub category: Option<EventCategory>,
    pub description: Option<String>,
}

impl CalendarEvent {
    pub fn from_event(ev: &Event) -> Self {
        Self {
            key: EventKey::Stored(ev.id),
            label: ev.name.clone(),
            anchor: ev.event_date.clone(),
            recurring: ev.is_recurring(),
            category: ev.event_type,
            description: ev.description.clone(),
        }
    }

    /// Birthday pseudo-event for `person`; always recurring.
    /// Returns `None` when the person has no birthday on record.
    pub fn birthday_of(person: &Person) -> Option<Self> {
        if !person.has_birthday() {
            return None;
        }

        Some(Self {
            key: EventKey::Birthday(person.id),
            label: person.name.clone(),
            anchor: person.birthday.clone(),
            recurring: true,
            category: Some(EventCategory::Birthday),
            description: None,
        })
    }

    pub fn anchor_date(&self) -> Option<NaiveDate> {
        self.anchor.as_deref().and_then(parse_anchor)
    }

    pub fn is_birthday(&self) -> bool {
        matches!(self.key, EventKey::Birthday(_))
    }
}

pub fn from_events(events: &[Event]) -> Vec<CalendarEvent> {
    events.iter().map(CalendarEvent::from_event).collect()
}

pub fn birthdays(people: &[Person]) -> Vec<CalendarEvent> {
    people.iter().filter_map(CalendarEvent::birthday_of).collect()
}

/// Stored events followed by birthdays (when requested).
pub fn collect(events: &[Event], people: &[Person], include_birthdays: bool) -> Vec<CalendarEvent> {
    let mut out = from_events(events);
    if include_birthdays {
        out.extend(birthdays(people));
    }
    out
}
