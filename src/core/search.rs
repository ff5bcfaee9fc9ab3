//! Case-insensitive text search over people, events and gift ideas.

use crate::models::event::Event;
use crate::models::gift_idea::GiftIdea;
use crate::models::person::Person;
use std::collections::HashMap;

/// True when `query` is blank or contained (case-insensitively) in any of
/// the given fields.
pub fn text_matches(query: &str, fields: &[Option<&str>]) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }

    fields
        .iter()
        .flatten()
        .any(|f| f.to_lowercase().contains(&q))
}

/// Events whose name or description match.
pub fn search_events(events: &[Event], query: &str) -> Vec<Event> {
    events
        .iter()
        .filter(|e| text_matches(query, &[Some(e.name.as_str()), e.description.as_deref()]))
        .cloned()
        .collect()
}

/// People whose name, email or notes match.
pub fn search_people(people: &[Person], query: &str) -> Vec<Person> {
    people
        .iter()
        .filter(|p| {
            text_matches(
                query,
                &[Some(p.name.as_str()), p.email.as_deref(), p.notes.as_deref()],
            )
        })
        .cloned()
        .collect()
}

/// Gift ideas whose text, person name or event name match.
pub fn search_gift_ideas(
    gifts: &[GiftIdea],
    people: &[Person],
    events: &[Event],
    query: &str,
) -> Vec<GiftIdea> {
    let person_names: HashMap<i64, &str> = people.iter().map(|p| (p.id, p.name.as_str())).collect();
    let event_names: HashMap<i64, &str> = events.iter().map(|e| (e.id, e.name.as_str())).collect();

    gifts
        .iter()
        .filter(|g| {
            let person = person_names.get(&g.person_id).copied();
            let event = g.event_id.and_then(|id| event_names.get(&id).copied());
            text_matches(query, &[Some(g.idea.as_str()), person, event])
        })
        .cloned()
        .collect()
}
