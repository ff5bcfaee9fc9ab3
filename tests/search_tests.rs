use giftlog::core::search::{search_events, search_gift_ideas, search_people, text_matches};
use giftlog::models::event::Event;
use giftlog::models::gift_idea::GiftIdea;
use giftlog::models::person::Person;

fn person(id: i64, name: &str) -> Person {
    let mut p = Person::new(name);
    p.id = id;
    p
}

fn ev(id: i64, name: &str) -> Event {
    let mut e = Event::new(name, "2024-01-01");
    e.id = id;
    e
}

#[test]
fn test_blank_query_matches_everything() {
    assert!(text_matches("", &[None]));
    assert!(text_matches("   ", &[Some("x")]));
}

#[test]
fn test_case_insensitive() {
    assert!(text_matches("ALI", &[Some("alice")]));
    assert!(!text_matches("zed", &[Some("alice"), None]));
}

#[test]
fn test_search_events_by_description() {
    let mut a = ev(1, "Anniversary");
    a.description = Some("dinner at the lake".into());
    let b = ev(2, "Concert");

    let found = search_events(&[a, b], "LAKE");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 1);
}

#[test]
fn test_search_people_by_email() {
    let mut bob = person(2, "Bob");
    bob.email = Some("bob@example.com".into());
    let people = vec![person(1, "Alice"), bob];

    let found = search_people(&people, "example");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Bob");
}

#[test]
fn test_search_gift_ideas_by_person_and_event() {
    let people = vec![person(1, "Alice"), person(2, "Bob")];
    let events = vec![ev(7, "Christmas")];

    let mut book = GiftIdea::new(1, "Book");
    book.id = 1;
    let mut scarf = GiftIdea::new(2, "Scarf");
    scarf.id = 2;
    scarf.event_id = Some(7);

    let gifts = vec![book, scarf];

    let by_person = search_gift_ideas(&gifts, &people, &events, "alice");
    assert_eq!(by_person.len(), 1);
    assert_eq!(by_person[0].idea, "Book");

    let by_event = search_gift_ideas(&gifts, &people, &events, "christ");
    assert_eq!(by_event.len(), 1);
    assert_eq!(by_event[0].idea, "Scarf");

    let by_idea = search_gift_ideas(&gifts, &people, &events, "scar");
    assert_eq!(by_idea.len(), 1);
}
