use chrono::NaiveDate;
use giftlog::core::calendar::{self, CalendarEvent, EventKey};
use giftlog::core::filter::{ViewMode, annotate, bucket, filter_events, sort_by_occurrence};
use giftlog::models::event::Event;
use giftlog::models::person::Person;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn event(id: i64, name: &str, date: Option<&str>, recurring: bool) -> CalendarEvent {
    let mut ev = Event::new(name, "");
    ev.id = id;
    ev.event_date = date.map(str::to_string);
    ev.recurring = Some(recurring);
    CalendarEvent::from_event(&ev)
}

fn keys(list: &[CalendarEvent]) -> Vec<EventKey> {
    list.iter().map(|e| e.key).collect()
}

#[test]
fn test_invalid_dates_are_excluded_from_both_buckets() {
    let reference = d("2024-03-20");
    let events = vec![
        event(1, "Broken", Some("not-a-date"), true),
        event(2, "Missing", None, true),
        event(3, "Empty", Some(""), false),
        event(4, "Fine", Some("2010-04-01"), true),
    ];

    let upcoming = filter_events(&events, ViewMode::Upcoming, 12, reference);
    let past = filter_events(&events, ViewMode::Past, 12, reference);

    assert_eq!(keys(&upcoming), vec![EventKey::Stored(4)]);
    assert_eq!(keys(&past), vec![EventKey::Stored(4)]);
}

#[test]
fn test_window_boundary_is_inclusive() {
    let reference = d("2024-01-01");
    let events = vec![
        event(1, "Edge", Some("2024-07-01"), false),
        event(2, "Beyond", Some("2024-07-02"), false),
        event(3, "Recurring edge", Some("1999-07-01"), true),
        event(4, "Recurring beyond", Some("1999-07-02"), true),
    ];

    let upcoming = filter_events(&events, ViewMode::Upcoming, 6, reference);
    assert_eq!(
        keys(&upcoming),
        vec![EventKey::Stored(1), EventKey::Stored(3)]
    );
}

#[test]
fn test_today_is_upcoming_not_past() {
    let reference = d("2024-03-20");
    let events = vec![
        event(1, "Recurring today", Some("2000-03-20"), true),
        event(2, "One-off today", Some("2024-03-20"), false),
    ];

    let upcoming = bucket(&events, ViewMode::Upcoming, 6, reference);
    assert_eq!(upcoming.len(), 2);
    assert!(upcoming.iter().all(|o| o.days == 0));

    let past = filter_events(&events, ViewMode::Past, 6, reference);
    // the recurring one also happened last year; the one-off has no past
    assert_eq!(keys(&past), vec![EventKey::Stored(1)]);
}

#[test]
fn test_elapsed_one_off_is_only_past() {
    let reference = d("2024-03-20");
    let events = vec![event(1, "Graduation", Some("2023-07-01"), false)];

    assert!(filter_events(&events, ViewMode::Upcoming, 12, reference).is_empty());
    let past = bucket(&events, ViewMode::Past, 12, reference);
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].date, d("2023-07-01"));
    assert_eq!(past[0].days, -263);
}

#[test]
fn test_future_anchored_recurring_event_has_no_past() {
    let reference = d("2024-03-20");
    let events = vec![
        event(1, "Wedding", Some("2025-06-12"), true),
        event(2, "Anniversary", Some("2010-06-12"), true),
    ];

    let past = bucket(&events, ViewMode::Past, 6, reference);
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].event.key, EventKey::Stored(2));
    assert_eq!(past[0].date, d("2023-06-12"));
}

#[test]
fn test_upcoming_sorted_ascending() {
    let reference = d("2024-03-20");
    let events = vec![
        event(1, "June", Some("2010-06-12"), true),
        event(2, "April", Some("1985-04-02"), true),
        event(3, "December", Some("2024-12-25"), false),
        event(4, "March", Some("1990-03-15"), true),
    ];

    let list = bucket(&events, ViewMode::Upcoming, 12, reference);
    let dates: Vec<NaiveDate> = list.iter().map(|o| o.date).collect();
    assert_eq!(
        dates,
        vec![d("2024-04-02"), d("2024-06-12"), d("2024-12-25"), d("2025-03-15")]
    );
}

#[test]
fn test_past_sorted_descending() {
    let reference = d("2024-03-20");
    let events = vec![
        event(1, "Old one-off", Some("2021-05-05"), false),
        event(2, "March", Some("1990-03-15"), true),
        event(3, "June", Some("2010-06-12"), true),
    ];

    let list = bucket(&events, ViewMode::Past, 6, reference);
    let dates: Vec<NaiveDate> = list.iter().map(|o| o.date).collect();
    assert_eq!(dates, vec![d("2024-03-15"), d("2023-06-12"), d("2021-05-05")]);
}

#[test]
fn test_sort_puts_missing_last_and_is_stable() {
    let reference = d("2024-03-20");
    let events = vec![
        event(1, "Broken", Some("??"), true),
        event(2, "Same day A", Some("2000-05-01"), true),
        event(3, "Same day B", Some("2010-05-01"), true),
        event(4, "Earlier", Some("2000-04-01"), true),
    ];

    let sorted = sort_by_occurrence(&events, ViewMode::Upcoming, reference);
    assert_eq!(
        keys(&sorted),
        vec![
            EventKey::Stored(4),
            EventKey::Stored(2),
            EventKey::Stored(3),
            EventKey::Stored(1)
        ]
    );
}

#[test]
fn test_birthday_end_to_end() {
    let reference = d("2024-03-20");
    let mut alice = Person::new("Alice");
    alice.id = 1;
    alice.birthday = Some("1990-03-15".into());

    let events = calendar::collect(&[], &[alice], true);
    assert_eq!(events.len(), 1);
    assert!(events[0].recurring);

    let all = annotate(&events, ViewMode::Upcoming, reference);
    assert_eq!(all[0].date, d("2025-03-15"));
    assert_eq!(all[0].days, 360);

    assert!(bucket(&events, ViewMode::Upcoming, 6, reference).is_empty());
    assert_eq!(bucket(&events, ViewMode::Upcoming, 12, reference).len(), 1);
}

#[test]
fn test_birthdays_only_when_requested() {
    let mut bob = Person::new("Bob");
    bob.id = 2;
    bob.birthday = Some("1985-04-02".into());
    let mut carol = Person::new("Carol");
    carol.id = 3;

    let people = vec![bob, carol];
    assert!(calendar::collect(&[], &people, false).is_empty());

    let with = calendar::collect(&[], &people, true);
    assert_eq!(keys(&with), vec![EventKey::Birthday(2)]);
}

#[test]
fn test_missing_recurring_flag_means_recurring() {
    let mut ev = Event::new("Legacy", "2010-01-05");
    ev.recurring = None;
    let cal = CalendarEvent::from_event(&ev);
    assert!(cal.recurring);

    let list = bucket(&[cal], ViewMode::Upcoming, 12, d("2024-03-20"));
    assert_eq!(list[0].date, d("2025-01-05"));
}

#[test]
fn test_event_key_parsing() {
    assert_eq!(EventKey::parse("12"), Some(EventKey::Stored(12)));
    assert_eq!(EventKey::parse("birthday-3"), Some(EventKey::Birthday(3)));
    assert_eq!(EventKey::parse("birthday-x"), None);
    assert_eq!(EventKey::parse("abc"), None);
}
