use chrono::NaiveDate;
use giftlog::config::Config;
use giftlog::core::calendar::EventKey;
use giftlog::core::dashboard::{DashboardLogic, build_dashboard};
use giftlog::core::event::EventLogic;
use giftlog::core::gift::{GiftChanges, GiftLogic};
use giftlog::core::person::{PersonChanges, PersonLogic};
use giftlog::db::initialize::init_db;
use giftlog::db::pool::DbPool;
use giftlog::models::event::Event;
use giftlog::models::gift_idea::GiftIdea;
use giftlog::models::gift_status::GiftStatus;
use giftlog::models::person::Person;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_build_dashboard_merges_birthdays_and_events() {
    let mut alice = Person::new("Alice");
    alice.id = 1;
    alice.birthday = Some("1990-03-22".into());
    let mut bob = Person::new("Bob");
    bob.id = 2;

    let mut concert = Event::new("Concert", "2024-03-25");
    concert.id = 1;
    concert.recurring = Some(false);
    let mut old = Event::new("Graduation", "2023-07-01");
    old.id = 2;
    old.recurring = Some(false);
    let mut broken = Event::new("Broken", "");
    broken.id = 3;
    broken.event_date = Some("someday".into());

    let mut g1 = GiftIdea::new(1, "Book");
    g1.id = 1;
    let mut g2 = GiftIdea::new(2, "Watch");
    g2.id = 2;
    g2.status = GiftStatus::Purchased;
    let mut g3 = GiftIdea::new(99, "Mystery");
    g3.id = 3;

    let dash = build_dashboard(
        &[alice, bob],
        &[concert, old, broken],
        &[g1, g2, g3],
        6,
        2,
        d("2024-03-20"),
    );

    assert_eq!(dash.stats.people, 2);
    assert_eq!(dash.stats.upcoming_events, 1);
    assert_eq!(dash.stats.birthdays, 1);
    assert_eq!(dash.stats.gift_ideas, 3);
    assert_eq!(dash.stats.purchased_gifts, 1);

    let keys: Vec<EventKey> = dash.next_events.iter().map(|o| o.event.key).collect();
    assert_eq!(keys, vec![EventKey::Birthday(1), EventKey::Stored(1)]);
    assert_eq!(dash.next_events[0].days, 2);

    // newest first, limited, unknown person named as such
    assert_eq!(dash.recent_gifts.len(), 2);
    assert_eq!(dash.recent_gifts[0].gift.idea, "Mystery");
    assert_eq!(dash.recent_gifts[0].person_name, "Unknown Person");
    assert_eq!(dash.recent_gifts[1].person_name, "Bob");

    assert_eq!(dash.holidays.len(), 2);
    assert_eq!(dash.holidays[0].1, d("2024-05-12"));
}

#[test]
fn test_dashboard_from_database() {
    let mut pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();

    let alice = PersonLogic::add(
        &mut pool,
        "Alice",
        PersonChanges {
            birthday: Some("1990-04-01".into()),
            ..PersonChanges::default()
        },
    )
    .unwrap();
    EventLogic::add(&mut pool, "Picnic", "2024-04-10", None, None, false).unwrap();
    GiftLogic::add(&mut pool, alice.id, "Flowers", GiftChanges::default()).unwrap();

    let cfg = Config {
        dashboard_limit: 5,
        ..Config::default()
    };
    let dash = DashboardLogic::load(&mut pool, &cfg, d("2024-03-20")).unwrap();

    assert_eq!(dash.stats.people, 1);
    assert_eq!(dash.stats.gift_ideas, 1);
    assert_eq!(dash.next_events.len(), 2);
    assert_eq!(dash.next_events[0].date, d("2024-04-01"));
    assert_eq!(dash.next_events[1].event.label, "Picnic");
    assert_eq!(dash.recent_gifts[0].person_name, "Alice");
}
