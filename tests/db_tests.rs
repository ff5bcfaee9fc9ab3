use giftlog::core::event::{EventChanges, EventLogic};
use giftlog::core::gift::{GiftChanges, GiftLogic};
use giftlog::core::person::{PersonChanges, PersonLogic};
use giftlog::db::initialize::init_db;
use giftlog::db::migrate::{run_pending_migrations, schema_ready};
use giftlog::db::pool::DbPool;
use giftlog::db::{events, gift_ideas, log, people};
use giftlog::errors::AppError;
use giftlog::models::gift_status::GiftStatus;
use giftlog::models::relationship::Relationship;

fn pool() -> DbPool {
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    pool
}

#[test]
fn test_migrations_are_idempotent() {
    let pool = DbPool::in_memory().unwrap();
    assert!(!schema_ready(&pool.conn).unwrap());

    let first = run_pending_migrations(&pool.conn).unwrap();
    assert_eq!(first, 4);
    assert!(schema_ready(&pool.conn).unwrap());

    assert_eq!(run_pending_migrations(&pool.conn).unwrap(), 0);
}

#[test]
fn test_person_crud() {
    let mut pool = pool();

    let p = PersonLogic::add(
        &mut pool,
        "  Alice ",
        PersonChanges {
            relationship: Some("Friend".into()),
            birthday: Some("1990-03-15".into()),
            ..PersonChanges::default()
        },
    )
    .unwrap();
    assert_eq!(p.name, "Alice");
    assert_eq!(p.relationship, Some(Relationship::Friend));

    let edited = PersonLogic::edit(
        &mut pool,
        p.id,
        PersonChanges {
            email: Some("alice@example.com".into()),
            birthday: Some(String::new()),
            ..PersonChanges::default()
        },
    )
    .unwrap();
    assert_eq!(edited.email.as_deref(), Some("alice@example.com"));
    assert_eq!(edited.birthday, None);

    let stored = people::load_person(&pool.conn, p.id).unwrap().unwrap();
    assert_eq!(stored.email.as_deref(), Some("alice@example.com"));
    assert_eq!(stored.relationship, Some(Relationship::Friend));
}

#[test]
fn test_person_validation() {
    let mut pool = pool();

    let bad_date = PersonLogic::add(
        &mut pool,
        "Bob",
        PersonChanges {
            birthday: Some("1990-02-30".into()),
            ..PersonChanges::default()
        },
    );
    assert!(matches!(bad_date, Err(AppError::InvalidDate(_))));

    let bad_rel = PersonLogic::add(
        &mut pool,
        "Bob",
        PersonChanges {
            relationship: Some("nemesis".into()),
            ..PersonChanges::default()
        },
    );
    assert!(matches!(bad_rel, Err(AppError::InvalidRelationship(_))));

    assert!(matches!(
        PersonLogic::add(&mut pool, "   ", PersonChanges::default()),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        PersonLogic::delete(&mut pool, 42),
        Err(AppError::PersonNotFound(42))
    ));
}

#[test]
fn test_deleting_person_removes_their_gifts() {
    let mut pool = pool();
    let alice = PersonLogic::add(&mut pool, "Alice", PersonChanges::default()).unwrap();
    let bob = PersonLogic::add(&mut pool, "Bob", PersonChanges::default()).unwrap();
    GiftLogic::add(&mut pool, alice.id, "Book", GiftChanges::default()).unwrap();
    GiftLogic::add(&mut pool, bob.id, "Scarf", GiftChanges::default()).unwrap();

    PersonLogic::delete(&mut pool, alice.id).unwrap();

    let left = gift_ideas::load_gift_ideas(&pool.conn).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].idea, "Scarf");
}

#[test]
fn test_deleting_event_detaches_gifts() {
    let mut pool = pool();
    let alice = PersonLogic::add(&mut pool, "Alice", PersonChanges::default()).unwrap();
    let xmas = EventLogic::add(&mut pool, "Christmas", "2024-12-25", Some("holiday"), None, true).unwrap();
    let gift = GiftLogic::add(
        &mut pool,
        alice.id,
        "Sweater",
        GiftChanges {
            event_id: Some(Some(xmas.id)),
            ..GiftChanges::default()
        },
    )
    .unwrap();
    assert_eq!(gift.event_id, Some(xmas.id));

    EventLogic::delete(&mut pool, xmas.id).unwrap();

    let kept = gift_ideas::load_gift_idea(&pool.conn, gift.id).unwrap().unwrap();
    assert_eq!(kept.event_id, None);
}

#[test]
fn test_event_edit_and_validation() {
    let mut pool = pool();

    assert!(matches!(
        EventLogic::add(&mut pool, "Party", "next friday", None, None, true),
        Err(AppError::InvalidDate(_))
    ));
    assert!(matches!(
        EventLogic::add(&mut pool, "Party", "2024-05-01", Some("birthday"), None, true),
        Err(AppError::InvalidCategory(_))
    ));

    let ev = EventLogic::add(&mut pool, "Party", "2024-05-01", Some("special occasion"), None, true).unwrap();
    let edited = EventLogic::edit(
        &mut pool,
        ev.id,
        EventChanges {
            recurring: Some(false),
            description: Some("at the beach".into()),
            ..EventChanges::default()
        },
    )
    .unwrap();
    assert!(!edited.is_recurring());

    let stored = events::load_event(&pool.conn, ev.id).unwrap().unwrap();
    assert_eq!(stored.recurring, Some(false));
    assert_eq!(stored.description.as_deref(), Some("at the beach"));

    assert!(matches!(
        EventLogic::edit(&mut pool, ev.id, EventChanges::default()),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn test_gift_validation() {
    let mut pool = pool();
    let alice = PersonLogic::add(&mut pool, "Alice", PersonChanges::default()).unwrap();

    assert!(matches!(
        GiftLogic::add(&mut pool, 99, "Book", GiftChanges::default()),
        Err(AppError::PersonNotFound(99))
    ));
    assert!(matches!(
        GiftLogic::add(
            &mut pool,
            alice.id,
            "Book",
            GiftChanges {
                event_id: Some(Some(5)),
                ..GiftChanges::default()
            }
        ),
        Err(AppError::EventNotFound(5))
    ));
    assert!(matches!(
        GiftLogic::add(
            &mut pool,
            alice.id,
            "Book",
            GiftChanges {
                status: Some("lost".into()),
                ..GiftChanges::default()
            }
        ),
        Err(AppError::InvalidStatus(_))
    ));

    let gift = GiftLogic::add(&mut pool, alice.id, "Book", GiftChanges::default()).unwrap();
    let given = GiftLogic::edit(
        &mut pool,
        gift.id,
        GiftChanges {
            status: Some("GIVEN".into()),
            price: Some(12.5),
            ..GiftChanges::default()
        },
    )
    .unwrap();
    assert_eq!(given.status, GiftStatus::Given);
    assert_eq!(given.price, Some(12.5));
}

#[test]
fn test_mutations_are_logged() {
    let mut pool = pool();
    let p = PersonLogic::add(&mut pool, "Alice", PersonChanges::default()).unwrap();
    PersonLogic::delete(&mut pool, p.id).unwrap();

    let ops: Vec<String> = log::load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|e| e.operation)
        .filter(|op| op != "migration_applied")
        .collect();
    assert_eq!(ops, vec!["add_person", "del_person"]);
}
