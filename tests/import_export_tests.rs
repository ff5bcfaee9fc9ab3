use chrono::NaiveDate;
use giftlog::core::calendar;
use giftlog::core::filter::{ViewMode, bucket};
use giftlog::core::import::{ImportLogic, parse_document};
use giftlog::db::initialize::init_db;
use giftlog::db::pool::DbPool;
use giftlog::db::{events, gift_ideas, people};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{gl, gl_at, init_db_with_data, setup_test_db, temp_out};

const DOCUMENT: &str = r#"{
  "people": [
    { "id": 10, "name": "Alice", "birthday": "1990-03-15", "relationship": "friend" },
    { "id": 11, "name": "Bob", "birthday": "sometime in spring" }
  ],
  "events": [
    { "id": 3, "name": "Anniversary", "event_date": "2010-06-12", "event_type": "anniversary" },
    { "id": 4, "name": "Broken", "event_date": "31/12/2024", "recurring": false }
  ],
  "gift_ideas": [
    { "id": 1, "person_id": 10, "event_id": 3, "idea": "Book", "status": "purchased", "price": 15.0 },
    { "id": 2, "person_id": 77, "idea": "Orphan" }
  ]
}"#;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_import_remaps_ids_and_skips_orphans() {
    let mut pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();

    let summary = ImportLogic::import(&mut pool, parse_document(DOCUMENT).unwrap()).unwrap();
    assert_eq!(summary.people, 2);
    assert_eq!(summary.events, 2);
    assert_eq!(summary.gift_ideas, 1);
    assert_eq!(summary.skipped, 1);

    let all_people = people::load_people(&pool.conn).unwrap();
    let alice = all_people.iter().find(|p| p.name == "Alice").unwrap();

    let gifts = gift_ideas::load_gift_ideas(&pool.conn).unwrap();
    assert_eq!(gifts[0].person_id, alice.id);

    let all_events = events::load_events(&pool.conn).unwrap();
    let anniversary = all_events.iter().find(|e| e.name == "Anniversary").unwrap();
    assert_eq!(gifts[0].event_id, Some(anniversary.id));
    // dates are stored verbatim
    assert!(all_events.iter().any(|e| e.event_date.as_deref() == Some("31/12/2024")));
    assert!(!alice.created_at.is_empty());
}

#[test]
fn test_imported_malformed_dates_are_excluded_from_views() {
    let mut pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    ImportLogic::import(&mut pool, parse_document(DOCUMENT).unwrap()).unwrap();

    let cal = calendar::collect(
        &events::load_events(&pool.conn).unwrap(),
        &people::load_people(&pool.conn).unwrap(),
        true,
    );
    assert_eq!(cal.len(), 4);

    let upcoming = bucket(&cal, ViewMode::Upcoming, 12, d("2024-03-20"));
    let labels: Vec<&str> = upcoming.iter().map(|o| o.event.label.as_str()).collect();
    assert_eq!(labels, vec!["Anniversary", "Alice"]);

    let past = bucket(&cal, ViewMode::Past, 12, d("2024-03-20"));
    assert_eq!(past.len(), 2);
}

#[test]
fn test_parse_document_rejects_invalid_json() {
    assert!(parse_document("{ not json").is_err());
    // every collection is optional
    let empty = parse_document("{}").unwrap();
    assert!(empty.people.is_empty() && empty.events.is_empty() && empty.gift_ideas.is_empty());
}

#[test]
fn test_export_json_then_import_into_fresh_db() {
    let db = setup_test_db("export_json_roundtrip_src");
    init_db_with_data(&db);
    let out = temp_out("export_json_roundtrip", "json");

    gl_at(&db)
        .args(["export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).unwrap();
    let doc = parse_document(&content).unwrap();
    assert_eq!(doc.people.len(), 2);
    assert_eq!(doc.events.len(), 3);
    assert_eq!(doc.gift_ideas.len(), 2);

    let target = setup_test_db("export_json_roundtrip_dst");
    gl_at(&target)
        .args(["import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Imported 2 people, 3 events, 2 gift ideas"));

    gl_at(&target)
        .args(["gift", "list"])
        .assert()
        .success()
        .stdout(contains("Headphones").and(contains("Bob")));
}

#[test]
fn test_export_csv_events_has_next_occurrence() {
    let db = setup_test_db("export_csv_events");
    init_db_with_data(&db);
    let out = temp_out("export_csv_events", "csv");

    gl_at(&db)
        .args(["export", "--format", "csv", "--what", "events", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,name,event_date,event_type,recurring,next_occurrence,description"
    );
    assert!(content.contains("Wedding anniversary,2010-06-12,anniversary,true,2024-06-12,"));
    // elapsed one-off: no next occurrence
    assert!(content.contains("Graduation,2023-07-01,,false,,"));
}

#[test]
fn test_export_csv_all_is_rejected() {
    let db = setup_test_db("export_csv_all");
    init_db_with_data(&db);
    let out = temp_out("export_csv_all", "csv");

    gl_at(&db)
        .args(["export", "--format", "csv", "--what", "all", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("single table"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db = setup_test_db("export_relative");
    init_db_with_data(&db);

    gl_at(&db)
        .args(["export", "--file", "relative.json"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_import_missing_file_fails() {
    let db = setup_test_db("import_missing");
    gl().args(["--db", &db, "--test", "import", "--file", "/nonexistent/giftlog.json"])
        .assert()
        .failure()
        .stderr(contains("file not found"));
}
