use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists. Applied migrations are recorded
/// there, so it must exist before anything else runs.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![version, message],
    )?;
    Ok(())
}

fn create_people_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS people (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            email        TEXT,
            relationship TEXT CHECK(relationship IN ('family','friend','coworker','other')),
            birthday     TEXT,
            notes        TEXT,
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_people_name ON people(name);
        "#,
    )
}

/// The first schema had no `recurring` column; it is added by
/// `migrate_add_recurring_to_events`.
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            event_date   TEXT,
            description  TEXT,
            event_type   TEXT,
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_date ON events(event_date);
        "#,
    )
}

fn create_gift_ideas_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS gift_ideas (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            person_id    INTEGER NOT NULL REFERENCES people(id) ON DELETE CASCADE,
            event_id     INTEGER REFERENCES events(id) ON DELETE SET NULL,
            idea         TEXT NOT NULL,
            status       TEXT NOT NULL DEFAULT 'idea' CHECK(status IN ('idea','purchased','given')),
            price        REAL,
            url          TEXT,
            notes        TEXT,
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_gift_ideas_person ON gift_ideas(person_id);
        CREATE INDEX IF NOT EXISTS idx_gift_ideas_event ON gift_ideas(event_id);
        "#,
    )
}

/// Add the nullable `recurring` flag to events. NULL reads as recurring.
fn migrate_add_recurring_to_events(conn: &Connection) -> Result<()> {
    if table_has_column(conn, "events", "recurring")? {
        return Ok(());
    }

    conn.execute("ALTER TABLE events ADD COLUMN recurring INTEGER;", [])?;
    Ok(())
}

type Step = fn(&Connection) -> Result<()>;

/// Ordered list of schema migrations: (version, description, step).
const MIGRATIONS: &[(&str, &str, Step)] = &[
    ("20250110_0001_create_people", "Created people table", create_people_table),
    ("20250110_0002_create_events", "Created events table", create_events_table),
    (
        "20250110_0003_create_gift_ideas",
        "Created gift_ideas table",
        create_gift_ideas_table,
    ),
    (
        "20250305_0004_add_recurring_flag",
        "Added recurring flag to events",
        migrate_add_recurring_to_events,
    ),
];

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db() and `giftlog db --migrate`.
/// Returns the number of migrations applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, message, step) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        step(conn)?;
        mark_applied(conn, version, message)?;
        success(format!("Migration applied: {} → {}", version, message));
        applied += 1;
    }

    Ok(applied)
}

/// True when every table giftlog needs is present.
pub fn schema_ready(conn: &Connection) -> Result<bool> {
    for table in ["log", "people", "events", "gift_ideas"] {
        if !table_exists(conn, table)? {
            return Ok(false);
        }
    }
    table_has_column(conn, "events", "recurring")
}
