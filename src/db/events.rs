use crate::errors::{AppError, AppResult};
use crate::models::category::EventCategory;
use crate::models::event::Event;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_EVENTS: &str =
    "SELECT id, name, event_date, description, event_type, recurring, created_at, updated_at
     FROM events";

pub fn map_row(row: &Row) -> Result<Event> {
    // Unknown types (e.g. from an import) are display-only, so they are
    // dropped instead of failing the whole query.
    let event_type: Option<String> = row.get("event_type")?;
    let recurring: Option<i64> = row.get("recurring")?;

    Ok(Event {
        id: row.get("id")?,
        name: row.get("name")?,
        event_date: row.get("event_date")?,
        description: row.get("description")?,
        event_type: event_type.as_deref().and_then(EventCategory::from_db_str),
        recurring: recurring.map(|r| r != 0),
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Insert an event and return its id. A non-zero `id` is kept as is.
pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (id, name, event_date, description, event_type, recurring, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            (ev.id != 0).then_some(ev.id),
            ev.name,
            ev.event_date,
            ev.description,
            ev.event_type.map(|t| t.to_db_str()),
            ev.recurring,
            ev.created_at,
            ev.updated_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_event(conn: &Connection, ev: &Event) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE events
         SET name = ?1, event_date = ?2, description = ?3,
             event_type = ?4, recurring = ?5, updated_at = ?6
         WHERE id = ?7",
        params![
            ev.name,
            ev.event_date,
            ev.description,
            ev.event_type.map(|t| t.to_db_str()),
            ev.recurring,
            ev.updated_at,
            ev.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::EventNotFound(ev.id));
    }
    Ok(())
}

/// Delete an event. Gift ideas linked to it are kept and detached
/// (ON DELETE SET NULL).
pub fn delete_event(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::EventNotFound(id));
    }
    Ok(())
}

pub fn load_event(conn: &Connection, id: i64) -> AppResult<Option<Event>> {
    let sql = format!("{SELECT_EVENTS} WHERE id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// All events in insertion order.
pub fn load_events(conn: &Connection) -> AppResult<Vec<Event>> {
    let sql = format!("{SELECT_EVENTS} ORDER BY id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn event_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM events WHERE id = ?1")?;
    Ok(stmt.exists([id])?)
}
