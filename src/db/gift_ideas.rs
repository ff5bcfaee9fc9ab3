use crate::errors::{AppError, AppResult};
use crate::models::gift_idea::GiftIdea;
use crate::models::gift_status::GiftStatus;
use rusqlite::{Connection, OptionalExtension, Result, Row, ToSql, params};

const SELECT_GIFT_IDEAS: &str =
    "SELECT id, person_id, event_id, idea, status, price, url, notes, created_at, updated_at
     FROM gift_ideas";

pub fn map_row(row: &Row) -> Result<GiftIdea> {
    let status_str: String = row.get("status")?;
    let status = GiftStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(GiftIdea {
        id: row.get("id")?,
        person_id: row.get("person_id")?,
        event_id: row.get("event_id")?,
        idea: row.get("idea")?,
        status,
        price: row.get("price")?,
        url: row.get("url")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Insert a gift idea and return its id. A non-zero `id` is kept as is.
pub fn insert_gift_idea(conn: &Connection, g: &GiftIdea) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO gift_ideas (id, person_id, event_id, idea, status, price, url, notes, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            (g.id != 0).then_some(g.id),
            g.person_id,
            g.event_id,
            g.idea,
            g.status.to_db_str(),
            g.price,
            g.url,
            g.notes,
            g.created_at,
            g.updated_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_gift_idea(conn: &Connection, g: &GiftIdea) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE gift_ideas
         SET person_id = ?1, event_id = ?2, idea = ?3, status = ?4,
             price = ?5, url = ?6, notes = ?7, updated_at = ?8
         WHERE id = ?9",
        params![
            g.person_id,
            g.event_id,
            g.idea,
            g.status.to_db_str(),
            g.price,
            g.url,
            g.notes,
            g.updated_at,
            g.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::GiftIdeaNotFound(g.id));
    }
    Ok(())
}

pub fn delete_gift_idea(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM gift_ideas WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::GiftIdeaNotFound(id));
    }
    Ok(())
}

pub fn load_gift_idea(conn: &Connection, id: i64) -> AppResult<Option<GiftIdea>> {
    let sql = format!("{SELECT_GIFT_IDEAS} WHERE id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

fn load_where(conn: &Connection, clause: &str, args: &[&dyn ToSql]) -> AppResult<Vec<GiftIdea>> {
    let sql = format!("{SELECT_GIFT_IDEAS} {clause} ORDER BY id DESC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All gift ideas, newest first.
pub fn load_gift_ideas(conn: &Connection) -> AppResult<Vec<GiftIdea>> {
    load_where(conn, "", &[])
}

pub fn load_gift_ideas_by_person(conn: &Connection, person_id: i64) -> AppResult<Vec<GiftIdea>> {
    load_where(conn, "WHERE person_id = ?1", &[&person_id])
}

pub fn load_gift_ideas_by_event(conn: &Connection, event_id: i64) -> AppResult<Vec<GiftIdea>> {
    load_where(conn, "WHERE event_id = ?1", &[&event_id])
}
