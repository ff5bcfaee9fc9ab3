use crate::errors::{AppError, AppResult};
use crate::models::person::Person;
use crate::models::relationship::Relationship;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_PEOPLE: &str = "SELECT id, name, email, relationship, birthday, notes, created_at, updated_at
     FROM people";

pub fn map_row(row: &Row) -> Result<Person> {
    let relationship: Option<String> = row.get("relationship")?;
    let relationship = match relationship {
        None => None,
        Some(s) => Some(Relationship::from_db_str(&s).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidRelationship(s.clone())),
            )
        })?),
    };

    Ok(Person {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        relationship,
        birthday: row.get("birthday")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Insert a person and return its id. A non-zero `id` is kept as is
/// (used by import).
pub fn insert_person(conn: &Connection, p: &Person) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO people (id, name, email, relationship, birthday, notes, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            (p.id != 0).then_some(p.id),
            p.name,
            p.email,
            p.relationship.map(|r| r.to_db_str()),
            p.birthday,
            p.notes,
            p.created_at,
            p.updated_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a person (all fields except id and created_at)
pub fn update_person(conn: &Connection, p: &Person) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE people
         SET name = ?1, email = ?2, relationship = ?3,
             birthday = ?4, notes = ?5, updated_at = ?6
         WHERE id = ?7",
        params![
            p.name,
            p.email,
            p.relationship.map(|r| r.to_db_str()),
            p.birthday,
            p.notes,
            p.updated_at,
            p.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::PersonNotFound(p.id));
    }
    Ok(())
}

/// Delete a person. Their gift ideas go with them (ON DELETE CASCADE).
pub fn delete_person(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM people WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::PersonNotFound(id));
    }
    Ok(())
}

pub fn load_person(conn: &Connection, id: i64) -> AppResult<Option<Person>> {
    let sql = format!("{SELECT_PEOPLE} WHERE id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// All people, ordered by name.
pub fn load_people(conn: &Connection) -> AppResult<Vec<Person>> {
    let sql = format!("{SELECT_PEOPLE} ORDER BY name COLLATE NOCASE ASC, id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn person_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM people WHERE id = ?1")?;
    Ok(stmt.exists([id])?)
}
