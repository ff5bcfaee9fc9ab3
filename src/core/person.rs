use crate::db::log::write_log_or_warn;
use crate::db::pool::DbPool;
use crate::db::people;
use crate::errors::{AppError, AppResult};
use crate::models::person::Person;
use crate::models::relationship::Relationship;
use crate::utils::date::normalize_date;
use chrono::Local;

/// Partial update of a person. `None` leaves a field untouched; an empty
/// string clears an optional text field.
#[derive(Debug, Default, Clone)]
pub struct PersonChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub relationship: Option<String>,
    pub birthday: Option<String>,
    pub notes: Option<String>,
}

impl PersonChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.relationship.is_none()
            && self.birthday.is_none()
            && self.notes.is_none()
    }
}

fn clearable(value: &str) -> Option<String> {
    let v = value.trim();
    (!v.is_empty()).then(|| v.to_string())
}

fn parse_relationship(code: &str) -> AppResult<Option<Relationship>> {
    if code.trim().is_empty() {
        return Ok(None);
    }
    Relationship::from_code(code)
        .map(Some)
        .ok_or_else(|| AppError::InvalidRelationship(code.to_string()))
}

fn parse_birthday(raw: &str) -> AppResult<Option<String>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    normalize_date(raw).map(Some)
}

fn validate_name(name: &str) -> AppResult<String> {
    let n = name.trim();
    if n.is_empty() {
        return Err(AppError::Validation("Name must not be empty".to_string()));
    }
    Ok(n.to_string())
}

pub struct PersonLogic;

impl PersonLogic {
    pub fn add(pool: &mut DbPool, name: &str, details: PersonChanges) -> AppResult<Person> {
        let mut person = Person::new(&validate_name(name)?);
        person.email = details.email.as_deref().and_then(clearable);
        person.notes = details.notes.as_deref().and_then(clearable);
        if let Some(code) = &details.relationship {
            person.relationship = parse_relationship(code)?;
        }
        if let Some(b) = &details.birthday {
            person.birthday = parse_birthday(b)?;
        }

        person.id = people::insert_person(&pool.conn, &person)?;

        write_log_or_warn(
            &pool.conn,
            "add_person",
            &person.id.to_string(),
            &format!("Added person '{}'", person.name),
        );

        Ok(person)
    }

    pub fn edit(pool: &mut DbPool, id: i64, changes: PersonChanges) -> AppResult<Person> {
        if changes.is_empty() {
            return Err(AppError::Validation("Nothing to update".to_string()));
        }

        let mut person = people::load_person(&pool.conn, id)?.ok_or(AppError::PersonNotFound(id))?;

        if let Some(name) = &changes.name {
            person.name = validate_name(name)?;
        }
        if let Some(email) = &changes.email {
            person.email = clearable(email);
        }
        if let Some(code) = &changes.relationship {
            person.relationship = parse_relationship(code)?;
        }
        if let Some(b) = &changes.birthday {
            person.birthday = parse_birthday(b)?;
        }
        if let Some(notes) = &changes.notes {
            person.notes = clearable(notes);
        }
        person.updated_at = Local::now().to_rfc3339();

        people::update_person(&pool.conn, &person)?;

        write_log_or_warn(
            &pool.conn,
            "edit_person",
            &id.to_string(),
            &format!("Updated person '{}'", person.name),
        );

        Ok(person)
    }

    /// Delete a person together with their gift ideas.
    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<Person> {
        let person = people::load_person(&pool.conn, id)?.ok_or(AppError::PersonNotFound(id))?;
        people::delete_person(&pool.conn, id)?;

        write_log_or_warn(
            &pool.conn,
            "del_person",
            &id.to_string(),
            &format!("Deleted person '{}'", person.name),
        );

        Ok(person)
    }
}
