use crate::db::log::write_log_or_warn;
use crate::db::pool::DbPool;
use crate::db::{events, gift_ideas, people};
use crate::errors::{AppError, AppResult};
use crate::models::gift_idea::GiftIdea;
use crate::models::gift_status::GiftStatus;
use chrono::Local;

/// Fields of a gift idea given on the command line. On edit, `None` leaves
/// a field untouched and an empty string clears it.
#[derive(Debug, Default, Clone)]
pub struct GiftChanges {
    pub person_id: Option<i64>,
    pub idea: Option<String>,
    /// `Some(None)` detaches the gift from its event.
    pub event_id: Option<Option<i64>>,
    pub status: Option<String>,
    pub price: Option<f64>,
    pub url: Option<String>,
    pub notes: Option<String>,
}

impl GiftChanges {
    pub fn is_empty(&self) -> bool {
        self.person_id.is_none()
            && self.idea.is_none()
            && self.event_id.is_none()
            && self.status.is_none()
            && self.price.is_none()
            && self.url.is_none()
            && self.notes.is_none()
    }
}

fn clearable(value: &str) -> Option<String> {
    let v = value.trim();
    (!v.is_empty()).then(|| v.to_string())
}

fn parse_status(code: &str) -> AppResult<GiftStatus> {
    GiftStatus::from_code(code).ok_or_else(|| AppError::InvalidStatus(code.to_string()))
}

fn validate_price(price: f64) -> AppResult<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::Validation(format!(
            "Price must be a non-negative number, got {price}"
        )));
    }
    Ok(price)
}

fn check_person(pool: &DbPool, id: i64) -> AppResult<()> {
    if !people::person_exists(&pool.conn, id)? {
        return Err(AppError::PersonNotFound(id));
    }
    Ok(())
}

fn check_event(pool: &DbPool, id: Option<i64>) -> AppResult<()> {
    if let Some(id) = id
        && !events::event_exists(&pool.conn, id)?
    {
        return Err(AppError::EventNotFound(id));
    }
    Ok(())
}

fn apply(gift: &mut GiftIdea, changes: &GiftChanges) -> AppResult<()> {
    if let Some(pid) = changes.person_id {
        gift.person_id = pid;
    }
    if let Some(idea) = &changes.idea {
        gift.idea = clearable(idea)
            .ok_or_else(|| AppError::Validation("Gift idea must not be empty".to_string()))?;
    }
    if let Some(event_id) = changes.event_id {
        gift.event_id = event_id;
    }
    if let Some(code) = &changes.status {
        gift.status = parse_status(code)?;
    }
    if let Some(price) = changes.price {
        gift.price = Some(validate_price(price)?);
    }
    if let Some(url) = &changes.url {
        gift.url = clearable(url);
    }
    if let Some(notes) = &changes.notes {
        gift.notes = clearable(notes);
    }
    Ok(())
}

pub struct GiftLogic;

impl GiftLogic {
    pub fn add(pool: &mut DbPool, person_id: i64, idea: &str, details: GiftChanges) -> AppResult<GiftIdea> {
        check_person(pool, person_id)?;
        check_event(pool, details.event_id.flatten())?;

        let mut gift = GiftIdea::new(person_id, "");
        apply(
            &mut gift,
            &GiftChanges {
                person_id: None,
                idea: Some(idea.to_string()),
                ..details
            },
        )?;

        gift.id = gift_ideas::insert_gift_idea(&pool.conn, &gift)?;

        write_log_or_warn(
            &pool.conn,
            "add_gift",
            &gift.id.to_string(),
            &format!("Added gift idea '{}' for person #{}", gift.idea, person_id),
        );

        Ok(gift)
    }

    pub fn edit(pool: &mut DbPool, id: i64, changes: GiftChanges) -> AppResult<GiftIdea> {
        if changes.is_empty() {
            return Err(AppError::Validation("Nothing to update".to_string()));
        }

        let mut gift =
            gift_ideas::load_gift_idea(&pool.conn, id)?.ok_or(AppError::GiftIdeaNotFound(id))?;

        if let Some(pid) = changes.person_id {
            check_person(pool, pid)?;
        }
        check_event(pool, changes.event_id.flatten())?;

        apply(&mut gift, &changes)?;
        gift.updated_at = Local::now().to_rfc3339();

        gift_ideas::update_gift_idea(&pool.conn, &gift)?;

        write_log_or_warn(
            &pool.conn,
            "edit_gift",
            &id.to_string(),
            &format!("Updated gift idea '{}'", gift.idea),
        );

        Ok(gift)
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<GiftIdea> {
        let gift =
            gift_ideas::load_gift_idea(&pool.conn, id)?.ok_or(AppError::GiftIdeaNotFound(id))?;
        gift_ideas::delete_gift_idea(&pool.conn, id)?;

        write_log_or_warn(
            &pool.conn,
            "del_gift",
            &id.to_string(),
            &format!("Deleted gift idea '{}'", gift.idea),
        );

        Ok(gift)
    }
}
