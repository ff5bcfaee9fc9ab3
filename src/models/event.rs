use super::category::EventCategory;
use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    /// Raw date text (⇔ events.event_date). May be missing or malformed
    /// when it comes from an import; the recurrence engine decides.
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub event_type: Option<EventCategory>,
    /// `None` means recurring.
    #[serde(default)]
    pub recurring: Option<bool>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Event {
    pub fn new(name: &str, event_date: &str) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: 0,
            name: name.to_string(),
            event_date: Some(event_date.to_string()),
            description: None,
            event_type: None,
            recurring: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.recurring.unwrap_or(true)
    }
}
