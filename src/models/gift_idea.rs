use super::gift_status::GiftStatus;
use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftIdea {
    pub id: i64,
    pub person_id: i64,
    #[serde(default)]
    pub event_id: Option<i64>,
    pub idea: String,
    #[serde(default)]
    pub status: GiftStatus,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl GiftIdea {
    pub fn new(person_id: i64, idea: &str) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: 0,
            person_id,
            event_id: None,
            idea: idea.to_string(),
            status: GiftStatus::Idea,
            price: None,
            url: None,
            notes: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
