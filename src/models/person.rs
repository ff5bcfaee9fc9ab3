use super::relationship::Relationship;
use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub relationship: Option<Relationship>,
    /// Stored verbatim; only month and day are meaningful.
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Person {
    /// Build a person that has not been stored yet (`id = 0`).
    pub fn new(name: &str) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: 0,
            name: name.to_string(),
            email: None,
            relationship: None,
            birthday: None,
            notes: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn has_birthday(&self) -> bool {
        self.birthday
            .as_deref()
            .is_some_and(|b| !b.trim().is_empty())
    }
}
