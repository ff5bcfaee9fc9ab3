use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Family,
    Friend,
    Coworker,
    Other,
}

impl Relationship {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Relationship::Family => "family",
            Relationship::Friend => "friend",
            Relationship::Coworker => "coworker",
            Relationship::Other => "other",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "family" => Some(Relationship::Family),
            "friend" => Some(Relationship::Friend),
            "coworker" => Some(Relationship::Coworker),
            "other" => Some(Relationship::Other),
            _ => None,
        }
    }

    /// Helper: convert input from CLI (any case)
    pub fn from_code(code: &str) -> Option<Self> {
        Relationship::from_db_str(&code.trim().to_lowercase())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Relationship::Family => "Family",
            Relationship::Friend => "Friend",
            Relationship::Coworker => "Coworker",
            Relationship::Other => "Other",
        }
    }
}
