use serde::{Deserialize, Serialize};

/// Classification of a calendar event. Only used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Holiday,
    Anniversary,
    SpecialOccasion,
    Birthday,
}

impl EventCategory {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventCategory::Holiday => "holiday",
            EventCategory::Anniversary => "anniversary",
            EventCategory::SpecialOccasion => "special_occasion",
            EventCategory::Birthday => "birthday",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "holiday" => Some(EventCategory::Holiday),
            "anniversary" => Some(EventCategory::Anniversary),
            "special_occasion" => Some(EventCategory::SpecialOccasion),
            "birthday" => Some(EventCategory::Birthday),
            _ => None,
        }
    }

    /// Parse a user-supplied category. `birthday` is reserved for the
    /// pseudo-events derived from people and cannot be stored.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "birthday" => None,
            other => EventCategory::from_db_str(other),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EventCategory::Holiday => "🎊",
            EventCategory::Anniversary => "❤️",
            EventCategory::SpecialOccasion => "🙂",
            EventCategory::Birthday => "🎂",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Holiday => "Holiday",
            EventCategory::Anniversary => "Anniversary",
            EventCategory::SpecialOccasion => "Special occasion",
            EventCategory::Birthday => "Birthday",
        }
    }
}
