use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GiftStatus {
    #[default]
    Idea,
    Purchased,
    Given,
}

impl GiftStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            GiftStatus::Idea => "idea",
            GiftStatus::Purchased => "purchased",
            GiftStatus::Given => "given",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "idea" => Some(GiftStatus::Idea),
            "purchased" => Some(GiftStatus::Purchased),
            "given" => Some(GiftStatus::Given),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        GiftStatus::from_db_str(&code.trim().to_lowercase())
    }

    pub fn icon(&self) -> &'static str {
        match self {
            GiftStatus::Idea => "💡",
            GiftStatus::Purchased => "🛒",
            GiftStatus::Given => "🎁",
        }
    }
}
