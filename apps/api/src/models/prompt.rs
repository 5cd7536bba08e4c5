use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PromptRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// The fixed set of prompt categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Creative,
    Technical,
    Marketing,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Creative,
        Category::Technical,
        Category::Marketing,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Creative => "creative",
            Category::Technical => "technical",
            Category::Marketing => "marketing",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| {
                format!("Unknown category '{s}'. Expected one of: creative, technical, marketing, other")
            })
    }
}
