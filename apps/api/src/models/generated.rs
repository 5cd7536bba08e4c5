use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A saved, parameter-filled instance of a prompt. Never updated after insert.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GeneratedPromptRow {
    pub id: Uuid,
    pub prompt_id: Uuid,
    pub content: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Parent prompt fields shown alongside a generated prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ParentPrompt {
    pub title: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPromptDetail {
    #[serde(flatten)]
    pub generated: GeneratedPromptRow,
    pub prompt: ParentPrompt,
}

/// Flat row produced by the generated_prompts ⋈ prompts join.
#[derive(Debug, Clone, FromRow)]
pub struct GeneratedPromptJoinRow {
    pub id: Uuid,
    pub prompt_id: Uuid,
    pub content: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub prompt_title: String,
    pub prompt_category: String,
}

impl From<GeneratedPromptJoinRow> for GeneratedPromptDetail {
    fn from(row: GeneratedPromptJoinRow) -> Self {
        GeneratedPromptDetail {
            generated: GeneratedPromptRow {
                id: row.id,
                prompt_id: row.prompt_id,
                content: row.content,
                user_id: row.user_id,
                created_at: row.created_at,
            },
            prompt: ParentPrompt {
                title: row.prompt_title,
                category: row.prompt_category,
            },
        }
    }
}
