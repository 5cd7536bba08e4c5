//! Persistence for prompts and generated prompts.
//!
//! Handlers only see [`PromptStore`]. Production uses [`PgPromptStore`].

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::generated::{GeneratedPromptDetail, GeneratedPromptRow};
use crate::models::prompt::{Category, PromptRow};

pub use postgres::PgPromptStore;

/// List filter. `query` matches titles case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct PromptFilter {
    pub query: Option<String>,
    pub category: Option<Category>,
}

#[derive(Debug, Clone)]
pub struct NewPrompt {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub user_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct PromptChanges {
    pub title: String,
    pub content: String,
    pub category: Category,
}

#[derive(Debug, Clone)]
pub struct NewGeneratedPrompt {
    pub prompt_id: Uuid,
    pub content: String,
    pub user_id: Uuid,
}

#[async_trait]
pub trait PromptStore: Send + Sync {
    /// Matching prompts, newest first.
    async fn list_prompts(&self, filter: &PromptFilter) -> Result<Vec<PromptRow>, AppError>;

    async fn get_prompt(&self, id: Uuid) -> Result<Option<PromptRow>, AppError>;

    async fn insert_prompt(&self, prompt: NewPrompt) -> Result<PromptRow, AppError>;

    /// Returns `None` when no prompt has this id.
    async fn update_prompt(
        &self,
        id: Uuid,
        changes: PromptChanges,
    ) -> Result<Option<PromptRow>, AppError>;

    async fn insert_generated(
        &self,
        generated: NewGeneratedPrompt,
    ) -> Result<GeneratedPromptRow, AppError>;

    async fn get_generated(&self, id: Uuid) -> Result<Option<GeneratedPromptDetail>, AppError>;

    /// A user's saved variants of one prompt, newest first.
    async fn list_generated(
        &self,
        prompt_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<GeneratedPromptRow>, AppError>;
}
