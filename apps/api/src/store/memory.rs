//! In-memory `PromptStore` used by router tests.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NewGeneratedPrompt, NewPrompt, PromptChanges, PromptFilter, PromptStore};
use crate::errors::AppError;
use crate::models::generated::{GeneratedPromptDetail, GeneratedPromptRow, ParentPrompt};
use crate::models::prompt::PromptRow;

#[derive(Default)]
pub struct MemoryPromptStore {
    prompts: RwLock<Vec<PromptRow>>,
    generated: RwLock<Vec<GeneratedPromptRow>>,
}

impl MemoryPromptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strictly increasing timestamps so newest-first ordering is deterministic.
    fn next_timestamp(len: usize) -> chrono::DateTime<Utc> {
        Utc::now() + Duration::milliseconds(len as i64)
    }
}

#[async_trait]
impl PromptStore for MemoryPromptStore {
    async fn list_prompts(&self, filter: &PromptFilter) -> Result<Vec<PromptRow>, AppError> {
        let query = filter
            .query
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());

        let mut rows: Vec<PromptRow> = self
            .prompts
            .read()
            .await
            .iter()
            .filter(|p| {
                query
                    .as_deref()
                    .map_or(true, |q| p.title.to_lowercase().contains(q))
            })
            .filter(|p| filter.category.map_or(true, |c| p.category == c.as_str()))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn get_prompt(&self, id: Uuid) -> Result<Option<PromptRow>, AppError> {
        Ok(self.prompts.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_prompt(&self, prompt: NewPrompt) -> Result<PromptRow, AppError> {
        let mut prompts = self.prompts.write().await;
        let row = PromptRow {
            id: Uuid::new_v4(),
            title: prompt.title,
            content: prompt.content,
            category: prompt.category.as_str().to_string(),
            user_id: prompt.user_id,
            created_at: Self::next_timestamp(prompts.len()),
        };
        prompts.push(row.clone());
        Ok(row)
    }

    async fn update_prompt(
        &self,
        id: Uuid,
        changes: PromptChanges,
    ) -> Result<Option<PromptRow>, AppError> {
        let mut prompts = self.prompts.write().await;
        Ok(prompts.iter_mut().find(|p| p.id == id).map(|p| {
            p.title = changes.title;
            p.content = changes.content;
            p.category = changes.category.as_str().to_string();
            p.clone()
        }))
    }

    async fn insert_generated(
        &self,
        generated: NewGeneratedPrompt,
    ) -> Result<GeneratedPromptRow, AppError> {
        let mut rows = self.generated.write().await;
        let row = GeneratedPromptRow {
            id: Uuid::new_v4(),
            prompt_id: generated.prompt_id,
            content: generated.content,
            user_id: generated.user_id,
            created_at: Self::next_timestamp(rows.len()),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn get_generated(&self, id: Uuid) -> Result<Option<GeneratedPromptDetail>, AppError> {
        let Some(generated) = self
            .generated
            .read()
            .await
            .iter()
            .find(|g| g.id == id)
            .cloned()
        else {
            return Ok(None);
        };
        let parent = self.get_prompt(generated.prompt_id).await?;
        Ok(parent.map(|p| GeneratedPromptDetail {
            generated,
            prompt: ParentPrompt {
                title: p.title,
                category: p.category,
            },
        }))
    }

    async fn list_generated(
        &self,
        prompt_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<GeneratedPromptRow>, AppError> {
        let mut rows: Vec<GeneratedPromptRow> = self
            .generated
            .read()
            .await
            .iter()
            .filter(|g| g.prompt_id == prompt_id && g.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}
