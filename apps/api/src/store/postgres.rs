use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::{NewGeneratedPrompt, NewPrompt, PromptChanges, PromptFilter, PromptStore};
use crate::errors::AppError;
use crate::models::generated::{GeneratedPromptDetail, GeneratedPromptJoinRow, GeneratedPromptRow};
use crate::models::prompt::PromptRow;

#[derive(Clone)]
pub struct PgPromptStore {
    pool: PgPool,
}

impl PgPromptStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Builds an ILIKE pattern that matches `query` literally anywhere in the column.
fn contains_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl PromptStore for PgPromptStore {
    async fn list_prompts(&self, filter: &PromptFilter) -> Result<Vec<PromptRow>, AppError> {
        let pattern = filter
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(contains_pattern);
        let category = filter.category.map(|c| c.as_str());

        Ok(sqlx::query_as::<_, PromptRow>(
            r#"
            SELECT * FROM prompts
            WHERE ($1::TEXT IS NULL OR title ILIKE $1)
              AND ($2::TEXT IS NULL OR category = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(pattern)
        .bind(category)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get_prompt(&self, id: Uuid) -> Result<Option<PromptRow>, AppError> {
        Ok(
            sqlx::query_as::<_, PromptRow>("SELECT * FROM prompts WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn insert_prompt(&self, prompt: NewPrompt) -> Result<PromptRow, AppError> {
        let row = sqlx::query_as::<_, PromptRow>(
            r#"
            INSERT INTO prompts (id, title, content, category, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&prompt.title)
        .bind(&prompt.content)
        .bind(prompt.category.as_str())
        .bind(prompt.user_id)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted prompt {} for user {}", row.id, row.user_id);
        Ok(row)
    }

    async fn update_prompt(
        &self,
        id: Uuid,
        changes: PromptChanges,
    ) -> Result<Option<PromptRow>, AppError> {
        let row = sqlx::query_as::<_, PromptRow>(
            r#"
            UPDATE prompts
            SET title = $2, content = $3, category = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.content)
        .bind(changes.category.as_str())
        .fetch_optional(&self.pool)
        .await?;

        if row.is_some() {
            info!("Updated prompt {id}");
        }
        Ok(row)
    }

    async fn insert_generated(
        &self,
        generated: NewGeneratedPrompt,
    ) -> Result<GeneratedPromptRow, AppError> {
        let row = sqlx::query_as::<_, GeneratedPromptRow>(
            r#"
            INSERT INTO generated_prompts (id, prompt_id, content, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(generated.prompt_id)
        .bind(&generated.content)
        .bind(generated.user_id)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Inserted generated prompt {} from prompt {} for user {}",
            row.id, row.prompt_id, row.user_id
        );
        Ok(row)
    }

    async fn get_generated(&self, id: Uuid) -> Result<Option<GeneratedPromptDetail>, AppError> {
        let row = sqlx::query_as::<_, GeneratedPromptJoinRow>(
            r#"
            SELECT g.id, g.prompt_id, g.content, g.user_id, g.created_at,
                   p.title AS prompt_title, p.category AS prompt_category
            FROM generated_prompts g
            JOIN prompts p ON p.id = g.prompt_id
            WHERE g.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(GeneratedPromptDetail::from))
    }

    async fn list_generated(
        &self,
        prompt_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<GeneratedPromptRow>, AppError> {
        Ok(sqlx::query_as::<_, GeneratedPromptRow>(
            r#"
            SELECT * FROM generated_prompts
            WHERE prompt_id = $1 AND user_id = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(prompt_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("rust"), "%rust%");
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("snake_case"), "%snake\\_case%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
