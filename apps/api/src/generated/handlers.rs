use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::generated::{GeneratedPromptDetail, GeneratedPromptRow};
use crate::prompts::handlers::load_prompt;
use crate::state::AppState;
use crate::store::NewGeneratedPrompt;

#[derive(Debug, Deserialize)]
pub struct SaveGeneratedRequest {
    pub prompt_id: Uuid,
    pub content: String,
}

/// POST /api/generated-prompts
///
/// Saves a filled-in variant for the signed-in user. The parent prompt must exist.
pub async fn handle_save_generated(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<SaveGeneratedRequest>,
) -> Result<(StatusCode, Json<GeneratedPromptRow>), AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    load_prompt(&state, request.prompt_id).await?;

    let row = state
        .store
        .insert_generated(NewGeneratedPrompt {
            prompt_id: request.prompt_id,
            content: request.content,
            user_id: auth.user.id,
        })
        .await?;

    info!(generated_id = %row.id, prompt_id = %row.prompt_id, "Generated prompt saved");
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/generated-prompts/:id
pub async fn handle_get_generated(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GeneratedPromptDetail>, AppError> {
    let detail = state
        .store
        .get_generated(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Generated prompt {id} not found")))?;
    Ok(Json(detail))
}
