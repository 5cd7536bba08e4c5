//! Axum route handlers for the Prompts API.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::generated::GeneratedPromptRow;
use crate::models::prompt::PromptRow;
use crate::parameters::{extract_parameters, fill_template, validate_values, Parameter};
use crate::prompts::stats::{tally, PromptStats};
use crate::prompts::validation::{parse_category_filter, validate_prompt_input, PromptInput};
use crate::state::AppState;
use crate::store::{NewPrompt, PromptChanges, PromptFilter};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PromptDetailResponse {
    #[serde(flatten)]
    pub prompt: PromptRow,
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Serialize)]
pub struct ParametersResponse {
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Deserialize)]
pub struct FillRequest {
    #[serde(default)]
    pub values: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct FillResponse {
    pub content: String,
    pub parameters: Vec<Parameter>,
}

pub(crate) async fn load_prompt(state: &AppState, id: Uuid) -> Result<PromptRow, AppError> {
    state
        .store
        .get_prompt(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Prompt {id} not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/prompts
///
/// `q` filters titles case-insensitively, `category` filters exactly.
pub async fn handle_list_prompts(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<PromptRow>>, AppError> {
    let filter = PromptFilter {
        query: params.q,
        category: parse_category_filter(params.category.as_deref())?,
    };
    Ok(Json(state.store.list_prompts(&filter).await?))
}

/// GET /api/prompts/stats
///
/// Tallies follow the text filter but ignore `category`, so every tab shows
/// the same overview.
pub async fn handle_prompt_stats(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<PromptStats>, AppError> {
    let filter = PromptFilter {
        query: params.q,
        category: None,
    };
    let prompts = state.store.list_prompts(&filter).await?;
    Ok(Json(tally(&prompts)))
}

/// POST /api/prompts
pub async fn handle_create_prompt(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<PromptInput>,
) -> Result<(StatusCode, Json<PromptDetailResponse>), AppError> {
    let valid = validate_prompt_input(input)?;
    let prompt = state
        .store
        .insert_prompt(NewPrompt {
            title: valid.title,
            content: valid.content,
            category: valid.category,
            user_id: auth.user.id,
        })
        .await?;

    info!(prompt_id = %prompt.id, user_id = %auth.user.id, "Prompt created");
    let parameters = extract_parameters(&prompt.content);
    Ok((
        StatusCode::CREATED,
        Json(PromptDetailResponse { prompt, parameters }),
    ))
}

/// GET /api/prompts/:id
pub async fn handle_get_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PromptDetailResponse>, AppError> {
    let prompt = load_prompt(&state, id).await?;
    let parameters = extract_parameters(&prompt.content);
    Ok(Json(PromptDetailResponse { prompt, parameters }))
}

/// PUT /api/prompts/:id
///
/// Only the owner may edit a prompt.
pub async fn handle_update_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    auth: AuthUser,
    Json(input): Json<PromptInput>,
) -> Result<Json<PromptDetailResponse>, AppError> {
    let existing = load_prompt(&state, id).await?;
    if existing.user_id != auth.user.id {
        warn!(prompt_id = %id, user_id = %auth.user.id, "Rejected edit by non-owner");
        return Err(AppError::Forbidden);
    }

    let valid = validate_prompt_input(input)?;
    let prompt = state
        .store
        .update_prompt(
            id,
            PromptChanges {
                title: valid.title,
                content: valid.content,
                category: valid.category,
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Prompt {id} not found")))?;

    let parameters = extract_parameters(&prompt.content);
    Ok(Json(PromptDetailResponse { prompt, parameters }))
}

/// GET /api/prompts/:id/parameters
pub async fn handle_get_parameters(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ParametersResponse>, AppError> {
    let prompt = load_prompt(&state, id).await?;
    Ok(Json(ParametersResponse {
        parameters: extract_parameters(&prompt.content),
    }))
}

/// POST /api/prompts/:id/fill
///
/// Substitutes the supplied values into the template. Missing values fall
/// back to the template defaults. Nothing is persisted.
pub async fn handle_fill_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FillRequest>,
) -> Result<Json<FillResponse>, AppError> {
    let prompt = load_prompt(&state, id).await?;
    let parameters = extract_parameters(&prompt.content);
    validate_values(&parameters, &request.values)?;

    let content = fill_template(&prompt.content, &request.values);
    Ok(Json(FillResponse {
        content,
        parameters,
    }))
}

/// GET /api/prompts/:id/generated
///
/// The caller's saved variants of this prompt, newest first.
pub async fn handle_list_generated(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    auth: AuthUser,
) -> Result<Json<Vec<GeneratedPromptRow>>, AppError> {
    load_prompt(&state, id).await?;
    Ok(Json(state.store.list_generated(id, auth.user.id).await?))
}
