use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use super::{AuthUser, Credentials, Session, SignUpResponse};
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

fn validate_credentials(credentials: &Credentials) -> Result<(), AppError> {
    let email = credentials.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("A valid email is required".to_string()));
    }
    if credentials.password.is_empty() {
        return Err(AppError::Validation("password cannot be empty".to_string()));
    }
    Ok(())
}

/// POST /api/auth/sign-up
pub async fn handle_sign_up(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<(StatusCode, Json<SignUpResponse>), AppError> {
    validate_credentials(&credentials)?;
    let response = state.auth.sign_up(&credentials).await?;
    info!(user_id = %response.user.id, "User signed up");
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/sign-in
pub async fn handle_sign_in(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<Session>, AppError> {
    validate_credentials(&credentials)?;
    let session = state.auth.sign_in(&credentials).await?;
    info!(user_id = %session.user.id, "User signed in");
    Ok(Json(session))
}

/// POST /api/auth/sign-out
pub async fn handle_sign_out(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<StatusCode, AppError> {
    state.auth.sign_out(&auth.access_token).await?;
    info!(user_id = %auth.user.id, "User signed out");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user
pub async fn handle_current_user(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}
