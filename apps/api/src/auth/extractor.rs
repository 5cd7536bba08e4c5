use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

/// The authenticated caller. Handlers that take this extractor reject the
/// request with 401 before doing any other work.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    pub access_token: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AppError::Unauthorized)?;
        let user = state.auth.current_user(token).await?;
        tracing::debug!(user_id = %user.id, "Authenticated request");

        Ok(AuthUser {
            user,
            access_token: token.to_string(),
        })
    }
}

/// Extracts the token from `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}
