use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;
use crate::parameters::ParameterError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Auth service error: {0}")]
    Auth(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Rejected => AppError::Unauthorized,
            AuthError::InvalidCredentials(msg) => AppError::Validation(msg),
            other => AppError::Auth(other.to_string()),
        }
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Access denied".to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Auth(msg) => {
                tracing::error!("Auth service error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "AUTH_SERVICE_ERROR",
                    "The authentication service is unavailable".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("x".into()).parts().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("x".into()).parts().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Unauthorized.parts().0, StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Forbidden.parts().0, StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::Auth("down".into()).parts().0,
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_internal_details_are_not_exposed() {
        let (_, code, message) = AppError::Auth("connection refused at 10.0.0.1".into()).parts();
        assert_eq!(code, "AUTH_SERVICE_ERROR");
        assert!(!message.contains("10.0.0.1"));
    }

    #[test]
    fn test_auth_service_failure_maps_to_bad_gateway() {
        let err = AppError::from(AuthError::Api {
            status: 503,
            message: "down".into(),
        });
        assert!(matches!(err, AppError::Auth(_)));
        assert_eq!(err.parts().0, StatusCode::BAD_GATEWAY);

        let err = AppError::from(AuthError::InvalidCredentials("Invalid login credentials".into()));
        assert_eq!(err.parts().0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_rejected_session_maps_to_unauthorized() {
        assert!(matches!(
            AppError::from(AuthError::Rejected),
            AppError::Unauthorized
        ));
    }
}
