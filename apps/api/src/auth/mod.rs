//! Session authentication.
//!
//! Accounts and sessions live in a hosted auth service. The API only forwards
//! credentials and resolves bearer tokens to users through [`AuthProvider`],
//! which `AppState` carries as `Arc<dyn AuthProvider>`.

pub mod extractor;
pub mod handlers;
pub mod supabase;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::user::User;

pub use extractor::AuthUser;
pub use supabase::SupabaseAuth;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The token is missing, expired, or was revoked.
    #[error("Session rejected")]
    Rejected,

    #[error("{0}")]
    InvalidCredentials(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

/// Sign-up either opens a session right away or, when the service requires
/// email confirmation, only creates the user.
#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponse {
    pub user: User,
    pub session: Option<Session>,
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpResponse, AuthError>;

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    /// Resolves an access token to its user. Fails with `Rejected` when the
    /// token is not valid.
    async fn current_user(&self, access_token: &str) -> Result<User, AuthError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
}
