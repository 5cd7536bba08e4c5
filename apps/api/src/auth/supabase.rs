use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{AuthError, AuthProvider, Credentials, Session, SignUpResponse};
use crate::models::user::User;

const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Client for a Supabase (GoTrue) auth endpoint.
#[derive(Clone)]
pub struct SupabaseAuth {
    client: Client,
    base_url: String,
    anon_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpBody {
    Session(Session),
    User(User),
}

/// GoTrue reports errors under different field names depending on the endpoint.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
    }
}

/// Prefers the service's own message, then the status reason phrase.
fn error_message(status: StatusCode, body: Option<ErrorBody>) -> String {
    body.and_then(ErrorBody::into_message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string())
}

/// Maps a non-success auth service status to an `AuthError`.
fn error_for_status(status: StatusCode, message: String) -> AuthError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AuthError::Rejected,
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            AuthError::InvalidCredentials(message)
        }
        _ => {
            warn!("Auth service error {status}: {message}");
            AuthError::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}

impl SupabaseAuth {
    pub fn new(project_url: &str, anon_key: String) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: format!("{}/auth/v1", project_url.trim_end_matches('/')),
            anon_key,
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header("apikey", &self.anon_key)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AuthError> {
        let response = request.send().await?;
        let status = response.status();
        debug!("Auth service responded with {status}");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.json::<ErrorBody>().await.ok();
        Err(error_for_status(status, error_message(status, body)))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AuthError> {
        response
            .json::<T>()
            .await
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuth {
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpResponse, AuthError> {
        let request = self
            .request(reqwest::Method::POST, "/signup")
            .json(&serde_json::json!({
                "email": credentials.email,
                "password": credentials.password,
            }));
        let body: SignUpBody = Self::decode(self.send(request).await?).await?;

        Ok(match body {
            SignUpBody::Session(session) => SignUpResponse {
                user: session.user.clone(),
                session: Some(session),
            },
            SignUpBody::User(user) => SignUpResponse {
                user,
                session: None,
            },
        })
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let request = self
            .request(reqwest::Method::POST, "/token?grant_type=password")
            .json(&serde_json::json!({
                "email": credentials.email,
                "password": credentials.password,
            }));
        Self::decode(self.send(request).await?).await
    }

    async fn current_user(&self, access_token: &str) -> Result<User, AuthError> {
        let request = self
            .request(reqwest::Method::GET, "/user")
            .bearer_auth(access_token);
        Self::decode(self.send(request).await?).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let request = self
            .request(reqwest::Method::POST, "/logout")
            .bearer_auth(access_token);
        self.send(request).await?;
        Ok(())
    }
}
