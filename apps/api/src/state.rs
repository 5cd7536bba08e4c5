use std::sync::Arc;

use crate::auth::AuthProvider;
use crate::store::PromptStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Prompt persistence. Default: PgPromptStore.
    pub store: Arc<dyn PromptStore>,
    /// Session lookup and sign-in/out. Default: SupabaseAuth.
    pub auth: Arc<dyn AuthProvider>,
}
