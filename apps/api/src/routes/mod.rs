pub mod health;


use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::generated::handlers as generated;
use crate::prompts::handlers as prompts;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/auth/sign-up", post(auth::handle_sign_up))
        .route("/api/auth/sign-in", post(auth::handle_sign_in))
        .route("/api/auth/sign-out", post(auth::handle_sign_out))
        .route("/api/auth/user", get(auth::handle_current_user))
        // Prompts
        .route(
            "/api/prompts",
            get(prompts::handle_list_prompts).post(prompts::handle_create_prompt),
        )
        .route("/api/prompts/stats", get(prompts::handle_prompt_stats))
        .route(
            "/api/prompts/:id",
            get(prompts::handle_get_prompt).put(prompts::handle_update_prompt),
        )
        .route(
            "/api/prompts/:id/parameters",
            get(prompts::handle_get_parameters),
        )
        .route("/api/prompts/:id/fill", post(prompts::handle_fill_prompt))
        .route(
            "/api/prompts/:id/generated",
            get(prompts::handle_list_generated),
        )
        // Generated prompts
        .route(
            "/api/generated-prompts",
            post(generated::handle_save_generated),
        )
        .route(
            "/api/generated-prompts/:id",
            get(generated::handle_get_generated),
        )
        .with_state(state)
}
