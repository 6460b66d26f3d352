pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/ai/followup", post(handlers::handle_followup))
        .route("/api/ai/email", post(handlers::handle_email))
        .with_state(state)
}
