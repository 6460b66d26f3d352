use crate::config::Config;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub llm: CompletionClient,
    pub config: Config,
}
