/// Completion client — the single point of entry for all provider calls.
///
/// ARCHITECTURAL RULE: No other module may call the chat-completion API
/// directly. All generation MUST go through this module.
///
/// Model, token budget, and temperature are intentionally hardcoded: every
/// request is built fresh with the same parameters, so two calls differ
/// only in their system instruction and user content.
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// The model used for all completion calls.
pub const MODEL: &str = "meta-llama/Meta-Llama-3.1-70B-Instruct";
const MAX_TOKENS: u32 = 1200;
const TEMPERATURE: f64 = 0.7;
const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Outcome of a single completion attempt.
///
/// Provider failures are carried as content — the HTTP layer serializes
/// either arm's text into the response body — but the tag forces any other
/// consumer to check explicitly before treating the text as a usable
/// completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    Success(String),
    Failure(String),
}

impl CompletionResult {
    pub fn text(&self) -> &str {
        match self {
            CompletionResult::Success(s) | CompletionResult::Failure(s) => s,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            CompletionResult::Success(s) | CompletionResult::Failure(s) => s,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, CompletionResult::Failure(_))
    }
}

/// The single completion client shared by all handlers.
///
/// One best-effort attempt per call: no retry, no backoff, no timeout
/// override beyond the HTTP client's default. Every failure mode is
/// normalized into `CompletionResult::Failure`; nothing propagates past
/// this boundary.
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl CompletionClient {
    /// `base_url` is the provider origin (e.g. `https://api.together.xyz`);
    /// injectable so tests can point at a local mock server.
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Makes exactly one call to the chat-completions endpoint with a
    /// two-message conversation (system, then user) and extracts the
    /// generated text.
    pub async fn complete(&self, system: &str, user: &str) -> CompletionResult {
        let request_body = CompletionRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let url = format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH);

        let response = match self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(r) => r,
            Err(e) => {
                warn!("Completion request failed: {e}");
                return CompletionResult::Failure(format!("Error connecting to AI service: {e}"));
            }
        };

        let raw = match response.text().await {
            Ok(t) => t,
            Err(e) => {
                warn!("Failed to read completion response body: {e}");
                return CompletionResult::Failure(format!("Error connecting to AI service: {e}"));
            }
        };

        let parsed: Value = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => {
                warn!("Completion response was not valid JSON: {e}");
                return CompletionResult::Failure("Error parsing API response".to_string());
            }
        };

        match parsed
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
        {
            Some(content) => {
                debug!("Completion succeeded ({} chars)", content.len());
                CompletionResult::Success(content.to_string())
            }
            None => {
                warn!("Completion response missing choices[0].message.content");
                CompletionResult::Failure("Unexpected response format from API".to_string())
            }
        }
    }
}
