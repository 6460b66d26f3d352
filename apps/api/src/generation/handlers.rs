use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::generation::builder::{build_followup_prompt, build_stage_email_prompt};
use crate::models::lead::LeadSnapshot;
use crate::state::AppState;

/// Both fields optional at the wire level so a missing `prompt` yields the
/// contractual 400 body instead of a deserialization rejection.
#[derive(Deserialize)]
pub struct FollowupRequest {
    pub prompt: Option<String>,
    pub lead: Option<LeadSnapshot>,
}

#[derive(Deserialize)]
pub struct EmailRequest {
    pub lead: Option<LeadSnapshot>,
}

#[derive(Serialize)]
pub struct AiResponse {
    pub response: String,
}

/// POST /api/ai/followup
///
/// Returns 200 with the completion text for any well-formed request, even
/// when the provider call failed (errors become content).
pub async fn handle_followup(
    State(state): State<AppState>,
    Json(req): Json<FollowupRequest>,
) -> Result<Json<AiResponse>, AppError> {
    let prompt = req
        .prompt
        .ok_or(AppError::Validation("Missing prompt parameter"))?;

    let built = build_followup_prompt(&prompt, req.lead.as_ref());
    let result = state.llm.complete(&built.system, &built.user).await;
    if result.is_failure() {
        warn!("Follow-up generation failed: {}", result.text());
    }

    Ok(Json(AiResponse {
        response: result.into_text(),
    }))
}

/// POST /api/ai/email
pub async fn handle_email(
    State(state): State<AppState>,
    Json(req): Json<EmailRequest>,
) -> Result<Json<AiResponse>, AppError> {
    let lead = req.lead.ok_or(AppError::Validation("Missing lead data"))?;

    let built = build_stage_email_prompt(&lead);
    let result = state.llm.complete(&built.system, &built.user).await;
    if result.is_failure() {
        warn!("Email generation failed: {}", result.text());
    }

    Ok(Json(AiResponse {
        response: result.into_text(),
    }))
}
