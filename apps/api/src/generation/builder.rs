//! Prompt Builder — turns (request kind, lead snapshot, raw prompt) into a
//! system instruction and user content. Pure string assembly: no I/O,
//! never fails, always produces non-empty output.

use crate::generation::prompts::{
    FOLLOWUP_CLOSING_INSTRUCTION, FOLLOWUP_SYSTEM_PROMPT, GENERIC_SYSTEM_PROMPT,
    LEAD_BLOCK_MARKERS,
};
use crate::generation::stage::{email_template, Stage};
use crate::models::lead::LeadSnapshot;

/// A fully assembled prompt pair, ready for the completion client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPrompt {
    pub system: String,
    pub user: String,
}

/// True if the prompt already carries an embedded lead block and must not
/// be enriched again.
pub fn contains_lead_block(prompt: &str) -> bool {
    LEAD_BLOCK_MARKERS.iter().any(|m| prompt.contains(m))
}

/// Builds the prompt pair for a follow-up advice request.
///
/// With a lead snapshot the raw prompt is replaced wholesale by a
/// structured profile block ending in the literal question plus a closing
/// instruction, under the enhanced advice persona. Without one, the prompt
/// passes through unmodified under the generic persona.
pub fn build_followup_prompt(prompt: &str, lead: Option<&LeadSnapshot>) -> BuiltPrompt {
    match lead {
        Some(lead) if !contains_lead_block(prompt) => BuiltPrompt {
            system: FOLLOWUP_SYSTEM_PROMPT.to_string(),
            user: format!(
                "{}\n\nFOLLOW-UP QUESTION: {}\n\n{}",
                lead_profile_block(lead),
                prompt,
                FOLLOWUP_CLOSING_INSTRUCTION
            ),
        },
        // Already-enriched prompt: keep the advice persona, skip re-injection
        Some(_) => BuiltPrompt {
            system: FOLLOWUP_SYSTEM_PROMPT.to_string(),
            user: prompt.to_string(),
        },
        None => BuiltPrompt {
            system: GENERIC_SYSTEM_PROMPT.to_string(),
            user: prompt.to_string(),
        },
    }
}

/// Builds the prompt pair for a stage email request. Dispatches on the
/// lead's status; the generic persona is used for all email generation.
pub fn build_stage_email_prompt(lead: &LeadSnapshot) -> BuiltPrompt {
    let stage = Stage::parse(&lead.status);
    BuiltPrompt {
        system: GENERIC_SYSTEM_PROMPT.to_string(),
        user: email_template(stage).replace("{lead_context}", &lead_details_block(lead)),
    }
}

/// The enriched profile block for follow-up advice. Interpolates every
/// snapshot field with its documented default.
fn lead_profile_block(lead: &LeadSnapshot) -> String {
    format!(
        "LEAD PROFILE:\n\
         - Name: {name}\n\
         - Company: {company}\n\
         - Email: {email}\n\
         - Current Status: {status}\n\
         - Lead Score: {score}/100\n\
         - Potential Deal Value: ${value}\n\
         - Tags: {tags}\n\
         - Last Contact: {last_contact}\n\
         - Next Scheduled Follow-up: {next_follow_up}\n\
         \n\
         Additional Notes: {notes}",
        name = lead.name,
        company = lead.company,
        email = lead.email,
        status = lead.status,
        score = lead.score,
        value = lead.value,
        tags = lead.tags_joined(),
        last_contact = lead.last_contact_text(),
        next_follow_up = lead.next_follow_up_text(),
        notes = lead.notes,
    )
}

/// The shared context block interpolated into every email template.
fn lead_details_block(lead: &LeadSnapshot) -> String {
    format!(
        "Lead Details:\n\
         - Name: {name}\n\
         - Company: {company}\n\
         - Email: {email}\n\
         - Status: {status}\n\
         - Score: {score} out of 100\n\
         - Potential Deal Value: ${value}\n\
         - Tags: {tags}\n\
         - Last Contact: {last_contact}",
        name = lead.name,
        company = lead.company,
        email = lead.email,
        status = lead.status,
        score = lead.score,
        value = lead.value,
        tags = lead.tags_joined(),
        last_contact = lead.last_contact_text(),
    )
}
