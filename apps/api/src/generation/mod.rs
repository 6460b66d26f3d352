//! Prompt construction for the two request kinds: free-form follow-up
//! advice and stage-specific outreach emails.

pub mod builder;
pub mod handlers;
pub mod prompts;
pub mod stage;
