//! Lead-Assist AI API library.
//!
//! A stateless HTTP backend that turns sales-lead context and user
//! questions into prompts for a hosted chat-completion provider and
//! returns the generated text (follow-up advice or stage emails).
//!
//! # Modules
//!
//! - `config`: Configuration loaded from environment variables.
//! - `errors`: Application error type with Axum response mapping.
//! - `generation`: Prompt construction and the two AI endpoints.
//! - `llm_client`: The single entry point for completion API calls.
//! - `models`: Request data models (the lead snapshot).
//! - `routes`: Router assembly.
//! - `state`: Shared application state.

pub mod config;
pub mod errors;
pub mod generation;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;
