//! Chat assistant backed by a third-party language model API
//!
//! The service forwards the conversation to an OpenAI-compatible
//! chat-completions endpoint with a fixed system prompt about the club
//! site, and re-streams the model's reply to the client as server-sent
//! events. Nothing is persisted.

mod handler;
mod plugin;
mod prompt;
mod service;

pub mod types;

pub use handler::{configure_routes, AssistantApiDoc, AppState};
pub use plugin::AssistantPlugin;
pub use service::{AssistantConfig, AssistantError, AssistantService};
