//! Conversation sessions.
//!
//! A `Session` holds the conversation log and the plugin registry, and runs
//! the bounded tool-call loop for every submitted user message.

mod chat;
mod manager;
mod store;
mod tool_call;
mod types;


pub use manager::Session;
pub use store::SessionStore;
pub use types::{SessionSettings, ToolFailure, DEFAULT_SYSTEM_PROMPT};
