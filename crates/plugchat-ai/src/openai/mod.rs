//! OpenAI-compatible Chat Completions gateway.
//!
//! Implements [`CompletionGateway`](crate::CompletionGateway) against the
//! `chat/completions` endpoint using the `functions` / `function_call`
//! request shape. Works with api.openai.com and Azure OpenAI deployments.

mod api;
mod client;
mod config;


pub use client::OpenAiClient;
pub use config::{Flavor, OpenAiConfig};
