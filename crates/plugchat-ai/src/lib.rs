//! Conversation engine for Plugchat.
//!
//! Provides the tool-calling chat loop:
//! - Conversation log with a fixed instructional preamble
//! - Plugin trait, registry, and built-in REST / web page plugins
//! - OpenAI-compatible completion gateway (OpenAI and Azure flavours)
//! - Sessions running a bounded tool-call loop, plus a session store
//! - Per-session usage tracking

pub mod conversation;
pub mod openai;
pub mod plugins;
pub mod session;
pub mod usage;

use async_trait::async_trait;

pub use conversation::{ApiEndpoint, Conversation, PREAMBLE_LEN};
pub use openai::{Flavor, OpenAiClient, OpenAiConfig};
pub use plugins::{Plugin, PluginError, PluginRegistry, RestApiConfig, RestApiPlugin, WebPagePlugin};
pub use session::{Session, SessionSettings, SessionStore, ToolFailure};
pub use usage::UsageTracker;

/// Boundary to the remote completion service.
///
/// One call is one round trip: no retries happen at this layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(
        &self,
        messages: &[Message],
        plugins: &[PluginDescriptor],
    ) -> Result<Completion, AiError>;
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Plugin name for `function` messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    /// Set on the assistant message that requested a tool call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<ToolInvocationRequest>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_name: None,
            function_call: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Assistant turn that asked for a plugin to be invoked.
    pub fn tool_request(call: ToolInvocationRequest) -> Self {
        Self {
            role: Role::Assistant,
            content: String::new(),
            tool_name: None,
            function_call: Some(call),
        }
    }

    /// Plugin output fed back to the model.
    pub fn function(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Function,
            content: content.into(),
            tool_name: Some(name.into()),
            function_call: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Function,
}

/// What the completion service sees of a plugin.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PluginDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// A tool invocation requested by the model. `arguments` is the raw JSON
/// text exactly as the service produced it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToolInvocationRequest {
    pub name: String,
    pub arguments: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Content(String),
    ToolCall(ToolInvocationRequest),
}

#[derive(Debug, Clone)]
pub struct Completion {
    pub reply: Reply,
    pub usage: TokenUsage,
}

impl Completion {
    pub fn content(text: impl Into<String>) -> Self {
        Self {
            reply: Reply::Content(text.into()),
            usage: TokenUsage::default(),
        }
    }

    pub fn tool_call(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            reply: Reply::ToolCall(ToolInvocationRequest {
                name: name.into(),
                arguments: arguments.into(),
            }),
            usage: TokenUsage::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.prompt_tokens.saturating_add(self.completion_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_message_carries_tool_name() {
        let msg = Message::function("call_rest_api", "{\"content\":\"[]\"}");
        assert_eq!(msg.role, Role::Function);
        assert_eq!(msg.tool_name.as_deref(), Some("call_rest_api"));
        assert!(msg.function_call.is_none());
    }

    #[test]
    fn message_serializes_without_empty_optionals() {
        let json = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }

    #[test]
    fn token_usage_total_saturates() {
        let usage = TokenUsage {
            prompt_tokens: u64::MAX,
            completion_tokens: 5,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn ai_error_display() {
        assert_eq!(AiError::RateLimited.to_string(), "Rate limited");
        assert_eq!(
            AiError::NetworkError("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(AiError::Timeout.to_string(), "Timeout");
    }
}
