//! Session settings and tool failure types.

use std::time::Duration;

use serde_json::{json, Value};

use crate::conversation::ApiEndpoint;
use crate::plugins::PluginError;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant. You answer the user's \
     queries. When you are not sure of an answer, you take the help of functions provided to you. \
     NEVER make up an answer if you don't know, just respond with \"I don't know\" when you don't know.";

/// Behaviour knobs for one session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub system_prompt: String,
    /// REST endpoints announced in the preamble.
    pub apis: Vec<ApiEndpoint>,
    /// Tool calls allowed per turn before giving up.
    pub max_tool_hops: u32,
    pub completion_timeout: Duration,
    pub plugin_timeout: Duration,
    /// Reply used when the completion service fails.
    pub degraded_message: String,
    /// Reply used when a turn exceeds `max_tool_hops`.
    pub tool_limit_message: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            apis: Vec::new(),
            max_tool_hops: 8,
            completion_timeout: Duration::from_secs(60),
            plugin_timeout: Duration::from_secs(30),
            degraded_message: "something went wrong".to_string(),
            tool_limit_message: "I could not finish this request because it needed too many \
                                 tool calls. Please try a more specific question."
                .to_string(),
        }
    }
}

impl SessionSettings {
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_apis(mut self, apis: Vec<ApiEndpoint>) -> Self {
        self.apis = apis;
        self
    }

    pub fn with_max_tool_hops(mut self, max: u32) -> Self {
        self.max_tool_hops = max;
        self
    }

    pub fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = timeout;
        self
    }

    pub fn with_plugin_timeout(mut self, timeout: Duration) -> Self {
        self.plugin_timeout = timeout;
        self
    }

    pub fn with_degraded_message(mut self, message: impl Into<String>) -> Self {
        self.degraded_message = message.into();
        self
    }

    pub fn with_tool_limit_message(mut self, message: impl Into<String>) -> Self {
        self.tool_limit_message = message.into();
        self
    }
}

/// Why a requested tool call produced an error result instead of output.
#[derive(Debug, thiserror::Error)]
pub enum ToolFailure {
    #[error("Malformed arguments for {name}: {reason}")]
    MalformedArguments { name: String, reason: String },

    #[error("No plugin found with name {0}")]
    UnknownTool(String),

    #[error("Plugin {name} failed: {source}")]
    Execution {
        name: String,
        #[source]
        source: PluginError,
    },

    #[error("Plugin {0} panicked")]
    Panicked(String),

    #[error("Plugin {name} timed out after {timeout:?}")]
    TimedOut { name: String, timeout: Duration },
}

impl ToolFailure {
    /// Error-shaped tool result handed back to the model.
    pub fn to_result(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}
