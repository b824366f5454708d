//! Conversation session behaviour.

use serde::{Deserialize, Serialize};

/// `[session]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Overrides the built-in system prompt when set.
    pub system_prompt: Option<String>,
    /// Tool calls allowed per turn (valid range: 1-50).
    pub max_tool_hops: u32,
    /// Seconds to wait for one completion (valid range: 1-600).
    pub completion_timeout_secs: u64,
    /// Seconds to wait for one plugin run (valid range: 1-600).
    pub plugin_timeout_secs: u64,
    pub degraded_message: String,
    /// Overrides the built-in tool-limit reply when set.
    pub tool_limit_message: Option<String>,
    pub enable_web_page_plugin: bool,
    /// Characters of page text handed back to the model (valid range: 100-100000).
    pub web_page_max_chars: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            system_prompt: None,
            max_tool_hops: 8,
            completion_timeout_secs: 60,
            plugin_timeout_secs: 30,
            degraded_message: "something went wrong".into(),
            tool_limit_message: None,
            enable_web_page_plugin: false,
            web_page_max_chars: 8000,
        }
    }
}
