//! Plugins the model can invoke mid-conversation.
//!
//! A plugin declares a name, a description and a JSON-schema parameter
//! object; the completion service decides when to call it and with which
//! arguments. Failures are returned as [`PluginError`] and never abort the
//! session: the loop turns them into error results for the model.

mod registry;
mod rest;
mod web_page;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::PluginDescriptor;

pub use registry::PluginRegistry;
pub use rest::{RestApiConfig, RestApiPlugin};
pub use web_page::WebPagePlugin;

#[async_trait]
pub trait Plugin: Send + Sync {
    /// Tool name understood by the completion service.
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON schema describing the accepted arguments.
    fn parameters(&self) -> Value;

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Value, PluginError>;

    fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("http error: {0}")]
    Http(String),
    #[error("{0}")]
    Other(String),
}

/// Fetch a required string argument.
pub(crate) fn required_str<'a>(
    arguments: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a str, PluginError> {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| PluginError::InvalidArguments(format!("missing '{key}' argument")))
}

/// Build the shared HTTP client used by network plugins.
pub(crate) fn http_client(timeout: std::time::Duration) -> Result<reqwest::Client, PluginError> {
    reqwest::Client::builder()
        .connect_timeout(std::time::Duration::from_secs(10))
        .timeout(timeout)
        .build()
        .map_err(|e| PluginError::Other(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Echo;

    #[async_trait]
    impl Plugin for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echo the given text"
        }

        fn parameters(&self) -> Value {
            json!({
                "type": "object",
                "properties": { "text": { "type": "string" } },
                "required": ["text"]
            })
        }

        async fn execute(&self, arguments: Map<String, Value>) -> Result<Value, PluginError> {
            Ok(json!(required_str(&arguments, "text")?))
        }
    }

    #[test]
    fn descriptor_mirrors_plugin_contract() {
        let descriptor = Echo.descriptor();
        assert_eq!(descriptor.name, "echo");
        assert_eq!(descriptor.description, "Echo the given text");
        assert_eq!(descriptor.parameters["required"], json!(["text"]));
    }

    #[tokio::test]
    async fn missing_required_argument_is_invalid() {
        let err = Echo.execute(Map::new()).await.unwrap_err();
        assert!(matches!(err, PluginError::InvalidArguments(_)));
        assert_eq!(err.to_string(), "invalid arguments: missing 'text' argument");
    }
}
