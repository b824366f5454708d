//! `call_rest_api`: lets the model call a configured REST backend.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use tracing::debug;

use super::{http_client, required_str, Plugin, PluginError};

/// Longest error body echoed back to the model.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Connection settings for the REST backend.
#[derive(Debug, Clone)]
pub struct RestApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl RestApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct RestApiPlugin {
    config: RestApiConfig,
    base: reqwest::Url,
    http: reqwest::Client,
}

impl RestApiPlugin {
    pub fn new(config: RestApiConfig) -> Result<Self, PluginError> {
        let base = reqwest::Url::parse(&config.base_url).map_err(|e| {
            PluginError::Other(format!("invalid base url '{}': {e}", config.base_url))
        })?;
        let http = http_client(config.timeout)?;
        Ok(Self { config, base, http })
    }

    /// Join a relative URL onto the base endpoint. Absolute URLs are only
    /// accepted when scheme, host and port match the base and the path lies
    /// at or below the base path.
    fn resolve_url(&self, url: &str) -> Result<String, PluginError> {
        let base = self.config.base_url.trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Ok(format!("{base}/{}", url.trim_start_matches('/')));
        }

        let target = reqwest::Url::parse(url)
            .map_err(|e| PluginError::InvalidArguments(format!("invalid url '{url}': {e}")))?;
        if self.is_below_base(&target) {
            Ok(target.to_string())
        } else {
            Err(PluginError::InvalidArguments(format!(
                "url '{url}' is outside the configured endpoint {base}"
            )))
        }
    }

    fn is_below_base(&self, target: &reqwest::Url) -> bool {
        let base_path = self.base.path().trim_end_matches('/');
        let path = target.path();
        let path_ok = path == base_path || path.starts_with(&format!("{base_path}/"));

        target.scheme() == self.base.scheme()
            && target.host_str() == self.base.host_str()
            && target.port_or_known_default() == self.base.port_or_known_default()
            && target.username().is_empty()
            && target.password().is_none()
            && path_ok
    }
}

fn parse_method(method: &str) -> Result<reqwest::Method, PluginError> {
    match method.to_ascii_uppercase().as_str() {
        "GET" => Ok(reqwest::Method::GET),
        "POST" => Ok(reqwest::Method::POST),
        "PUT" => Ok(reqwest::Method::PUT),
        "DELETE" => Ok(reqwest::Method::DELETE),
        other => Err(PluginError::InvalidArguments(format!(
            "unsupported method: {other}"
        ))),
    }
}

#[async_trait]
impl Plugin for RestApiPlugin {
    fn name(&self) -> &str {
        "call_rest_api"
    }

    fn description(&self) -> &str {
        "Sends a request to the REST API"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "method": {
                    "type": "string",
                    "description": "The HTTP method to be used",
                    "enum": ["GET", "POST", "PUT", "DELETE"]
                },
                "url": {
                    "type": "string",
                    "description": "The URL of the endpoint. Value placeholders must be replaced with actual values."
                },
                "body": {
                    "type": "string",
                    "description": "A string representation of the JSON that should be sent as the request body."
                }
            },
            "required": ["method", "url"]
        })
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Value, PluginError> {
        let method = parse_method(required_str(&arguments, "method")?)?;
        let url = self.resolve_url(required_str(&arguments, "url")?)?;
        let body = arguments.get("body").and_then(Value::as_str);

        debug!(%method, %url, "calling REST API");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request
                .header("content-type", "application/json")
                .body(body.to_string());
        }

        let response = request
            .send()
            .await
            .map_err(|e| PluginError::Http(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PluginError::Http(e.to_string()))?;

        if status != reqwest::StatusCode::OK {
            let body = text.chars().take(MAX_ERROR_BODY_CHARS).collect::<String>();
            return Ok(json!({
                "error": format!("Request failed with status code {}", status.as_u16()),
                "status_code": status.as_u16(),
                "body": body,
            }));
        }

        // Re-encode JSON bodies compactly; pass anything else through as text.
        let content = match serde_json::from_str::<Value>(&text) {
            Ok(value) => value.to_string(),
            Err(_) => text,
        };
        Ok(json!({ "content": content }))
    }
}
