//! Chat Completions client struct, request building, and response parsing.

use serde_json::{json, Value};

use crate::{
    AiError, Completion, Message, PluginDescriptor, Reply, Role, TokenUsage, ToolInvocationRequest,
};

use super::config::{Flavor, OpenAiConfig};

/// Chat Completions client.
#[derive(Debug)]
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        let endpoint = self.config.endpoint.trim_end_matches('/');
        match self.config.flavor {
            Flavor::OpenAi => format!("{endpoint}/chat/completions"),
            Flavor::Azure => format!(
                "{endpoint}/openai/deployments/{}/chat/completions?api-version={}",
                self.config.model, self.config.api_version
            ),
        }
    }

    /// Build auth headers for the configured flavour.
    pub(crate) fn auth_headers(&self) -> Result<reqwest::header::HeaderMap, AiError> {
        let invalid = |_: reqwest::header::InvalidHeaderValue| {
            AiError::ApiError("API key contains invalid header characters".into())
        };
        let mut headers = reqwest::header::HeaderMap::new();
        match self.config.flavor {
            Flavor::OpenAi => {
                headers.insert(
                    reqwest::header::AUTHORIZATION,
                    format!("Bearer {}", self.config.api_key)
                        .parse()
                        .map_err(invalid)?,
                );
            }
            Flavor::Azure => {
                headers.insert("api-key", self.config.api_key.parse().map_err(invalid)?);
            }
        }
        Ok(headers)
    }

    /// Build the JSON request body.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        plugins: &[PluginDescriptor],
    ) -> Value {
        let msgs: Vec<Value> = messages.iter().map(wire_message).collect();

        let mut body = json!({
            "messages": msgs,
            "temperature": self.config.temperature,
        });

        if self.config.flavor == Flavor::OpenAi {
            body["model"] = json!(self.config.model);
        }

        if let Some(max_tokens) = self.config.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        if !plugins.is_empty() {
            let functions: Vec<Value> = plugins
                .iter()
                .map(|p| {
                    json!({
                        "name": p.name,
                        "description": p.description,
                        "parameters": p.parameters,
                    })
                })
                .collect();
            body["functions"] = json!(functions);
            body["function_call"] = json!("auto");
        }

        body
    }

    /// Parse a non-streaming response into a single reply.
    pub(crate) fn parse_response(&self, json: Value) -> Result<Completion, AiError> {
        if let Some(err) = json.get("error") {
            let message = err["message"].as_str().unwrap_or("unknown error");
            return Err(AiError::ApiError(message.to_string()));
        }

        let message = json["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .map(|choice| &choice["message"])
            .ok_or_else(|| AiError::ParseError("no choices in response".to_string()))?;

        let usage = TokenUsage {
            prompt_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            completion_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        // Newer deployments answer with `tool_calls`; only the first call is used.
        let call = message
            .get("function_call")
            .filter(|c| !c.is_null())
            .or_else(|| {
                message["tool_calls"]
                    .as_array()
                    .and_then(|calls| calls.first())
                    .map(|c| &c["function"])
            });

        if let Some(call) = call {
            let name = call["name"]
                .as_str()
                .filter(|n| !n.is_empty())
                .ok_or_else(|| AiError::ParseError("function call without a name".to_string()))?;
            let arguments = match &call["arguments"] {
                Value::String(raw) => raw.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            return Ok(Completion {
                reply: Reply::ToolCall(ToolInvocationRequest {
                    name: name.to_string(),
                    arguments,
                }),
                usage,
            });
        }

        let content = message["content"].as_str().ok_or_else(|| {
            AiError::ParseError("reply has neither content nor a function call".to_string())
        })?;

        Ok(Completion {
            reply: Reply::Content(content.to_string()),
            usage,
        })
    }
}

fn wire_message(msg: &Message) -> Value {
    match (msg.role, &msg.function_call) {
        (Role::Assistant, Some(call)) => json!({
            "role": "assistant",
            "content": Value::Null,
            "function_call": {
                "name": call.name,
                "arguments": call.arguments,
            },
        }),
        (Role::Function, _) => json!({
            "role": "function",
            "name": msg.tool_name.as_deref().unwrap_or_default(),
            "content": msg.content,
        }),
        (role, _) => json!({
            "role": role,
            "content": msg.content,
        }),
    }
}
