//! CompletionGateway implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, Completion, CompletionGateway, Message, PluginDescriptor};

use super::client::OpenAiClient;

#[async_trait]
impl CompletionGateway for OpenAiClient {
    async fn complete(
        &self,
        messages: &[Message],
        plugins: &[PluginDescriptor],
    ) -> Result<Completion, AiError> {
        let body = self.build_request_body(messages, plugins);

        debug!(
            model = %self.config.model,
            messages = messages.len(),
            plugins = plugins.len(),
            "Chat completion request"
        );

        let response = self
            .http
            .post(self.api_url())
            .headers(self.auth_headers()?)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}
