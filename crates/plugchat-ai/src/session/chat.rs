//! The turn loop: request a completion, run requested tools, repeat.

use plugchat_common::TurnId;
use tracing::{debug, error, info, info_span, warn, Instrument};

use crate::{AiError, Completion, Message, Reply};

use super::manager::Session;

enum TurnOutcome {
    Reply(String),
    ToolLimit,
}

impl Session {
    /// Submit user text and return the assistant's final reply.
    ///
    /// Tool calls requested by the model are executed and fed back until it
    /// answers with plain content. Failures never escape: a broken
    /// completion service yields the degraded message and too many chained
    /// tool calls yield the tool-limit message. Only the user message and the
    /// model's final reply are committed to the log; any other outcome
    /// commits nothing.
    pub async fn submit(&mut self, user_text: impl Into<String>) -> String {
        let span = info_span!("turn", session = %self.id, turn = %TurnId::generate());
        self.turn(user_text.into()).instrument(span).await
    }

    async fn turn(&mut self, user_text: String) -> String {
        debug!(text = %user_text, "turn started");

        match self.complete_turn(&user_text).await {
            Ok(TurnOutcome::Reply(reply)) => {
                self.conversation.push(Message::user(user_text));
                self.conversation.push(Message::assistant(reply.clone()));
                info!(history = self.conversation.len(), "turn finished");
                reply
            }
            Ok(TurnOutcome::ToolLimit) => self.settings.tool_limit_message.clone(),
            Err(e) => {
                error!(error = %e, "turn failed");
                self.settings.degraded_message.clone()
            }
        }
    }

    async fn complete_turn(&mut self, user_text: &str) -> Result<TurnOutcome, AiError> {
        // Detour messages live only in this working copy.
        let mut working = self.conversation.snapshot();
        working.push(Message::user(user_text));
        let mut hops: u32 = 0;

        loop {
            let completion = self.request_completion(&working).await?;

            let call = match completion.reply {
                Reply::Content(text) => return Ok(TurnOutcome::Reply(text)),
                Reply::ToolCall(call) => call,
            };

            if hops >= self.settings.max_tool_hops {
                warn!(hops, tool = %call.name, "tool call limit reached");
                return Ok(TurnOutcome::ToolLimit);
            }
            hops += 1;

            let result = self.invoke_tool(&call).await;
            let name = call.name.clone();
            working.push(Message::tool_request(call));
            working.push(Message::function(name, result.to_string()));
        }
    }

    async fn request_completion(&mut self, messages: &[Message]) -> Result<Completion, AiError> {
        let completion = tokio::time::timeout(
            self.settings.completion_timeout,
            self.gateway.complete(messages, &self.descriptors),
        )
        .await
        .map_err(|_| AiError::Timeout)??;

        self.usage.record_completion(&completion.usage);
        Ok(completion)
    }
}
