//! Resolving and running one tool invocation requested by the model.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::plugins::PluginError;
use crate::ToolInvocationRequest;

use super::manager::Session;
use super::types::ToolFailure;

impl Session {
    /// Run the requested plugin and return the value to feed back to the
    /// model. Every failure becomes an `{"error": ...}` value.
    pub(crate) async fn invoke_tool(&mut self, call: &ToolInvocationRequest) -> Value {
        debug!(tool = %call.name, "executing plugin");

        let outcome = self.run_plugin(call).await;
        self.usage.record_tool_call(outcome.is_err());

        match outcome {
            Ok(value) => {
                debug!(tool = %call.name, result = %value, "plugin finished");
                value
            }
            Err(failure) => {
                warn!(
                    tool = %call.name,
                    arguments = %call.arguments,
                    error = %failure,
                    "tool call failed"
                );
                failure.to_result()
            }
        }
    }

    async fn run_plugin(&self, call: &ToolInvocationRequest) -> Result<Value, ToolFailure> {
        let arguments = parse_arguments(call)?;
        let plugin = self
            .registry
            .resolve(&call.name)
            .ok_or_else(|| ToolFailure::UnknownTool(call.name.clone()))?;

        // Own task: a panicking plugin must not take the session down.
        let handle = tokio::spawn(async move { plugin.execute(arguments).await });
        let abort = handle.abort_handle();

        let timeout = self.settings.plugin_timeout;
        let name = call.name.clone();
        match tokio::time::timeout(timeout, handle).await {
            Ok(Ok(Ok(value))) => Ok(value),
            Ok(Ok(Err(source))) => Err(ToolFailure::Execution { name, source }),
            Ok(Err(join_err)) if join_err.is_panic() => Err(ToolFailure::Panicked(name)),
            Ok(Err(join_err)) => Err(ToolFailure::Execution {
                name,
                source: PluginError::Other(join_err.to_string()),
            }),
            Err(_) => {
                abort.abort();
                Err(ToolFailure::TimedOut { name, timeout })
            }
        }
    }
}

/// Decode the raw argument text. An empty string means "no arguments".
pub(crate) fn parse_arguments(
    call: &ToolInvocationRequest,
) -> Result<Map<String, Value>, ToolFailure> {
    let raw = call.arguments.trim();
    if raw.is_empty() {
        return Ok(Map::new());
    }

    let malformed = |reason: String| ToolFailure::MalformedArguments {
        name: call.name.clone(),
        reason,
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(malformed(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(malformed(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
