//! Append-only conversation log with a fixed instructional preamble.
//!
//! Every log starts with [`PREAMBLE_LEN`] seed messages: the system
//! directive, the catalogue of REST endpoints the model may call, and two
//! usage hints. They go to the model on every request but are never part of
//! the history shown to the caller.

use serde::{Deserialize, Serialize};

use crate::{Message, Role};

/// Number of seed messages at the head of every conversation.
pub const PREAMBLE_LEN: usize = 4;

const IDENTIFIER_HINT: &str = "If a function requires an identifier, list all first to find the \
     proper value. You may need to list more than one page";

const CONFIRMATION_HINT: &str = "If you were asked to create, update, or delete a record, perform \
     the action and reply with a confirmation telling what you have done.";

/// One REST endpoint announced to the model in the preamble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    pub method: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Build a log holding only the seeded preamble.
    pub fn seed(system_prompt: &str, apis: &[ApiEndpoint]) -> Self {
        let catalogue = serde_json::to_string(apis).unwrap_or_else(|_| "[]".to_string());
        Self {
            messages: vec![
                Message::system(system_prompt),
                Message::user(format!(
                    "You have access to the following APIs: {catalogue}"
                )),
                Message::user(IDENTIFIER_HINT),
                Message::user(CONFIRMATION_HINT),
            ],
        }
    }

    pub fn append(&mut self, role: Role, content: impl Into<String>, tool_name: Option<String>) {
        let mut message = Message::new(role, content);
        message.tool_name = tool_name;
        self.messages.push(message);
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Owned copy of the whole log, preamble included.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    /// Messages after the preamble, without system directives.
    pub fn visible_history(&self) -> Vec<Message> {
        self.messages
            .iter()
            .skip(PREAMBLE_LEN)
            .filter(|m| m.role != Role::System)
            .cloned()
            .collect()
    }

    pub fn preamble_len(&self) -> usize {
        PREAMBLE_LEN
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn industry_catalogue() -> Vec<ApiEndpoint> {
        vec![ApiEndpoint {
            method: "GET".into(),
            url: "/industry?page=[page_id]".into(),
            description: "Lists industries.".into(),
        }]
    }

    #[test]
    fn seed_builds_fixed_preamble() {
        let log = Conversation::seed("You are a helpful assistant.", &industry_catalogue());
        let messages = log.snapshot();

        assert_eq!(messages.len(), PREAMBLE_LEN);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, "You are a helpful assistant.");
        assert!(messages[1..].iter().all(|m| m.role == Role::User));
        assert!(messages[1]
            .content
            .starts_with("You have access to the following APIs: "));
        assert!(messages[1].content.contains("/industry?page=[page_id]"));
    }

    #[test]
    fn visible_history_skips_preamble() {
        let mut log = Conversation::seed("sys", &[]);
        assert!(log.visible_history().is_empty());

        log.append(Role::User, "List all industries", None);
        log.append(Role::Assistant, "Here they are", None);

        let history = log.visible_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], Message::user("List all industries"));
        assert_eq!(history[1], Message::assistant("Here they are"));
    }

    #[test]
    fn visible_history_hides_later_system_messages() {
        let mut log = Conversation::seed("sys", &[]);
        log.append(Role::System, "late directive", None);
        log.append(Role::User, "hello", None);

        let history = log.visible_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].role, Role::User);
    }

    #[test]
    fn snapshot_is_detached_from_live_log() {
        let mut log = Conversation::seed("sys", &[]);
        let snapshot = log.snapshot();
        log.append(Role::User, "after snapshot", None);

        assert_eq!(snapshot.len(), PREAMBLE_LEN);
        assert_eq!(log.len(), PREAMBLE_LEN + 1);
    }

    #[test]
    fn append_keeps_tool_name() {
        let mut log = Conversation::seed("sys", &[]);
        log.append(Role::Function, "{}", Some("call_rest_api".into()));
        let last = log.snapshot().pop().unwrap();
        assert_eq!(last.tool_name.as_deref(), Some("call_rest_api"));
    }
}
