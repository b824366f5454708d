//! Session struct and conversation accessors.

use std::sync::Arc;

use plugchat_common::SessionId;

use crate::conversation::Conversation;
use crate::plugins::PluginRegistry;
use crate::usage::UsageTracker;
use crate::{CompletionGateway, Message, PluginDescriptor};

use super::types::SessionSettings;

/// One chat interaction stream: a conversation log, the plugins the model
/// may call, and the gateway used to reach the model.
pub struct Session {
    pub(super) id: SessionId,
    /// Durable log: preamble plus committed user/assistant pairs.
    pub(super) conversation: Conversation,
    pub(super) registry: PluginRegistry,
    /// Descriptors sent with every request; the registry never changes.
    pub(super) descriptors: Vec<PluginDescriptor>,
    pub(super) gateway: Arc<dyn CompletionGateway>,
    pub(super) settings: SessionSettings,
    pub(super) usage: UsageTracker,
}

impl Session {
    pub fn new(
        gateway: Arc<dyn CompletionGateway>,
        registry: PluginRegistry,
        settings: SessionSettings,
    ) -> Self {
        let conversation = Conversation::seed(&settings.system_prompt, &settings.apis);
        let descriptors = registry.describe_all();
        Self {
            id: SessionId::generate(),
            conversation,
            registry,
            descriptors,
            gateway,
            settings,
            usage: UsageTracker::new(),
        }
    }

    pub fn with_id(mut self, id: SessionId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Caller-visible history: everything after the preamble.
    pub fn history(&self) -> Vec<Message> {
        self.conversation.visible_history()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn usage(&self) -> &UsageTracker {
        &self.usage
    }
}
