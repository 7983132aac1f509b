//! ChatSession struct and history management.

use std::sync::Arc;

use crate::oracle::SessionSpec;
use crate::{AiClient, ChatMessage, RequestOptions, Role};

/// A conversation with message history, created by `ChatOracle`.
pub struct ChatSession {
    pub(super) client: Arc<dyn AiClient>,
    pub(super) spec: SessionSpec,
    /// Completed turns only: a user message is recorded together with its reply.
    pub(super) history: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(client: Arc<dyn AiClient>, spec: SessionSpec) -> Self {
        Self {
            client,
            spec,
            history: Vec::new(),
        }
    }

    pub(super) fn request_options(&self) -> RequestOptions {
        RequestOptions {
            temperature: Some(self.spec.temperature),
            enable_search: self.spec.enable_search,
        }
    }

    /// System prompt, then history, then the pending user turn.
    pub(super) fn build_messages(&self, user_text: &str) -> Vec<ChatMessage> {
        let mut msgs = Vec::with_capacity(self.history.len() + 2);
        if !self.spec.system_prompt.is_empty() {
            msgs.push(ChatMessage::new(Role::System, self.spec.system_prompt.clone()));
        }
        msgs.extend(self.history.iter().cloned());
        msgs.push(ChatMessage::new(Role::User, user_text));
        msgs
    }

    /// Get the recorded conversation history.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn spec(&self) -> &SessionSpec {
        &self.spec
    }
}
