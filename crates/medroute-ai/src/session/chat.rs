//! OracleSession implementation for ChatSession.

use async_trait::async_trait;
use tracing::debug;

use crate::oracle::OracleSession;
use crate::{AiError, AiResponse, ChatMessage, Role};

use super::manager::ChatSession;

#[async_trait]
impl OracleSession for ChatSession {
    async fn send_turn(&mut self, user_text: &str) -> Result<AiResponse, AiError> {
        let messages = self.build_messages(user_text);
        let options = self.request_options();

        let response = self
            .client
            .send_message(&messages, &self.spec.tools, &options)
            .await?;

        debug!(
            tool_calls = response.tool_calls.len(),
            citations = response.grounding_chunks.len(),
            "oracle turn completed"
        );

        // A failed turn leaves history untouched so roles keep alternating.
        self.history.push(ChatMessage::new(Role::User, user_text));
        self.history
            .push(ChatMessage::new(Role::Assistant, response.history_text()));

        Ok(response)
    }
}
