//! The narrow interface the coordinator uses to reach a language model.
//!
//! `Oracle` creates conversation handles; `OracleSession` sends one turn at
//! a time. Any provider can sit behind these traits without the routing
//! interpreter noticing.

use std::sync::Arc;

use async_trait::async_trait;

use crate::session::ChatSession;
use crate::{AiClient, AiError, AiResponse, ToolDefinition};

/// Everything a conversation handle is created with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSpec {
    pub system_prompt: String,
    pub tools: Vec<ToolDefinition>,
    pub temperature: f64,
    pub enable_search: bool,
}

/// Factory for conversation handles.
#[async_trait]
pub trait Oracle: Send + Sync {
    async fn create_session(&self, spec: SessionSpec) -> Result<Box<dyn OracleSession>, AiError>;
}

/// A live conversation with the oracle.
#[async_trait]
pub trait OracleSession: Send {
    /// Send one user turn and wait for the structured reply.
    async fn send_turn(&mut self, user_text: &str) -> Result<AiResponse, AiError>;
}

/// `Oracle` backed by a stateless `AiClient`, keeping history client-side.
pub struct ChatOracle {
    client: Arc<dyn AiClient>,
}

impl ChatOracle {
    pub fn new(client: Arc<dyn AiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Oracle for ChatOracle {
    async fn create_session(&self, spec: SessionSpec) -> Result<Box<dyn OracleSession>, AiError> {
        Ok(Box::new(ChatSession::new(Arc::clone(&self.client), spec)))
    }
}
