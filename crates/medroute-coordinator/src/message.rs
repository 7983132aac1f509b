//! Chat log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::agents::AgentCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Coordinator,
    System,
}

/// A web page the oracle cited for a grounded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub uri: String,
    pub title: String,
}

/// One entry of the session log. Never modified after it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub is_routing: bool,
    pub routed_to: Option<AgentCategory>,
    pub function_args: Option<serde_json::Map<String, serde_json::Value>>,
    pub grounding_chunks: Vec<GroundingSource>,
}

impl Message {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: medroute_common::new_id(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
            is_routing: false,
            routed_to: None,
            function_args: None,
            grounding_chunks: Vec::new(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Sender::System, text)
    }

    /// A plain coordinator answer, optionally with citations.
    pub fn coordinator(text: impl Into<String>, grounding_chunks: Vec<GroundingSource>) -> Self {
        Self {
            grounding_chunks,
            ..Self::new(Sender::Coordinator, text)
        }
    }

    /// A delegation announcement. `category` must be a delegate.
    pub fn routing(
        text: impl Into<String>,
        category: AgentCategory,
        function_args: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        debug_assert!(category.is_delegate());
        Self {
            is_routing: true,
            routed_to: Some(category),
            function_args: Some(function_args),
            ..Self::new(Sender::Coordinator, text)
        }
    }

    /// The delegation target, if this message routed the turn.
    pub fn delegation(&self) -> Option<(AgentCategory, &serde_json::Map<String, serde_json::Value>)> {
        if !self.is_routing {
            return None;
        }
        Some((self.routed_to?, self.function_args.as_ref()?))
    }
}
