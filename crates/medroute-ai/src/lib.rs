//! Oracle layer for medroute.
//!
//! Provides the language-model side of a coordinator turn:
//! - `Oracle` / `OracleSession`: the narrow interface the coordinator talks to
//! - `ChatSession`: conversation history over any `AiClient`
//! - `GeminiClient`: the Generative Language API transport
//! - Token usage tracking

pub mod gemini;
pub mod oracle;
pub mod session;
pub mod tools;
pub mod usage;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use gemini::{GeminiClient, GeminiConfig};
pub use oracle::{ChatOracle, Oracle, OracleSession, SessionSpec};
pub use session::ChatSession;
pub use usage::UsageTracker;

/// Stateless transport to a hosted model: one request, one response.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolDefinition],
        options: &RequestOptions,
    ) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Per-request generation knobs that belong to the session, not the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Overrides the client's default temperature.
    pub temperature: Option<f64>,
    /// Attach the search grounding tool.
    pub enable_search: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AiResponse {
    /// Concatenated text parts.
    pub content: String,
    /// Function calls in the order the model emitted them.
    pub tool_calls: Vec<ToolCall>,
    /// Raw citation entries from search grounding, unfiltered.
    pub grounding_chunks: Vec<GroundingChunk>,
    pub usage: TokenUsage,
}

impl AiResponse {
    /// Text recorded in conversation history for this reply.
    ///
    /// Function calls are summarized as text so the next user turn does not
    /// need a matching function response.
    pub fn history_text(&self) -> String {
        if let Some(call) = self.tool_calls.first() {
            return format!("[function call: {} {}]", call.name, call.arguments);
        }
        if self.content.trim().is_empty() {
            return "(no text response)".to_string();
        }
        self.content.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: serde_json::Value,
}

/// One entry of a grounding citation list as the API returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebSource {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Oracle not configured: {0}")]
    NotConfigured(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, args: serde_json::Value) -> ToolCall {
        ToolCall {
            id: "c1".into(),
            name: name.into(),
            arguments: args,
        }
    }

    #[test]
    fn history_text_prefers_function_call_summary() {
        let response = AiResponse {
            content: "ignored".into(),
            tool_calls: vec![call(
                "medical_records_manager",
                serde_json::json!({"patient_id": "P1"}),
            )],
            ..Default::default()
        };
        assert_eq!(
            response.history_text(),
            r#"[function call: medical_records_manager {"patient_id":"P1"}]"#
        );
    }

    #[test]
    fn history_text_uses_content() {
        let response = AiResponse {
            content: "Hello".into(),
            ..Default::default()
        };
        assert_eq!(response.history_text(), "Hello");
    }

    #[test]
    fn history_text_never_empty() {
        let response = AiResponse::default();
        assert_eq!(response.history_text(), "(no text response)");
    }

    #[test]
    fn grounding_chunk_tolerates_unknown_shapes() {
        let chunk: GroundingChunk = serde_json::from_value(serde_json::json!({"other": null})).unwrap();
        assert!(chunk.web.is_none());

        let chunk: GroundingChunk =
            serde_json::from_value(serde_json::json!({"web": {"uri": "https://a"}})).unwrap();
        let web = chunk.web.unwrap();
        assert_eq!(web.uri.as_deref(), Some("https://a"));
        assert!(web.title.is_none());
    }

    #[test]
    fn total_tokens_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 5,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn ai_error_display() {
        assert_eq!(AiError::RateLimited.to_string(), "Rate limited");
        assert_eq!(
            AiError::NotConfigured("GEMINI_API_KEY is not set".into()).to_string(),
            "Oracle not configured: GEMINI_API_KEY is not set"
        );
    }
}
