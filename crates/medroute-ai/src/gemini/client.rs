//! Gemini API client struct, request building, and response parsing.

use crate::tools::{search_tool, to_gemini_tool};
use crate::{
    AiError, AiResponse, ChatMessage, GroundingChunk, RequestOptions, Role, TokenUsage, ToolCall,
    ToolDefinition,
};

use tracing::warn;

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolDefinition],
        options: &RequestOptions,
    ) -> serde_json::Value {
        let mut contents = Vec::new();

        for msg in messages {
            let role = match msg.role {
                Role::User => "user",
                Role::Assistant => "model",
                Role::System => continue, // handled via systemInstruction
            };
            contents.push(serde_json::json!({
                "role": role,
                "parts": [{ "text": msg.content }]
            }));
        }

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": options.temperature.unwrap_or(self.config.temperature),
            }
        });

        if let Some(system) = messages.iter().find(|m| m.role == Role::System) {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system.content }]
            });
        }

        let mut tool_blocks = Vec::new();
        if !tools.is_empty() {
            let tool_defs: Vec<_> = tools.iter().map(to_gemini_tool).collect();
            tool_blocks.push(serde_json::json!({ "functionDeclarations": tool_defs }));
        }
        if options.enable_search {
            tool_blocks.push(search_tool());
        }
        if !tool_blocks.is_empty() {
            body["tools"] = serde_json::Value::Array(tool_blocks);
        }

        body
    }

    /// Parse a Gemini response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        // A blocked prompt comes back with `promptFeedback` and no candidates.
        let Some(first) = json["candidates"].as_array().and_then(|c| c.first()) else {
            if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                warn!(reason, "Gemini returned no candidates");
            }
            return Ok(AiResponse {
                usage,
                ..AiResponse::default()
            });
        };

        let parts = first["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let mut content = String::new();
        let mut tool_calls = Vec::new();

        for part in &parts {
            // Thought summaries are not part of the answer.
            if part["thought"].as_bool() == Some(true) {
                continue;
            }
            if let Some(text) = part["text"].as_str() {
                content.push_str(text);
            }
            if let Some(fc) = part.get("functionCall") {
                tool_calls.push(ToolCall {
                    id: uuid::Uuid::new_v4().to_string(),
                    name: fc["name"].as_str().unwrap_or("").to_string(),
                    arguments: fc["args"].clone(),
                });
            }
        }

        let grounding_chunks = first["groundingMetadata"]["groundingChunks"]
            .as_array()
            .map(|chunks| {
                chunks
                    .iter()
                    .map(|chunk| {
                        serde_json::from_value::<GroundingChunk>(chunk.clone()).unwrap_or_default()
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(AiResponse {
            content,
            tool_calls,
            grounding_chunks,
            usage,
        })
    }
}
