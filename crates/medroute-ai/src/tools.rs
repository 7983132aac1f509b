//! Tool declaration helpers for the Gemini API.

use crate::ToolDefinition;

/// Convert a tool definition to the Gemini `functionDeclarations` entry format.
pub fn to_gemini_tool(tool: &ToolDefinition) -> serde_json::Value {
    serde_json::json!({
        "name": tool.name,
        "description": tool.description,
        "parameters": tool.parameters,
    })
}

/// The Google Search grounding tool block.
pub fn search_tool() -> serde_json::Value {
    serde_json::json!({ "googleSearch": {} })
}
