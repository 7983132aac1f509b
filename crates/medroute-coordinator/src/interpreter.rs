//! Turns one oracle reply into the single message appended for that turn.
//!
//! Precedence: delegation, then free text, then the empty-reply placeholder.
//! Transport and oracle failures become a System apology; the raw error is
//! only logged.

use medroute_ai::{AiError, AiResponse, GroundingChunk, ToolCall};
use serde_json::{Map, Value};
use tracing::{error, warn};

use crate::agents::AgentCategory;
use crate::message::{GroundingSource, Message};
use crate::prompt::{routing_text, APOLOGY_TEXT, NO_TEXT_RESPONSE};

/// A recognized delegation directive.
#[derive(Debug, Clone, PartialEq)]
pub struct Delegation {
    pub category: AgentCategory,
    pub function_name: String,
    pub args: Map<String, Value>,
}

/// First directive naming a known delegate. Later directives are discarded:
/// at most one delegation per turn.
pub fn first_delegation(calls: &[ToolCall]) -> Option<Delegation> {
    for call in calls {
        let Some(category) = AgentCategory::from_wire_name(&call.name) else {
            warn!(function = %call.name, "ignoring call to unknown agent");
            continue;
        };
        let args = match &call.arguments {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        if calls.len() > 1 {
            warn!(
                honored = %call.name,
                received = calls.len(),
                "multiple delegations in one reply, keeping the first"
            );
        }
        return Some(Delegation {
            category,
            function_name: call.name.clone(),
            args,
        });
    }
    None
}

/// Keep only citations that point at a web page.
pub fn web_sources(chunks: &[GroundingChunk]) -> Vec<GroundingSource> {
    chunks
        .iter()
        .filter_map(|chunk| {
            let web = chunk.web.as_ref()?;
            let uri = web.uri.as_deref().filter(|u| !u.trim().is_empty())?;
            let title = web
                .title
                .as_deref()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or(uri);
            Some(GroundingSource {
                uri: uri.to_string(),
                title: title.to_string(),
            })
        })
        .collect()
}

/// Interpret a successful oracle reply.
pub fn interpret(response: &AiResponse) -> Message {
    if let Some(delegation) = first_delegation(&response.tool_calls) {
        return Message::routing(
            routing_text(&delegation.function_name),
            delegation.category,
            delegation.args,
        );
    }

    let sources = web_sources(&response.grounding_chunks);
    if response.content.trim().is_empty() {
        Message::coordinator(NO_TEXT_RESPONSE, sources)
    } else {
        Message::coordinator(response.content.clone(), sources)
    }
}

/// Interpret the outcome of a turn, including failure.
pub fn interpret_result(result: &Result<AiResponse, AiError>) -> Message {
    match result {
        Ok(response) => interpret(response),
        Err(e) => {
            error!("oracle call failed: {e}");
            Message::system(APOLOGY_TEXT)
        }
    }
}
