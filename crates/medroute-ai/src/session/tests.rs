//! Tests for ChatSession history handling.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::*;
use crate::oracle::{OracleSession, SessionSpec};
use crate::{AiClient, AiError, AiResponse, ChatMessage, RequestOptions, Role, ToolCall, ToolDefinition};

/// Records every request and replays queued results.
#[derive(Default)]
struct RecordingClient {
    requests: Mutex<Vec<(Vec<ChatMessage>, usize, RequestOptions)>>,
    replies: Mutex<Vec<Result<AiResponse, AiError>>>,
}

impl RecordingClient {
    fn with_replies(replies: Vec<Result<AiResponse, AiError>>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            replies: Mutex::new(replies),
        })
    }
}

#[async_trait]
impl AiClient for RecordingClient {
    async fn send_message(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolDefinition],
        options: &RequestOptions,
    ) -> Result<AiResponse, AiError> {
        self.requests
            .lock()
            .unwrap()
            .push((messages.to_vec(), tools.len(), options.clone()));
        self.replies.lock().unwrap().remove(0)
    }
}

fn text(content: &str) -> AiResponse {
    AiResponse {
        content: content.into(),
        ..Default::default()
    }
}

fn spec() -> SessionSpec {
    SessionSpec {
        system_prompt: "Route hospital requests.".into(),
        tools: vec![ToolDefinition {
            name: "clinical_support_agent".into(),
            description: "clinical".into(),
            parameters: serde_json::json!({}),
        }],
        temperature: 0.2,
        enable_search: true,
    }
}

#[tokio::test]
async fn first_turn_sends_system_prompt_tools_and_options() {
    let client = RecordingClient::with_replies(vec![Ok(text("Hello"))]);
    let mut session = ChatSession::new(client.clone(), spec());

    let reply = session.send_turn("hi").await.unwrap();
    assert_eq!(reply.content, "Hello");

    let requests = client.requests.lock().unwrap();
    let (messages, tool_count, options) = &requests[0];
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[1], ChatMessage::new(Role::User, "hi"));
    assert_eq!(*tool_count, 1);
    assert_eq!(options.temperature, Some(0.2));
    assert!(options.enable_search);
}

#[tokio::test]
async fn history_carries_previous_turns() {
    let client = RecordingClient::with_replies(vec![Ok(text("first")), Ok(text("second"))]);
    let mut session = ChatSession::new(client.clone(), spec());

    session.send_turn("one").await.unwrap();
    session.send_turn("two").await.unwrap();

    let requests = client.requests.lock().unwrap();
    let (messages, _, _) = &requests[1];
    let texts: Vec<_> = messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(
        texts,
        vec!["Route hospital requests.", "one", "first", "two"]
    );
    assert_eq!(session.history().len(), 4);
}

#[tokio::test]
async fn delegation_is_recorded_as_text_summary() {
    let delegation = AiResponse {
        tool_calls: vec![ToolCall {
            id: "x".into(),
            name: "clinical_support_agent".into(),
            arguments: serde_json::json!({"clinical_data": "Symptoms"}),
        }],
        ..Default::default()
    };
    let client = RecordingClient::with_replies(vec![Ok(delegation)]);
    let mut session = ChatSession::new(client, spec());

    session.send_turn("analyse symptoms").await.unwrap();
    let last = session.history().last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert!(last.content.contains("clinical_support_agent"));
}

#[tokio::test]
async fn failed_turn_leaves_history_untouched() {
    let client = RecordingClient::with_replies(vec![
        Ok(text("ok")),
        Err(AiError::NetworkError("connection reset".into())),
    ]);
    let mut session = ChatSession::new(client, spec());

    session.send_turn("one").await.unwrap();
    let err = session.send_turn("two").await.unwrap_err();
    assert!(matches!(err, AiError::NetworkError(_)));
    assert_eq!(session.history().len(), 2);
}

#[tokio::test]
async fn empty_system_prompt_is_omitted() {
    let client = RecordingClient::with_replies(vec![Ok(text("ok"))]);
    let mut session = ChatSession::new(
        client.clone(),
        SessionSpec {
            system_prompt: String::new(),
            ..spec()
        },
    );
    session.send_turn("hi").await.unwrap();

    let requests = client.requests.lock().unwrap();
    assert_eq!(requests[0].0.len(), 1);
    assert_eq!(requests[0].0[0].role, Role::User);
}
