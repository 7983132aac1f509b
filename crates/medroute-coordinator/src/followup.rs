//! The cosmetic "agent connected" message that follows a delegation.
//!
//! Each follow-up is a task guarded by a child of the session's lifetime
//! token, so it dies with the session or when a newer turn supersedes it.

use std::time::Duration;

use serde_json::{Map, Value};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::agents::AgentCategory;
use crate::log::MessageLog;
use crate::message::Message;

/// Argument keys consulted, in order, for the value restated in the follow-up.
pub const FOLLOWUP_ARG_PRIORITY: [&str; 4] =
    ["access_type", "document_type", "education_topic", "clinical_data"];

/// Text of the follow-up for a delegation.
pub fn followup_text(category: AgentCategory, args: &Map<String, Value>) -> String {
    let subject = FOLLOWUP_ARG_PRIORITY
        .iter()
        .filter_map(|key| args.get(*key))
        .find(|value| !value.is_null() && value.as_str() != Some(""))
        .cloned()
        .unwrap_or_else(|| Value::String("task".into()));

    format!(
        "[{} Connected] \n\nRequest received. Starting {} process...",
        category.info().name,
        subject
    )
}

/// Handle to a scheduled follow-up message.
pub struct FollowUp {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl FollowUp {
    /// Append a System message with `text` to `log` after `delay`, unless
    /// cancelled first. Must be called from within a tokio runtime.
    pub fn schedule(
        log: MessageLog,
        text: String,
        delay: Duration,
        lifetime: &CancellationToken,
    ) -> Self {
        let token = lifetime.child_token();
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;

                () = task_token.cancelled() => {
                    debug!("follow-up cancelled");
                }

                () = tokio::time::sleep(delay) => {
                    log.append(Message::system(text));
                }
            }
        });

        Self { token, handle }
    }

    pub fn cancel(self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
