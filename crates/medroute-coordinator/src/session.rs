//! The coordinator: owns the oracle session, the message log and the
//! pending follow-up for one conversation.

use std::sync::Arc;
use std::time::Duration;

use medroute_ai::{AiError, AiResponse, Oracle, OracleSession, SessionSpec, UsageTracker};
use medroute_common::SessionId;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::agents::{coordinator_tools, AgentCategory};
use crate::events::{EventBus, SessionEvent};
use crate::followup::{followup_text, FollowUp};
use crate::interpreter::interpret_result;
use crate::log::MessageLog;
use crate::message::Message;
use crate::prompt::{welcome_text, DEFAULT_SYSTEM_PROMPT};

const EVENT_CAPACITY: usize = 256;

/// How a coordinator talks to the oracle and paces its follow-ups.
#[derive(Debug, Clone)]
pub struct CoordinatorSettings {
    pub spec: SessionSpec,
    pub followup_delay: Duration,
    pub show_welcome: bool,
}

impl Default for CoordinatorSettings {
    fn default() -> Self {
        Self {
            spec: SessionSpec {
                system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
                tools: coordinator_tools(),
                temperature: 0.2,
                enable_search: true,
            },
            followup_delay: Duration::from_millis(1500),
            show_welcome: true,
        }
    }
}

pub struct Coordinator {
    id: SessionId,
    oracle: Arc<dyn Oracle>,
    settings: CoordinatorSettings,
    session: Option<Box<dyn OracleSession>>,
    log: MessageLog,
    events: EventBus,
    lifetime: CancellationToken,
    followup: Option<FollowUp>,
    active_agent: AgentCategory,
    busy: bool,
    usage: UsageTracker,
}

impl Coordinator {
    pub fn new(oracle: Arc<dyn Oracle>, settings: CoordinatorSettings) -> Self {
        let events = EventBus::new(EVENT_CAPACITY);
        let log = MessageLog::new(events.clone());
        if settings.show_welcome {
            log.append(Message::system(welcome_text()));
        }

        let id = SessionId::new();
        info!(session = %id.short(), "coordinator session created");

        Self {
            id,
            oracle,
            settings,
            session: None,
            log,
            events,
            lifetime: CancellationToken::new(),
            followup: None,
            active_agent: AgentCategory::Coordinator,
            busy: false,
            usage: UsageTracker::new(),
        }
    }

    /// Open the oracle session now instead of on the first send.
    pub async fn connect(&mut self) -> Result<(), AiError> {
        if self.session.is_some() {
            return Ok(());
        }
        let session = self
            .oracle
            .create_session(self.settings.spec.clone())
            .await?;
        self.session = Some(session);
        info!(session = %self.id.short(), "oracle session opened");
        Ok(())
    }

    /// Run one user turn. Returns the reply appended to the log, or `None`
    /// when `text` is blank and nothing happened.
    pub async fn send(&mut self, text: &str) -> Option<Message> {
        if text.trim().is_empty() {
            return None;
        }

        if let Some(pending) = self.followup.take() {
            pending.cancel();
        }

        self.log.append(Message::user(text));
        self.busy = true;
        self.events.publish(SessionEvent::TurnStarted);
        self.set_active_agent(AgentCategory::Coordinator);

        let result = self.run_turn(text).await;
        match &result {
            Ok(response) => self.usage.record(&response.usage),
            Err(_) => self.usage.record_failure(),
        }

        let reply = interpret_result(&result);
        self.log.append(reply.clone());

        if let Some((category, args)) = reply.delegation() {
            self.set_active_agent(category);
            self.followup = Some(FollowUp::schedule(
                self.log.clone(),
                followup_text(category, args),
                self.settings.followup_delay,
                &self.lifetime,
            ));
        }

        self.busy = false;
        self.events.publish(SessionEvent::TurnFinished);
        Some(reply)
    }

    async fn run_turn(&mut self, text: &str) -> Result<AiResponse, AiError> {
        if let Err(e) = self.connect().await {
            warn!("could not open oracle session: {e}");
            return Err(e);
        }
        let Some(session) = self.session.as_mut() else {
            return Err(AiError::NotConfigured("oracle session unavailable".into()));
        };
        debug!(chars = text.len(), "sending turn");
        session.send_turn(text).await
    }

    fn set_active_agent(&mut self, agent: AgentCategory) {
        if self.active_agent != agent {
            self.active_agent = agent;
            self.events.publish(SessionEvent::AgentActivated(agent));
        }
    }

    pub fn messages(&self) -> Vec<Message> {
        self.log.snapshot()
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn active_agent(&self) -> AgentCategory {
        self.active_agent
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    pub fn usage(&self) -> &UsageTracker {
        &self.usage
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn settings(&self) -> &CoordinatorSettings {
        &self.settings
    }

    /// Cancel the pending follow-up and release the oracle session.
    pub fn shutdown(self) {
        info!(
            session = %self.id.short(),
            calls = self.usage.call_count(),
            failures = self.usage.failure_count(),
            tokens = self.usage.total_tokens(),
            "coordinator shutting down"
        );
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        self.lifetime.cancel();
        if let Some(pending) = self.followup.take() {
            pending.cancel();
        }
        self.session = None;
        debug!(session = %self.id.short(), "coordinator session closed");
    }
}
