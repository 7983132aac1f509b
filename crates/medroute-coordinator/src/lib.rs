//! Coordinator session for hospital request routing.
//!
//! Holds the append-only chat log, forwards each user turn to the oracle,
//! and turns the oracle's reply into exactly one message: a delegation to
//! one of four specialist agents, a plain answer, or an answer with web
//! citations. Front ends render by subscribing to `SessionEvent`s.

pub mod agents;
pub mod events;
pub mod followup;
pub mod interpreter;
pub mod log;
pub mod message;
pub mod prompt;
pub mod session;

pub use agents::{coordinator_tools, AgentCategory, AgentInfo};
pub use events::{EventBus, SessionEvent};
pub use followup::{followup_text, FollowUp};
pub use interpreter::{interpret, interpret_result, Delegation};
pub use log::MessageLog;
pub use message::{GroundingSource, Message, Sender};
pub use prompt::{APP_NAME, DEFAULT_SYSTEM_PROMPT};
pub use session::{Coordinator, CoordinatorSettings};
