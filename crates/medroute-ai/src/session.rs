//! Conversation session over an `AiClient`.
//!
//! A `ChatSession` holds the system prompt, tool declarations and the
//! alternating user/model history, and implements `OracleSession`.

mod chat;
mod manager;

#[cfg(test)]
mod tests;

pub use manager::ChatSession;
