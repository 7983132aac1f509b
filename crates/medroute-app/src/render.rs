//! Plain-text projection of session state for the terminal.

use medroute_coordinator::{AgentCategory, Message, Sender};

/// Transcript lines for one message.
pub fn format_message(message: &Message) -> String {
    let time = message.timestamp.format("%H:%M");
    let mut out = match message.sender {
        Sender::User => format!("[{time}] you > {}", message.text),
        Sender::System => format!("[{time}] system > {}", message.text),
        Sender::Coordinator => {
            let info = AgentCategory::Coordinator.info();
            format!("[{time}] {} {} > {}", info.icon, info.name, message.text)
        }
    };

    if let Some((category, args)) = message.delegation() {
        let info = category.info();
        out.push_str(&format!("\n    -> {} {}", info.icon, info.name));
        for (key, value) in args {
            out.push_str(&format!("\n       {key}: {value}"));
        }
    }

    if !message.grounding_chunks.is_empty() {
        out.push_str("\n    Sources:");
        for (i, source) in message.grounding_chunks.iter().enumerate() {
            out.push_str(&format!("\n    [{}] {} <{}>", i + 1, source.title, source.uri));
        }
    }
    out
}

/// The agent list with the active agent marked.
pub fn format_agent_panel(active: AgentCategory, busy: bool) -> String {
    let mut out = String::from("Active agents:");
    for category in AgentCategory::DELEGATES
        .into_iter()
        .chain([AgentCategory::Coordinator])
    {
        let info = category.info();
        let marker = if category == active { '*' } else { ' ' };
        out.push_str(&format!(
            "\n {marker} {} {:<22} {}",
            info.icon, info.name, info.description
        ));
        if category == active && busy {
            out.push_str(" (working...)");
        }
    }
    out
}
