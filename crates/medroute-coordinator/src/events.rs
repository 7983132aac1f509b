use tokio::sync::broadcast;

use crate::agents::AgentCategory;
use crate::message::Message;

/// Everything a front end needs to project the session onto a screen.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    MessageAppended(Message),
    TurnStarted,
    TurnFinished,
    AgentActivated(AgentCategory),
}

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers reached; zero when nobody listens.
    pub fn publish(&self, event: SessionEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(SessionEvent::TurnStarted);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, SessionEvent::TurnStarted));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(SessionEvent::AgentActivated(AgentCategory::Clinical));

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, SessionEvent::AgentActivated(AgentCategory::Clinical)));
        assert!(matches!(e2, SessionEvent::AgentActivated(AgentCategory::Clinical)));
    }

    #[test]
    fn publish_without_subscribers_returns_zero() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(SessionEvent::TurnFinished), 0);
    }
}
