//! Append-only message log shared by the coordinator and its follow-up task.

use std::sync::{Arc, Mutex, PoisonError};

use crate::events::{EventBus, SessionEvent};
use crate::message::Message;

/// Ordered chat history. Entries can be appended and read, never removed
/// or edited.
#[derive(Clone)]
pub struct MessageLog {
    entries: Arc<Mutex<Vec<Message>>>,
    events: EventBus,
}

impl MessageLog {
    pub fn new(events: EventBus) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            events,
        }
    }

    /// Append a message and announce it to subscribers.
    pub fn append(&self, message: Message) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.clone());
        self.events.publish(SessionEvent::MessageAppended(message));
    }

    /// Copy of the log in append order.
    pub fn snapshot(&self) -> Vec<Message> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<Message> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order() {
        let log = MessageLog::new(EventBus::new(8));
        log.append(Message::user("one"));
        log.append(Message::system("two"));

        let texts: Vec<_> = log.snapshot().into_iter().map(|m| m.text).collect();
        assert_eq!(texts, vec!["one", "two"]);
        assert_eq!(log.last().unwrap().text, "two");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn snapshots_are_detached_copies() {
        let log = MessageLog::new(EventBus::new(8));
        log.append(Message::user("original"));

        let mut snapshot = log.snapshot();
        snapshot[0].text = "edited".into();
        snapshot.clear();

        assert_eq!(log.snapshot()[0].text, "original");
    }

    #[test]
    fn clones_share_entries() {
        let log = MessageLog::new(EventBus::new(8));
        let other = log.clone();
        other.append(Message::system("from clone"));
        assert_eq!(log.len(), 1);
    }

    #[tokio::test]
    async fn append_publishes_event() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        let log = MessageLog::new(bus);

        let msg = Message::user("hi");
        log.append(msg.clone());

        match rx.recv().await.unwrap() {
            SessionEvent::MessageAppended(got) => assert_eq!(got, msg),
            other => panic!("unexpected event {other:?}"),
        }
    }
}
