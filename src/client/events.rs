//! Notification channel between the API client and the shell
//!
//! The client publishes failures here instead of rendering them itself, so
//! the network layer stays testable without any UI attached.

use tokio::sync::broadcast;

/// Default number of undelivered events kept per subscriber
const DEFAULT_CAPACITY: usize = 32;

/// Events published by the API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// A call failed with a non-auth error; carries the normalized message
    Error(String),

    /// The session credential was rejected and has been cleared.
    ///
    /// `redirect` is the login location to send the user to, or `None` when
    /// the user is already on the login surface.
    SessionInvalidated { redirect: Option<String> },
}

/// Cloneable publisher handle for [`ClientEvent`]s
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ClientEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.sender.subscribe()
    }

    /// Publish an event. Having no subscribers is fine.
    pub fn publish(&self, event: ClientEvent) {
        log::debug!("Publishing client event: {:?}", event);
        if self.sender.send(event).is_err() {
            log::debug!("No subscribers for client event");
        }
    }
}

/// Drain every event already waiting on a receiver
pub fn drain(receiver: &mut broadcast::Receiver<ClientEvent>) -> Vec<ClientEvent> {
    let mut events = Vec::new();
    loop {
        match receiver.try_recv() {
            Ok(event) => events.push(event),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                log::warn!("Dropped {} client events", skipped);
            }
            Err(_) => break,
        }
    }
    events
}
