//! Fan-out event bus for domain events.
//!
//! The API server owns one [`EventBus`] behind an `Arc`. Handlers and the
//! voting engine publish; background tasks such as the activation retrier
//! subscribe. Events are fire-and-forget: publishing never fails and never
//! blocks, and an event with no subscribers is dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use ikilen_core::types::DbId;

// ---------------------------------------------------------------------------
// PlatformEvent
// ---------------------------------------------------------------------------

/// Something that happened to an entity, e.g. an investment being activated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformEvent {
    /// Dot-separated name from [`crate::names`].
    pub event_type: String,

    /// Entity kind the event is about (e.g. `"investment"`).
    pub entity_type: Option<String>,

    pub entity_id: Option<DbId>,

    /// Member whose action caused the event, if any.
    pub actor_id: Option<DbId>,

    /// Event-specific data.
    pub payload: serde_json::Value,

    pub occurred_at: DateTime<Utc>,
}

impl PlatformEvent {
    /// Start an event with an empty object payload and no entity or actor.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            entity_type: None,
            entity_id: None,
            actor_id: None,
            payload: serde_json::Value::Object(Default::default()),
            occurred_at: Utc::now(),
        }
    }

    /// Attach the entity this event concerns.
    pub fn about(mut self, entity_type: impl Into<String>, entity_id: DbId) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id);
        self
    }

    /// Attach the acting member.
    pub fn by(mut self, member_id: DbId) -> Self {
        self.actor_id = Some(member_id);
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    /// True when the event concerns the given entity kind.
    pub fn is_about(&self, entity_type: &str) -> bool {
        self.entity_type.as_deref() == Some(entity_type)
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// Broadcast hub. Every subscriber sees every event published after it subscribed.
pub struct EventBus {
    sender: broadcast::Sender<PlatformEvent>,
}

impl EventBus {
    /// Create a bus buffering up to `capacity` unread events per subscriber.
    ///
    /// Subscribers that fall further behind observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish to all current subscribers.
    pub fn publish(&self, event: PlatformEvent) {
        tracing::trace!(event_type = %event.event_type, entity_id = ?event.entity_id, "Publishing event");
        // SendError only means nobody is listening.
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PlatformEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
