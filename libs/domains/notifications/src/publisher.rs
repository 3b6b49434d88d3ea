//! Event publisher trait and implementations.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{NotificationError, NotificationResult};
use crate::models::{EventType, NotificationEvent, TextMiningEvent};

/// Subject for text-mining analysis requests.
pub const TEXT_MINING_SUBJECT: &str = "text-mining.requests";

/// Broker subject for a notification event type.
pub fn notification_subject(event_type: EventType) -> String {
    format!("notifications.{}", event_type.to_string().to_lowercase())
}

/// Fire-and-forget hand-off of events to the message broker.
///
/// `publish` returns once the event has been handed to the transport; it
/// does not await delivery. Per the platform's at-most-once notification
/// model, callers log hand-off failures instead of propagating them.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a notification event.
    async fn publish(&self, event: &NotificationEvent) -> NotificationResult<()>;

    /// Publish a text-mining analysis request.
    async fn publish_text_mining(&self, event: &TextMiningEvent) -> NotificationResult<()>;
}

/// NATS-backed publisher.
pub struct NatsEventPublisher {
    client: async_nats::Client,
}

impl NatsEventPublisher {
    /// Connect to the NATS server.
    pub async fn connect(url: &str) -> NotificationResult<Self> {
        let client = async_nats::connect(url)
            .await
            .map_err(|e| NotificationError::Connect(format!("{} ({})", e, url)))?;

        Ok(Self { client })
    }

    pub fn new(client: async_nats::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EventPublisher for NatsEventPublisher {
    async fn publish(&self, event: &NotificationEvent) -> NotificationResult<()> {
        let subject = notification_subject(event.event_type);
        let payload = serde_json::to_vec(event)?;

        self.client
            .publish(subject.clone(), payload.into())
            .await
            .map_err(|e| NotificationError::Publish(e.to_string()))?;

        debug!(
            subject = %subject,
            recipient_id = %event.recipient_id,
            "Published notification event"
        );
        Ok(())
    }

    async fn publish_text_mining(&self, event: &TextMiningEvent) -> NotificationResult<()> {
        let payload = serde_json::to_vec(event)?;

        self.client
            .publish(TEXT_MINING_SUBJECT, payload.into())
            .await
            .map_err(|e| NotificationError::Publish(e.to_string()))?;

        debug!(entity_id = %event.entity_id, "Published text-mining request");
        Ok(())
    }
}

/// In-memory publisher recording events (for development/testing).
#[derive(Default, Clone)]
pub struct InMemoryEventPublisher {
    events: Arc<RwLock<Vec<NotificationEvent>>>,
    text_mining: Arc<RwLock<Vec<TextMiningEvent>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent publish fail, simulating a broker outage.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Notification events recorded so far.
    pub async fn published(&self) -> Vec<NotificationEvent> {
        self.events.read().await.clone()
    }

    /// Text-mining events recorded so far.
    pub async fn text_mining_published(&self) -> Vec<TextMiningEvent> {
        self.text_mining.read().await.clone()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, event: &NotificationEvent) -> NotificationResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotificationError::Publish("broker unavailable".to_string()));
        }

        self.events.write().await.push(event.clone());
        Ok(())
    }

    async fn publish_text_mining(&self, event: &TextMiningEvent) -> NotificationResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotificationError::Publish("broker unavailable".to_string()));
        }

        self.text_mining.write().await.push(event.clone());
        Ok(())
    }
}
