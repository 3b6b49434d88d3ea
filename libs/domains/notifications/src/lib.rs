//! Notifications Domain
//!
//! Outbound notification events for the platform. Other domains construct
//! a [`NotificationEvent`], resolve its message body through the
//! [`EventMessageProvider`], and hand it to an [`EventPublisher`]
//! implementation. Delivery (WhatsApp gateway, SMS bridge) happens in
//! external consumers of the broker subjects.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Domain service │  ← builds NotificationEvent
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ MessageProvider │  ← EventType → message template
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ EventPublisher  │  ← JSON hand-off to NATS subject
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ Delivery worker │  ← external consumer
//! └─────────────────┘
//! ```
//!
//! Publication is fire-and-forget: the publisher only reports hand-off
//! failures, and callers log rather than propagate them.

pub mod error;
pub mod models;
pub mod publisher;
pub mod templates;

// Re-export commonly used types
pub use error::{NotificationError, NotificationResult};
pub use models::{
    Channel, EventType, NotificationEvent, TextMiningEntity, TextMiningEvent, PURPOSE_2FA,
    PURPOSE_STATUS, RECIPIENT_USER,
};
pub use publisher::{EventPublisher, InMemoryEventPublisher, NatsEventPublisher};
pub use templates::EventMessageProvider;
