//! Error types for the notifications domain.

use crate::models::EventType;
use thiserror::Error;

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Errors that can occur in the notifications domain.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// No message template registered for an event type. This is a
    /// deployment error, not a user-facing one; callers should log it at
    /// error level and fail the request with a generic 500.
    #[error("No message template registered for event type {0}")]
    TemplateMissing(EventType),

    /// Broker connection failure.
    #[error("Broker connection error: {0}")]
    Connect(String),

    /// Hand-off to the broker failed.
    #[error("Failed to publish event: {0}")]
    Publish(String),

    /// Event could not be serialized.
    #[error("Failed to serialize event: {0}")]
    Serialization(#[from] serde_json::Error),
}
