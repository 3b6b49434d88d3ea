//! Data models for the notifications domain.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// Recipient type for events addressed to platform users.
pub const RECIPIENT_USER: &str = "User";

/// Purpose tag for second-factor verification notifications.
pub const PURPOSE_2FA: &str = "2FA";

/// Purpose tag for status-update notifications.
pub const PURPOSE_STATUS: &str = "STATUS";

/// Why a notification fires.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// A new user must verify their account.
    UserVerification,
    /// A citizen report was received.
    ReportReceived,
    /// A service case changed status.
    CaseStatusChanged,
}

/// Delivery channel for a notification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    Whatsapp,
    Sms,
    Email,
}

/// An outbound notification, published to the broker and then discarded.
/// Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEvent {
    /// Recipient entity id.
    pub recipient_id: Uuid,
    /// Recipient entity type (e.g. "User").
    pub recipient_type: String,
    /// Recipient email address.
    pub email: String,
    /// Recipient phone number.
    pub phone: String,
    /// Resolved human-readable message body.
    pub message: String,
    /// Delivery channel.
    pub channel: Channel,
    /// Purpose tag (e.g. "2FA").
    pub purpose: String,
    /// Why this notification fires.
    pub event_type: EventType,
}

impl NotificationEvent {
    pub fn new(
        recipient_id: Uuid,
        recipient_type: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
        channel: Channel,
        purpose: impl Into<String>,
        event_type: EventType,
    ) -> Self {
        Self {
            recipient_id,
            recipient_type: recipient_type.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
            channel,
            purpose: purpose.into(),
            event_type,
        }
    }
}

/// Entity kinds submitted to the text-mining pipeline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum TextMiningEntity {
    Report,
    News,
    Appointment,
}

/// Free-text analysis request, published when citizen-authored content is
/// created. Consumed by an external text-mining pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextMiningEvent {
    pub entity_id: Uuid,
    pub entity_type: TextMiningEntity,
    pub description: String,
}

impl TextMiningEvent {
    pub fn new(entity_id: Uuid, entity_type: TextMiningEntity, description: impl Into<String>) -> Self {
        Self {
            entity_id,
            entity_type,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_wire_format() {
        let json = serde_json::to_string(&EventType::UserVerification).unwrap();
        assert_eq!(json, "\"USER_VERIFICATION\"");
        assert_eq!(EventType::UserVerification.to_string(), "USER_VERIFICATION");
    }

    #[test]
    fn test_channel_wire_format() {
        let json = serde_json::to_string(&Channel::Whatsapp).unwrap();
        assert_eq!(json, "\"WHATSAPP\"");
    }

    #[test]
    fn test_notification_event_serializes_whole_payload() {
        let event = NotificationEvent::new(
            Uuid::new_v4(),
            RECIPIENT_USER,
            "ana@example.com",
            "+34600111222",
            "Verify your account",
            Channel::Whatsapp,
            PURPOSE_2FA,
            EventType::UserVerification,
        );

        let value: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["recipient_type"], "User");
        assert_eq!(value["channel"], "WHATSAPP");
        assert_eq!(value["purpose"], "2FA");
        assert_eq!(value["event_type"], "USER_VERIFICATION");
    }
}
