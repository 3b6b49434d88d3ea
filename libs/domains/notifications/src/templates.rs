//! Message templates for notification events.

use crate::error::{NotificationError, NotificationResult};
use crate::models::EventType;
use std::collections::HashMap;

const USER_VERIFICATION_MESSAGE: &str =
    "Welcome! Confirm your account with the verification code we just sent you.";
const REPORT_RECEIVED_MESSAGE: &str =
    "Thanks for your report. Your municipality has received it and will review it shortly.";
const CASE_STATUS_CHANGED_MESSAGE: &str =
    "There is an update on your service case. Check the app for details.";

/// Pure lookup from [`EventType`] to a human-readable message template.
///
/// Every deployable build registers a template for each event type; a
/// missing entry is a configuration defect surfaced as
/// [`NotificationError::TemplateMissing`], never silently defaulted.
#[derive(Clone)]
pub struct EventMessageProvider {
    templates: HashMap<EventType, &'static str>,
}

impl EventMessageProvider {
    pub fn new() -> Self {
        let templates = HashMap::from([
            (EventType::UserVerification, USER_VERIFICATION_MESSAGE),
            (EventType::ReportReceived, REPORT_RECEIVED_MESSAGE),
            (EventType::CaseStatusChanged, CASE_STATUS_CHANGED_MESSAGE),
        ]);

        Self { templates }
    }

    /// Resolve the message body for an event type.
    pub fn message(&self, event_type: EventType) -> NotificationResult<&'static str> {
        self.templates
            .get(&event_type)
            .copied()
            .ok_or(NotificationError::TemplateMissing(event_type))
    }
}

impl Default for EventMessageProvider {
    fn default() -> Self {
        Self::new()
    }
}
