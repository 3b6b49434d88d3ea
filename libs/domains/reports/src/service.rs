use std::sync::Arc;
use uuid::Uuid;

use domain_notifications::{
    Channel, EventMessageProvider, EventPublisher, EventType, NotificationEvent, TextMiningEntity,
    TextMiningEvent, PURPOSE_STATUS, RECIPIENT_USER,
};
use domain_users::UserRepository;

use crate::error::ReportResult;
use crate::models::{CreateReport, Report, ReportStatus};
use crate::repository::ReportRepository;

/// Service layer for report business logic
#[derive(Clone)]
pub struct ReportService<R: ReportRepository> {
    repository: Arc<R>,
    users: Arc<dyn UserRepository>,
    messages: EventMessageProvider,
    publisher: Arc<dyn EventPublisher>,
}

impl<R: ReportRepository> ReportService<R> {
    pub fn new(
        repository: R,
        users: Arc<dyn UserRepository>,
        messages: EventMessageProvider,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            users,
            messages,
            publisher,
        }
    }

    /// Create a new report for the authenticated user.
    ///
    /// After the row is committed the description is handed to the
    /// text-mining pipeline and the reporter is acknowledged; both are
    /// best effort and never fail the request.
    pub async fn create_report(&self, user_id: Uuid, input: CreateReport) -> ReportResult<Report> {
        let report = Report::new(user_id, input);
        let report = self.repository.create(report).await?;

        let mining = TextMiningEvent::new(
            report.id,
            TextMiningEntity::Report,
            report.description.clone(),
        );
        if let Err(e) = self.publisher.publish_text_mining(&mining).await {
            tracing::warn!(report_id = %report.id, error = %e, "Failed to publish text-mining request");
        }

        self.notify_reporter(&report).await;

        Ok(report)
    }

    /// All reports for a locality
    pub async fn find_by_locality(&self, locality: &str) -> ReportResult<Vec<Report>> {
        self.repository.list_by_locality(locality).await
    }

    /// All reports created by a user
    pub async fn find_by_user(&self, user_id: Uuid) -> ReportResult<Vec<Report>> {
        self.repository.list_by_user(user_id).await
    }

    /// Update a report's status
    pub async fn update_status(&self, id: Uuid, status: ReportStatus) -> ReportResult<Report> {
        self.repository.update_status(id, status).await
    }

    /// Update a report's description
    pub async fn update_description(&self, id: Uuid, description: String) -> ReportResult<Report> {
        self.repository.update_description(id, description).await
    }

    async fn notify_reporter(&self, report: &Report) {
        let user = match self.users.get_by_id(report.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!(user_id = %report.user_id, "Reporter not found, skipping acknowledgement");
                return;
            }
            Err(e) => {
                tracing::warn!(user_id = %report.user_id, error = %e, "Failed to resolve reporter");
                return;
            }
        };

        let message = match self.messages.message(EventType::ReportReceived) {
            Ok(message) => message,
            Err(e) => {
                tracing::error!(error = %e, "Notification template missing");
                return;
            }
        };

        let event = NotificationEvent::new(
            user.id,
            RECIPIENT_USER,
            &user.email,
            &user.phone,
            message,
            Channel::Whatsapp,
            PURPOSE_STATUS,
            EventType::ReportReceived,
        );

        if let Err(e) = self.publisher.publish(&event).await {
            tracing::warn!(report_id = %report.id, error = %e, "Failed to publish report acknowledgement");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryReportRepository;
    use domain_contacts::{Contact, CreateContact};
    use domain_notifications::InMemoryEventPublisher;
    use domain_users::{InMemoryUserRepository, User, UserAddress, UserRole};

    struct Harness {
        service: ReportService<InMemoryReportRepository>,
        publisher: InMemoryEventPublisher,
        user: User,
    }

    async fn harness() -> Harness {
        let users = InMemoryUserRepository::new();
        let contact = Contact::new(CreateContact {
            email: "ana@example.com".to_string(),
            phone: "+34600111222".to_string(),
        });
        let user = users
            .create(User::new(
                "ana".to_string(),
                "hash".to_string(),
                &contact,
                UserRole::Citizen,
                UserAddress::new("Springfield", "Evergreen Terrace 742"),
            ))
            .await
            .unwrap();

        let publisher = InMemoryEventPublisher::new();
        let service = ReportService::new(
            InMemoryReportRepository::new(),
            Arc::new(users),
            EventMessageProvider::new(),
            Arc::new(publisher.clone()),
        );

        Harness {
            service,
            publisher,
            user,
        }
    }

    fn input() -> CreateReport {
        CreateReport {
            locality: "Springfield".to_string(),
            description: "Broken streetlight on Main St".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_report_publishes_text_mining_request() {
        let h = harness().await;

        let report = h.service.create_report(h.user.id, input()).await.unwrap();

        let mining = h.publisher.text_mining_published().await;
        assert_eq!(mining.len(), 1);
        assert_eq!(mining[0].entity_id, report.id);
        assert_eq!(mining[0].entity_type, TextMiningEntity::Report);
        assert_eq!(mining[0].description, report.description);
    }

    #[tokio::test]
    async fn test_create_report_acknowledges_reporter() {
        let h = harness().await;

        h.service.create_report(h.user.id, input()).await.unwrap();

        let events = h.publisher.published().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventType::ReportReceived);
        assert_eq!(events[0].recipient_id, h.user.id);
        assert_eq!(events[0].email, "ana@example.com");
    }

    #[tokio::test]
    async fn test_create_report_succeeds_when_broker_is_down() {
        let h = harness().await;
        h.publisher.set_failing(true);

        let report = h.service.create_report(h.user.id, input()).await.unwrap();

        assert_eq!(report.status, ReportStatus::Received);
        let fetched = h.service.find_by_user(h.user.id).await.unwrap();
        assert_eq!(fetched.len(), 1);
    }

    #[tokio::test]
    async fn test_create_report_tolerates_unknown_reporter() {
        let h = harness().await;

        let report = h.service.create_report(Uuid::new_v4(), input()).await.unwrap();

        assert_eq!(report.status, ReportStatus::Received);
        // Text mining still published, no user notification
        assert_eq!(h.publisher.text_mining_published().await.len(), 1);
        assert!(h.publisher.published().await.is_empty());
    }

    #[tokio::test]
    async fn test_status_update_round_trip() {
        let h = harness().await;
        let report = h.service.create_report(h.user.id, input()).await.unwrap();

        let updated = h
            .service
            .update_status(report.id, ReportStatus::InProgress)
            .await
            .unwrap();

        assert_eq!(updated.status, ReportStatus::InProgress);
    }
}
