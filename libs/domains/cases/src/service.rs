use std::sync::Arc;
use uuid::Uuid;

use domain_notifications::{
    Channel, EventMessageProvider, EventPublisher, EventType, NotificationEvent, PURPOSE_STATUS,
    RECIPIENT_USER,
};
use domain_reports::ReportRepository;
use domain_users::UserRepository;

use crate::error::{CaseError, CaseResult};
use crate::models::{CaseStatus, OpenCase, ServiceCase};
use crate::repository::CaseRepository;

/// Service layer for case business logic
#[derive(Clone)]
pub struct CaseService<R: CaseRepository> {
    repository: Arc<R>,
    reports: Arc<dyn ReportRepository>,
    users: Arc<dyn UserRepository>,
    messages: EventMessageProvider,
    publisher: Arc<dyn EventPublisher>,
}

impl<R: CaseRepository> CaseService<R> {
    pub fn new(
        repository: R,
        reports: Arc<dyn ReportRepository>,
        users: Arc<dyn UserRepository>,
        messages: EventMessageProvider,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            reports,
            users,
            messages,
            publisher,
        }
    }

    /// Open a new case from an existing report
    pub async fn open_case(&self, input: OpenCase) -> CaseResult<ServiceCase> {
        let report = self
            .reports
            .get_by_id(input.report_id)
            .await?
            .ok_or(CaseError::ReportNotFound(input.report_id))?;

        let case = ServiceCase::new(&report, input.category);
        self.repository.create(case).await
    }

    /// Get a case by ID
    pub async fn get_case(&self, id: Uuid) -> CaseResult<ServiceCase> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CaseError::NotFound(id))
    }

    /// All cases for a user
    pub async fn find_by_user(&self, user_id: Uuid) -> CaseResult<Vec<ServiceCase>> {
        self.repository.list_by_user(user_id).await
    }

    /// Update a case's status and notify the citizen, best effort.
    pub async fn update_status(&self, id: Uuid, status: CaseStatus) -> CaseResult<ServiceCase> {
        let case = self.repository.update_status(id, status).await?;
        self.notify_citizen(&case).await;
        Ok(case)
    }

    async fn notify_citizen(&self, case: &ServiceCase) {
        let user = match self.users.get_by_id(case.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!(user_id = %case.user_id, "Case owner not found, skipping notification");
                return;
            }
            Err(e) => {
                tracing::warn!(user_id = %case.user_id, error = %e, "Failed to resolve case owner");
                return;
            }
        };

        let message = match self.messages.message(EventType::CaseStatusChanged) {
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
            EventType::CaseStatusChanged,
        );

        if let Err(e) = self.publisher.publish(&event).await {
            tracing::warn!(case_id = %case.id, error = %e, "Failed to publish case notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryCaseRepository;
    use domain_contacts::{Contact, CreateContact};
    use domain_notifications::InMemoryEventPublisher;
    use domain_reports::{CreateReport, InMemoryReportRepository, Report};
    use domain_users::{InMemoryUserRepository, User, UserAddress, UserRole};

    struct Harness {
        service: CaseService<InMemoryCaseRepository>,
        publisher: InMemoryEventPublisher,
        report: Report,
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

        let reports = InMemoryReportRepository::new();
        let report = reports
            .create(Report::new(
                user.id,
                CreateReport {
                    locality: "Springfield".to_string(),
                    description: "Broken streetlight".to_string(),
                },
            ))
            .await
            .unwrap();

        let publisher = InMemoryEventPublisher::new();
        let service = CaseService::new(
            InMemoryCaseRepository::new(),
            Arc::new(reports),
            Arc::new(users),
            EventMessageProvider::new(),
            Arc::new(publisher.clone()),
        );

        Harness {
            service,
            publisher,
            report,
        }
    }

    #[tokio::test]
    async fn test_open_case_copies_report_context() {
        let h = harness().await;

        let case = h
            .service
            .open_case(OpenCase {
                report_id: h.report.id,
                category: "lighting".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(case.report_id, h.report.id);
        assert_eq!(case.user_id, h.report.user_id);
        assert_eq!(case.locality, "Springfield");
        assert_eq!(case.status, CaseStatus::Open);
    }

    #[tokio::test]
    async fn test_open_case_for_unknown_report_fails() {
        let h = harness().await;

        let result = h
            .service
            .open_case(OpenCase {
                report_id: Uuid::new_v4(),
                category: "lighting".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CaseError::ReportNotFound(_))));
    }

    #[tokio::test]
    async fn test_status_update_notifies_citizen() {
        let h = harness().await;
        let case = h
            .service
            .open_case(OpenCase {
                report_id: h.report.id,
                category: "lighting".to_string(),
            })
            .await
            .unwrap();

        h.service
            .update_status(case.id, CaseStatus::InProgress)
            .await
            .unwrap();

        let events = h.publisher.published().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventType::CaseStatusChanged);
        assert_eq!(events[0].recipient_id, h.report.user_id);
    }

    #[tokio::test]
    async fn test_status_update_succeeds_when_broker_is_down() {
        let h = harness().await;
        let case = h
            .service
            .open_case(OpenCase {
                report_id: h.report.id,
                category: "lighting".to_string(),
            })
            .await
            .unwrap();

        h.publisher.set_failing(true);

        let updated = h
            .service
            .update_status(case.id, CaseStatus::Closed)
            .await
            .unwrap();

        assert_eq!(updated.status, CaseStatus::Closed);
    }
}
