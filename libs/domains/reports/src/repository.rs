use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ReportError, ReportResult};
use crate::models::{Report, ReportStatus};

/// Repository trait for Report persistence
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Persist a new report
    async fn create(&self, report: Report) -> ReportResult<Report>;

    /// Get a report by ID
    async fn get_by_id(&self, id: Uuid) -> ReportResult<Option<Report>>;

    /// All reports for a locality, newest first
    async fn list_by_locality(&self, locality: &str) -> ReportResult<Vec<Report>>;

    /// All reports created by a user, newest first
    async fn list_by_user(&self, user_id: Uuid) -> ReportResult<Vec<Report>>;

    /// Update a report's status
    async fn update_status(&self, id: Uuid, status: ReportStatus) -> ReportResult<Report>;

    /// Update a report's description
    async fn update_description(&self, id: Uuid, description: String) -> ReportResult<Report>;
}

/// In-memory implementation of ReportRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryReportRepository {
    reports: Arc<RwLock<HashMap<Uuid, Report>>>,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self {
            reports: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn create(&self, report: Report) -> ReportResult<Report> {
        let mut reports = self.reports.write().await;
        reports.insert(report.id, report.clone());

        tracing::info!(report_id = %report.id, locality = %report.locality, "Created report");
        Ok(report)
    }

    async fn get_by_id(&self, id: Uuid) -> ReportResult<Option<Report>> {
        let reports = self.reports.read().await;
        Ok(reports.get(&id).cloned())
    }

    async fn list_by_locality(&self, locality: &str) -> ReportResult<Vec<Report>> {
        let reports = self.reports.read().await;

        let mut result: Vec<Report> = reports
            .values()
            .filter(|r| r.locality == locality)
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn list_by_user(&self, user_id: Uuid) -> ReportResult<Vec<Report>> {
        let reports = self.reports.read().await;

        let mut result: Vec<Report> = reports
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn update_status(&self, id: Uuid, status: ReportStatus) -> ReportResult<Report> {
        let mut reports = self.reports.write().await;

        let report = reports.get_mut(&id).ok_or(ReportError::NotFound(id))?;
        report.status = status;
        report.updated_at = chrono::Utc::now();

        tracing::info!(report_id = %id, status = %status, "Updated report status");
        Ok(report.clone())
    }

    async fn update_description(&self, id: Uuid, description: String) -> ReportResult<Report> {
        let mut reports = self.reports.write().await;

        let report = reports.get_mut(&id).ok_or(ReportError::NotFound(id))?;
        report.description = description;
        report.updated_at = chrono::Utc::now();

        tracing::info!(report_id = %id, "Updated report description");
        Ok(report.clone())
    }
}
