use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{CaseError, CaseResult};
use crate::models::{CaseStatus, ServiceCase};

/// Repository trait for ServiceCase persistence
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// Persist a new case
    async fn create(&self, case: ServiceCase) -> CaseResult<ServiceCase>;

    /// Get a case by ID
    async fn get_by_id(&self, id: Uuid) -> CaseResult<Option<ServiceCase>>;

    /// All cases for a user, newest first
    async fn list_by_user(&self, user_id: Uuid) -> CaseResult<Vec<ServiceCase>>;

    /// Update a case's status
    async fn update_status(&self, id: Uuid, status: CaseStatus) -> CaseResult<ServiceCase>;
}

/// In-memory implementation of CaseRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCaseRepository {
    cases: Arc<RwLock<HashMap<Uuid, ServiceCase>>>,
}

impl InMemoryCaseRepository {
    pub fn new() -> Self {
        Self {
            cases: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl CaseRepository for InMemoryCaseRepository {
    async fn create(&self, case: ServiceCase) -> CaseResult<ServiceCase> {
        let mut cases = self.cases.write().await;
        cases.insert(case.id, case.clone());

        tracing::info!(case_id = %case.id, report_id = %case.report_id, "Opened case");
        Ok(case)
    }

    async fn get_by_id(&self, id: Uuid) -> CaseResult<Option<ServiceCase>> {
        let cases = self.cases.read().await;
        Ok(cases.get(&id).cloned())
    }

    async fn list_by_user(&self, user_id: Uuid) -> CaseResult<Vec<ServiceCase>> {
        let cases = self.cases.read().await;

        let mut result: Vec<ServiceCase> = cases
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn update_status(&self, id: Uuid, status: CaseStatus) -> CaseResult<ServiceCase> {
        let mut cases = self.cases.write().await;

        let case = cases.get_mut(&id).ok_or(CaseError::NotFound(id))?;
        case.status = status;
        case.updated_at = chrono::Utc::now();

        tracing::info!(case_id = %id, status = %status, "Updated case status");
        Ok(case.clone())
    }
}
