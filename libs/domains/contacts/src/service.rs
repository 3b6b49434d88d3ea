use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, CreateContact};
use crate::repository::ContactRepository;

/// Service layer for contact intake
#[derive(Clone)]
pub struct ContactService<R: ContactRepository> {
    repository: Arc<R>,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new lead contact
    pub async fn create_contact(&self, input: CreateContact) -> ContactResult<Contact> {
        if self
            .repository
            .get_by_email(&input.email)
            .await?
            .is_some()
        {
            return Err(ContactError::DuplicateEmail(input.email));
        }

        self.repository.create(input).await
    }

    /// Get a contact by ID
    pub async fn get_contact(&self, id: Uuid) -> ContactResult<Contact> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ContactError::NotFound(id))
    }
}
