use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, CreateContact};

/// Repository trait for Contact persistence
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Create a new lead contact
    async fn create(&self, input: CreateContact) -> ContactResult<Contact>;

    /// Get a contact by ID
    async fn get_by_id(&self, id: Uuid) -> ContactResult<Option<Contact>>;

    /// Get a contact by email
    async fn get_by_email(&self, email: &str) -> ContactResult<Option<Contact>>;
}

/// In-memory implementation of ContactRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryContactRepository {
    contacts: Arc<RwLock<HashMap<Uuid, Contact>>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a pre-built contact, bypassing intake. Test seam for
    /// exercising non-lead lifecycle states.
    pub async fn seed(&self, contact: Contact) {
        self.contacts.write().await.insert(contact.id, contact);
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, input: CreateContact) -> ContactResult<Contact> {
        let mut contacts = self.contacts.write().await;

        // Check for duplicate email
        let email_exists = contacts
            .values()
            .any(|c| c.email.to_lowercase() == input.email.to_lowercase());

        if email_exists {
            return Err(ContactError::DuplicateEmail(input.email));
        }

        let contact = Contact::new(input);
        contacts.insert(contact.id, contact.clone());

        tracing::info!(contact_id = %contact.id, "Created contact");
        Ok(contact)
    }

    async fn get_by_id(&self, id: Uuid) -> ContactResult<Option<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> ContactResult<Option<Contact>> {
        let contacts = self.contacts.read().await;
        let contact = contacts
            .values()
            .find(|c| c.email.to_lowercase() == email.to_lowercase())
            .cloned();
        Ok(contact)
    }
}
