use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserRole};

/// Repository trait for User persistence
///
/// `create` is the single externally observable creation point; the
/// backing store must enforce username uniqueness and the
/// one-verified-representative-per-locality invariant, reporting
/// violations as `UsernameTaken` / `RepresentativeExists` so concurrent
/// registrations cannot both succeed.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    async fn create(&self, user: User) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Get a user by username
    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>>;

    /// All users holding a role within a locality
    async fn list_by_role_and_locality(
        &self,
        role: UserRole,
        locality: &str,
    ) -> UserResult<Vec<User>>;

    /// Mark a user as verified
    async fn set_verified(&self, id: Uuid) -> UserResult<User>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of persisted users. Test seam for no-write assertions.
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        // Uniqueness checks happen under the write lock, mirroring the
        // database constraints the Postgres implementation relies on.
        let username_exists = users
            .values()
            .any(|u| u.username.to_lowercase() == user.username.to_lowercase());

        if username_exists {
            return Err(UserError::UsernameTaken(user.username));
        }

        if user.role == UserRole::Representative && user.verified {
            let verified_rep_exists = users.values().any(|u| {
                u.role == UserRole::Representative
                    && u.verified
                    && u.address.locality == user.address.locality
            });

            if verified_rep_exists {
                return Err(UserError::RepresentativeExists(user.address.locality));
            }
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        let user = users
            .values()
            .find(|u| u.username.to_lowercase() == username.to_lowercase())
            .cloned();
        Ok(user)
    }

    async fn list_by_role_and_locality(
        &self,
        role: UserRole,
        locality: &str,
    ) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        let result = users
            .values()
            .filter(|u| u.role == role && u.address.locality == locality)
            .cloned()
            .collect();
        Ok(result)
    }

    async fn set_verified(&self, id: Uuid) -> UserResult<User> {
        let mut users = self.users.write().await;

        let (role, locality) = {
            let user = users
                .get(&id)
                .ok_or_else(|| UserError::NotFound(id.to_string()))?;
            (user.role, user.address.locality.clone())
        };

        if role == UserRole::Representative {
            let verified_rep_exists = users.values().any(|u| {
                u.id != id
                    && u.role == UserRole::Representative
                    && u.verified
                    && u.address.locality == locality
            });

            if verified_rep_exists {
                return Err(UserError::RepresentativeExists(locality));
            }
        }

        let user = users.get_mut(&id).ok_or_else(|| UserError::NotFound(id.to_string()))?;
        user.verified = true;
        user.updated_at = chrono::Utc::now();

        tracing::info!(user_id = %id, "Marked user as verified");
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserAddress;
    use domain_contacts::{Contact, CreateContact};

    fn contact(email: &str) -> Contact {
        Contact::new(CreateContact {
            email: email.to_string(),
            phone: "+34600111222".to_string(),
        })
    }

    fn user(username: &str, role: UserRole, locality: &str) -> User {
        User::new(
            username.to_string(),
            "hash".to_string(),
            &contact(&format!("{}@example.com", username)),
            role,
            UserAddress::new(locality, "Main Street 1"),
        )
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let repo = InMemoryUserRepository::new();

        let created = repo
            .create(user("ana", UserRole::Citizen, "Springfield"))
            .await
            .unwrap();

        let fetched = repo.get_by_username("ANA").await.unwrap();
        assert_eq!(fetched.unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_duplicate_username_error() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("ana", UserRole::Citizen, "Springfield"))
            .await
            .unwrap();

        let result = repo.create(user("Ana", UserRole::Citizen, "Shelbyville")).await;
        assert!(matches!(result, Err(UserError::UsernameTaken(_))));
    }

    #[tokio::test]
    async fn test_list_by_role_and_locality() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("rep1", UserRole::Representative, "Springfield"))
            .await
            .unwrap();
        repo.create(user("rep2", UserRole::Representative, "Shelbyville"))
            .await
            .unwrap();
        repo.create(user("cit1", UserRole::Citizen, "Springfield"))
            .await
            .unwrap();

        let reps = repo
            .list_by_role_and_locality(UserRole::Representative, "Springfield")
            .await
            .unwrap();
        assert_eq!(reps.len(), 1);
        assert_eq!(reps[0].username, "rep1");
    }

    #[tokio::test]
    async fn test_set_verified_enforces_one_representative_per_locality() {
        let repo = InMemoryUserRepository::new();
        let first = repo
            .create(user("rep1", UserRole::Representative, "Springfield"))
            .await
            .unwrap();
        let second = repo
            .create(user("rep2", UserRole::Representative, "Springfield"))
            .await
            .unwrap();

        repo.set_verified(first.id).await.unwrap();

        let result = repo.set_verified(second.id).await;
        assert!(matches!(result, Err(UserError::RepresentativeExists(_))));
    }

    #[tokio::test]
    async fn test_set_verified_allows_citizens_in_same_locality() {
        let repo = InMemoryUserRepository::new();
        let rep = repo
            .create(user("rep1", UserRole::Representative, "Springfield"))
            .await
            .unwrap();
        let citizen = repo
            .create(user("cit1", UserRole::Citizen, "Springfield"))
            .await
            .unwrap();

        repo.set_verified(rep.id).await.unwrap();
        let verified = repo.set_verified(citizen.id).await.unwrap();
        assert!(verified.verified);
    }
}
