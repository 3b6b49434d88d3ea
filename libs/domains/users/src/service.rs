use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use domain_contacts::repository::ContactRepository;
use domain_notifications::{
    Channel, EventMessageProvider, EventPublisher, EventType, NotificationEvent, PURPOSE_2FA,
    RECIPIENT_USER,
};

use crate::error::{UserError, UserResult};
use crate::hashing::HashService;
use crate::models::{
    LoginRequest, LoginResponse, RegisterRequest, User, UserAddress, UserResponse, UserRole,
};
use crate::repository::UserRepository;
use crate::tokens::{TempTokenPayload, TokenService, PURPOSE_USER_VERIFICATION};

/// Registration and login workflows.
///
/// Collaborators are injected at construction and wired once at process
/// start; there is no ambient registry.
#[derive(Clone)]
pub struct AuthService<U: UserRepository, C: ContactRepository> {
    users: Arc<U>,
    contacts: Arc<C>,
    hasher: Arc<dyn HashService>,
    tokens: Arc<dyn TokenService>,
    messages: EventMessageProvider,
    publisher: Arc<dyn EventPublisher>,
}

impl<U: UserRepository, C: ContactRepository> AuthService<U, C> {
    pub fn new(
        users: U,
        contacts: C,
        hasher: Arc<dyn HashService>,
        tokens: Arc<dyn TokenService>,
        messages: EventMessageProvider,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            users: Arc::new(users),
            contacts: Arc::new(contacts),
            hasher,
            tokens,
            messages,
            publisher,
        }
    }

    /// Convert a lead contact into a credentialed user.
    ///
    /// On success one user row exists, a verification notification has
    /// been handed to the broker (best effort), and the returned temp
    /// token drives the follow-up verification step.
    pub async fn register(&self, input: RegisterRequest) -> UserResult<String> {
        let contact_id = Uuid::parse_str(&input.contact_id)
            .map_err(|_| UserError::InvalidIdentifier(input.contact_id.clone()))?;

        let contact = self
            .contacts
            .get_by_id(contact_id)
            .await?
            .ok_or(UserError::ContactNotFound(contact_id))?;

        if !contact.is_lead() {
            return Err(UserError::ContactAlreadyRegistered(contact_id));
        }

        // Cheap pre-check so duplicate usernames fail before any hashing
        // work. The unique index behind `create` stays authoritative for
        // concurrent registrations.
        if self.users.get_by_username(&input.username).await?.is_some() {
            return Err(UserError::UsernameTaken(input.username));
        }

        let role = UserRole::from_str(&input.role)
            .map_err(|_| UserError::InvalidRole(input.role.clone()))?;
        let address = UserAddress::new(input.locality.clone(), input.street);

        if role == UserRole::Representative {
            let representatives = self
                .users
                .list_by_role_and_locality(role, &input.locality)
                .await?;

            if representatives.iter().any(User::is_verified) {
                return Err(UserError::RepresentativeExists(input.locality));
            }
        }

        self.validate_password(&input.password)?;
        let password_hash = self.hasher.hash(&input.password)?;

        let user = User::new(input.username, password_hash, &contact, role, address);
        let user = self.users.create(user).await?;

        let payload = TempTokenPayload {
            user_id: user.id,
            purpose: PURPOSE_USER_VERIFICATION.to_string(),
            role,
        };
        let token = self.tokens.generate_temp_token(&payload)?;

        let message = self
            .messages
            .message(EventType::UserVerification)
            .map_err(|e| {
                tracing::error!(error = %e, "Notification template missing");
                UserError::Internal(e.to_string())
            })?;

        let event = NotificationEvent::new(
            user.id,
            RECIPIENT_USER,
            &user.email,
            &user.phone,
            message,
            Channel::Whatsapp,
            PURPOSE_2FA,
            EventType::UserVerification,
        );

        // Fire-and-forget: the user row is already committed and broker
        // unavailability must not fail the registration.
        if let Err(e) = self.publisher.publish(&event).await {
            tracing::warn!(
                user_id = %user.id,
                error = %e,
                "Failed to publish verification notification"
            );
        }

        Ok(token)
    }

    /// Verify credentials and issue an access token.
    pub async fn login(&self, input: LoginRequest) -> UserResult<LoginResponse> {
        let user = self
            .users
            .get_by_username(&input.username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.hasher.verify(&input.password, &user.password_hash)? {
            return Err(UserError::InvalidCredentials);
        }

        let token = self.tokens.generate_access_token(&user)?;

        Ok(LoginResponse {
            user: user.into(),
            token,
        })
    }

    fn validate_password(&self, password: &str) -> UserResult<()> {
        if password.len() < 8 {
            return Err(UserError::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        if password.len() > 128 {
            return Err(UserError::Validation(
                "Password cannot exceed 128 characters".to_string(),
            ));
        }

        Ok(())
    }
}

/// User lookups and the account-verification step.
#[derive(Clone)]
pub struct UserService<U: UserRepository> {
    repository: Arc<U>,
    tokens: Arc<dyn TokenService>,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(repository: U, tokens: Arc<dyn TokenService>) -> Self {
        Self {
            repository: Arc::new(repository),
            tokens,
        }
    }

    /// Get a user by username
    pub async fn find_by_username(&self, username: &str) -> UserResult<UserResponse> {
        let user = self
            .repository
            .get_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFound(format!("'{}'", username)))?;

        Ok(user.into())
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: Uuid) -> UserResult<UserResponse> {
        let user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        Ok(user.into())
    }

    /// Mark a user as verified, consuming the registration temp token.
    pub async fn verify_user(&self, id: Uuid, token: &str) -> UserResult<UserResponse> {
        let payload = self.tokens.verify_temp_token(token)?;

        if payload.user_id != id {
            return Err(UserError::InvalidVerificationToken);
        }

        let user = self.repository.set_verified(id).await?;
        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::{Argon2HashService, MockHashService};
    use crate::repository::InMemoryUserRepository;
    use crate::tokens::JwtTokenService;
    use axum_helpers::{JwtAuth, JwtConfig};
    use domain_contacts::{Contact, ContactStatus, CreateContact, InMemoryContactRepository};
    use domain_notifications::InMemoryEventPublisher;

    struct Harness {
        auth: AuthService<InMemoryUserRepository, InMemoryContactRepository>,
        users: InMemoryUserRepository,
        contacts: InMemoryContactRepository,
        publisher: InMemoryEventPublisher,
        tokens: Arc<dyn TokenService>,
    }

    fn harness() -> Harness {
        harness_with_hasher(Arc::new(Argon2HashService::new()))
    }

    fn harness_with_hasher(hasher: Arc<dyn HashService>) -> Harness {
        let users = InMemoryUserRepository::new();
        let contacts = InMemoryContactRepository::new();
        let publisher = InMemoryEventPublisher::new();
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtAuth::new(
            &JwtConfig::new("service-test-secret"),
        )));

        let auth = AuthService::new(
            users.clone(),
            contacts.clone(),
            hasher,
            tokens.clone(),
            EventMessageProvider::new(),
            Arc::new(publisher.clone()),
        );

        Harness {
            auth,
            users,
            contacts,
            publisher,
            tokens,
        }
    }

    async fn seed_lead(harness: &Harness, email: &str) -> Contact {
        harness
            .contacts
            .create(CreateContact {
                email: email.to_string(),
                phone: "+34600111222".to_string(),
            })
            .await
            .unwrap()
    }

    fn request(contact_id: &str, username: &str, role: &str, locality: &str) -> RegisterRequest {
        RegisterRequest {
            contact_id: contact_id.to_string(),
            username: username.to_string(),
            password: "S3cure-password".to_string(),
            role: role.to_string(),
            locality: locality.to_string(),
            street: "Evergreen Terrace 742".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_rejects_malformed_contact_id() {
        let h = harness();

        let result = h.auth.register(request("not-a-uuid", "ana", "citizen", "Springfield")).await;

        assert!(matches!(result, Err(UserError::InvalidIdentifier(_))));
        assert_eq!(h.users.count().await, 0);
    }

    #[tokio::test]
    async fn test_register_unknown_contact_fails_with_no_writes() {
        let h = harness();

        let result = h
            .auth
            .register(request(&Uuid::new_v4().to_string(), "ana", "citizen", "Springfield"))
            .await;

        assert!(matches!(result, Err(UserError::ContactNotFound(_))));
        assert_eq!(h.users.count().await, 0);
        assert!(h.publisher.published().await.is_empty());
    }

    #[tokio::test]
    async fn test_register_non_lead_contact_fails_with_no_writes() {
        let h = harness();
        let mut contact = Contact::new(CreateContact {
            email: "ana@example.com".to_string(),
            phone: "+34600111222".to_string(),
        });
        contact.status = ContactStatus::Registered;
        h.contacts.seed(contact.clone()).await;

        let result = h
            .auth
            .register(request(&contact.id.to_string(), "ana", "citizen", "Springfield"))
            .await;

        assert!(matches!(result, Err(UserError::ContactAlreadyRegistered(_))));
        assert_eq!(h.users.count().await, 0);
        assert!(h.publisher.published().await.is_empty());
    }

    #[tokio::test]
    async fn test_register_duplicate_username_fails_before_any_hashing() {
        let mut mock = MockHashService::new();
        // Only the first registration may hash; the duplicate must be
        // rejected before the hashing step.
        mock.expect_hash()
            .times(1)
            .returning(|_| Ok("hashed".to_string()));

        let h = harness_with_hasher(Arc::new(mock));

        let first = seed_lead(&h, "ana@example.com").await;
        h.auth
            .register(request(&first.id.to_string(), "ana", "citizen", "Springfield"))
            .await
            .unwrap();

        let second = seed_lead(&h, "bea@example.com").await;
        let result = h
            .auth
            .register(request(&second.id.to_string(), "Ana", "citizen", "Shelbyville"))
            .await;

        assert!(matches!(result, Err(UserError::UsernameTaken(_))));
        assert_eq!(h.users.count().await, 1);
        assert_eq!(h.publisher.published().await.len(), 1);
    }

    #[tokio::test]
    async fn test_register_unknown_role_fails() {
        let h = harness();
        let contact = seed_lead(&h, "ana@example.com").await;

        let result = h
            .auth
            .register(request(&contact.id.to_string(), "ana", "mayor", "Springfield"))
            .await;

        assert!(matches!(result, Err(UserError::InvalidRole(_))));
        assert_eq!(h.users.count().await, 0);
    }

    #[tokio::test]
    async fn test_register_rejects_second_verified_representative_in_locality() {
        let h = harness();

        let first = seed_lead(&h, "r0@example.com").await;
        h.auth
            .register(request(&first.id.to_string(), "r0", "REPRESENTATIVE", "Springfield"))
            .await
            .unwrap();
        let existing = h.users.get_by_username("r0").await.unwrap().unwrap();
        h.users.set_verified(existing.id).await.unwrap();

        let second = seed_lead(&h, "newrep@example.com").await;
        let result = h
            .auth
            .register(request(&second.id.to_string(), "newrep", "REPRESENTATIVE", "Springfield"))
            .await;

        match result {
            Err(UserError::RepresentativeExists(locality)) => {
                assert_eq!(locality, "Springfield");
            }
            other => panic!("Expected RepresentativeExists, got {:?}", other),
        }
        assert_eq!(h.users.count().await, 1);
        assert_eq!(h.publisher.published().await.len(), 1);
    }

    #[tokio::test]
    async fn test_register_allows_representative_when_existing_one_is_unverified() {
        let h = harness();

        let first = seed_lead(&h, "r0@example.com").await;
        h.auth
            .register(request(&first.id.to_string(), "r0", "REPRESENTATIVE", "Springfield"))
            .await
            .unwrap();

        let second = seed_lead(&h, "newrep@example.com").await;
        let token = h
            .auth
            .register(request(&second.id.to_string(), "newrep", "REPRESENTATIVE", "Springfield"))
            .await
            .unwrap();

        assert!(!token.is_empty());
        assert_eq!(h.users.count().await, 2);
    }

    #[tokio::test]
    async fn test_register_happy_path_persists_user_and_publishes_event() {
        let h = harness();
        let contact = seed_lead(&h, "newrep@example.com").await;

        let token = h
            .auth
            .register(request(&contact.id.to_string(), "newrep", "REPRESENTATIVE", "Springfield"))
            .await
            .unwrap();

        assert!(!token.is_empty());

        // Exactly one user, representative, not yet verified
        assert_eq!(h.users.count().await, 1);
        let user = h.users.get_by_username("newrep").await.unwrap().unwrap();
        assert_eq!(user.role, UserRole::Representative);
        assert!(!user.verified);
        assert_eq!(user.contact_id, contact.id);

        // Exactly one notification, on WhatsApp, for verification
        let events = h.publisher.published().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventType::UserVerification);
        assert_eq!(events[0].channel, Channel::Whatsapp);
        assert_eq!(events[0].purpose, PURPOSE_2FA);
        assert_eq!(events[0].recipient_id, user.id);
        assert_eq!(events[0].email, "newrep@example.com");

        // The token is a valid verification temp token for the new user
        let payload = h.tokens.verify_temp_token(&token).unwrap();
        assert_eq!(payload.user_id, user.id);
        assert_eq!(payload.purpose, PURPOSE_USER_VERIFICATION);
    }

    #[tokio::test]
    async fn test_register_succeeds_when_broker_is_down() {
        let h = harness();
        h.publisher.set_failing(true);
        let contact = seed_lead(&h, "ana@example.com").await;

        let token = h
            .auth
            .register(request(&contact.id.to_string(), "ana", "citizen", "Springfield"))
            .await
            .unwrap();

        assert!(!token.is_empty());
        assert_eq!(h.users.count().await, 1);
    }

    #[tokio::test]
    async fn test_register_never_stores_plaintext_password() {
        let h = harness();
        let contact = seed_lead(&h, "ana@example.com").await;

        h.auth
            .register(request(&contact.id.to_string(), "ana", "citizen", "Springfield"))
            .await
            .unwrap();

        let user = h.users.get_by_username("ana").await.unwrap().unwrap();
        assert_ne!(user.password_hash, "S3cure-password");

        let hasher = Argon2HashService::new();
        assert!(hasher.verify("S3cure-password", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_register_rejects_short_password() {
        let h = harness();
        let contact = seed_lead(&h, "ana@example.com").await;

        let mut input = request(&contact.id.to_string(), "ana", "citizen", "Springfield");
        input.password = "short".to_string();

        let result = h.auth.register(input).await;
        assert!(matches!(result, Err(UserError::Validation(_))));
        assert_eq!(h.users.count().await, 0);
    }

    #[tokio::test]
    async fn test_login_round_trip() {
        let h = harness();
        let contact = seed_lead(&h, "ana@example.com").await;
        h.auth
            .register(request(&contact.id.to_string(), "ana", "citizen", "Springfield"))
            .await
            .unwrap();

        let response = h
            .auth
            .login(LoginRequest {
                username: "ana".to_string(),
                password: "S3cure-password".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.user.username, "ana");
        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let h = harness();
        let contact = seed_lead(&h, "ana@example.com").await;
        h.auth
            .register(request(&contact.id.to_string(), "ana", "citizen", "Springfield"))
            .await
            .unwrap();

        let result = h
            .auth
            .login(LoginRequest {
                username: "ana".to_string(),
                password: "wrong-password".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_user_reports_invalid_credentials() {
        let h = harness();

        let result = h
            .auth
            .login(LoginRequest {
                username: "ghost".to_string(),
                password: "S3cure-password".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_verify_user_consumes_registration_token() {
        let h = harness();
        let contact = seed_lead(&h, "ana@example.com").await;
        let token = h
            .auth
            .register(request(&contact.id.to_string(), "ana", "citizen", "Springfield"))
            .await
            .unwrap();

        let user = h.users.get_by_username("ana").await.unwrap().unwrap();
        let service = UserService::new(h.users.clone(), h.tokens.clone());

        let verified = service.verify_user(user.id, &token).await.unwrap();
        assert!(verified.verified);
    }

    #[tokio::test]
    async fn test_verify_user_rejects_token_for_other_user() {
        let h = harness();
        let contact = seed_lead(&h, "ana@example.com").await;
        let token = h
            .auth
            .register(request(&contact.id.to_string(), "ana", "citizen", "Springfield"))
            .await
            .unwrap();

        let service = UserService::new(h.users.clone(), h.tokens.clone());

        let result = service.verify_user(Uuid::new_v4(), &token).await;
        assert!(matches!(result, Err(UserError::InvalidVerificationToken)));
    }
}
