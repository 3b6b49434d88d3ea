//! Token issuing behind a narrow interface.

use axum_helpers::{JwtAuth, JwtClaims};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserRole};

/// Purpose claim of the registration follow-up token.
pub const PURPOSE_USER_VERIFICATION: &str = "USER_VERIFICATION";

/// Payload embedded in a temp token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempTokenPayload {
    pub user_id: Uuid,
    pub purpose: String,
    pub role: UserRole,
}

/// Issues and checks the signed tokens this context hands out: short-lived
/// temp tokens driving the verification step, and access tokens for
/// logged-in users.
pub trait TokenService: Send + Sync {
    /// Issue a time-boxed temp token carrying the given payload.
    fn generate_temp_token(&self, payload: &TempTokenPayload) -> UserResult<String>;

    /// Decode and check a temp token, requiring the USER_VERIFICATION
    /// purpose.
    fn verify_temp_token(&self, token: &str) -> UserResult<TempTokenPayload>;

    /// Issue an access token for a logged-in user.
    fn generate_access_token(&self, user: &User) -> UserResult<String>;
}

/// JWT-backed implementation of [`TokenService`].
#[derive(Clone)]
pub struct JwtTokenService {
    auth: JwtAuth,
}

impl JwtTokenService {
    pub fn new(auth: JwtAuth) -> Self {
        Self { auth }
    }
}

impl TokenService for JwtTokenService {
    fn generate_temp_token(&self, payload: &TempTokenPayload) -> UserResult<String> {
        self.auth
            .create_temp_token(
                &payload.user_id.to_string(),
                &payload.purpose,
                &payload.role.to_string(),
            )
            .map_err(|e| UserError::Token(e.to_string()))
    }

    fn verify_temp_token(&self, token: &str) -> UserResult<TempTokenPayload> {
        let claims: JwtClaims = self
            .auth
            .verify_token(token)
            .map_err(|_| UserError::InvalidVerificationToken)?;

        if claims.purpose != PURPOSE_USER_VERIFICATION {
            return Err(UserError::InvalidVerificationToken);
        }

        let user_id =
            Uuid::parse_str(&claims.sub).map_err(|_| UserError::InvalidVerificationToken)?;
        let role =
            UserRole::from_str(&claims.role).map_err(|_| UserError::InvalidVerificationToken)?;

        Ok(TempTokenPayload {
            user_id,
            purpose: claims.purpose,
            role,
        })
    }

    fn generate_access_token(&self, user: &User) -> UserResult<String> {
        self.auth
            .create_access_token(&user.id.to_string(), &user.role.to_string())
            .map_err(|e| UserError::Token(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::JwtConfig;

    fn service() -> JwtTokenService {
        JwtTokenService::new(JwtAuth::new(&JwtConfig::new("unit-test-secret")))
    }

    fn payload() -> TempTokenPayload {
        TempTokenPayload {
            user_id: Uuid::new_v4(),
            purpose: PURPOSE_USER_VERIFICATION.to_string(),
            role: UserRole::Representative,
        }
    }

    #[test]
    fn test_temp_token_round_trip() {
        let service = service();
        let payload = payload();

        let token = service.generate_temp_token(&payload).unwrap();
        assert!(!token.is_empty());

        let decoded = service.verify_temp_token(&token).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_access_token_is_rejected_as_temp_token() {
        let service = service();

        let contact = domain_contacts::Contact::new(domain_contacts::CreateContact {
            email: "ana@example.com".to_string(),
            phone: "+34600111222".to_string(),
        });
        let user = User::new(
            "ana".to_string(),
            "hash".to_string(),
            &contact,
            UserRole::Citizen,
            crate::models::UserAddress::new("Springfield", "Evergreen Terrace 742"),
        );

        let token = service.generate_access_token(&user).unwrap();
        let result = service.verify_temp_token(&token);
        assert!(matches!(result, Err(UserError::InvalidVerificationToken)));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let result = service().verify_temp_token("garbage");
        assert!(matches!(result, Err(UserError::InvalidVerificationToken)));
    }
}
