use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token time-to-live (15 minutes)
pub const ACCESS_TOKEN_TTL: i64 = 900;

/// Purpose claim carried by regular access tokens
pub const PURPOSE_ACCESS: &str = "ACCESS";

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,     // Subject (user ID)
    pub purpose: String, // What the token authorizes (ACCESS or a temp purpose)
    pub role: String,    // User role
    pub exp: i64,        // Expiration time
    pub iat: i64,        // Issued at
    pub jti: String,     // JWT ID
}

/// Stateless HS256 JWT issuing and verification
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
    temp_token_ttl: i64,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            temp_token_ttl: config.temp_token_ttl,
        }
    }

    /// Create an access token (15 min) for a logged-in user
    pub fn create_access_token(&self, user_id: &str, role: &str) -> eyre::Result<String> {
        self.create_token(user_id, PURPOSE_ACCESS, role, ACCESS_TOKEN_TTL)
    }

    /// Create a single-purpose temp token (e.g. USER_VERIFICATION).
    ///
    /// Temp tokens are short-lived and are not accepted by the access-token
    /// middleware; their purpose claim must be checked by the consuming
    /// workflow.
    pub fn create_temp_token(
        &self,
        user_id: &str,
        purpose: &str,
        role: &str,
    ) -> eyre::Result<String> {
        self.create_token(user_id, purpose, role, self.temp_token_ttl)
    }

    fn create_token(
        &self,
        user_id: &str,
        purpose: &str,
        role: &str,
        ttl_seconds: i64,
    ) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id.to_string(),
            purpose: purpose.to_string(),
            role: role.to_string(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify token signature and expiry, returning the decoded claims
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(jsonwebtoken::Algorithm::HS256),
        )?;

        Ok(token_data.claims)
    }
}
