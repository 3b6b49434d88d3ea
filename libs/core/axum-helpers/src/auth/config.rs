use core_config::{env_or_default, env_required, ConfigError, FromEnv};

/// JWT configuration
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// HS256 signing secret
    pub secret: String,
    /// Lifetime of single-purpose temp tokens, in seconds
    pub temp_token_ttl: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            temp_token_ttl: 900,
        }
    }
}

impl FromEnv for JwtConfig {
    /// Reads from environment variables:
    /// - JWT_SECRET: required
    /// - TEMP_TOKEN_TTL_SECONDS: defaults to 900 (15 minutes)
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;
        let temp_token_ttl = env_or_default("TEMP_TOKEN_TTL_SECONDS", "900")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "TEMP_TOKEN_TTL_SECONDS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            secret,
            temp_token_ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_requires_secret() {
        temp_env::with_var_unset("JWT_SECRET", || {
            let err = JwtConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("JWT_SECRET"));
        });
    }

    #[test]
    fn test_jwt_config_ttl_default() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some("test-secret")),
                ("TEMP_TOKEN_TTL_SECONDS", None),
            ],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.temp_token_ttl, 900);
            },
        );
    }

    #[test]
    fn test_jwt_config_ttl_override() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some("test-secret")),
                ("TEMP_TOKEN_TTL_SECONDS", Some("300")),
            ],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.temp_token_ttl, 300);
            },
        );
    }
}
