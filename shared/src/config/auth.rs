//! Authentication configuration: token signing and revocation housekeeping

use serde::{Deserialize, Serialize};

use super::{env_parse, env_required, ConfigError};

/// Longest accepted token lifetime: ten years, in seconds
pub const MAX_TOKEN_DURATION_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

/// Secret and lifetime for one token kind
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TokenKindConfig {
    /// HMAC secret used to sign and verify this kind
    #[serde(skip_serializing)]
    pub secret: String,

    /// Token lifetime in seconds
    pub duration_seconds: i64,
}

impl TokenKindConfig {
    pub fn new(secret: impl Into<String>, duration_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            duration_seconds,
        }
    }
}

/// JWT signing configuration, one entry per token kind
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct JwtConfig {
    /// Access token secret and lifetime
    pub access: TokenKindConfig,

    /// Refresh token secret and lifetime
    pub refresh: TokenKindConfig,
}

impl JwtConfig {
    /// Create from `TOKEN_SECRET`, `TOKEN_DURATION`, `REFRESH_SECRET` and `REFRESH_DURATION`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            access: TokenKindConfig {
                secret: env_required("TOKEN_SECRET")?,
                duration_seconds: env_parse("TOKEN_DURATION", 3600)?,
            },
            refresh: TokenKindConfig {
                secret: env_required("REFRESH_SECRET")?,
                duration_seconds: env_parse("REFRESH_DURATION", 86400)?,
            },
        })
    }

    /// Secrets must be present and distinct, lifetimes positive and bounded
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, kind) in [("TOKEN", &self.access), ("REFRESH", &self.refresh)] {
            if kind.secret.is_empty() {
                return Err(ConfigError::Missing(format!("{}_SECRET", key)));
            }
            if kind.duration_seconds <= 0 {
                return Err(ConfigError::Invalid {
                    key: format!("{}_DURATION", key),
                    message: "must be a positive number of seconds".to_string(),
                });
            }
            if kind.duration_seconds > MAX_TOKEN_DURATION_SECONDS {
                return Err(ConfigError::Invalid {
                    key: format!("{}_DURATION", key),
                    message: format!("must be at most {} seconds", MAX_TOKEN_DURATION_SECONDS),
                });
            }
        }
        if self.access.secret == self.refresh.secret {
            return Err(ConfigError::Invalid {
                key: "REFRESH_SECRET".to_string(),
                message: "must differ from TOKEN_SECRET".to_string(),
            });
        }
        Ok(())
    }
}

/// Background sweep of revocation records whose tokens have expired
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RevocationCleanupConfig {
    /// Whether the sweep runs at all
    pub enabled: bool,

    /// Seconds between sweeps
    pub interval_seconds: u64,
}

impl Default for RevocationCleanupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_seconds: 3600,
        }
    }
}

impl RevocationCleanupConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            enabled: env_parse("REVOCATION_CLEANUP_ENABLED", defaults.enabled)?,
            interval_seconds: env_parse(
                "REVOCATION_CLEANUP_INTERVAL",
                defaults.interval_seconds,
            )?,
        })
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt cost factor for stored passwords
    pub bcrypt_cost: u32,

    /// Revocation sweep
    #[serde(default)]
    pub cleanup: RevocationCleanupConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt: JwtConfig::from_env()?,
            bcrypt_cost: env_parse("BCRYPT_COST", 12)?,
            cleanup: RevocationCleanupConfig::from_env()?,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt.validate()?;
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST".to_string(),
                message: "must be between 4 and 31".to_string(),
            });
        }
        if self.cleanup.enabled && self.cleanup.interval_seconds == 0 {
            return Err(ConfigError::Invalid {
                key: "REVOCATION_CLEANUP_INTERVAL".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt(access: &str, refresh: &str) -> JwtConfig {
        JwtConfig {
            access: TokenKindConfig::new(access, 3600),
            refresh: TokenKindConfig::new(refresh, 86400),
        }
    }

    #[test]
    fn test_distinct_secrets_are_accepted() {
        assert!(jwt("access-secret", "refresh-secret").validate().is_ok());
    }

    #[test]
    fn test_equal_secrets_are_rejected() {
        let err = jwt("same", "same").validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "REFRESH_SECRET"));
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        assert_eq!(
            jwt("", "refresh").validate(),
            Err(ConfigError::Missing("TOKEN_SECRET".to_string()))
        );
    }

    #[test]
    fn test_non_positive_duration_is_rejected() {
        let mut config = jwt("a", "b");
        config.refresh.duration_seconds = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { ref key, .. }) if key == "REFRESH_DURATION"
        ));
    }

    #[test]
    fn test_huge_duration_is_rejected() {
        let mut config = jwt("a", "b");
        config.access.duration_seconds = i64::MAX;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { ref key, .. }) if key == "TOKEN_DURATION"
        ));

        config.access.duration_seconds = MAX_TOKEN_DURATION_SECONDS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bcrypt_cost_bounds() {
        let config = AuthConfig {
            jwt: jwt("a", "b"),
            bcrypt_cost: 2,
            cleanup: RevocationCleanupConfig::default(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_secret_is_not_serialized() {
        let json = serde_json::to_string(&TokenKindConfig::new("hunter2", 60)).unwrap();
        assert!(!json.contains("hunter2"));
    }
}
