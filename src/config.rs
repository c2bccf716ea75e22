//! Configuration module
//!
//! Loads configuration from environment variables. The signing secret and
//! token TTL are injected into `AuthenticationService` at construction;
//! nothing here is module-level state.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Secret key for signing session tokens
    pub jwt_secret_key: String,

    /// Session token lifetime in hours
    pub token_ttl_hours: i64,
}

/// Default session token lifetime
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret_key =
            env::var("JWT_SECRET_KEY").map_err(|_| ConfigError::MissingEnv("JWT_SECRET_KEY"))?;

        let token_ttl_hours = match env::var("TOKEN_TTL_HOURS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TOKEN_TTL_HOURS"))?,
            Err(_) => DEFAULT_TOKEN_TTL_HOURS,
        };

        Ok(Self {
            jwt_secret_key,
            token_ttl_hours,
        })
    }

    /// Load a `.env` file if present, then read the environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Token lifetime as a duration
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.token_ttl_hours)
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_ttl_conversion() {
        let config = Config {
            jwt_secret_key: "test_key".to_string(),
            token_ttl_hours: 24,
        };
        assert_eq!(config.token_ttl(), chrono::Duration::hours(24));
    }
}
