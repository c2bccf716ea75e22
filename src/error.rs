//! Error handling module
//!
//! Centralized error types for the core services.
//!
//! "Not found" and "not owned" are never errors: they collapse into
//! `None`/`false` results so foreign resources stay opaque. Business-rule
//! violations are recoverable `DomainError`s carrying fixed messages.
//! Repository failures propagate unmodified for the transport layer to
//! turn into 5xx-class responses.

use crate::config::ConfigError;
use crate::domain::DomainError;
use crate::repository::RepositoryError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Business-rule violations (4xx)
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Infrastructure failures (5xx)
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("token encoding failed: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Whether the caller should map this to a 400-class response.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Domain(_))
    }

    /// The underlying business-rule violation, if that is what this is.
    pub fn as_domain(&self) -> Option<DomainError> {
        match self {
            AppError::Domain(err) => Some(*err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_client_errors() {
        let err = AppError::from(DomainError::InvalidAmount);
        assert!(err.is_client_error());
        assert_eq!(err.as_domain(), Some(DomainError::InvalidAmount));
        // The fixed message survives the wrapping.
        assert_eq!(err.to_string(), "Amount must be greater than 0");
    }

    #[test]
    fn test_repository_errors_are_not_client_errors() {
        let err = AppError::from(RepositoryError::storage("backend down"));
        assert!(!err.is_client_error());
        assert!(err.as_domain().is_none());
    }
}
