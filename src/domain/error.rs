//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Business-rule violations.
///
/// Each variant carries a fixed, human-readable message used verbatim by
/// callers for user display. "Not found" and "not owned" are never errors
/// in this core: those conditions collapse into `None`/`false` results so
/// that foreign expenses stay indistinguishable from nonexistent ones.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// Submitted or updated amount was zero or negative
    #[error("Amount must be greater than 0")]
    InvalidAmount,

    /// Submitted or updated description was empty after trimming
    #[error("Description is required")]
    MissingDescription,

    /// Attempted to edit an expense whose approval left `Pending`
    #[error("Cannot edit expense that has been reviewed")]
    EditAfterReview,

    /// Attempted to delete an expense whose approval left `Pending`
    #[error("Cannot delete expense that has been reviewed")]
    DeleteAfterReview,
}

impl DomainError {
    /// Input validation failure (bad amount/description).
    pub fn is_validation(self) -> bool {
        matches!(self, Self::InvalidAmount | Self::MissingDescription)
    }

    /// Workflow-state failure (expense already reviewed).
    pub fn is_state_violation(self) -> bool {
        matches!(self, Self::EditAfterReview | Self::DeleteAfterReview)
    }
}
