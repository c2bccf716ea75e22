//! Repository module
//!
//! Trait contracts the persistence layer implements. The core composes
//! these as opaque collaborators: it never sees connection handles, SQL,
//! or schema concerns. Any conforming implementation (in-memory,
//! SQL-backed, ...) is substitutable.

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Approval, ApprovalStatus, Expense, User};

pub use memory::{
    InMemoryApprovalRepository, InMemoryExpenseRepository, InMemoryUserRepository, MemoryStore,
};

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Infrastructure failures raised by a repository implementation.
///
/// These propagate through the services unmodified; the transport layer
/// turns them into 5xx-class responses.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("storage failure: {0}")]
    Storage(String),

    #[error("conflict: {0}")]
    Conflict(String),
}

impl RepositoryError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

/// Lookup and persistence of user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>>;

    /// Persist a new user. `username` is unique; implementations reject
    /// duplicates with `RepositoryError::Conflict`.
    async fn create(&self, user: User) -> RepositoryResult<User>;
}

/// CRUD on expense records.
///
/// The read-check-write sequences in `ExpenseService::update_expense` and
/// `delete_expense` are check-then-act: implementations must make `update`
/// and `delete` conditional on the paired approval still being pending
/// (conditional write or transactional isolation spanning the check), or
/// concurrent reviewer transitions can interleave with a pending edit.
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Expense>>;

    async fn find_by_user_id(&self, user_id: Uuid) -> RepositoryResult<Vec<Expense>>;

    async fn create(&self, expense: Expense) -> RepositoryResult<Expense>;

    async fn update(&self, expense: Expense) -> RepositoryResult<Expense>;

    /// Delete an expense. Also removes the paired approval record: the two
    /// share a lifetime, and the approval contract has no standalone
    /// delete.
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
}

/// CRUD on approval records, keyed by expense id.
#[async_trait]
pub trait ApprovalRepository: Send + Sync {
    async fn find_by_expense_id(&self, expense_id: Uuid) -> RepositoryResult<Option<Approval>>;

    async fn find_by_status(&self, status: ApprovalStatus) -> RepositoryResult<Vec<Approval>>;

    /// Joined lookup: every expense owned by `user_id` paired with its
    /// approval, in stable submission order.
    async fn find_expenses_with_status_for_user(
        &self,
        user_id: Uuid,
    ) -> RepositoryResult<Vec<(Expense, Approval)>>;

    /// Persist a reviewed status (with reviewer/comment/review_date) onto
    /// an existing approval row.
    async fn update_status(&self, approval: Approval) -> RepositoryResult<()>;

    async fn create(&self, approval: Approval) -> RepositoryResult<Approval>;
}
