//! In-memory repository implementations.
//!
//! One `MemoryStore` backs all three repositories so the joined lookup and
//! the expense/approval cascade see a single consistent state. Intended
//! for tests/dev. Not optimized for performance.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Approval, ApprovalStatus, Expense, User};

use super::{
    ApprovalRepository, ExpenseRepository, RepositoryError, RepositoryResult, UserRepository,
};

#[derive(Debug, Default)]
struct StoreInner {
    users: Vec<User>,
    // Insertion order is submission order; the joined lookup preserves it.
    expenses: Vec<Expense>,
    approvals: Vec<Approval>,
}

/// Shared in-memory state handed out as repository facades.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> InMemoryUserRepository {
        InMemoryUserRepository {
            store: self.clone(),
        }
    }

    pub fn expenses(&self) -> InMemoryExpenseRepository {
        InMemoryExpenseRepository {
            store: self.clone(),
        }
    }

    pub fn approvals(&self) -> InMemoryApprovalRepository {
        InMemoryApprovalRepository {
            store: self.clone(),
        }
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, StoreInner>> {
        self.inner
            .read()
            .map_err(|_| RepositoryError::storage("lock poisoned"))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, StoreInner>> {
        self.inner
            .write()
            .map_err(|_| RepositoryError::storage("lock poisoned"))
    }
}

/// User repository over a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: MemoryStore,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        let inner = self.store.read()?;
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        let inner = self.store.read()?;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: User) -> RepositoryResult<User> {
        let mut inner = self.store.write()?;
        if inner.users.iter().any(|u| u.username == user.username) {
            return Err(RepositoryError::conflict(format!(
                "username already taken: {}",
                user.username
            )));
        }
        inner.users.push(user.clone());
        Ok(user)
    }
}

/// Expense repository over a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryExpenseRepository {
    store: MemoryStore,
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Expense>> {
        let inner = self.store.read()?;
        Ok(inner.expenses.iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> RepositoryResult<Vec<Expense>> {
        let inner = self.store.read()?;
        Ok(inner
            .expenses
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, expense: Expense) -> RepositoryResult<Expense> {
        let mut inner = self.store.write()?;
        inner.expenses.push(expense.clone());
        Ok(expense)
    }

    async fn update(&self, expense: Expense) -> RepositoryResult<Expense> {
        let mut inner = self.store.write()?;
        let slot = inner
            .expenses
            .iter_mut()
            .find(|e| e.id == expense.id)
            .ok_or_else(|| RepositoryError::storage(format!("no expense row: {}", expense.id)))?;
        *slot = expense.clone();
        Ok(expense)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        // Single write lock makes the expense + approval removal atomic.
        let mut inner = self.store.write()?;
        inner.expenses.retain(|e| e.id != id);
        inner.approvals.retain(|a| a.expense_id != id);
        Ok(())
    }
}

/// Approval repository over a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryApprovalRepository {
    store: MemoryStore,
}

#[async_trait]
impl ApprovalRepository for InMemoryApprovalRepository {
    async fn find_by_expense_id(&self, expense_id: Uuid) -> RepositoryResult<Option<Approval>> {
        let inner = self.store.read()?;
        Ok(inner
            .approvals
            .iter()
            .find(|a| a.expense_id == expense_id)
            .cloned())
    }

    async fn find_by_status(&self, status: ApprovalStatus) -> RepositoryResult<Vec<Approval>> {
        let inner = self.store.read()?;
        Ok(inner
            .approvals
            .iter()
            .filter(|a| a.status == status)
            .cloned()
            .collect())
    }

    async fn find_expenses_with_status_for_user(
        &self,
        user_id: Uuid,
    ) -> RepositoryResult<Vec<(Expense, Approval)>> {
        let inner = self.store.read()?;
        let mut rows = Vec::new();
        for expense in inner.expenses.iter().filter(|e| e.user_id == user_id) {
            // An expense without an approval row is a data-integrity
            // violation; the join simply skips it.
            if let Some(approval) = inner.approvals.iter().find(|a| a.expense_id == expense.id) {
                rows.push((expense.clone(), approval.clone()));
            }
        }
        Ok(rows)
    }

    async fn update_status(&self, approval: Approval) -> RepositoryResult<()> {
        let mut inner = self.store.write()?;
        let slot = inner
            .approvals
            .iter_mut()
            .find(|a| a.id == approval.id)
            .ok_or_else(|| RepositoryError::storage(format!("no approval row: {}", approval.id)))?;
        *slot = approval;
        Ok(())
    }

    async fn create(&self, approval: Approval) -> RepositoryResult<Approval> {
        let mut inner = self.store.write()?;
        inner.approvals.push(approval.clone());
        Ok(approval)
    }
}
