//! Expense Service
//!
//! Ownership-guarded, state-machine-guarded expense lifecycle. An expense
//! is visible only to its owner: foreign and nonexistent expenses are
//! indistinguishable (`None`/`false`, never an error). Mutation and
//! deletion are gated on the paired approval still being `Pending`.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{Approval, ApprovalStatus, DomainError, Expense};
use crate::error::AppResult;
use crate::repository::{ApprovalRepository, ExpenseRepository};

/// Composes the expense and approval repositories into the expense
/// lifecycle operations.
pub struct ExpenseService {
    expenses: Arc<dyn ExpenseRepository>,
    approvals: Arc<dyn ApprovalRepository>,
}

impl ExpenseService {
    pub fn new(expenses: Arc<dyn ExpenseRepository>, approvals: Arc<dyn ApprovalRepository>) -> Self {
        Self {
            expenses,
            approvals,
        }
    }

    /// Submit a new expense for `user_id`.
    ///
    /// `date` defaults to today's (UTC) calendar date. Creates the expense
    /// together with its `Pending` approval record.
    pub async fn submit_expense(
        &self,
        user_id: Uuid,
        amount: Decimal,
        description: &str,
        date: Option<NaiveDate>,
    ) -> AppResult<Expense> {
        validate_submission(amount, description)?;
        let date = date.unwrap_or_else(|| Utc::now().date_naive());

        let expense = self
            .expenses
            .create(Expense::new(user_id, amount, description, date))
            .await?;
        self.approvals.create(Approval::pending(expense.id)).await?;

        tracing::info!(expense_id = %expense.id, user_id = %user_id, "expense submitted");
        Ok(expense)
    }

    /// Fetch an expense, visible only to its owner.
    pub async fn get_expense_by_id(
        &self,
        expense_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<Expense>> {
        let found = self.expenses.find_by_id(expense_id).await?;
        Ok(found.filter(|expense| expense.user_id == user_id))
    }

    /// Fetch an expense together with its approval record.
    ///
    /// `Ok(None)` when the expense is missing/foreign, or when its
    /// approval row is absent (a data-integrity violation; no partial
    /// tuple is ever returned).
    pub async fn get_expense_with_status(
        &self,
        expense_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<(Expense, Approval)>> {
        let Some(expense) = self.get_expense_by_id(expense_id, user_id).await? else {
            return Ok(None);
        };

        let Some(approval) = self.approvals.find_by_expense_id(expense.id).await? else {
            tracing::warn!(expense_id = %expense.id, "expense has no approval record");
            return Ok(None);
        };

        Ok(Some((expense, approval)))
    }

    /// Every expense owned by `user_id`, paired with its approval.
    pub async fn get_user_expenses_with_status(
        &self,
        user_id: Uuid,
    ) -> AppResult<Vec<(Expense, Approval)>> {
        Ok(self
            .approvals
            .find_expenses_with_status_for_user(user_id)
            .await?)
    }

    /// The user's expense history, optionally narrowed to one status.
    ///
    /// An unrecognized filter string is treated the same as no filter.
    /// Relative order of entries is preserved.
    pub async fn get_expense_history(
        &self,
        user_id: Uuid,
        status_filter: Option<&str>,
    ) -> AppResult<Vec<(Expense, Approval)>> {
        let entries = self.get_user_expenses_with_status(user_id).await?;

        let Some(filter) = status_filter.and_then(|s| s.parse::<ApprovalStatus>().ok()) else {
            return Ok(entries);
        };

        Ok(entries
            .into_iter()
            .filter(|(_, approval)| approval.status == filter)
            .collect())
    }

    /// Update a pending expense's amount, description and date.
    ///
    /// `Ok(None)` when the expense is missing/foreign. Fails with
    /// `EditAfterReview` once the approval left `Pending`; otherwise the
    /// input is validated exactly as in `submit_expense`.
    pub async fn update_expense(
        &self,
        expense_id: Uuid,
        user_id: Uuid,
        amount: Decimal,
        description: &str,
        date: NaiveDate,
    ) -> AppResult<Option<Expense>> {
        let Some((mut expense, approval)) =
            self.get_expense_with_status(expense_id, user_id).await?
        else {
            return Ok(None);
        };

        if approval.status.is_reviewed() {
            return Err(DomainError::EditAfterReview.into());
        }
        validate_submission(amount, description)?;

        expense.amount = amount;
        expense.description = description.to_owned();
        expense.date = date;
        let persisted = self.expenses.update(expense).await?;

        tracing::info!(expense_id = %persisted.id, user_id = %user_id, "expense updated");
        Ok(Some(persisted))
    }

    /// Delete a pending expense (and, by the repository contract, its
    /// paired approval).
    ///
    /// `Ok(false)` when the expense is missing/foreign; fails with
    /// `DeleteAfterReview` once the approval left `Pending`.
    pub async fn delete_expense(&self, expense_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let Some((expense, approval)) =
            self.get_expense_with_status(expense_id, user_id).await?
        else {
            return Ok(false);
        };

        if approval.status.is_reviewed() {
            return Err(DomainError::DeleteAfterReview.into());
        }

        self.expenses.delete(expense.id).await?;
        tracing::info!(expense_id = %expense.id, user_id = %user_id, "expense deleted");
        Ok(true)
    }
}

// Amount is checked before description; the first failing rule is the one
// signaled. A single error per call, never an aggregate.
fn validate_submission(amount: Decimal, description: &str) -> Result<(), DomainError> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::InvalidAmount);
    }
    if description.trim().is_empty() {
        return Err(DomainError::MissingDescription);
    }
    Ok(())
}
