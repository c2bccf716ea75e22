//! Expense model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An expense record.
///
/// `user_id` is a weak reference to the owning user, never an ownership
/// pointer. Validation of `amount` and `description` happens in
/// `ExpenseService` before a record is created or mutated; the record
/// itself stores whatever was submitted (descriptions keep surrounding
/// whitespace).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
}

impl Expense {
    /// Build a new expense record with a fresh id.
    pub fn new(
        user_id: Uuid,
        amount: Decimal,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            amount,
            description: description.into(),
            date,
        }
    }
}
