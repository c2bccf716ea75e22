//! Approval model
//!
//! Every expense carries exactly one approval record for its lifetime; the
//! two are created together and deleted together. The approval holds the
//! expense's workflow status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Workflow status of an expense.
///
/// `Pending` is the initial state and the only one in which the expense may
/// be edited or deleted. `Approved` and `Denied` are terminal: a reviewed
/// expense never returns to `Pending`. String form exists only at the wire
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Denied,
}

impl ApprovalStatus {
    pub fn is_pending(self) -> bool {
        self == ApprovalStatus::Pending
    }

    /// Whether a reviewer has already acted on the expense.
    pub fn is_reviewed(self) -> bool {
        !self.is_pending()
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalStatus::Pending => write!(f, "pending"),
            ApprovalStatus::Approved => write!(f, "approved"),
            ApprovalStatus::Denied => write!(f, "denied"),
        }
    }
}

/// Error returned when parsing an unrecognized status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown approval status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ApprovalStatus {
    type Err = UnknownStatus;

    // Exact match only: "Pending" and "cancelled" are both unrecognized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "denied" => Ok(ApprovalStatus::Denied),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// The review record paired 1:1 with an expense.
///
/// `reviewer`, `comment` and `review_date` stay empty until a reviewer acts
/// on the expense. The transition into a terminal status happens outside
/// this core; the core creates the initial `Pending` record and reads the
/// status to gate mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    pub id: Uuid,
    pub expense_id: Uuid,
    pub status: ApprovalStatus,
    pub reviewer: Option<Uuid>,
    pub comment: Option<String>,
    pub review_date: Option<NaiveDate>,
}

impl Approval {
    /// Build the initial approval record for a freshly submitted expense.
    pub fn pending(expense_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            expense_id,
            status: ApprovalStatus::Pending,
            reviewer: None,
            comment: None,
            review_date: None,
        }
    }
}
