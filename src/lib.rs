//! expense_manager Library
//!
//! Expense management backend core. Employees submit expenses, which enter
//! a review workflow (pending → approved/denied) guarded by ownership and
//! state rules, behind JWT-based session authentication.
//!
//! The crate is transport- and storage-agnostic: an HTTP front end calls
//! into [`service::AuthenticationService`] and [`service::ExpenseService`],
//! and a persistence layer implements the [`repository`] traits. An
//! in-memory implementation ships for tests and embedding.

pub mod config;
pub mod domain;
pub mod repository;
pub mod service;

mod error;

pub use config::Config;
pub use error::{AppError, AppResult};

pub use domain::{Approval, ApprovalStatus, DomainError, Expense, Role, User};
pub use repository::{ApprovalRepository, ExpenseRepository, UserRepository};
pub use service::{AuthenticationService, Claims, ExpenseService};
