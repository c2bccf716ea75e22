//! Service module
//!
//! The two core services. `AuthenticationService` resolves credentials and
//! session tokens to users; `ExpenseService` guards the expense lifecycle
//! with ownership and workflow-state rules. Both are stateless and
//! request-scoped: every operation is a sequence of repository calls with
//! no shared mutable state of its own.

mod auth;
mod expense;

pub use auth::{AuthenticationService, Claims};
pub use expense::ExpenseService;
