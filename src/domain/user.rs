//! User model
//!
//! User records are owned by the user repository; the core only reads them
//! for authentication and ownership checks.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Capability tag assigned to a user at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Employee,
    Manager,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Employee => write!(f, "Employee"),
            Role::Manager => write!(f, "Manager"),
        }
    }
}

/// A user record.
///
/// `username` is unique and immutable after creation. `password` is the
/// stored credential: an opaque comparison value that the core never
/// interprets, only compares. The struct deliberately does not implement
/// `Serialize` so the credential cannot leak through a wire encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl User {
    /// Build a new user record with a fresh id.
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password: password.into(),
            role,
        }
    }
}
