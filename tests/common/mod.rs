//! Common test utilities

use std::sync::{Arc, Once};

use chrono::Duration;
use expense_manager::domain::{Role, User};
use expense_manager::repository::{MemoryStore, UserRepository};
use expense_manager::{AuthenticationService, ExpenseService};
use jsonwebtoken::Algorithm;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const TEST_SECRET: &str = "testsecret";

static TRACING: Once = Once::new();

/// Initialize tracing/logging once per test binary
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "expense_manager=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init()
            .ok();
    });
}

/// An in-memory backend seeded like the sample data set.
pub struct TestBackend {
    pub store: MemoryStore,
    pub auth: AuthenticationService,
    pub expenses: ExpenseService,
    pub employee1: User,
    pub employee3: User,
    pub manager1: User,
}

/// Seed users and wire both services over one shared store.
pub async fn setup_backend() -> TestBackend {
    init_tracing();

    let store = MemoryStore::new();
    let users = store.users();

    let mut seeded = Vec::new();
    for (username, role) in [
        ("employee1", Role::Employee),
        ("manager1", Role::Manager),
        ("employee2", Role::Employee),
        ("employee3", Role::Employee),
    ] {
        let user = users
            .create(User::new(username, "password123", role))
            .await
            .expect("failed to seed user");
        seeded.push(user);
    }

    let auth = AuthenticationService::new(
        Arc::new(store.users()),
        TEST_SECRET,
        Algorithm::HS256,
        Duration::hours(24),
    );
    let expenses = ExpenseService::new(Arc::new(store.expenses()), Arc::new(store.approvals()));

    TestBackend {
        employee1: seeded[0].clone(),
        manager1: seeded[1].clone(),
        employee3: seeded[3].clone(),
        store,
        auth,
        expenses,
    }
}
