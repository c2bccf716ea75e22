//! Integration tests for the authentication/session flow

use std::sync::Arc;

use chrono::Duration;
use expense_manager::domain::Role;
use expense_manager::AuthenticationService;
use jsonwebtoken::Algorithm;

mod common;

#[tokio::test]
async fn test_login_session_round_trip() {
    let backend = common::setup_backend().await;

    // Credential check resolves the seeded user.
    let user = backend
        .auth
        .authenticate_user("employee1", "password123")
        .await
        .unwrap()
        .expect("seeded user should authenticate");
    assert_eq!(user.id, backend.employee1.id);
    assert_eq!(user.role, Role::Employee);

    // The issued token carries the user's claims verbatim.
    let token = backend.auth.generate_jwt_token(&user).unwrap();
    let claims = backend.auth.validate_jwt_token(&token).unwrap();
    assert_eq!(claims.user_id, user.id);
    assert_eq!(claims.username, "employee1");
    assert_eq!(claims.role, Role::Employee);

    // And resolves back to the same user without re-authenticating.
    let resolved = backend
        .auth
        .get_user_from_token(&token)
        .await
        .unwrap()
        .expect("valid session should resolve");
    assert_eq!(resolved, user);
}

#[tokio::test]
async fn test_wrong_password_is_rejected_silently() {
    let backend = common::setup_backend().await;

    let user = backend
        .auth
        .authenticate_user("employee1", "wrong")
        .await
        .unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn test_unknown_username_is_rejected_silently() {
    let backend = common::setup_backend().await;

    let user = backend
        .auth
        .authenticate_user("intruder", "password123")
        .await
        .unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn test_manager_token_carries_manager_role() {
    let backend = common::setup_backend().await;

    let manager = backend
        .auth
        .authenticate_user("manager1", "password123")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(manager.id, backend.manager1.id);

    let token = backend.auth.generate_jwt_token(&manager).unwrap();
    let claims = backend.auth.validate_jwt_token(&token).unwrap();
    assert_eq!(claims.role, Role::Manager);
}

#[tokio::test]
async fn test_rotated_secret_invalidates_sessions() {
    let backend = common::setup_backend().await;

    let token = backend
        .auth
        .generate_jwt_token(&backend.employee3)
        .unwrap();

    // A service constructed with a different secret (e.g. after rotation)
    // treats the old session as anonymous, not as an error.
    let rotated = AuthenticationService::new(
        Arc::new(backend.store.users()),
        "rotated_secret",
        Algorithm::HS256,
        Duration::hours(24),
    );
    assert!(rotated.validate_jwt_token(&token).is_none());
    assert!(rotated.get_user_from_token(&token).await.unwrap().is_none());
}
