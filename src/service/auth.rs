//! Authentication Service
//!
//! Credential verification and stateless session-token lifecycle. "Not
//! authenticated" is never an error here: every miss (unknown user, wrong
//! password, bad token) collapses into `None`, and the transport layer
//! decides the consequence. Only repository failures surface as errors.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config::Config;
use crate::domain::{Role, User};
use crate::error::AppResult;
use crate::repository::UserRepository;

/// Signed session-token payload.
///
/// Claims mirror the user's fields verbatim at generation time. The token
/// is self-contained: validation never touches the persistence layer;
/// only the final user resolution does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub username: String,
    pub role: Role,
    /// Issued-at, seconds since the epoch
    pub iat: i64,
    /// Expiration, seconds since the epoch
    pub exp: i64,
}

/// Verifies credentials and issues/validates signed session tokens.
///
/// The secret key, signing algorithm and token TTL are injected at
/// construction; there is no module-level signing state.
pub struct AuthenticationService {
    users: Arc<dyn UserRepository>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    token_ttl: Duration,
}

impl AuthenticationService {
    /// Build a service signing with `secret` under `algorithm` (HMAC
    /// family), issuing tokens valid for `token_ttl`.
    pub fn new(
        users: Arc<dyn UserRepository>,
        secret: &str,
        algorithm: Algorithm,
        token_ttl: Duration,
    ) -> Self {
        Self {
            users,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            token_ttl,
        }
    }

    /// Build a service from loaded configuration (HS256).
    pub fn from_config(users: Arc<dyn UserRepository>, config: &Config) -> Self {
        Self::new(
            users,
            &config.jwt_secret_key,
            Algorithm::HS256,
            config.token_ttl(),
        )
    }

    /// Look up `username` and verify the supplied credential.
    ///
    /// Returns `Ok(None)` on an unknown user or a mismatched credential;
    /// repository failures propagate.
    pub async fn authenticate_user(
        &self,
        username: &str,
        password: &str,
    ) -> AppResult<Option<User>> {
        let Some(user) = self.users.find_by_username(username).await? else {
            tracing::debug!(username, "authentication failed: unknown user");
            return Ok(None);
        };

        if !secrets_match(password, &user.password) {
            tracing::debug!(username, "authentication failed: credential mismatch");
            return Ok(None);
        }

        tracing::debug!(username, user_id = %user.id, "user authenticated");
        Ok(Some(user))
    }

    /// Repository passthrough.
    pub async fn get_user_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.find_by_id(id).await?)
    }

    /// Issue a signed token carrying the user's id, username and role.
    ///
    /// A pure data-carrying step: the user is not validated here.
    pub fn generate_jwt_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + self.token_ttl).timestamp(),
        };

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verify signature and expiration.
    ///
    /// Returns `None` for anything that does not verify: malformed,
    /// expired, tampered, or signed under a different key. Never an error.
    pub fn validate_jwt_token(&self, token: &str) -> Option<Claims> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(data) => Some(data.claims),
            Err(err) => {
                tracing::debug!(error = %err, "token validation failed");
                None
            }
        }
    }

    /// Resolve a token back to its user.
    ///
    /// `Ok(None)` when the token does not validate or the user it names no
    /// longer exists.
    pub async fn get_user_from_token(&self, token: &str) -> AppResult<Option<User>> {
        match self.validate_jwt_token(token) {
            Some(claims) => self.get_user_by_id(claims.user_id).await,
            None => Ok(None),
        }
    }
}

// Exact-match semantics, compared as fixed-width digests so the
// comparison cost is independent of the secrets' content and length.
fn secrets_match(supplied: &str, stored: &str) -> bool {
    Sha256::digest(supplied.as_bytes()) == Sha256::digest(stored.as_bytes())
}
