//! crates/catalog_core/src/auth.rs
//!
//! The admin session: a single configured credential pair and an opaque token
//! stored under `auth-token`. The session is active iff the token is present.

use crate::ports::{PortError, PortResult};
use crate::store::JsonStore;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::{error, info, warn};
use uuid::Uuid;

pub const AUTH_TOKEN_KEY: &str = "auth-token";

/// The one admin account. `password_hash` is an argon2 PHC string.
#[derive(Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password_hash: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Hashes a password into the PHC string format expected by `AdminCredentials`.
pub fn hash_password(password: &str) -> PortResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PortError::Unexpected(format!("Failed to hash password: {}", e)))
}

#[derive(Clone)]
pub struct AdminSession {
    store: JsonStore,
    credentials: AdminCredentials,
}

impl AdminSession {
    /// Fails when the configured hash is not a valid PHC string.
    pub fn new(store: JsonStore, credentials: AdminCredentials) -> PortResult<Self> {
        PasswordHash::new(&credentials.password_hash).map_err(|e| {
            PortError::InvalidInput(format!("Admin password hash is not a PHC string: {}", e))
        })?;
        Ok(Self { store, credentials })
    }

    /// On success, stores and returns a fresh token; any previous token is replaced.
    ///
    /// Fails with `Unauthorized` on bad credentials, and with the storage error
    /// when the token could not be saved.
    pub async fn login(&self, email: &str, password: &str) -> PortResult<String> {
        if email != self.credentials.email || !self.verify_password(password) {
            warn!("Rejected admin login for {}", email);
            return Err(PortError::Unauthorized);
        }

        let token = Uuid::new_v4().to_string();
        self.store
            .try_write(AUTH_TOKEN_KEY, &token)
            .await
            .map_err(|e| {
                error!("Failed to store the admin session token: {}", e);
                e
            })?;
        info!("Admin logged in");
        Ok(token)
    }

    pub async fn logout(&self) {
        self.store.remove(AUTH_TOKEN_KEY).await;
        info!("Admin logged out");
    }

    pub async fn is_logged_in(&self) -> bool {
        self.current_token().await.is_some()
    }

    /// Whether `token` is the currently stored session token.
    pub async fn validate(&self, token: &str) -> bool {
        self.current_token()
            .await
            .is_some_and(|current| !token.is_empty() && current == token)
    }

    async fn current_token(&self) -> Option<String> {
        self.store
            .read_optional::<String>(AUTH_TOKEN_KEY)
            .await
            .filter(|token| !token.is_empty())
    }

    fn verify_password(&self, password: &str) -> bool {
        match PasswordHash::new(&self.credentials.password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                error!("Failed to parse admin password hash: {:?}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::KeyValueStore;
    use crate::store::MemoryStore;
    use async_trait::async_trait;
    use std::sync::Arc;

    const EMAIL: &str = "admin@example.com";
    const PASSWORD: &str = "correct horse battery staple";

    fn setup_session() -> (Arc<MemoryStore>, AdminSession) {
        let backend = Arc::new(MemoryStore::new());
        let credentials = AdminCredentials {
            email: EMAIL.to_string(),
            password_hash: hash_password(PASSWORD).unwrap(),
        };
        let session = AdminSession::new(JsonStore::new(backend.clone()), credentials).unwrap();
        (backend, session)
    }

    #[tokio::test]
    async fn test_login_logout_cycle() {
        let (backend, session) = setup_session();
        assert!(!session.is_logged_in().await);

        let token = session.login(EMAIL, PASSWORD).await.expect("login succeeds");
        assert!(session.is_logged_in().await);
        assert!(session.validate(&token).await);
        assert!(backend.raw(AUTH_TOKEN_KEY).await.is_some());

        session.logout().await;
        assert!(!session.is_logged_in().await);
        assert!(!session.validate(&token).await);
        assert!(backend.raw(AUTH_TOKEN_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_wrong_credentials_are_rejected() {
        let (_, session) = setup_session();

        assert!(matches!(
            session.login(EMAIL, "wrong").await,
            Err(PortError::Unauthorized)
        ));
        assert!(matches!(
            session.login("other@example.com", PASSWORD).await,
            Err(PortError::Unauthorized)
        ));
        assert!(!session.is_logged_in().await);
    }

    #[tokio::test]
    async fn test_new_login_supersedes_old_token() {
        let (_, session) = setup_session();

        let first = session.login(EMAIL, PASSWORD).await.unwrap();
        let second = session.login(EMAIL, PASSWORD).await.unwrap();

        assert_ne!(first, second);
        assert!(!session.validate(&first).await);
        assert!(session.validate(&second).await);
        assert!(!session.validate("").await);
    }

    /// Reads succeed against an empty store; every write fails.
    struct ReadOnlyStore;

    #[async_trait]
    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> PortResult<Option<String>> {
            Ok(None)
        }
        async fn set(&self, _key: &str, _value: String) -> PortResult<()> {
            Err(PortError::Unexpected("read-only volume".to_string()))
        }
        async fn remove(&self, _key: &str) -> PortResult<()> {
            Err(PortError::Unexpected("read-only volume".to_string()))
        }
        async fn write_batch(&self, _entries: Vec<(String, String)>) -> PortResult<()> {
            Err(PortError::Unexpected("read-only volume".to_string()))
        }
    }

    #[tokio::test]
    async fn test_login_fails_when_token_cannot_be_stored() {
        let credentials = AdminCredentials {
            email: EMAIL.to_string(),
            password_hash: hash_password(PASSWORD).unwrap(),
        };
        let session =
            AdminSession::new(JsonStore::new(Arc::new(ReadOnlyStore)), credentials).unwrap();

        let err = session.login(EMAIL, PASSWORD).await.unwrap_err();
        assert!(matches!(err, PortError::Unexpected(_)));
        assert!(!session.is_logged_in().await);
    }

    #[tokio::test]
    async fn test_detached_session_cannot_log_in() {
        let credentials = AdminCredentials {
            email: EMAIL.to_string(),
            password_hash: hash_password(PASSWORD).unwrap(),
        };
        let session = AdminSession::new(JsonStore::detached(), credentials).unwrap();

        assert!(session.login(EMAIL, PASSWORD).await.is_err());
    }

    #[test]
    fn test_invalid_hash_is_rejected_at_construction() {
        let credentials = AdminCredentials {
            email: EMAIL.to_string(),
            password_hash: "plaintext".to_string(),
        };
        assert!(AdminSession::new(JsonStore::detached(), credentials).is_err());
    }
}
