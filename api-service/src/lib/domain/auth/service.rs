use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::SafeUser;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialStore;

/// Domain service for the credential/token lifecycle.
///
/// Stateless across calls; the only state is the injected store snapshot.
/// Signing key, algorithm, and ttls are fixed at construction, never
/// mutated afterwards.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    token_ttl: Duration,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential lookup implementation
    /// * `token_codec` - Signed token codec (carries the signing key)
    /// * `token_ttl` - Lifetime of tokens issued at login
    ///
    /// # Returns
    /// Configured auth service instance
    pub fn new(store: Arc<CS>, token_codec: TokenCodec, token_ttl: Duration) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
            token_codec,
            token_ttl,
        }
    }
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn authenticate(&self, email: &str, password: &str) -> Result<SafeUser, AuthError> {
        let record = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Verification dominates request latency; no lock is held across it.
        if !self.password_hasher.verify(password, &record.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        // Inactive accounts can still authenticate; they are blocked one
        // level up, by the request guard's check_active.
        Ok(SafeUser::from(&record))
    }

    fn issue_token(&self, subject_email: &str, ttl: Option<Duration>) -> Result<String, AuthError> {
        let token = self
            .token_codec
            .encode(subject_email, &[], Some(ttl.unwrap_or(self.token_ttl)))?;

        Ok(token)
    }

    async fn resolve_token(&self, token: &str) -> Result<SafeUser, AuthError> {
        let claims = self
            .token_codec
            .decode(token)
            .map_err(|_| AuthError::InvalidCredentials)?;

        // The subject may no longer resolve to a record; the staleness
        // window is bounded by the token lifetime.
        let record = self
            .store
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(SafeUser::from(&record))
    }

    fn check_active(&self, user: SafeUser) -> Result<SafeUser, AuthError> {
        if !user.is_active {
            return Err(AuthError::InactiveAccount);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::auth::errors::StoreError;
    use crate::domain::auth::models::EmailAddress;
    use crate::domain::auth::models::UserRecord;

    mock! {
        pub TestCredentialStore {}

        #[async_trait]
        impl CredentialStore for TestCredentialStore {
            async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;
        }
    }

    fn service(store: MockTestCredentialStore) -> AuthService<MockTestCredentialStore> {
        AuthService::new(
            Arc::new(store),
            TokenCodec::new(
                b"test-secret-key-for-jwt-signing-at-least-32-bytes",
                Duration::minutes(15),
            ),
            Duration::minutes(30),
        )
    }

    fn record(email: &str, password_hash: String) -> UserRecord {
        UserRecord::new(
            EmailAddress::new(email.to_string()).unwrap(),
            "testuser".to_string(),
            password_hash,
        )
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let hash = PasswordHasher::new().hash("password").unwrap();
        let user = record("admin@example.com", hash);

        let mut store = MockTestCredentialStore::new();
        let returned = user.clone();
        store
            .expect_find_by_email()
            .withf(|email| email == "admin@example.com")
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = service(store);

        let safe = service
            .authenticate("admin@example.com", "password")
            .await
            .expect("Authentication failed");

        assert_eq!(safe.email, "admin@example.com");
        assert_eq!(safe.username, "testuser");
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let mut store = MockTestCredentialStore::new();
        store
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(store);

        let result = service.authenticate("ghost@example.com", "password").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let hash = PasswordHasher::new().hash("password").unwrap();
        let user = record("admin@example.com", hash);

        let mut store = MockTestCredentialStore::new();
        store
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = service(store);

        let result = service.authenticate("admin@example.com", "nope").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_inactive_user_still_succeeds() {
        // Pins observed behavior: the active flag is not consulted during
        // authentication, only by check_active at the request boundary.
        let hash = PasswordHasher::new().hash("password").unwrap();
        let mut user = record("dormant@example.com", hash);
        user.is_active = false;

        let mut store = MockTestCredentialStore::new();
        store
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = service(store);

        let safe = service
            .authenticate("dormant@example.com", "password")
            .await
            .expect("Inactive user should still authenticate");
        assert!(!safe.is_active);
    }

    #[tokio::test]
    async fn test_authenticate_store_error_propagates() {
        let mut store = MockTestCredentialStore::new();
        store
            .expect_find_by_email()
            .times(1)
            .returning(|_| Err(StoreError::Unavailable("down".to_string())));

        let service = service(store);

        let result = service.authenticate("admin@example.com", "password").await;
        assert!(matches!(result, Err(AuthError::Store(_))));
    }

    #[tokio::test]
    async fn test_issue_and_resolve_token() {
        let user = record("admin@example.com", "$argon2id$unused".to_string());

        let mut store = MockTestCredentialStore::new();
        store
            .expect_find_by_email()
            .withf(|email| email == "admin@example.com")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = service(store);

        let token = service
            .issue_token("admin@example.com", None)
            .expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let safe = service
            .resolve_token(&token)
            .await
            .expect("Failed to resolve token");
        assert_eq!(safe.email, "admin@example.com");
    }

    #[tokio::test]
    async fn test_resolve_expired_token() {
        let store = MockTestCredentialStore::new();
        let service = service(store);

        let token = service
            .issue_token("admin@example.com", Some(Duration::seconds(-1)))
            .expect("Failed to issue token");

        let result = service.resolve_token(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_resolve_token_for_deleted_user() {
        let mut store = MockTestCredentialStore::new();
        store
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(store);

        let token = service
            .issue_token("gone@example.com", None)
            .expect("Failed to issue token");

        let result = service.resolve_token(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_resolve_garbage_token() {
        let store = MockTestCredentialStore::new();
        let service = service(store);

        let result = service.resolve_token("not.a.token").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_check_active() {
        let store = MockTestCredentialStore::new();
        let service = service(store);

        let active = SafeUser {
            email: "admin@example.com".to_string(),
            username: "admin".to_string(),
            is_active: true,
            roles: Vec::new(),
        };
        assert!(service.check_active(active.clone()).is_ok());

        let mut inactive = active;
        inactive.is_active = false;
        let result = service.check_active(inactive);
        assert!(matches!(result, Err(AuthError::InactiveAccount)));
    }
}
