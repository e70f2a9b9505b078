use async_trait::async_trait;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StoreError;
use crate::domain::auth::models::SafeUser;
use crate::domain::auth::models::UserRecord;

/// Port for credential lookup.
///
/// Read-only in current scope. The key match is an exact, case-sensitive
/// string comparison on the email: no normalization, no fuzzy match. A
/// writable backend must keep per-key atomicity, out of scope for now.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve a user record by email address.
    ///
    /// # Arguments
    /// * `email` - Email key, matched exactly
    ///
    /// # Returns
    /// Optional user record (None if not found)
    ///
    /// # Errors
    /// * `Unavailable` - Backing store could not be reached
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;
}

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Authenticate credentials and return the safe projection.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    /// The active flag is not checked here; `check_active` gates it at the
    /// request boundary.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or password mismatch
    /// * `Store` - Lookup failed
    async fn authenticate(&self, email: &str, password: &str) -> Result<SafeUser, AuthError>;

    /// Issue a signed bearer token for a subject.
    ///
    /// # Arguments
    /// * `subject_email` - Token subject
    /// * `ttl` - Optional lifetime override; defaults to the configured
    ///   login token lifetime
    ///
    /// # Errors
    /// * `Token` - Token encoding failed
    fn issue_token(&self, subject_email: &str, ttl: Option<Duration>) -> Result<String, AuthError>;

    /// Resolve a presented token back to the safe user projection.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Token invalid/expired, or subject no longer
    ///   resolves to a stored user
    /// * `Store` - Lookup failed
    async fn resolve_token(&self, token: &str) -> Result<SafeUser, AuthError>;

    /// Gate on the account's active flag.
    ///
    /// # Errors
    /// * `InactiveAccount` - Account is deactivated
    fn check_active(&self, user: SafeUser) -> Result<SafeUser, AuthError>;
}
