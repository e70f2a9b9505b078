use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::auth::errors::EmailError;

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. The value is
/// stored verbatim: no lowercasing or other normalization, so matching
/// against the store key is case-sensitive by design.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stored user record.
///
/// Owned exclusively by the credential store; seeded once at process start
/// and read-only thereafter. Never crosses the service boundary outward,
/// only its `SafeUser` projection does.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub email: EmailAddress,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Create a new active, non-superuser record with no roles.
    pub fn new(email: EmailAddress, username: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            email,
            username,
            password_hash,
            is_active: true,
            is_superuser: false,
            roles: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// User representation safe for external exposure.
///
/// Strict field projection of `UserRecord`: the password hash, superuser
/// flag, and timestamps are never included. Derivable from a record, never
/// the reverse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafeUser {
    pub email: String,
    pub username: String,
    pub is_active: bool,
    pub roles: Vec<String>,
}

impl From<&UserRecord> for SafeUser {
    fn from(record: &UserRecord) -> Self {
        Self {
            email: record.email.as_str().to_string(),
            username: record.username.clone(),
            is_active: record.is_active,
            roles: record.roles.clone(),
        }
    }
}
