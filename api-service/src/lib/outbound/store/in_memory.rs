use std::collections::HashMap;

use async_trait::async_trait;
use auth::PasswordHasher;

use crate::domain::auth::errors::StoreError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::UserRecord;
use crate::domain::auth::ports::CredentialStore;

/// In-memory credential store.
///
/// Seeded once at process start and read-only afterwards, so concurrent
/// reads need no synchronization. Any persistence-backed implementation can
/// replace this without touching the service contract.
pub struct InMemoryCredentialStore {
    users: HashMap<String, UserRecord>,
}

impl InMemoryCredentialStore {
    /// Create a store holding the given records, keyed by email.
    pub fn new(records: impl IntoIterator<Item = UserRecord>) -> Self {
        let users = records
            .into_iter()
            .map(|record| (record.email.as_str().to_string(), record))
            .collect();

        Self { users }
    }

    /// Create a store seeded with development users.
    ///
    /// Both users carry the password "password", hashed at seed time so the
    /// stored digest is never a stale constant.
    ///
    /// # Errors
    /// Hashing failure or a bad seed email (neither expected in practice)
    pub fn seeded(hasher: &PasswordHasher) -> Result<Self, anyhow::Error> {
        let password_hash = hasher.hash("password")?;

        let mut records = Vec::new();
        for (email, username) in [
            ("admin@example.com", "admin"),
            ("user@example.com", "testuser"),
        ] {
            let email = EmailAddress::new(email.to_string())?;
            records.push(UserRecord::new(
                email,
                username.to_string(),
                password_hash.clone(),
            ));
        }

        Ok(Self::new(records))
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        // Exact, case-sensitive key match
        Ok(self.users.get(email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryCredentialStore {
        InMemoryCredentialStore::seeded(&PasswordHasher::new()).expect("Failed to seed store")
    }

    #[tokio::test]
    async fn test_find_by_email_hit() {
        let store = store();

        let record = store
            .find_by_email("admin@example.com")
            .await
            .unwrap()
            .expect("Seeded user missing");
        assert_eq!(record.username, "admin");
        assert!(record.is_active);
    }

    #[tokio::test]
    async fn test_find_by_email_miss() {
        let store = store();

        let record = store.find_by_email("ghost@example.com").await.unwrap();
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_find_by_email_is_case_sensitive() {
        let store = store();

        let record = store.find_by_email("ADMIN@EXAMPLE.COM").await.unwrap();
        assert!(record.is_none());
    }
}
