use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a signed bearer token.
///
/// Ephemeral: constructed at encode time, reconstructed at decode time,
/// never persisted. `sub` and `exp` are mandatory; a token missing either
/// fails deserialization and is rejected as invalid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,

    /// Granted scopes (empty when absent from the token)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject expiring at the given Unix timestamp.
    pub fn new(subject: impl ToString, exp: i64) -> Self {
        Self {
            sub: subject.to_string(),
            scopes: Vec::new(),
            exp,
        }
    }

    /// Set granted scopes.
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Check if the claims are expired at `current_timestamp`.
    ///
    /// The bound is exclusive: a token whose `exp` equals the current
    /// instant is already expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
