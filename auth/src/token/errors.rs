use thiserror::Error;

/// Error type for token operations.
///
/// Decode failures are a single variant on purpose: signature mismatch,
/// malformed structure, missing subject, and expiry all collapse into
/// `Invalid` so callers cannot build an oracle distinguishing a tampered
/// token from an expired one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid")]
    Invalid,
}
