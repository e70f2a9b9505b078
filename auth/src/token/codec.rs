use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Codec for signed bearer tokens.
///
/// Produces and validates the standard three-segment compact JWT
/// serialization. The algorithm is pinned to HS256 on both sides: the
/// algorithm a presented token claims in its header is never trusted.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    default_ttl: Duration,
}

impl TokenCodec {
    /// Create a new token codec.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `default_ttl` - Expiry applied when `encode` is given no ttl
    ///
    /// # Returns
    /// TokenCodec instance configured with HS256 algorithm
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], default_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            default_ttl,
        }
    }

    /// Encode a subject into a signed token.
    ///
    /// Expiry is issue time plus `ttl`, or plus the codec's default ttl when
    /// `ttl` is `None`.
    ///
    /// # Arguments
    /// * `subject` - Subject identifier (user email)
    /// * `scopes` - Granted scopes (empty slice for none)
    /// * `ttl` - Optional time-to-live override
    ///
    /// # Returns
    /// Signed token string in compact serialization
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(
        &self,
        subject: &str,
        scopes: &[String],
        ttl: Option<Duration>,
    ) -> Result<String, TokenError> {
        let expires_at = Utc::now() + ttl.unwrap_or(self.default_ttl);
        let claims = Claims::new(subject, expires_at.timestamp()).with_scopes(scopes.to_vec());

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a signed token.
    ///
    /// All rejection causes (bad signature, malformed structure, missing
    /// subject, expiry) yield the same `Invalid` error.
    ///
    /// # Arguments
    /// * `token` - Token string to decode
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Invalid` - Token failed signature, structure, or expiry checks
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below with an exact boundary; the library's own
        // check applies leeway.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::Invalid)?;

        let claims = token_data.claims;
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Invalid);
        }

        Ok(claims)
    }
}
