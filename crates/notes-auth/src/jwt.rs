//! JWT token management

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AuthError;

/// Identity embedded in a token
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClaimsUser {
    pub id: String,
}

/// JWT claims
///
/// Encodes as `{"user": {"id": ...}, "iat": ..., "exp": ...}`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub user: ClaimsUser,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// JWT manager for token generation and validation
#[derive(Clone)]
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

impl JwtManager {
    /// Create a new JWT manager signing with HS256 over `secret`
    pub fn new(secret: &str, token_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl,
        }
    }

    /// Generate a token for a user, valid from now
    pub fn generate_token(&self, user_id: &str) -> Result<String, AuthError> {
        self.generate_token_at(user_id, Utc::now())
    }

    /// Generate a token as if issued at `issued_at`
    pub fn generate_token_at(
        &self,
        user_id: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let exp = issued_at + self.token_ttl;

        let claims = Claims {
            user: ClaimsUser {
                id: user_id.to_string(),
            },
            iat: issued_at.timestamp(),
            exp: exp.timestamp(),
        };

        debug!("Generating token for user: {}", user_id);

        encode(&Header::default(), &claims, &self.encoding_key).map_err(AuthError::Jwt)
    }

    /// Validate a token and return its claims
    ///
    /// The signature is checked by `decode` before any claim is looked at.
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            debug!("Token rejected: {}", e);
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        // Valid strictly before expiry
        let now = Utc::now().timestamp();
        if token_data.claims.exp <= now {
            return Err(AuthError::TokenExpired);
        }

        Ok(token_data.claims)
    }
}
