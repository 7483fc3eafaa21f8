//! # JWT Validation
//!
//! Tokens are HS256-signed by the auth service with the secret from
//! `JWT_SECRET`. This module validates signature, expiry, not-before,
//! and issuer. [`create_token`] exists for tests and local tooling; the
//! API server itself never mints tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Issuer claim expected in every token.
pub const ISSUER: &str = "tasknest";

/// Default token lifetime.
const TOKEN_TTL_HOURS: i64 = 24;

/// Errors from token creation and validation.
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("Failed to create token: {0}")]
    CreateError(String),

    #[error("Token validation failed: {0}")]
    ValidationError(String),

    #[error("Token has expired")]
    Expired,

    #[error("Token issuer is not trusted")]
    InvalidIssuer,
}

/// Claims carried by a TaskNest token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's id
    pub sub: Uuid,
    /// Username of the subject, denormalized into child records on write
    pub username: String,
    /// Issuer, always [`ISSUER`]
    pub iss: String,
    /// Issued-at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds
    pub exp: i64,
    /// Not-before, unix seconds
    pub nbf: i64,
}

impl Claims {
    /// New claims with the default lifetime.
    pub fn new(user_id: Uuid, username: impl Into<String>) -> Self {
        Self::with_expiration(user_id, username, Duration::hours(TOKEN_TTL_HOURS))
    }

    /// New claims with an explicit lifetime. A non-positive duration
    /// produces an already-expired token, which the tests lean on.
    pub fn with_expiration(user_id: Uuid, username: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            username: username.into(),
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            nbf: now.timestamp(),
        }
    }

    /// Whether the expiry has passed.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Signs the claims with the shared secret.
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key).map_err(|e| JwtError::CreateError(e.to_string()))
}

/// Validates a token and returns its claims.
///
/// Rejects bad signatures, expired or not-yet-valid tokens, and tokens
/// from any issuer other than [`ISSUER`].
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_nbf = true;

    decode::<Claims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => JwtError::Expired,
            ErrorKind::InvalidIssuer => JwtError::InvalidIssuer,
            _ => JwtError::ValidationError(e.to_string()),
        })
}
