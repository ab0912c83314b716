/**
 * Token Issuer/Verifier
 *
 * This module mints and validates the signed bearer tokens used for
 * stateless authentication. Tokens are JWTs carrying the username as
 * subject and an absolute expiry; nothing is persisted server-side and
 * there is no revocation list.
 *
 * The signing secret and algorithm live in a `TokenConfig` built once at
 * startup and passed by reference; this module never reads the
 * environment.
 */

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default token lifetime: 30 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// Token failures. Verification collapses every cause (bad signature,
/// unparseable payload, expiry) into `Invalid`.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid token")]
    Invalid,

    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Process-wide signing configuration, immutable after startup.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    secret: String,
    algorithm: Algorithm,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>, algorithm: Algorithm) -> Self {
        Self {
            secret: secret.into(),
            algorithm,
        }
    }
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Mint a signed token for `subject` expiring `ttl` from now.
///
/// Use [`DEFAULT_TTL`] unless a caller has a reason to deviate.
pub fn issue(config: &TokenConfig, subject: &str, ttl: Duration) -> Result<String, TokenError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let claims = Claims {
        sub: subject.to_string(),
        exp: now + ttl.as_secs(),
        iat: now,
    };

    let key = EncodingKey::from_secret(config.secret.as_ref());
    Ok(encode(&Header::new(config.algorithm), &claims, &key)?)
}

/// Verify a token and return its embedded subject.
///
/// Fails with [`TokenError::Invalid`] if the signature does not match,
/// the payload cannot be parsed, or the expiry has passed. No check is
/// made that the subject still exists; that is the auth gate's job.
pub fn verify(config: &TokenConfig, token: &str) -> Result<String, TokenError> {
    let key = DecodingKey::from_secret(config.secret.as_ref());
    let validation = Validation::new(config.algorithm);

    let data = decode::<Claims>(token, &key, &validation).map_err(|e| {
        tracing::debug!("Token verification failed: {:?}", e);
        TokenError::Invalid
    })?;

    Ok(data.claims.sub)
}

/// Mint a token for an expiry already in the past. Test hook for
/// exercising expiry handling without sleeping.
#[cfg(test)]
fn issue_expired(config: &TokenConfig, subject: &str) -> Result<String, TokenError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    // Well past the default validation leeway.
    let claims = Claims {
        sub: subject.to_string(),
        exp: now.saturating_sub(600),
        iat: now.saturating_sub(1200),
    };

    let key = EncodingKey::from_secret(config.secret.as_ref());
    Ok(encode(&Header::new(config.algorithm), &claims, &key)?)
}
