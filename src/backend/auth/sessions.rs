/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT issuance and validation for user sessions.
 *
 * Tokens are HS256-signed and carry three claims: `sub` (the user id as a
 * decimal string), `exp`, and `iat` (Unix timestamps in seconds). Sessions
 * are stateless: the server keeps no token table, and a token stays valid
 * until its `exp` passes regardless of logout.
 *
 * Validation runs with zero leeway. A token is accepted through the second
 * named by `exp` and rejected once the clock passes it. Every validation
 * failure (bad signature, expired, malformed, missing or non-numeric `sub`)
 * collapses into the single [`InvalidToken`] error so callers cannot
 * distinguish why a token was rejected.
 */

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID as a decimal string
    pub sub: String,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: u64,
    /// Issued at time (Unix timestamp, seconds)
    pub iat: u64,
}

/// Token validation failure
///
/// Deliberately carries no cause. The HTTP layer answers every rejected
/// token the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid or expired token")]
pub struct InvalidToken;

/// JWT token service
///
/// Holds the signing keys and default TTL, both fixed at startup. Construct
/// one per process and share it through the application state.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_minutes: u64,
}

impl TokenService {
    /// Create a token service from the signing secret and default TTL
    pub fn new(secret: &str, ttl_minutes: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_minutes,
        }
    }

    /// Default token lifetime in seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_minutes as i64 * 60
    }

    /// Issue a token for a user with the default TTL
    pub fn issue(&self, user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_with_ttl(user_id, self.ttl_seconds())
    }

    /// Issue a token for a user with an explicit TTL in seconds
    ///
    /// A non-positive TTL produces an already-expired token; useful for
    /// exercising the expiry path.
    pub fn issue_with_ttl(
        &self,
        user_id: i64,
        ttl_seconds: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();
        let exp = (now as i64).saturating_add(ttl_seconds).max(0) as u64;
        let claims = Claims {
            sub: user_id.to_string(),
            exp,
            iat: now,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// Validate a token and return the user id it names
    ///
    /// Checks the signature and expiry, then parses `sub` back into an id.
    /// Any failure returns [`InvalidToken`].
    pub fn validate(&self, token: &str) -> Result<i64, InvalidToken> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|_| InvalidToken)?;
        token_data.claims.sub.parse::<i64>().map_err(|_| InvalidToken)
    }
}

/// Current Unix time in seconds
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
