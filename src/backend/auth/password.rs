/**
 * Password Hashing Service
 *
 * This module owns everything about password credentials: which hashing
 * scheme new credentials use, how stored credentials are verified, and when
 * a stored credential should be re-hashed.
 *
 * # Schemes
 *
 * Two schemes are supported:
 *
 * - **bcrypt** (preferred) - modular crypt strings starting with `$2b$`
 *   (older `$2a$`/`$2x$`/`$2y$` variants verify too)
 * - **pbkdf2-sha256** (legacy) - PHC strings starting with `$pbkdf2-sha256$`
 *
 * The preferred scheme comes from configuration and defaults to bcrypt. At
 * construction the service smoke-tests the bcrypt backend by hashing and
 * verifying a probe value; if the probe fails it logs a warning and falls
 * back to pbkdf2-sha256 so the server keeps accepting signups.
 *
 * # Verification
 *
 * `verify` inspects the credential prefix to pick the scheme and never
 * panics: unknown prefixes, malformed strings, and backend failures all
 * collapse to `false`. `needs_rehash` reports whether a credential that just
 * verified should be upgraded to the preferred scheme; unparseable input
 * reports `false` so a read-only credential store never triggers rewrite
 * attempts.
 */

use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use pbkdf2::Pbkdf2;
use thiserror::Error;

/// Supported password hashing schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    /// bcrypt modular crypt format (preferred)
    Bcrypt,
    /// pbkdf2-sha256 PHC format (legacy)
    Pbkdf2Sha256,
}

impl Default for HashScheme {
    fn default() -> Self {
        HashScheme::Bcrypt
    }
}

impl HashScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashScheme::Bcrypt => "bcrypt",
            HashScheme::Pbkdf2Sha256 => "pbkdf2_sha256",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bcrypt" => Some(HashScheme::Bcrypt),
            "pbkdf2_sha256" | "pbkdf2-sha256" => Some(HashScheme::Pbkdf2Sha256),
            _ => None,
        }
    }
}

/// Failure while producing a new credential
///
/// Verification never returns this error; only `hash` does. Handlers convert
/// it into a generic 500 response.
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("pbkdf2 failure: {0}")]
    Phc(#[from] password_hash::Error),

    #[error("salt generation failed: {0}")]
    Salt(#[from] getrandom::Error),
}

/// Password hashing service
///
/// Construct one per process and share it through the application state. The
/// service is immutable after construction; the scheme decision (including
/// the probe fallback) happens exactly once at startup.
///
/// # Usage
///
/// ```rust
/// use issuehub::backend::auth::password::{HashScheme, PasswordService};
///
/// let service = PasswordService::new(HashScheme::Bcrypt);
/// let credential = service.hash("hunter2").unwrap();
/// assert!(service.verify("hunter2", &credential));
/// assert!(!service.verify("wrong", &credential));
/// ```
pub struct PasswordService {
    preferred: HashScheme,
}

impl PasswordService {
    /// Create a password service with the given preferred scheme
    ///
    /// If bcrypt is preferred but its probe fails, the service degrades to
    /// pbkdf2-sha256 and logs a warning. Verification of existing bcrypt
    /// credentials is unaffected by the fallback.
    pub fn new(preferred: HashScheme) -> Self {
        let selected = select_scheme(preferred, scheme_available(preferred));
        if selected != preferred {
            tracing::warn!(
                "{} backend failed its self-test, falling back to {} for new credentials",
                preferred.as_str(),
                selected.as_str()
            );
        }
        Self {
            preferred: selected,
        }
    }

    /// The scheme new credentials are hashed with
    pub fn preferred(&self) -> HashScheme {
        self.preferred
    }

    /// Hash a password with the preferred scheme
    ///
    /// Output is self-describing: bcrypt produces `$2b$12$...`, pbkdf2
    /// produces a `$pbkdf2-sha256$...` PHC string with embedded parameters
    /// and salt.
    pub fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        match self.preferred {
            HashScheme::Bcrypt => Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?),
            HashScheme::Pbkdf2Sha256 => {
                let mut salt_bytes = [0u8; 16];
                getrandom::getrandom(&mut salt_bytes)?;
                let salt = SaltString::encode_b64(&salt_bytes)?;
                let hashed = Pbkdf2.hash_password(password.as_bytes(), &salt)?;
                Ok(hashed.to_string())
            }
        }
    }

    /// Verify a password against a stored credential
    ///
    /// The scheme is chosen from the credential prefix, independent of the
    /// preferred scheme, so legacy credentials keep verifying after the
    /// default changes. Returns `false` for unknown prefixes, malformed
    /// credentials, and every backend failure; this method never panics and
    /// never errors.
    pub fn verify(&self, password: &str, credential: &str) -> bool {
        match scheme_of(credential) {
            Some(HashScheme::Bcrypt) => bcrypt::verify(password, credential).unwrap_or(false),
            Some(HashScheme::Pbkdf2Sha256) => match PasswordHash::new(credential) {
                Ok(parsed) => Pbkdf2
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok(),
                Err(_) => false,
            },
            None => false,
        }
    }

    /// Should this credential be re-hashed with the preferred scheme?
    ///
    /// Returns `true` only for credentials in a recognised scheme other than
    /// the preferred one. Unrecognised credentials return `false`: a value we
    /// cannot classify is left alone rather than rewritten.
    pub fn needs_rehash(&self, credential: &str) -> bool {
        match scheme_of(credential) {
            Some(scheme) => scheme != self.preferred,
            None => false,
        }
    }
}

/// Detect the hashing scheme from a stored credential prefix
fn scheme_of(credential: &str) -> Option<HashScheme> {
    if credential.starts_with("$2a$")
        || credential.starts_with("$2b$")
        || credential.starts_with("$2x$")
        || credential.starts_with("$2y$")
    {
        Some(HashScheme::Bcrypt)
    } else if credential.starts_with("$pbkdf2-sha256$") {
        Some(HashScheme::Pbkdf2Sha256)
    } else {
        None
    }
}

/// Lowest cost bcrypt accepts, used for the startup self-test only
const PROBE_COST: u32 = 4;

/// Smoke-test the backend for a scheme by hashing and verifying a probe value
fn scheme_available(scheme: HashScheme) -> bool {
    match scheme {
        HashScheme::Bcrypt => match bcrypt::hash("probe", PROBE_COST) {
            Ok(hash) => bcrypt::verify("probe", &hash).unwrap_or(false),
            Err(_) => false,
        },
        HashScheme::Pbkdf2Sha256 => true,
    }
}

/// Pick the scheme to use given the probe outcome
fn select_scheme(preferred: HashScheme, available: bool) -> HashScheme {
    if available {
        preferred
    } else {
        HashScheme::Pbkdf2Sha256
    }
}
