//! Authentication test helpers
//!
//! Utilities for creating test users and tokens without going through the
//! HTTP signup flow.

use password_hash::{PasswordHasher, SaltString};
use pbkdf2::Pbkdf2;
use sqlx::SqlitePool;

use issuehub::backend::auth::sessions::TokenService;
use issuehub::backend::auth::users::create_user;

use super::TEST_SECRET;

/// Lowest cost bcrypt accepts, keeps fixture users cheap
const TEST_BCRYPT_COST: u32 = 4;

/// Test user credentials plus a valid session token
pub struct TestUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user with a bcrypt credential
///
/// Uses the minimum bcrypt cost to keep the suite fast; the token is signed
/// with the same secret the test server uses.
pub async fn create_test_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password: &str,
) -> TestUser {
    let password_hash =
        bcrypt::hash(password, TEST_BCRYPT_COST).expect("Failed to hash test password");
    build_user(pool, name, email, password, password_hash).await
}

/// Create a test user whose stored credential uses the legacy pbkdf2 format
pub async fn create_legacy_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password: &str,
) -> TestUser {
    let salt = SaltString::encode_b64(b"integration-salt").expect("Failed to encode salt");
    let password_hash = Pbkdf2
        .hash_password(password.as_bytes(), &salt)
        .expect("Failed to hash legacy test password")
        .to_string();
    build_user(pool, name, email, password, password_hash).await
}

async fn build_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password: &str,
    password_hash: String,
) -> TestUser {
    let user = create_user(pool, name.to_string(), email.to_string(), password_hash)
        .await
        .expect("Failed to insert test user");
    let token = TokenService::new(TEST_SECRET, 30)
        .issue(user.id)
        .expect("Failed to issue test token");

    TestUser {
        id: user.id,
        name: user.name,
        email: user.email,
        password: password.to_string(),
        token,
    }
}

/// Authorization header value for a token
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
