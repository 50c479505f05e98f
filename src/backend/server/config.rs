/**
 * Server Configuration
 *
 * This module handles loading server settings from environment variables
 * and opening the SQLite database pool.
 *
 * # Configuration Sources
 *
 * Every setting has a local-development default, so the server runs with
 * no environment at all. `.env` files are honored because `main` calls
 * `dotenv` before anything reads the environment.
 *
 * # Error Handling
 *
 * Malformed numeric or scheme values fall back to their defaults with a
 * warning. Database errors are fatal; the server cannot run without its
 * store.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::backend::auth::password::HashScheme;

/// Server settings, one field per environment variable
#[derive(Debug, Clone)]
pub struct Settings {
    /// `DATABASE_URL` - SQLite connection string
    pub database_url: String,
    /// `SECRET_KEY` - HMAC secret for session tokens
    pub secret_key: String,
    /// `ACCESS_TOKEN_EXPIRE_MINUTES` - session token lifetime
    pub access_token_expire_minutes: u64,
    /// `CORS_ORIGINS` - comma-separated list of allowed origins
    pub cors_origins: String,
    /// `PREFERRED_PASSWORD_SCHEME` - hash scheme for new passwords
    pub preferred_password_scheme: HashScheme,
    /// `SERVER_PORT` - TCP port to listen on
    pub server_port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: "sqlite://issuehub.db".to_string(),
            secret_key: "super-secret-key-change-this-in-production".to_string(),
            access_token_expire_minutes: 30,
            cors_origins: "http://localhost:5173".to_string(),
            preferred_password_scheme: HashScheme::default(),
            server_port: 8000,
        }
    }
}

impl Settings {
    /// Load settings from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Settings::default();
        Settings {
            database_url: env_or("DATABASE_URL", defaults.database_url),
            secret_key: env_or("SECRET_KEY", defaults.secret_key),
            access_token_expire_minutes: env_parsed(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                defaults.access_token_expire_minutes,
            ),
            cors_origins: env_or("CORS_ORIGINS", defaults.cors_origins),
            preferred_password_scheme: scheme_from_env(defaults.preferred_password_scheme),
            server_port: env_parsed("SERVER_PORT", defaults.server_port),
        }
    }

    /// The configured CORS origins, split and trimmed
    pub fn cors_origin_list(&self) -> Vec<&str> {
        self.cors_origins
            .split(',')
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}

fn env_or(name: &str, default: String) -> String {
    std::env::var(name).unwrap_or(default)
}

fn env_parsed<T: FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!("Invalid {} value '{}', using default", name, value);
                default
            }
        },
        Err(_) => default,
    }
}

fn scheme_from_env(default: HashScheme) -> HashScheme {
    match std::env::var("PREFERRED_PASSWORD_SCHEME") {
        Ok(value) => match HashScheme::from_str(&value) {
            Some(scheme) => scheme,
            None => {
                tracing::warn!(
                    "Unknown PREFERRED_PASSWORD_SCHEME '{}', using {}",
                    value,
                    default.as_str()
                );
                default
            }
        },
        Err(_) => default,
    }
}

/// Open the SQLite pool and bring the schema up to date
///
/// The database file is created when missing; foreign key enforcement is
/// switched on for every connection. Migrations run before the pool is
/// handed out.
pub async fn load_database(settings: &Settings) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database at {}", settings.database_url);

    let options = SqliteConnectOptions::from_str(&settings.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}
