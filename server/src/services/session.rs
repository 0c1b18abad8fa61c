//! Session and password management.
//!
//! ARCHITECTURE
//! ============
//! HTTP auth uses long-lived opaque session tokens stored server-side, so a
//! logout or an expiry sweep invalidates a token immediately. Passwords are
//! stored as `salt$digest` where the digest is SHA-256 over the hex salt
//! concatenated with the password.

use std::fmt::Write;

use chrono::{Duration, Utc};
use rand::Rng;
use records::auth::UserInfo;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

const DEFAULT_SESSION_TTL_HOURS: i64 = 168;

pub(crate) fn session_ttl_hours() -> i64 {
    std::env::var("SESSION_TTL_HOURS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(DEFAULT_SESSION_TTL_HOURS)
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

// =============================================================================
// PASSWORDS
// =============================================================================

fn digest_hex(salt_hex: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Hash a password with a fresh random salt, producing `salt$digest`.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::rng().random();
    let salt_hex = bytes_to_hex(&salt);
    let digest = digest_hex(&salt_hex, password);
    format!("{salt_hex}${digest}")
}

/// Check a password against a stored `salt$digest` value.
/// Malformed stored values fail closed.
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest)) = stored.split_once('$') else {
        return false;
    };
    digest_hex(salt_hex, password) == digest
}

// =============================================================================
// SESSIONS
// =============================================================================

/// Create a session for the given user, returning the token.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    let expires_at = Utc::now() + Duration::hours(session_ttl_hours());
    sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES ($1, $2, $3)")
        .bind(&token)
        .bind(user_id)
        .bind(expires_at)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated user.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<UserInfo>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT u.id, u.username, u.name, u.role
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| UserInfo {
        id: r.get("id"),
        username: r.get("username"),
        name: r.get("name"),
        role: r.get("role"),
    }))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete all expired sessions, returning how many were removed.
pub async fn purge_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Look up a user by username for login. Returns the user plus their stored
/// password hash so the caller can verify before creating a session.
pub async fn find_login(pool: &PgPool, username: &str) -> Result<Option<(UserInfo, String)>, sqlx::Error> {
    let row = sqlx::query_as::<_, (Uuid, String, String, String, String)>(
        "SELECT id, username, name, role, password_hash FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|(id, username, name, role, password_hash)| {
        (UserInfo { id, username, name, role }, password_hash)
    }))
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
