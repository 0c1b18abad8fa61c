//! First-boot seeding.
//!
//! SYSTEM CONTEXT
//! ==============
//! A fresh database has no login and nowhere to receive stock, so startup
//! seeds an admin user, a main warehouse, and a general supplier when the
//! corresponding tables are empty. Every step is idempotent; on an existing
//! database this module does nothing.

use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::services::session;

/// Run all first-boot seeds. Safe to call on every startup.
///
/// # Errors
///
/// Returns a database error if any seed query fails.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    seed_admin(pool).await?;
    seed_warehouse(pool).await?;
    seed_supplier(pool).await?;
    Ok(())
}

async fn seed_admin(pool: &PgPool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users").fetch_one(pool).await?;
    if count > 0 {
        return Ok(());
    }

    let (password, generated) = match std::env::var("ADMIN_PASSWORD") {
        Ok(p) if !p.is_empty() => (p, false),
        _ => (session::generate_token(), true),
    };

    sqlx::query("INSERT INTO users (id, username, name, password_hash, role) VALUES ($1, 'admin', 'Administrator', $2, 'admin')")
        .bind(Uuid::new_v4())
        .bind(session::hash_password(&password))
        .execute(pool)
        .await?;

    if generated {
        warn!(%password, "seeded admin user with a generated password; set ADMIN_PASSWORD to control it");
    } else {
        info!("seeded admin user from ADMIN_PASSWORD");
    }
    Ok(())
}

async fn seed_warehouse(pool: &PgPool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM warehouses").fetch_one(pool).await?;
    if count > 0 {
        return Ok(());
    }

    sqlx::query("INSERT INTO warehouses (id, code, name, location) VALUES ($1, 'MAIN', 'Main Warehouse', 'Head Office')")
        .bind(Uuid::new_v4())
        .execute(pool)
        .await?;
    info!("seeded main warehouse");
    Ok(())
}

async fn seed_supplier(pool: &PgPool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM suppliers").fetch_one(pool).await?;
    if count > 0 {
        return Ok(());
    }

    sqlx::query("INSERT INTO suppliers (id, code, name) VALUES ($1, 'GEN', 'General Supplies')")
        .bind(Uuid::new_v4())
        .execute(pool)
        .await?;
    info!("seeded default supplier");
    Ok(())
}

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod tests;
