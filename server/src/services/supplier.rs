//! Supplier lookups backing the GRN form and supplier picker.

use chrono::{DateTime, Utc};
use records::purchasing::Supplier;
use sqlx::PgPool;
use uuid::Uuid;

/// List active suppliers, ordered by name.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_suppliers(pool: &PgPool) -> Result<Vec<Supplier>, sqlx::Error> {
    let rows = sqlx::query_as::<
        _,
        (Uuid, String, String, Option<String>, Option<String>, Option<String>, bool, DateTime<Utc>),
    >(
        "SELECT id, code, name, contact_name, email, phone, is_active, created_at
         FROM suppliers
         WHERE is_active
         ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, code, name, contact_name, email, phone, is_active, created_at)| Supplier {
            id,
            code,
            name,
            contact_name,
            email,
            phone,
            is_active,
            created_at,
        })
        .collect())
}
