//! Warehouse lookups backing movement and GRN forms.

use records::inventory::Warehouse;
use sqlx::PgPool;
use uuid::Uuid;

/// List active warehouses, ordered by name.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_warehouses(pool: &PgPool) -> Result<Vec<Warehouse>, sqlx::Error> {
    let rows = sqlx::query_as::<_, (Uuid, String, String, Option<String>, bool, chrono::DateTime<chrono::Utc>)>(
        "SELECT id, code, name, location, is_active, created_at
         FROM warehouses
         WHERE is_active
         ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, code, name, location, is_active, created_at)| Warehouse {
            id,
            code,
            name,
            location,
            is_active,
            created_at,
        })
        .collect())
}

/// Fetch one warehouse name by ID.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn warehouse_name(pool: &PgPool, warehouse_id: Uuid) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT name FROM warehouses WHERE id = $1")
        .bind(warehouse_id)
        .fetch_optional(pool)
        .await
}

/// Resolve warehouse names for a set of IDs.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn warehouse_names(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<(Uuid, String)>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = sqlx::QueryBuilder::new("SELECT id, name FROM warehouses WHERE id IN (");
    {
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
    }
    builder.push(")");

    builder.build_query_as::<(Uuid, String)>().fetch_all(pool).await
}
