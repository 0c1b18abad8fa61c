//! Dashboard summary queries.
//!
//! Counts are computed in SQL rather than from the stock cache so the
//! landing page works even before the cache has hydrated.

use records::dashboard::DashboardSummary;
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Compute the stat-card numbers for the landing page.
///
/// # Errors
///
/// Returns a database error if any query fails.
pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
    let products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE is_active")
        .fetch_one(pool)
        .await?;

    let pending_grns: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM grns WHERE status = 'pending'")
        .fetch_one(pool)
        .await?;

    let movements_today: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM stock_movements WHERE created_at >= date_trunc('day', now())")
            .fetch_one(pool)
            .await?;

    // Low-stock count and inventory value share one pass over the summed ledger.
    let (low_stock, inventory_value): (i64, Decimal) = sqlx::query_as(
        "WITH levels AS (
             SELECT product_id, SUM(delta)::BIGINT AS on_hand
             FROM (
                 SELECT product_id, quantity::BIGINT AS delta
                 FROM stock_movements
                 WHERE to_warehouse_id IS NOT NULL
                 UNION ALL
                 SELECT product_id, -quantity::BIGINT AS delta
                 FROM stock_movements
                 WHERE from_warehouse_id IS NOT NULL
             ) ledger
             GROUP BY product_id
         )
         SELECT
             COUNT(*) FILTER (WHERE COALESCE(l.on_hand, 0) <= p.reorder_level),
             COALESCE(SUM(COALESCE(l.on_hand, 0) * p.cost), 0)
         FROM products p
         LEFT JOIN levels l ON l.product_id = p.id
         WHERE p.is_active",
    )
    .fetch_one(pool)
    .await?;

    Ok(DashboardSummary { products, low_stock, pending_grns, movements_today, inventory_value })
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
