//! Stock ledger service.
//!
//! DESIGN
//! ======
//! Movements are append-only: rows are inserted once and never updated or
//! deleted, so corrections are new `adjustment` entries. On-hand stock is the
//! signed sum of ledger deltas per (product, warehouse), held in the shared
//! [`StockCache`] and hydrated lazily from Postgres on first use.
//!
//! ERROR HANDLING
//! ==============
//! Appending reserves the delta in the cache before touching Postgres, so two
//! concurrent issues cannot both pass the negative-stock check. A failed
//! insert reverts the reservation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use records::auth::UserInfo;
use records::inventory::{MovementType, NewStockMovement, StockLevel, StockMovement};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::services::warehouse;
use crate::state::{AppState, StockDelta};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StockError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("product not found: {0}")]
    ProductNotFound(Uuid),
    #[error("warehouse not found: {0}")]
    WarehouseNotFound(Uuid),
    #[error("insufficient stock: {on_hand} on hand, {requested} requested")]
    InsufficientStock {
        product_id: Uuid,
        warehouse_id: Uuid,
        on_hand: i64,
        requested: i64,
    },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Filters for the movement list endpoint.
#[derive(Debug, Clone)]
pub struct MovementFilter {
    pub page: u32,
    pub limit: u32,
    pub movement_type: Option<MovementType>,
    pub search: Option<String>,
}

// =============================================================================
// DELTA DERIVATION
// =============================================================================

/// Derive the signed on-hand deltas for a movement, validating the warehouse
/// shape each movement type requires.
///
/// # Errors
///
/// Returns `Validation` when the quantity or warehouse fields do not fit the
/// movement type.
pub fn movement_deltas(new: &NewStockMovement) -> Result<Vec<StockDelta>, StockError> {
    let quantity = i64::from(new.quantity);
    match new.movement_type {
        MovementType::Receipt => {
            if quantity <= 0 {
                return Err(StockError::Validation("receipt quantity must be positive".into()));
            }
            if new.from_warehouse_id.is_some() {
                return Err(StockError::Validation("receipt must not name a source warehouse".into()));
            }
            let to = new
                .to_warehouse_id
                .ok_or_else(|| StockError::Validation("receipt requires a destination warehouse".into()))?;
            Ok(vec![StockDelta { product_id: new.product_id, warehouse_id: to, change: quantity }])
        }
        MovementType::Issue => {
            if quantity <= 0 {
                return Err(StockError::Validation("issue quantity must be positive".into()));
            }
            if new.to_warehouse_id.is_some() {
                return Err(StockError::Validation("issue must not name a destination warehouse".into()));
            }
            let from = new
                .from_warehouse_id
                .ok_or_else(|| StockError::Validation("issue requires a source warehouse".into()))?;
            Ok(vec![StockDelta { product_id: new.product_id, warehouse_id: from, change: -quantity }])
        }
        MovementType::Transfer => {
            if quantity <= 0 {
                return Err(StockError::Validation("transfer quantity must be positive".into()));
            }
            let from = new
                .from_warehouse_id
                .ok_or_else(|| StockError::Validation("transfer requires a source warehouse".into()))?;
            let to = new
                .to_warehouse_id
                .ok_or_else(|| StockError::Validation("transfer requires a destination warehouse".into()))?;
            if from == to {
                return Err(StockError::Validation("transfer warehouses must differ".into()));
            }
            Ok(vec![
                StockDelta { product_id: new.product_id, warehouse_id: from, change: -quantity },
                StockDelta { product_id: new.product_id, warehouse_id: to, change: quantity },
            ])
        }
        MovementType::Adjustment => {
            if quantity == 0 {
                return Err(StockError::Validation("adjustment quantity must not be zero".into()));
            }
            if new.from_warehouse_id.is_some() {
                return Err(StockError::Validation("adjustment must not name a source warehouse".into()));
            }
            let to = new
                .to_warehouse_id
                .ok_or_else(|| StockError::Validation("adjustment requires a warehouse".into()))?;
            Ok(vec![StockDelta { product_id: new.product_id, warehouse_id: to, change: quantity }])
        }
    }
}

// =============================================================================
// CACHE HYDRATION
// =============================================================================

async fn load_levels(pool: &PgPool) -> Result<HashMap<(Uuid, Uuid), i64>, sqlx::Error> {
    let rows = sqlx::query_as::<_, (Uuid, Uuid, i64)>(
        "SELECT product_id, warehouse_id, SUM(delta)::BIGINT
         FROM (
             SELECT product_id, to_warehouse_id AS warehouse_id, quantity::BIGINT AS delta
             FROM stock_movements
             WHERE to_warehouse_id IS NOT NULL
             UNION ALL
             SELECT product_id, from_warehouse_id AS warehouse_id, -quantity::BIGINT AS delta
             FROM stock_movements
             WHERE from_warehouse_id IS NOT NULL
         ) ledger
         GROUP BY product_id, warehouse_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|(product_id, warehouse_id, qty)| ((product_id, warehouse_id), qty)).collect())
}

/// Sum the ledger into the cache if that has not happened yet.
/// The snapshot is taken outside the lock; a concurrent hydration wins and
/// the late snapshot is discarded.
///
/// # Errors
///
/// Returns a database error if the ledger sum fails.
pub async fn ensure_hydrated(state: &AppState) -> Result<(), sqlx::Error> {
    {
        let cache = state.stock.read().await;
        if cache.is_hydrated() {
            return Ok(());
        }
    }

    let levels = load_levels(&state.pool).await?;

    let mut cache = state.stock.write().await;
    if !cache.is_hydrated() {
        info!(entries = levels.len(), "hydrated stock cache from ledger");
        cache.replace(levels);
    }
    Ok(())
}

// =============================================================================
// APPEND
// =============================================================================

fn normalize_text(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|s| !s.is_empty()).map(ToOwned::to_owned)
}

async fn resolve_warehouse_name(pool: &PgPool, id: Option<Uuid>) -> Result<Option<String>, StockError> {
    match id {
        Some(id) => {
            let name = warehouse::warehouse_name(pool, id)
                .await?
                .ok_or(StockError::WarehouseNotFound(id))?;
            Ok(Some(name))
        }
        None => Ok(None),
    }
}

/// Append one movement to the ledger and update the cache write-through.
///
/// # Errors
///
/// Returns `Validation` for a malformed movement, `ProductNotFound` /
/// `WarehouseNotFound` for dangling references, `InsufficientStock` when the
/// movement would drive a level negative, or a database error.
pub async fn append_movement(
    state: &AppState,
    new: &NewStockMovement,
    actor: &UserInfo,
) -> Result<StockMovement, StockError> {
    let deltas = movement_deltas(new)?;

    let (product_sku, product_name) = sqlx::query_as::<_, (String, String)>("SELECT sku, name FROM products WHERE id = $1")
        .bind(new.product_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(StockError::ProductNotFound(new.product_id))?;

    let from_warehouse = resolve_warehouse_name(&state.pool, new.from_warehouse_id).await?;
    let to_warehouse = resolve_warehouse_name(&state.pool, new.to_warehouse_id).await?;

    ensure_hydrated(state).await?;

    // Reserve the delta in the cache before the insert so a concurrent append
    // cannot double-spend the same stock.
    {
        let mut cache = state.stock.write().await;
        cache
            .try_apply(&deltas, state.allow_negative_stock)
            .map_err(|shortfall| StockError::InsufficientStock {
                product_id: shortfall.product_id,
                warehouse_id: shortfall.warehouse_id,
                on_hand: shortfall.on_hand,
                requested: shortfall.requested,
            })?;
    }

    let id = Uuid::new_v4();
    let created_at = Utc::now();
    let reference = normalize_text(new.reference.as_deref());
    let note = normalize_text(new.note.as_deref());

    let insert = sqlx::query(
        "INSERT INTO stock_movements
             (id, product_id, movement_type, quantity, from_warehouse_id, to_warehouse_id, reference, note, moved_by, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
    )
    .bind(id)
    .bind(new.product_id)
    .bind(new.movement_type.as_str())
    .bind(new.quantity)
    .bind(new.from_warehouse_id)
    .bind(new.to_warehouse_id)
    .bind(&reference)
    .bind(&note)
    .bind(actor.id)
    .bind(created_at)
    .execute(&state.pool)
    .await;

    if let Err(err) = insert {
        let mut cache = state.stock.write().await;
        cache.revert(&deltas);
        return Err(err.into());
    }

    info!(
        movement_id = %id,
        product_id = %new.product_id,
        movement_type = new.movement_type.as_str(),
        quantity = new.quantity,
        "stock movement appended"
    );

    Ok(StockMovement {
        id,
        product_id: new.product_id,
        product_sku,
        product_name,
        movement_type: new.movement_type,
        quantity: new.quantity,
        from_warehouse_id: new.from_warehouse_id,
        from_warehouse,
        to_warehouse_id: new.to_warehouse_id,
        to_warehouse,
        reference,
        note,
        moved_by: Some(actor.username.clone()),
        created_at,
    })
}

// =============================================================================
// LISTING
// =============================================================================

type MovementRow = (
    Uuid,
    Uuid,
    String,
    String,
    String,
    i32,
    Option<Uuid>,
    Option<String>,
    Option<Uuid>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    DateTime<Utc>,
);

fn row_to_movement(row: MovementRow) -> Result<StockMovement, StockError> {
    let (
        id,
        product_id,
        product_sku,
        product_name,
        raw_type,
        quantity,
        from_warehouse_id,
        from_warehouse,
        to_warehouse_id,
        to_warehouse,
        reference,
        note,
        moved_by,
        created_at,
    ) = row;

    let movement_type = MovementType::from_str(&raw_type)
        .ok_or_else(|| StockError::Validation(format!("unrecognized movement type in ledger: {raw_type}")))?;

    Ok(StockMovement {
        id,
        product_id,
        product_sku,
        product_name,
        movement_type,
        quantity,
        from_warehouse_id,
        from_warehouse,
        to_warehouse_id,
        to_warehouse,
        reference,
        note,
        moved_by,
        created_at,
    })
}

/// List ledger entries newest first, with optional type and text filters.
/// Returns the page plus the unpaged total for the same filters.
///
/// # Errors
///
/// Returns a database error if either query fails.
pub async fn list_movements(pool: &PgPool, filter: &MovementFilter) -> Result<(Vec<StockMovement>, u64), StockError> {
    let movement_type = filter.movement_type.map(MovementType::as_str);
    let search = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let offset = i64::from(filter.page.saturating_sub(1)) * i64::from(filter.limit);

    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*)
         FROM stock_movements m
         JOIN products p ON p.id = m.product_id
         WHERE ($1::text IS NULL OR m.movement_type = $1)
           AND ($2::text IS NULL OR p.sku ILIKE '%' || $2 || '%' OR p.name ILIKE '%' || $2 || '%')",
    )
    .bind(movement_type)
    .bind(search)
    .fetch_one(pool)
    .await?;

    let rows = sqlx::query_as::<_, MovementRow>(
        "SELECT m.id, m.product_id, p.sku, p.name, m.movement_type, m.quantity,
                m.from_warehouse_id, wf.name, m.to_warehouse_id, wt.name,
                m.reference, m.note, u.username, m.created_at
         FROM stock_movements m
         JOIN products p ON p.id = m.product_id
         LEFT JOIN warehouses wf ON wf.id = m.from_warehouse_id
         LEFT JOIN warehouses wt ON wt.id = m.to_warehouse_id
         LEFT JOIN users u ON u.id = m.moved_by
         WHERE ($1::text IS NULL OR m.movement_type = $1)
           AND ($2::text IS NULL OR p.sku ILIKE '%' || $2 || '%' OR p.name ILIKE '%' || $2 || '%')
         ORDER BY m.created_at DESC, m.id DESC
         LIMIT $3 OFFSET $4",
    )
    .bind(movement_type)
    .bind(search)
    .bind(i64::from(filter.limit))
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let movements = rows.into_iter().map(row_to_movement).collect::<Result<Vec<_>, _>>()?;
    Ok((movements, total.unsigned_abs()))
}

// =============================================================================
// DERIVED LEVELS
// =============================================================================

/// Per-warehouse on-hand levels for a product, including levels that have
/// returned to zero.
///
/// # Errors
///
/// Returns a database error if hydration or the name lookup fails.
pub async fn product_levels(state: &AppState, product_id: Uuid) -> Result<Vec<StockLevel>, StockError> {
    ensure_hydrated(state).await?;

    let entries = {
        let cache = state.stock.read().await;
        cache.levels_for_product(product_id)
    };

    let ids: Vec<Uuid> = entries.iter().map(|(warehouse_id, _)| *warehouse_id).collect();
    let name_by_id: HashMap<Uuid, String> =
        warehouse::warehouse_names(&state.pool, &ids).await?.into_iter().collect();

    let mut levels: Vec<StockLevel> = entries
        .into_iter()
        .map(|(warehouse_id, on_hand)| StockLevel {
            warehouse_id,
            warehouse: name_by_id
                .get(&warehouse_id)
                .cloned()
                .unwrap_or_else(|| warehouse_id.to_string()),
            on_hand,
        })
        .collect();
    levels.sort_by(|a, b| a.warehouse.cmp(&b.warehouse));
    Ok(levels)
}

/// Total on-hand for a product across warehouses.
///
/// # Errors
///
/// Returns a database error if hydration fails.
pub async fn product_on_hand_total(state: &AppState, product_id: Uuid) -> Result<i64, StockError> {
    ensure_hydrated(state).await?;
    let cache = state.stock.read().await;
    Ok(cache.product_total(product_id))
}

#[cfg(test)]
#[path = "stock_test.rs"]
mod tests;
