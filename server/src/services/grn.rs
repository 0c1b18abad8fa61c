//! Goods-received-note service.
//!
//! DESIGN
//! ======
//! A GRN is created `pending` with its lines and touches no stock. Approval
//! is the only path from pending to approved: inside one transaction the row
//! is locked, flipped, and a receipt movement is appended per line carrying
//! the GRN number as its reference. The row lock plus the status check make
//! approval one-shot, so lines can never post to the ledger twice. Approved
//! GRNs cannot be deleted; pending ones can, cascading their lines.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use records::auth::UserInfo;
use records::purchasing::{Grn, GrnLine, GrnStatus, NewGrn};
use rust_decimal::Decimal;
use sqlx::{PgPool, QueryBuilder};
use tracing::info;
use uuid::Uuid;

use crate::services::{stock, warehouse};
use crate::state::{AppState, StockDelta};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GrnError {
    #[error("grn not found: {0}")]
    NotFound(Uuid),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("grn already approved: {0}")]
    AlreadyApproved(Uuid),
    #[error("approved grns cannot be deleted: {0}")]
    ApprovedImmutable(Uuid),
    #[error("supplier not found: {0}")]
    SupplierNotFound(Uuid),
    #[error("warehouse not found: {0}")]
    WarehouseNotFound(Uuid),
    #[error("product not found: {0}")]
    ProductNotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Filters for the GRN list endpoint.
#[derive(Debug, Clone)]
pub struct GrnFilter {
    pub page: u32,
    pub limit: u32,
    pub status: Option<GrnStatus>,
    pub search: Option<String>,
}

// =============================================================================
// CREATE
// =============================================================================

fn validate_new_grn(new: &NewGrn) -> Result<(), GrnError> {
    if new.lines.is_empty() {
        return Err(GrnError::Validation("grn requires at least one line".into()));
    }
    for line in &new.lines {
        if line.quantity <= 0 {
            return Err(GrnError::Validation("line quantity must be positive".into()));
        }
        if line.unit_cost < Decimal::ZERO {
            return Err(GrnError::Validation("line unit cost must not be negative".into()));
        }
    }
    Ok(())
}

async fn product_names(pool: &PgPool, ids: &[Uuid]) -> Result<HashMap<Uuid, (String, String)>, GrnError> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let mut builder = QueryBuilder::new("SELECT id, sku, name FROM products WHERE id IN (");
    {
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
    }
    builder.push(")");

    let rows = builder.build_query_as::<(Uuid, String, String)>().fetch_all(pool).await?;
    Ok(rows.into_iter().map(|(id, sku, name)| (id, (sku, name))).collect())
}

async fn next_grn_number(pool: &PgPool) -> Result<String, sqlx::Error> {
    let seq: i64 = sqlx::query_scalar("SELECT nextval('grn_number_seq')").fetch_one(pool).await?;
    Ok(format!("GRN-{}-{seq:04}", Utc::now().year()))
}

/// Create a pending GRN with its lines.
///
/// # Errors
///
/// Returns `Validation` for a bad payload, a not-found variant for dangling
/// references, or a database error.
pub async fn create_grn(pool: &PgPool, new: &NewGrn, actor: &UserInfo) -> Result<Grn, GrnError> {
    validate_new_grn(new)?;

    let supplier_name: String = sqlx::query_scalar("SELECT name FROM suppliers WHERE id = $1")
        .bind(new.supplier_id)
        .fetch_optional(pool)
        .await?
        .ok_or(GrnError::SupplierNotFound(new.supplier_id))?;
    let warehouse_name = warehouse::warehouse_name(pool, new.warehouse_id)
        .await?
        .ok_or(GrnError::WarehouseNotFound(new.warehouse_id))?;

    let product_ids: Vec<Uuid> = new.lines.iter().map(|line| line.product_id).collect();
    let names = product_names(pool, &product_ids).await?;
    for line in &new.lines {
        if !names.contains_key(&line.product_id) {
            return Err(GrnError::ProductNotFound(line.product_id));
        }
    }

    let id = Uuid::new_v4();
    let grn_number = next_grn_number(pool).await?;
    let created_at = Utc::now();
    let note = new.note.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(ToOwned::to_owned);

    let mut tx = pool.begin().await?;
    sqlx::query(
        "INSERT INTO grns (id, grn_number, supplier_id, warehouse_id, status, received_date, note, created_by, created_at)
         VALUES ($1, $2, $3, $4, 'pending', $5, $6, $7, $8)",
    )
    .bind(id)
    .bind(&grn_number)
    .bind(new.supplier_id)
    .bind(new.warehouse_id)
    .bind(new.received_date)
    .bind(&note)
    .bind(actor.id)
    .bind(created_at)
    .execute(tx.as_mut())
    .await?;

    let mut lines = Vec::with_capacity(new.lines.len());
    for line in &new.lines {
        let line_id = Uuid::new_v4();
        sqlx::query("INSERT INTO grn_lines (id, grn_id, product_id, quantity, unit_cost) VALUES ($1, $2, $3, $4, $5)")
            .bind(line_id)
            .bind(id)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(line.unit_cost)
            .execute(tx.as_mut())
            .await?;

        let (sku, name) = names.get(&line.product_id).cloned().unwrap_or_default();
        lines.push(GrnLine {
            id: line_id,
            product_id: line.product_id,
            product_sku: sku,
            product_name: name,
            quantity: line.quantity,
            unit_cost: line.unit_cost,
        });
    }
    tx.commit().await?;

    let total_value = lines
        .iter()
        .map(|line| line.unit_cost * Decimal::from(line.quantity))
        .sum();

    info!(%grn_number, lines = lines.len(), "grn created");

    Ok(Grn {
        id,
        grn_number,
        supplier_id: new.supplier_id,
        supplier: supplier_name,
        warehouse_id: new.warehouse_id,
        warehouse: warehouse_name,
        status: GrnStatus::Pending,
        received_date: new.received_date,
        note,
        created_by: Some(actor.username.clone()),
        approved_by: None,
        approved_at: None,
        created_at,
        lines,
        total_value,
    })
}

// =============================================================================
// LISTING
// =============================================================================

type GrnRow = (
    Uuid,
    String,
    Uuid,
    String,
    Uuid,
    String,
    String,
    NaiveDate,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<DateTime<Utc>>,
    DateTime<Utc>,
);

fn row_to_grn(row: GrnRow, lines: Vec<GrnLine>) -> Result<Grn, GrnError> {
    let (
        id,
        grn_number,
        supplier_id,
        supplier,
        warehouse_id,
        warehouse,
        raw_status,
        received_date,
        note,
        created_by,
        approved_by,
        approved_at,
        created_at,
    ) = row;

    let status = GrnStatus::from_str(&raw_status)
        .ok_or_else(|| GrnError::Validation(format!("unrecognized grn status: {raw_status}")))?;
    let total_value = lines
        .iter()
        .map(|line| line.unit_cost * Decimal::from(line.quantity))
        .sum();

    Ok(Grn {
        id,
        grn_number,
        supplier_id,
        supplier,
        warehouse_id,
        warehouse,
        status,
        received_date,
        note,
        created_by,
        approved_by,
        approved_at,
        created_at,
        lines,
        total_value,
    })
}

async fn lines_for_grns(pool: &PgPool, grn_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<GrnLine>>, GrnError> {
    if grn_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let mut builder = QueryBuilder::new(
        "SELECT l.id, l.grn_id, l.product_id, p.sku, p.name, l.quantity, l.unit_cost
         FROM grn_lines l
         JOIN products p ON p.id = l.product_id
         WHERE l.grn_id IN (",
    );
    {
        let mut separated = builder.separated(", ");
        for grn_id in grn_ids {
            separated.push_bind(grn_id);
        }
    }
    builder.push(") ORDER BY p.name ASC, l.id ASC");

    let rows = builder
        .build_query_as::<(Uuid, Uuid, Uuid, String, String, i32, Decimal)>()
        .fetch_all(pool)
        .await?;

    let mut out: HashMap<Uuid, Vec<GrnLine>> = HashMap::new();
    for (id, grn_id, product_id, product_sku, product_name, quantity, unit_cost) in rows {
        out.entry(grn_id)
            .or_default()
            .push(GrnLine { id, product_id, product_sku, product_name, quantity, unit_cost });
    }
    Ok(out)
}

const GRN_SELECT: &str = "SELECT g.id, g.grn_number, g.supplier_id, s.name, g.warehouse_id, w.name,
            g.status, g.received_date, g.note, uc.username, ua.username, g.approved_at, g.created_at
     FROM grns g
     JOIN suppliers s ON s.id = g.supplier_id
     JOIN warehouses w ON w.id = g.warehouse_id
     LEFT JOIN users uc ON uc.id = g.created_by
     LEFT JOIN users ua ON ua.id = g.approved_by";

/// List GRNs newest first, with optional status and text filters.
/// Returns the page plus the unpaged total for the same filters.
///
/// # Errors
///
/// Returns a database error if any query fails.
pub async fn list_grns(pool: &PgPool, filter: &GrnFilter) -> Result<(Vec<Grn>, u64), GrnError> {
    let status = filter.status.map(GrnStatus::as_str);
    let search = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let offset = i64::from(filter.page.saturating_sub(1)) * i64::from(filter.limit);

    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*)
         FROM grns g
         JOIN suppliers s ON s.id = g.supplier_id
         WHERE ($1::text IS NULL OR g.status = $1)
           AND ($2::text IS NULL OR g.grn_number ILIKE '%' || $2 || '%' OR s.name ILIKE '%' || $2 || '%')",
    )
    .bind(status)
    .bind(search)
    .fetch_one(pool)
    .await?;

    let page_sql = format!(
        "{GRN_SELECT}
         WHERE ($1::text IS NULL OR g.status = $1)
           AND ($2::text IS NULL OR g.grn_number ILIKE '%' || $2 || '%' OR s.name ILIKE '%' || $2 || '%')
         ORDER BY g.created_at DESC, g.id DESC
         LIMIT $3 OFFSET $4"
    );
    let rows = sqlx::query_as::<_, GrnRow>(&page_sql)
        .bind(status)
        .bind(search)
        .bind(i64::from(filter.limit))
        .bind(offset)
        .fetch_all(pool)
        .await?;

    let ids: Vec<Uuid> = rows.iter().map(|row| row.0).collect();
    let mut lines_by_grn = lines_for_grns(pool, &ids).await?;

    let grns = rows
        .into_iter()
        .map(|row| {
            let lines = lines_by_grn.remove(&row.0).unwrap_or_default();
            row_to_grn(row, lines)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((grns, total.unsigned_abs()))
}

/// Fetch one GRN with its lines.
///
/// # Errors
///
/// Returns `NotFound` if the ID does not exist, or a database error.
pub async fn get_grn(pool: &PgPool, grn_id: Uuid) -> Result<Grn, GrnError> {
    let sql = format!("{GRN_SELECT} WHERE g.id = $1");
    let row = sqlx::query_as::<_, GrnRow>(&sql)
        .bind(grn_id)
        .fetch_optional(pool)
        .await?
        .ok_or(GrnError::NotFound(grn_id))?;

    let mut lines_by_grn = lines_for_grns(pool, &[grn_id]).await?;
    let lines = lines_by_grn.remove(&grn_id).unwrap_or_default();
    row_to_grn(row, lines)
}

// =============================================================================
// APPROVE
// =============================================================================

/// Approve a pending GRN: flip its status and append one receipt movement per
/// line, all in one transaction.
///
/// The stock cache is hydrated before the transaction and the receipt deltas
/// are reserved in it before commit, mirroring the append path; a failed
/// commit reverts the reservation.
///
/// # Errors
///
/// Returns `NotFound` for an unknown ID, `AlreadyApproved` when the GRN is
/// not pending, or a database error.
pub async fn approve_grn(state: &AppState, grn_id: Uuid, approver: &UserInfo) -> Result<Grn, GrnError> {
    stock::ensure_hydrated(state).await?;

    let mut tx = state.pool.begin().await?;

    let row = sqlx::query_as::<_, (String, String, Uuid)>(
        "SELECT status, grn_number, warehouse_id FROM grns WHERE id = $1 FOR UPDATE",
    )
    .bind(grn_id)
    .fetch_optional(tx.as_mut())
    .await?
    .ok_or(GrnError::NotFound(grn_id))?;
    let (raw_status, grn_number, warehouse_id) = row;

    if GrnStatus::from_str(&raw_status) != Some(GrnStatus::Pending) {
        return Err(GrnError::AlreadyApproved(grn_id));
    }

    let approved_at = Utc::now();
    sqlx::query("UPDATE grns SET status = 'approved', approved_by = $2, approved_at = $3 WHERE id = $1")
        .bind(grn_id)
        .bind(approver.id)
        .bind(approved_at)
        .execute(tx.as_mut())
        .await?;

    let lines = sqlx::query_as::<_, (Uuid, i32)>("SELECT product_id, quantity FROM grn_lines WHERE grn_id = $1")
        .bind(grn_id)
        .fetch_all(tx.as_mut())
        .await?;

    let mut deltas = Vec::with_capacity(lines.len());
    for (product_id, quantity) in &lines {
        sqlx::query(
            "INSERT INTO stock_movements
                 (id, product_id, movement_type, quantity, to_warehouse_id, reference, moved_by, created_at)
             VALUES ($1, $2, 'receipt', $3, $4, $5, $6, $7)",
        )
        .bind(Uuid::new_v4())
        .bind(product_id)
        .bind(quantity)
        .bind(warehouse_id)
        .bind(&grn_number)
        .bind(approver.id)
        .bind(approved_at)
        .execute(tx.as_mut())
        .await?;

        deltas.push(StockDelta { product_id: *product_id, warehouse_id, change: i64::from(*quantity) });
    }

    // Reserve the receipts in the cache, then commit. Receipts only add, so
    // no negative-stock check applies.
    {
        let mut cache = state.stock.write().await;
        cache.apply(&deltas);
    }

    if let Err(err) = tx.commit().await {
        let mut cache = state.stock.write().await;
        cache.revert(&deltas);
        return Err(err.into());
    }

    info!(%grn_number, movements = deltas.len(), "grn approved");

    get_grn(&state.pool, grn_id).await
}

// =============================================================================
// DELETE
// =============================================================================

/// Delete a pending GRN and its lines.
///
/// # Errors
///
/// Returns `ApprovedImmutable` when the GRN has been approved, `NotFound` for
/// an unknown ID, or a database error.
pub async fn delete_grn(pool: &PgPool, grn_id: Uuid) -> Result<(), GrnError> {
    let result = sqlx::query("DELETE FROM grns WHERE id = $1 AND status = 'pending'")
        .bind(grn_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        let status: Option<String> = sqlx::query_scalar("SELECT status FROM grns WHERE id = $1")
            .bind(grn_id)
            .fetch_optional(pool)
            .await?;
        return match status {
            Some(_) => Err(GrnError::ApprovedImmutable(grn_id)),
            None => Err(GrnError::NotFound(grn_id)),
        };
    }

    info!(%grn_id, "pending grn deleted");
    Ok(())
}

#[cfg(test)]
#[path = "grn_test.rs"]
mod tests;
