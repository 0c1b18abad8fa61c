//! Product catalogue service.
//!
//! DESIGN
//! ======
//! Products are the anchor of the stock ledger: movements and GRN lines
//! reference them by ID, and SKU uniqueness is enforced by the database so
//! concurrent creates cannot race past a pre-check.

use chrono::{DateTime, Utc};
use records::inventory::{NewProduct, Product};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

const DEFAULT_UNIT: &str = "pcs";

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product not found: {0}")]
    NotFound(Uuid),
    #[error("duplicate sku: {0}")]
    DuplicateSku(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == "23505")
}

/// Validate and normalize a creation payload.
///
/// # Errors
///
/// Returns `Validation` describing the first rejected field.
pub fn validate_new_product(new: &NewProduct) -> Result<NewProduct, ProductError> {
    let sku = new.sku.trim();
    if sku.is_empty() {
        return Err(ProductError::Validation("sku must not be empty".into()));
    }
    let name = new.name.trim();
    if name.is_empty() {
        return Err(ProductError::Validation("name must not be empty".into()));
    }
    if new.price < Decimal::ZERO {
        return Err(ProductError::Validation("price must not be negative".into()));
    }
    if new.cost < Decimal::ZERO {
        return Err(ProductError::Validation("cost must not be negative".into()));
    }
    if new.reorder_level.is_some_and(|level| level < 0) {
        return Err(ProductError::Validation("reorder level must not be negative".into()));
    }

    let category = new
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(ToOwned::to_owned);
    let unit = new
        .unit
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or(DEFAULT_UNIT)
        .to_owned();

    Ok(NewProduct {
        sku: sku.to_owned(),
        name: name.to_owned(),
        category,
        unit: Some(unit),
        price: new.price,
        cost: new.cost,
        reorder_level: Some(new.reorder_level.unwrap_or(0)),
    })
}

/// Create a product.
///
/// # Errors
///
/// Returns `Validation` for a bad payload, `DuplicateSku` when the SKU is
/// already taken, or a database error.
pub async fn create_product(pool: &PgPool, new: &NewProduct) -> Result<Product, ProductError> {
    let normalized = validate_new_product(new)?;
    let id = Uuid::new_v4();
    let now = Utc::now();
    let unit = normalized.unit.clone().unwrap_or_else(|| DEFAULT_UNIT.to_owned());
    let reorder_level = normalized.reorder_level.unwrap_or(0);

    let result = sqlx::query(
        "INSERT INTO products (id, sku, name, category, unit, price, cost, reorder_level, is_active, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, TRUE, $9, $9)",
    )
    .bind(id)
    .bind(&normalized.sku)
    .bind(&normalized.name)
    .bind(&normalized.category)
    .bind(&unit)
    .bind(normalized.price)
    .bind(normalized.cost)
    .bind(reorder_level)
    .bind(now)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(Product {
            id,
            sku: normalized.sku,
            name: normalized.name,
            category: normalized.category,
            unit,
            price: normalized.price,
            cost: normalized.cost,
            reorder_level,
            is_active: true,
            created_at: now,
            updated_at: now,
        }),
        Err(err) if is_unique_violation(&err) => Err(ProductError::DuplicateSku(normalized.sku)),
        Err(err) => Err(err.into()),
    }
}

type ProductRow = (
    Uuid,
    String,
    String,
    Option<String>,
    String,
    Decimal,
    Decimal,
    i32,
    bool,
    DateTime<Utc>,
    DateTime<Utc>,
);

fn row_to_product(row: ProductRow) -> Product {
    let (id, sku, name, category, unit, price, cost, reorder_level, is_active, created_at, updated_at) = row;
    Product { id, sku, name, category, unit, price, cost, reorder_level, is_active, created_at, updated_at }
}

/// List products with optional search and category filters.
/// Returns the page plus the unpaged total for the same filters.
///
/// # Errors
///
/// Returns a database error if either query fails.
pub async fn list_products(
    pool: &PgPool,
    page: u32,
    limit: u32,
    search: Option<&str>,
    category: Option<&str>,
) -> Result<(Vec<Product>, u64), ProductError> {
    let search = search.map(str::trim).filter(|s| !s.is_empty());
    let category = category.map(str::trim).filter(|c| !c.is_empty());
    let offset = i64::from(page.saturating_sub(1)) * i64::from(limit);

    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*)
         FROM products
         WHERE ($1::text IS NULL OR sku ILIKE '%' || $1 || '%' OR name ILIKE '%' || $1 || '%')
           AND ($2::text IS NULL OR category = $2)",
    )
    .bind(search)
    .bind(category)
    .fetch_one(pool)
    .await?;

    let rows = sqlx::query_as::<_, ProductRow>(
        "SELECT id, sku, name, category, unit, price, cost, reorder_level, is_active, created_at, updated_at
         FROM products
         WHERE ($1::text IS NULL OR sku ILIKE '%' || $1 || '%' OR name ILIKE '%' || $1 || '%')
           AND ($2::text IS NULL OR category = $2)
         ORDER BY name ASC, id ASC
         LIMIT $3 OFFSET $4",
    )
    .bind(search)
    .bind(category)
    .bind(i64::from(limit))
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok((rows.into_iter().map(row_to_product).collect(), total.unsigned_abs()))
}

/// Fetch one product by ID.
///
/// # Errors
///
/// Returns `NotFound` if the ID does not exist, or a database error.
pub async fn get_product(pool: &PgPool, product_id: Uuid) -> Result<Product, ProductError> {
    let row = sqlx::query_as::<_, ProductRow>(
        "SELECT id, sku, name, category, unit, price, cost, reorder_level, is_active, created_at, updated_at
         FROM products
         WHERE id = $1",
    )
    .bind(product_id)
    .fetch_optional(pool)
    .await?;

    row.map(row_to_product).ok_or(ProductError::NotFound(product_id))
}

#[cfg(test)]
#[path = "product_test.rs"]
mod tests;
