//! Inventory records: products, warehouses, and the stock-movement ledger.
//!
//! DESIGN
//! ======
//! Stock on hand is never stored directly. Every quantity change is an
//! append-only [`StockMovement`] row, and on-hand levels are the signed sum
//! of ledger deltas per (product, warehouse). List DTOs carry the display
//! names the tables need so pages render without follow-up lookups.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// PRODUCTS
// =============================================================================

/// Catalogue product as served by `/api/inventory/products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub category: Option<String>,
    /// Unit of measure, e.g. `"pcs"`, `"kg"`.
    pub unit: String,
    pub price: Decimal,
    pub cost: Decimal,
    /// On-hand at or below this level counts as low stock.
    pub reorder_level: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload for `POST /api/inventory/products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    pub price: Decimal,
    pub cost: Decimal,
    #[serde(default)]
    pub reorder_level: Option<i32>,
}

/// Per-warehouse on-hand level for a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub warehouse_id: Uuid,
    pub warehouse: String,
    pub on_hand: i64,
}

/// Product detail payload: the product plus derived stock levels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub product: Product,
    pub levels: Vec<StockLevel>,
    pub on_hand_total: i64,
}

// =============================================================================
// WAREHOUSES
// =============================================================================

/// Warehouse as served by `/api/inventory/warehouses`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// STOCK MOVEMENTS
// =============================================================================

/// Kind of ledger entry. Determines which warehouse fields are required and
/// the sign of the applied delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    /// Goods in: `+quantity` at `to_warehouse`.
    Receipt,
    /// Goods out: `-quantity` from `from_warehouse`.
    Issue,
    /// Between warehouses: `-quantity` from `from_warehouse`, `+quantity` at `to_warehouse`.
    Transfer,
    /// Signed correction applied at `to_warehouse`.
    Adjustment,
}

impl MovementType {
    /// Wire string for this movement type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Receipt => "receipt",
            Self::Issue => "issue",
            Self::Transfer => "transfer",
            Self::Adjustment => "adjustment",
        }
    }

    /// Parse the wire string; returns `None` for unknown values.
    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "receipt" => Some(Self::Receipt),
            "issue" => Some(Self::Issue),
            "transfer" => Some(Self::Transfer),
            "adjustment" => Some(Self::Adjustment),
            _ => None,
        }
    }

    /// All movement types, in display order.
    #[must_use]
    pub fn all() -> [Self; 4] {
        [Self::Receipt, Self::Issue, Self::Transfer, Self::Adjustment]
    }
}

/// Ledger row as served by `/api/inventory/stock-movements/list`.
///
/// Ledger rows are immutable: there is no update or delete shape for them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_sku: String,
    pub product_name: String,
    pub movement_type: MovementType,
    /// Positive except for `adjustment`, which may carry either sign.
    pub quantity: i32,
    pub from_warehouse_id: Option<Uuid>,
    pub from_warehouse: Option<String>,
    pub to_warehouse_id: Option<Uuid>,
    pub to_warehouse: Option<String>,
    /// Free-text source document reference, e.g. a GRN number.
    pub reference: Option<String>,
    pub note: Option<String>,
    pub moved_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload for `POST /api/inventory/stock-movements`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewStockMovement {
    pub product_id: Uuid,
    pub movement_type: MovementType,
    pub quantity: i32,
    #[serde(default)]
    pub from_warehouse_id: Option<Uuid>,
    #[serde(default)]
    pub to_warehouse_id: Option<Uuid>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[cfg(test)]
#[path = "inventory_test.rs"]
mod tests;
