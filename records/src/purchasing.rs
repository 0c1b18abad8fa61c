//! Purchasing records: suppliers and goods-received notes.
//!
//! A GRN confirms a supplier delivery. It is created `pending` and carries
//! line items; approval is the only path that turns those lines into stock
//! ledger entries, which is why an approved GRN can never be deleted.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supplier as served by `/api/suppliers`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle state of a GRN.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrnStatus {
    Pending,
    Approved,
}

impl GrnStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }

    /// Parse the wire string; returns `None` for unknown values.
    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            _ => None,
        }
    }

    /// Only pending GRNs may be approved; approval is one-shot.
    #[must_use]
    pub fn can_approve(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Only pending GRNs may be deleted; approved ones already produced
    /// ledger entries.
    #[must_use]
    pub fn can_delete(self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// One received line on a GRN.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrnLine {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_sku: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_cost: Decimal,
}

/// GRN as served by `/api/purchases/grn-list`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grn {
    pub id: Uuid,
    /// Human-facing document number, `GRN-<year>-<seq>`.
    pub grn_number: String,
    pub supplier_id: Uuid,
    pub supplier: String,
    pub warehouse_id: Uuid,
    pub warehouse: String,
    pub status: GrnStatus,
    pub received_date: NaiveDate,
    pub note: Option<String>,
    pub created_by: Option<String>,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<GrnLine>,
    /// Sum of `quantity x unit_cost` across lines.
    pub total_value: Decimal,
}

/// Creation payload for `POST /api/purchases/grn-list`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewGrn {
    pub supplier_id: Uuid,
    pub warehouse_id: Uuid,
    pub received_date: NaiveDate,
    #[serde(default)]
    pub note: Option<String>,
    pub lines: Vec<NewGrnLine>,
}

/// One line of a GRN creation payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewGrnLine {
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_cost: Decimal,
}

/// Body of `POST /api/purchases/grn-approve`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GrnApproveRequest {
    pub grn_id: Uuid,
}

/// Total value of a set of GRN creation lines.
#[must_use]
pub fn lines_total(lines: &[NewGrnLine]) -> Decimal {
    lines
        .iter()
        .map(|line| line.unit_cost * Decimal::from(line.quantity))
        .sum()
}

#[cfg(test)]
#[path = "purchasing_test.rs"]
mod tests;
