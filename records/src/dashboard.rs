//! Dashboard summary payload polled by the landing page.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stat-card numbers served by `GET /api/dashboard/summary`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Active products in the catalogue.
    pub products: i64,
    /// Products whose total on-hand is at or below their reorder level.
    pub low_stock: i64,
    /// GRNs awaiting approval.
    pub pending_grns: i64,
    /// Ledger entries recorded today (UTC).
    pub movements_today: i64,
    /// Sum of on-hand quantity times product cost across the catalogue.
    pub inventory_value: Decimal,
}

impl DashboardSummary {
    /// Empty summary used as the initial page state.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            products: 0,
            low_stock: 0,
            pending_grns: 0,
            movements_today: 0,
            inventory_value: Decimal::ZERO,
        }
    }
}
