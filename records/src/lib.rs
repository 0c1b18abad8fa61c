//! Shared wire model for the Opsdesk API.
//!
//! This crate owns the JSON surface used by both `server` and `client`:
//! the `{success, data, pagination}` response envelope, stable error codes,
//! pagination math, and the domain records exchanged over `/api` routes.
//! Keeping it in one crate means neither side can drift from the other.

pub mod auth;
pub mod dashboard;
pub mod inventory;
pub mod money;
pub mod purchasing;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR CODES
// =============================================================================

/// Stable, machine-readable error codes carried in failure envelopes.
///
/// Clients match on `error.code`, never on the human-readable message.
/// Codes never change; messages may be reworded.
pub mod error_code {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const UNAUTHENTICATED: &str = "UNAUTHENTICATED";
    pub const DUPLICATE_SKU: &str = "DUPLICATE_SKU";
    pub const INSUFFICIENT_STOCK: &str = "INSUFFICIENT_STOCK";
    pub const ALREADY_APPROVED: &str = "ALREADY_APPROVED";
    pub const APPROVED_IMMUTABLE: &str = "APPROVED_IMMUTABLE";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const INTERNAL: &str = "INTERNAL";
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size applied when a list request omits `limit`.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;
/// Hard cap on `limit` to keep list queries bounded.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Pagination block attached to list responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page index that was served.
    pub page: u32,
    /// Page size that was applied.
    pub limit: u32,
    /// Total matching rows across all pages.
    pub total: u64,
    /// Total page count for `total` rows at `limit` per page.
    pub total_pages: u32,
}

impl Pagination {
    /// Build a pagination block, deriving `total_pages` from `total` and `limit`.
    #[must_use]
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            u32::try_from(total.div_ceil(u64::from(limit.max(1)))).unwrap_or(u32::MAX)
        };
        Self { page, limit: limit.max(1), total, total_pages }
    }

    /// Normalize raw query parameters into an effective `(page, limit)` pair.
    ///
    /// Missing or zero values fall back to page 1 / [`DEFAULT_PAGE_LIMIT`];
    /// `limit` is clamped to [`MAX_PAGE_LIMIT`].
    #[must_use]
    pub fn normalize(page: Option<u32>, limit: Option<u32>) -> (u32, u32) {
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .min(MAX_PAGE_LIMIT);
        (page, limit)
    }

    /// Row offset for the SQL `OFFSET` clause.
    #[must_use]
    pub fn offset(self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

/// Error payload carried by failure envelopes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable code from [`error_code`].
    pub code: String,
    /// Human-readable description; free to change between releases.
    pub message: String,
}

/// Uniform response envelope for every `/api` route:
/// `{ "success": bool, "data": ..., "pagination": ..., "error": ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
// Without an explicit bound, the derive adds `T: Default` for the
// `#[serde(default)]` field even though `Option<T>: Default` holds for any T.
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl<T> Envelope<T> {
    /// Success envelope with a data payload.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), pagination: None, error: None }
    }

    /// Success envelope for a list payload with its pagination block.
    #[must_use]
    pub fn paginated(data: T, pagination: Pagination) -> Self {
        Self { success: true, data: Some(data), pagination: Some(pagination), error: None }
    }

    /// Failure envelope with a stable error code and message.
    #[must_use]
    pub fn failure(code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            pagination: None,
            error: Some(ApiError { code: code.to_owned(), message: message.into() }),
        }
    }

    /// The error code on a failure envelope, if any.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.code.as_str())
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
