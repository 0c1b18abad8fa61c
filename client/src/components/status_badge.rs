//! Colored badges for movement types and GRN statuses.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;
use records::inventory::MovementType;
use records::purchasing::GrnStatus;

/// Badge class for a movement type.
fn movement_type_class(movement_type: MovementType) -> &'static str {
    match movement_type {
        MovementType::Receipt => "badge badge--receipt",
        MovementType::Issue => "badge badge--issue",
        MovementType::Transfer => "badge badge--transfer",
        MovementType::Adjustment => "badge badge--adjustment",
    }
}

/// Display label for a movement type.
pub fn movement_type_label(movement_type: MovementType) -> &'static str {
    match movement_type {
        MovementType::Receipt => "Receipt",
        MovementType::Issue => "Issue",
        MovementType::Transfer => "Transfer",
        MovementType::Adjustment => "Adjustment",
    }
}

/// Badge class for a GRN status.
fn grn_status_class(status: GrnStatus) -> &'static str {
    match status {
        GrnStatus::Pending => "badge badge--pending",
        GrnStatus::Approved => "badge badge--approved",
    }
}

/// Display label for a GRN status.
pub fn grn_status_label(status: GrnStatus) -> &'static str {
    match status {
        GrnStatus::Pending => "Pending",
        GrnStatus::Approved => "Approved",
    }
}

/// Badge for a stock-movement type.
#[component]
pub fn MovementBadge(movement_type: MovementType) -> impl IntoView {
    view! { <span class=movement_type_class(movement_type)>{movement_type_label(movement_type)}</span> }
}

/// Badge for a GRN lifecycle status.
#[component]
pub fn GrnStatusBadge(status: GrnStatus) -> impl IntoView {
    view! { <span class=grn_status_class(status)>{grn_status_label(status)}</span> }
}
