//! Dashboard page showing live summary metrics.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the signed-in landing route. It polls `/api/dashboard/summary`
//! every ten seconds so approvals and ledger entries made elsewhere show up
//! without a manual refresh.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use records::dashboard::DashboardSummary;

use crate::components::layout::AppLayout;
use crate::components::stat_card::StatCard;
use crate::util::format::format_money;

/// Stat cards in display order: `(label, value)`.
fn summary_cards(summary: &DashboardSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Products", summary.products.to_string()),
        ("Low Stock", summary.low_stock.to_string()),
        ("Pending GRNs", summary.pending_grns.to_string()),
        ("Movements Today", summary.movements_today.to_string()),
        ("Inventory Value", format_money(summary.inventory_value)),
    ]
}

#[cfg(feature = "hydrate")]
async fn refresh_summary(summary: RwSignal<DashboardSummary>, loaded: RwSignal<bool>, error: RwSignal<String>) {
    match crate::net::api::fetch_summary().await {
        Ok(next) => {
            summary.set(next);
            error.set(String::new());
        }
        Err(e) => error.set(format!("Summary refresh failed: {e}")),
    }
    loaded.set(true);
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let summary = RwSignal::new(DashboardSummary::zero());
    let loaded = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                refresh_summary(summary, loaded, error).await;
                gloo_timers::future::sleep(std::time::Duration::from_secs(10)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <AppLayout title="Dashboard">
            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>
            <Show when=move || loaded.get() fallback=move || view! { <p class="page-loading">"Loading summary..."</p> }>
                <div class="stat-grid">
                    {move || {
                        summary_cards(&summary.get())
                            .into_iter()
                            .map(|(label, value)| view! { <StatCard label=label value=value/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </AppLayout>
    }
}
