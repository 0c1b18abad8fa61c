//! Single metric card for dashboard-style summary rows.

use leptos::prelude::*;

/// A labelled metric value, optionally with a hint line underneath.
#[component]
pub fn StatCard(
    label: &'static str,
    value: String,
    #[prop(optional)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
            {hint.map(|h| view! { <span class="stat-card__hint">{h}</span> })}
        </div>
    }
}
