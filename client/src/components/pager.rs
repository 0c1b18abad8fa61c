//! Pagination controls for list pages.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

use leptos::prelude::*;
use records::Pagination;

/// Numbered page buttons to render: a window of up to five pages centered
/// on the current one, clamped to the valid range. Empty when there is at
/// most one page.
fn page_window(current: u32, total_pages: u32) -> Vec<u32> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let start = current.saturating_sub(2).max(1);
    let end = (start + 4).min(total_pages);
    let start = end.saturating_sub(4).max(1);
    (start..=end).collect()
}

/// Page buttons plus a row-count caption, driven by the server's
/// pagination block. `on_page` fires with the 1-based target page.
#[component]
pub fn Pager(pagination: Pagination, on_page: Callback<u32>) -> impl IntoView {
    let window = page_window(pagination.page, pagination.total_pages);
    let current = pagination.page;

    view! {
        <div class="pager">
            <span class="pager__caption">
                {format!("{} rows, page {} of {}", pagination.total, pagination.page, pagination.total_pages.max(1))}
            </span>
            <span class="pager__spacer"></span>
            {window
                .into_iter()
                .map(|page| {
                    let class = if page == current { "btn pager__page pager__page--current" } else { "btn pager__page" };
                    view! {
                        <button class=class disabled={page == current} on:click=move |_| on_page.run(page)>
                            {page}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
