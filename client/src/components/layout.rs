//! Application chrome: sidebar navigation, topbar, and the auth guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every signed-in page renders inside [`AppLayout`]. The guard waits for the
//! session fetch to resolve before deciding between content and a `/login`
//! redirect, so a hard refresh on a deep link does not bounce.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::toasts::ToastTray;
use crate::state::auth::AuthState;
use crate::util::dark_mode;

/// Sidebar entries in display order: `(label, href)`.
fn nav_links() -> [(&'static str, &'static str); 8] {
    [
        ("Dashboard", "/"),
        ("Products", "/inventory/products"),
        ("Stock Movements", "/inventory/movements"),
        ("Goods Received", "/purchases/grn"),
        ("Point of Sale", "/pos"),
        ("Projects", "/projects"),
        ("Messages", "/messages"),
        ("Billing", "/billing"),
    ]
}

/// Whether a sidebar link matches the current path. The root link matches
/// exactly; section links match by prefix so detail routes stay highlighted.
fn is_active_path(current: &str, href: &str) -> bool {
    if href == "/" {
        current == "/"
    } else {
        current == href || current.starts_with(&format!("{href}/"))
    }
}

/// Page chrome wrapping signed-in content with sidebar, topbar, and toasts.
/// Redirects to `/login` once the session resolves with no user.
///
/// Children are `ChildrenFn` because the guard re-renders them when the
/// session state flips.
#[component]
pub fn AppLayout(title: &'static str, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let dark = RwSignal::new(false);

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Effects only run in the browser, so restoring the stored theme here
    // cannot desync the server-rendered markup.
    Effect::new(move || {
        if dark_mode::read_preference() {
            dark_mode::apply(true);
            dark.set(true);
        }
    });

    let user_label = move || {
        auth.get()
            .user
            .map(|user| format!("{} ({})", user.name, user.role))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|state| state.clear());
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            });
        }
    };

    let links = move || {
        let current = pathname.get();
        nav_links()
            .into_iter()
            .map(|(label, href)| {
                let class = if is_active_path(&current, href) {
                    "sidebar__link sidebar__link--active"
                } else {
                    "sidebar__link"
                };
                view! {
                    <a class=class href=href>
                        {label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="app-shell app-shell--waiting">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="app-shell">
                <aside class="sidebar">
                    <div class="sidebar__brand">"Opsdesk"</div>
                    <nav class="sidebar__nav">{links}</nav>
                </aside>
                <div class="app-shell__main">
                    <header class="topbar">
                        <h1 class="topbar__title">{title}</h1>
                        <span class="topbar__spacer"></span>
                        <span class="topbar__user">{user_label}</span>
                        <button
                            class="btn topbar__theme"
                            on:click=move |_| {
                                let next = dark_mode::toggle(dark.get());
                                dark.set(next);
                            }
                            title="Toggle dark theme"
                        >
                            {move || if dark.get() { "☀" } else { "☾" }}
                        </button>
                        <button class="btn topbar__logout" on:click=on_logout title="Logout">
                            "Logout"
                        </button>
                    </header>
                    <main class="app-shell__content">{children()}</main>
                </div>
                <ToastTray/>
            </div>
        </Show>
    }
}
