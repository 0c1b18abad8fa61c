//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    billing::BillingPage, dashboard::DashboardPage, grn::GrnPage, login::LoginPage, messages::MessagesPage,
    movements::MovementsPage, pos::PosPage, products::ProductsPage, projects::ProjectsPage,
};
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    // Resolve the session cookie into a user once the WASM side is live.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|state| state.resolve(user));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/opsdesk.css"/>
        <Title text="Opsdesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=(StaticSegment("inventory"), StaticSegment("products")) view=ProductsPage/>
                <Route path=(StaticSegment("inventory"), StaticSegment("movements")) view=MovementsPage/>
                <Route path=(StaticSegment("purchases"), StaticSegment("grn")) view=GrnPage/>
                <Route path=StaticSegment("pos") view=PosPage/>
                <Route path=StaticSegment("projects") view=ProjectsPage/>
                <Route path=StaticSegment("messages") view=MessagesPage/>
                <Route path=StaticSegment("billing") view=BillingPage/>
            </Routes>
        </Router>
    }
}
