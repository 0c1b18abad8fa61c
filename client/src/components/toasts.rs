//! Toast tray rendering queued notifications from [`ToastState`].

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Fixed-position tray for toast messages with per-toast dismiss.
#[component]
pub fn ToastTray() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-tray">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message}</span>
                                <button class="toast__dismiss" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                    "x"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
