//! Messages page: a demo inbox with threads and a local-only composer.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::*;

use crate::components::layout::AppLayout;

/// One message inside a thread.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ChatMessage {
    from_me: bool,
    text: String,
    at: &'static str,
}

/// One conversation in the demo inbox.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Thread {
    id: usize,
    with: &'static str,
    topic: &'static str,
    messages: Vec<ChatMessage>,
}

fn demo_threads() -> Vec<Thread> {
    vec![
        Thread {
            id: 0,
            with: "Priya N.",
            topic: "GRN backlog",
            messages: vec![
                ChatMessage { from_me: false, text: "Three deliveries from Friday still pending approval.".to_owned(), at: "09:12" },
                ChatMessage { from_me: true, text: "On it, clearing them this morning.".to_owned(), at: "09:15" },
            ],
        },
        Thread {
            id: 1,
            with: "Marcus T.",
            topic: "Cycle count",
            messages: vec![
                ChatMessage { from_me: false, text: "Aisle 7 count is off by four units on CB-005.".to_owned(), at: "Yesterday" },
                ChatMessage { from_me: true, text: "Raise an adjustment and note the reason, please.".to_owned(), at: "Yesterday" },
            ],
        },
        Thread {
            id: 2,
            with: "Ana R.",
            topic: "New supplier onboarding",
            messages: vec![
                ChatMessage { from_me: false, text: "Paperwork for Northwind is signed, adding them today.".to_owned(), at: "Mon" },
            ],
        },
    ]
}

/// Trimmed message text, or `None` when there is nothing to send.
fn validate_message(draft: &str) -> Option<String> {
    let trimmed = draft.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let threads = RwSignal::new(demo_threads());
    let selected = RwSignal::new(0_usize);
    let draft = RwSignal::new(String::new());

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = validate_message(&draft.get()) else {
            return;
        };
        let thread_id = selected.get();
        threads.update(|all| {
            if let Some(thread) = all.iter_mut().find(|t| t.id == thread_id) {
                thread.messages.push(ChatMessage { from_me: true, text, at: "now" });
            }
        });
        draft.set(String::new());
    };

    view! {
        <AppLayout title="Messages">
            <p class="page-note">"Demo workspace - messages are not delivered."</p>
            <div class="messages-layout">
                <div class="thread-list">
                    {move || {
                        let current = selected.get();
                        threads
                            .get()
                            .into_iter()
                            .map(|thread| {
                                let id = thread.id;
                                let class = if id == current {
                                    "thread-list__item thread-list__item--active"
                                } else {
                                    "thread-list__item"
                                };
                                view! {
                                    <button class=class on:click=move |_| selected.set(id)>
                                        <span class="thread-list__with">{thread.with}</span>
                                        <span class="thread-list__topic">{thread.topic}</span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <div class="thread-view">
                    {move || {
                        let current = selected.get();
                        threads
                            .get()
                            .into_iter()
                            .find(|t| t.id == current)
                            .map(|thread| {
                                view! {
                                    <h3 class="thread-view__topic">{thread.topic}</h3>
                                    <div class="thread-view__messages">
                                        {thread
                                            .messages
                                            .into_iter()
                                            .map(|message| {
                                                let class = if message.from_me {
                                                    "chat-bubble chat-bubble--mine"
                                                } else {
                                                    "chat-bubble"
                                                };
                                                view! {
                                                    <div class=class>
                                                        <p class="chat-bubble__text">{message.text}</p>
                                                        <span class="chat-bubble__at">{message.at}</span>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                    <form class="thread-view__composer" on:submit=on_send>
                        <input
                            class="input"
                            type="text"
                            placeholder="Write a message..."
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit">
                            "Send"
                        </button>
                    </form>
                </div>
            </div>
        </AppLayout>
    }
}
