//! Stock-movements page: the append-only ledger with filters and entry form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows come from `/api/inventory/stock-movements/list` and are never edited
//! or deleted here; corrections are new `adjustment` entries.

#[cfg(test)]
#[path = "movements_test.rs"]
mod movements_test;

use leptos::prelude::*;
use records::inventory::{MovementType, NewStockMovement, Product, StockMovement, Warehouse};
use records::{DEFAULT_PAGE_LIMIT, Pagination};
use uuid::Uuid;

use crate::components::layout::AppLayout;
use crate::components::pager::Pager;
use crate::components::status_badge::{MovementBadge, movement_type_label};
use crate::state::toast::ToastState;
use crate::util::format::{display_or_dash, format_datetime, signed_quantity};

/// Parse a `<select>` value; the empty placeholder option maps to `None`.
fn selected_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Build a ledger entry payload from raw form fields, enforcing the same
/// warehouse rules the server applies so mistakes surface before submit.
fn build_new_movement(
    product_id: Option<Uuid>,
    movement_type: &str,
    quantity: &str,
    from_warehouse_id: Option<Uuid>,
    to_warehouse_id: Option<Uuid>,
    reference: &str,
    note: &str,
) -> Result<NewStockMovement, String> {
    let Some(product_id) = product_id else {
        return Err("Choose a product.".to_owned());
    };
    let Some(movement_type) = MovementType::from_str(movement_type) else {
        return Err("Choose a movement type.".to_owned());
    };
    let quantity: i32 = quantity
        .trim()
        .parse()
        .map_err(|_| "Quantity must be a whole number.".to_owned())?;
    if quantity == 0 {
        return Err("Quantity cannot be zero.".to_owned());
    }
    if quantity < 0 && movement_type != MovementType::Adjustment {
        return Err("Quantity must be positive for this movement type.".to_owned());
    }
    let (from_warehouse_id, to_warehouse_id) = match movement_type {
        MovementType::Receipt => {
            let Some(to) = to_warehouse_id else {
                return Err("Receipts need a destination warehouse.".to_owned());
            };
            (None, Some(to))
        }
        MovementType::Issue => {
            let Some(from) = from_warehouse_id else {
                return Err("Issues need a source warehouse.".to_owned());
            };
            (Some(from), None)
        }
        MovementType::Transfer => {
            let (Some(from), Some(to)) = (from_warehouse_id, to_warehouse_id) else {
                return Err("Transfers need both warehouses.".to_owned());
            };
            if from == to {
                return Err("Transfer warehouses must differ.".to_owned());
            }
            (Some(from), Some(to))
        }
        MovementType::Adjustment => {
            let Some(to) = to_warehouse_id else {
                return Err("Adjustments need a warehouse.".to_owned());
            };
            (None, Some(to))
        }
    };
    let reference = reference.trim();
    let note = note.trim();
    Ok(NewStockMovement {
        product_id,
        movement_type,
        quantity,
        from_warehouse_id,
        to_warehouse_id,
        reference: (!reference.is_empty()).then(|| reference.to_owned()),
        note: (!note.is_empty()).then(|| note.to_owned()),
    })
}

#[component]
pub fn MovementsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let movements = RwSignal::new(Vec::<StockMovement>::new());
    let pagination = RwSignal::new(None::<Pagination>);
    let page = RwSignal::new(1_u32);
    let type_filter = RwSignal::new(String::new());
    let search_input = RwSignal::new(String::new());
    let applied_search = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let show_entry = RwSignal::new(false);
    let reload_seq = RwSignal::new(0_u64);

    Effect::new(move || {
        let page_value = page.get();
        let type_value = type_filter.get();
        let search_value = applied_search.get();
        let _ = reload_seq.get();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_movements(page_value, DEFAULT_PAGE_LIMIT, &type_value, &search_value).await {
                Ok((items, page_info)) => {
                    movements.set(items);
                    pagination.set(page_info);
                    error.set(String::new());
                }
                Err(e) => error.set(format!("Movement list failed: {e}")),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (page_value, type_value, search_value);
    });

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        applied_search.set(search_input.get().trim().to_owned());
        page.set(1);
    };

    let on_page = Callback::new(move |next: u32| page.set(next));
    let on_entry_cancel = Callback::new(move |_| show_entry.set(false));
    let on_recorded = Callback::new(move |movement: StockMovement| {
        show_entry.set(false);
        toasts.update(|t| {
            t.success(format!(
                "{} recorded for {}",
                movement_type_label(movement.movement_type),
                movement.product_sku
            ));
        });
        reload_seq.update(|n| *n += 1);
    });

    view! {
        <AppLayout title="Stock Movements">
            <div class="page-toolbar">
                <form class="page-toolbar__filters" on:submit=on_filter>
                    <select
                        class="input"
                        prop:value=move || type_filter.get()
                        on:change=move |ev| {
                            type_filter.set(event_target_value(&ev));
                            page.set(1);
                        }
                    >
                        <option value="">"All types"</option>
                        {MovementType::all()
                            .into_iter()
                            .map(|mt| view! { <option value=mt.as_str()>{movement_type_label(mt)}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <input
                        class="input"
                        type="text"
                        placeholder="Search SKU, product, or reference"
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">
                        "Apply"
                    </button>
                </form>
                <span class="page-toolbar__spacer"></span>
                <button class="btn btn--primary" on:click=move |_| show_entry.set(true)>
                    "+ Record Movement"
                </button>
            </div>

            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <p class="page-loading">"Loading movements..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Type"</th>
                            <th>"Product"</th>
                            <th class="data-table__num">"Qty"</th>
                            <th>"From"</th>
                            <th>"To"</th>
                            <th>"Reference"</th>
                            <th>"By"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            movements
                                .get()
                                .into_iter()
                                .map(|movement| {
                                    let qty = signed_quantity(movement.movement_type, movement.quantity);
                                    view! {
                                        <tr>
                                            <td>{format_datetime(movement.created_at)}</td>
                                            <td><MovementBadge movement_type=movement.movement_type/></td>
                                            <td>{format!("{} {}", movement.product_sku, movement.product_name)}</td>
                                            <td class="data-table__num">{qty}</td>
                                            <td>{display_or_dash(movement.from_warehouse.as_deref())}</td>
                                            <td>{display_or_dash(movement.to_warehouse.as_deref())}</td>
                                            <td>{display_or_dash(movement.reference.as_deref())}</td>
                                            <td>{display_or_dash(movement.moved_by.as_deref())}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
                <Show when=move || movements.get().is_empty()>
                    <p class="page-empty">"No movements match the current filters."</p>
                </Show>
            </Show>

            {move || {
                pagination.get().map(|p| view! { <Pager pagination=p on_page=on_page/> })
            }}

            <Show when=move || show_entry.get()>
                <RecordMovementDialog on_cancel=on_entry_cancel on_recorded=on_recorded/>
            </Show>
        </AppLayout>
    }
}

/// Modal dialog appending one entry to the stock ledger.
#[component]
fn RecordMovementDialog(on_cancel: Callback<()>, on_recorded: Callback<StockMovement>) -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let warehouses = RwSignal::new(Vec::<Warehouse>::new());
    let product_value = RwSignal::new(String::new());
    let type_value = RwSignal::new(MovementType::Receipt.as_str().to_owned());
    let quantity = RwSignal::new(String::new());
    let from_value = RwSignal::new(String::new());
    let to_value = RwSignal::new(String::new());
    let reference = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Selects need the product catalogue and warehouse list up front.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_products(1, records::MAX_PAGE_LIMIT, "", "").await {
            Ok((items, _)) => products.set(items),
            Err(e) => message.set(format!("Product list failed: {e}")),
        }
        match crate::net::api::fetch_warehouses().await {
            Ok(items) => warehouses.set(items),
            Err(e) => message.set(format!("Warehouse list failed: {e}")),
        }
    });

    let needs_from = move || {
        matches!(
            MovementType::from_str(&type_value.get()),
            Some(MovementType::Issue | MovementType::Transfer)
        )
    };
    let needs_to = move || {
        matches!(
            MovementType::from_str(&type_value.get()),
            Some(MovementType::Receipt | MovementType::Transfer | MovementType::Adjustment)
        )
    };

    let submit = Callback::new(move |_| {
        if busy.get() {
            return;
        }
        let payload = match build_new_movement(
            selected_id(&product_value.get()),
            &type_value.get(),
            &quantity.get(),
            selected_id(&from_value.get()),
            selected_id(&to_value.get()),
            &reference.get(),
            &note.get(),
        ) {
            Ok(p) => p,
            Err(msg) => {
                message.set(msg);
                return;
            }
        };
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_movement(&payload).await {
                Ok(created) => on_recorded.run(created),
                Err(e) => {
                    message.set(format!("Record failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, on_recorded);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Record Movement"</h2>
                <label class="dialog__label">
                    "Product"
                    <select
                        class="dialog__input"
                        prop:value=move || product_value.get()
                        on:change=move |ev| product_value.set(event_target_value(&ev))
                    >
                        <option value="">"Choose a product..."</option>
                        {move || {
                            products
                                .get()
                                .into_iter()
                                .map(|p| {
                                    let label = format!("{} {}", p.sku, p.name);
                                    view! { <option value=p.id.to_string()>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Type"
                    <select
                        class="dialog__input"
                        prop:value=move || type_value.get()
                        on:change=move |ev| type_value.set(event_target_value(&ev))
                    >
                        {MovementType::all()
                            .into_iter()
                            .map(|mt| view! { <option value=mt.as_str()>{movement_type_label(mt)}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Quantity"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="0"
                        prop:value=move || quantity.get()
                        on:input=move |ev| quantity.set(event_target_value(&ev))
                    />
                </label>
                <Show when=needs_from>
                    <label class="dialog__label">
                        "From Warehouse"
                        <select
                            class="dialog__input"
                            prop:value=move || from_value.get()
                            on:change=move |ev| from_value.set(event_target_value(&ev))
                        >
                            <option value="">"Choose a warehouse..."</option>
                            {move || {
                                warehouses
                                    .get()
                                    .into_iter()
                                    .map(|w| view! { <option value=w.id.to_string()>{w.name}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                </Show>
                <Show when=needs_to>
                    <label class="dialog__label">
                        "To Warehouse"
                        <select
                            class="dialog__input"
                            prop:value=move || to_value.get()
                            on:change=move |ev| to_value.set(event_target_value(&ev))
                        >
                            <option value="">"Choose a warehouse..."</option>
                            {move || {
                                warehouses
                                    .get()
                                    .into_iter()
                                    .map(|w| view! { <option value=w.id.to_string()>{w.name}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                </Show>
                <label class="dialog__label">
                    "Reference"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="optional, e.g. SO-1042"
                        prop:value=move || reference.get()
                        on:input=move |ev| reference.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Note"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="optional"
                        prop:value=move || note.get()
                        on:input=move |ev| note.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !message.get().is_empty()>
                    <p class="dialog__message">{move || message.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Record"
                    </button>
                </div>
            </div>
        </div>
    }
}
