//! Goods-received page: GRN list, creation with line items, approval, delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! A GRN starts `pending` and only touches stock when approved, so the page
//! confirms approval explicitly; deletion is offered only while pending.

#[cfg(test)]
#[path = "grn_test.rs"]
mod grn_test;

use chrono::NaiveDate;
use leptos::prelude::*;
use records::inventory::{Product, Warehouse};
use records::money::parse_amount;
use records::purchasing::{Grn, NewGrn, NewGrnLine, Supplier};
use records::{DEFAULT_PAGE_LIMIT, Pagination};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::components::layout::AppLayout;
use crate::components::pager::Pager;
use crate::components::status_badge::GrnStatusBadge;
use crate::state::toast::ToastState;
use crate::util::format::format_money;

/// One editable line of the create-GRN form, as raw field strings.
#[derive(Clone, Debug, Default, PartialEq)]
struct GrnLineDraft {
    product_value: String,
    quantity: String,
    unit_cost: String,
}

/// Value of one draft line when both numeric fields parse; `None` otherwise.
fn draft_line_total(quantity: &str, unit_cost: &str) -> Option<Decimal> {
    let quantity: i32 = quantity.trim().parse().ok().filter(|q| *q > 0)?;
    let unit_cost = parse_amount(unit_cost).ok()?;
    Some(unit_cost * Decimal::from(quantity))
}

/// Running total across draft lines, skipping incomplete ones.
fn draft_total(lines: &[GrnLineDraft]) -> Decimal {
    lines
        .iter()
        .filter_map(|line| draft_line_total(&line.quantity, &line.unit_cost))
        .sum()
}

/// Build the creation payload from the form fields. Line numbers in error
/// messages are 1-based to match what the user sees.
fn build_new_grn(
    supplier_value: &str,
    warehouse_value: &str,
    received_date: &str,
    note: &str,
    lines: &[GrnLineDraft],
) -> Result<NewGrn, String> {
    let Ok(supplier_id) = Uuid::parse_str(supplier_value.trim()) else {
        return Err("Choose a supplier.".to_owned());
    };
    let Ok(warehouse_id) = Uuid::parse_str(warehouse_value.trim()) else {
        return Err("Choose a warehouse.".to_owned());
    };
    let Ok(received_date) = NaiveDate::parse_from_str(received_date.trim(), "%Y-%m-%d") else {
        return Err("Pick a received date.".to_owned());
    };
    if lines.is_empty() {
        return Err("Add at least one line.".to_owned());
    }
    let mut built = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let n = i + 1;
        let Ok(product_id) = Uuid::parse_str(line.product_value.trim()) else {
            return Err(format!("Line {n}: choose a product."));
        };
        let quantity: i32 = line
            .quantity
            .trim()
            .parse()
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| format!("Line {n}: quantity must be a positive whole number."))?;
        let unit_cost =
            parse_amount(&line.unit_cost).map_err(|_| format!("Line {n}: unit cost must be an amount like 12.50."))?;
        built.push(NewGrnLine { product_id, quantity, unit_cost });
    }
    let note = note.trim();
    Ok(NewGrn {
        supplier_id,
        warehouse_id,
        received_date,
        note: (!note.is_empty()).then(|| note.to_owned()),
        lines: built,
    })
}

#[component]
pub fn GrnPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let grns = RwSignal::new(Vec::<Grn>::new());
    let pagination = RwSignal::new(None::<Pagination>);
    let page = RwSignal::new(1_u32);
    let status_filter = RwSignal::new(String::new());
    let search_input = RwSignal::new(String::new());
    let applied_search = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);
    let expanded = RwSignal::new(None::<Uuid>);
    let approve_target = RwSignal::new(None::<(Uuid, String)>);
    let delete_target = RwSignal::new(None::<(Uuid, String)>);
    let reload_seq = RwSignal::new(0_u64);

    Effect::new(move || {
        let page_value = page.get();
        let status_value = status_filter.get();
        let search_value = applied_search.get();
        let _ = reload_seq.get();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_grns(page_value, DEFAULT_PAGE_LIMIT, &status_value, &search_value).await {
                Ok((items, page_info)) => {
                    grns.set(items);
                    pagination.set(page_info);
                    error.set(String::new());
                }
                Err(e) => error.set(format!("GRN list failed: {e}")),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (page_value, status_value, search_value);
    });

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        applied_search.set(search_input.get().trim().to_owned());
        page.set(1);
    };

    let on_page = Callback::new(move |next: u32| page.set(next));
    let on_create_cancel = Callback::new(move |_| show_create.set(false));
    let on_created = Callback::new(move |grn: Grn| {
        show_create.set(false);
        toasts.update(|t| {
            t.success(format!("{} created", grn.grn_number));
        });
        reload_seq.update(|n| *n += 1);
    });
    let on_approve_cancel = Callback::new(move |_| approve_target.set(None));
    let on_delete_cancel = Callback::new(move |_| delete_target.set(None));

    let on_approve_confirm = Callback::new(move |grn_id: Uuid| {
        approve_target.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::approve_grn(grn_id).await {
                Ok(approved) => {
                    toasts.update(|t| {
                        t.success(format!("{} approved", approved.grn_number));
                    });
                    reload_seq.update(|n| *n += 1);
                }
                Err(e) => toasts.update(|t| {
                    t.error(format!("Approve failed: {e}"));
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = grn_id;
    });

    let on_delete_confirm = Callback::new(move |grn_id: Uuid| {
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_grn(grn_id).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("GRN deleted");
                    });
                    reload_seq.update(|n| *n += 1);
                }
                Err(e) => toasts.update(|t| {
                    t.error(format!("Delete failed: {e}"));
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = grn_id;
    });

    view! {
        <AppLayout title="Goods Received">
            <div class="page-toolbar">
                <form class="page-toolbar__filters" on:submit=on_filter>
                    <select
                        class="input"
                        prop:value=move || status_filter.get()
                        on:change=move |ev| {
                            status_filter.set(event_target_value(&ev));
                            page.set(1);
                        }
                    >
                        <option value="">"All statuses"</option>
                        <option value="pending">"Pending"</option>
                        <option value="approved">"Approved"</option>
                    </select>
                    <input
                        class="input"
                        type="text"
                        placeholder="Search GRN number or supplier"
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">
                        "Apply"
                    </button>
                </form>
                <span class="page-toolbar__spacer"></span>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New GRN"
                </button>
            </div>

            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <p class="page-loading">"Loading GRNs..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"GRN No."</th>
                            <th>"Supplier"</th>
                            <th>"Warehouse"</th>
                            <th>"Received"</th>
                            <th class="data-table__num">"Lines"</th>
                            <th class="data-table__num">"Total"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let current_expanded = expanded.get();
                            grns.get()
                                .into_iter()
                                .map(|grn| {
                                    let id = grn.id;
                                    let status = grn.status;
                                    let line_count = grn.lines.len();
                                    let received = grn.received_date.to_string();
                                    let total = format_money(grn.total_value);
                                    let number_cell = grn.grn_number.clone();
                                    let number_approve = grn.grn_number.clone();
                                    let number_delete = grn.grn_number;
                                    let detail_row = (current_expanded == Some(id)).then(|| {
                                        let rows = grn
                                            .lines
                                            .into_iter()
                                            .map(|line| {
                                                let product = format!("{} {}", line.product_sku, line.product_name);
                                                let line_total =
                                                    format_money(line.unit_cost * Decimal::from(line.quantity));
                                                view! {
                                                    <tr>
                                                        <td>{product}</td>
                                                        <td class="data-table__num">{line.quantity}</td>
                                                        <td class="data-table__num">{format_money(line.unit_cost)}</td>
                                                        <td class="data-table__num">{line_total}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>();
                                        view! {
                                            <tr class="data-table__detail">
                                                <td colspan="8">
                                                    <table class="data-table data-table--nested">
                                                        <thead>
                                                            <tr>
                                                                <th>"Product"</th>
                                                                <th class="data-table__num">"Qty"</th>
                                                                <th class="data-table__num">"Unit Cost"</th>
                                                                <th class="data-table__num">"Line Total"</th>
                                                            </tr>
                                                        </thead>
                                                        <tbody>{rows}</tbody>
                                                    </table>
                                                </td>
                                            </tr>
                                        }
                                    });
                                    view! {
                                        <tr
                                            class="data-table__row"
                                            on:click=move |_| {
                                                expanded.update(|e| *e = if *e == Some(id) { None } else { Some(id) });
                                            }
                                        >
                                            <td>{number_cell}</td>
                                            <td>{grn.supplier}</td>
                                            <td>{grn.warehouse}</td>
                                            <td>{received}</td>
                                            <td class="data-table__num">{line_count}</td>
                                            <td class="data-table__num">{total}</td>
                                            <td><GrnStatusBadge status=status/></td>
                                            <td class="data-table__actions">
                                                {status
                                                    .can_approve()
                                                    .then(|| {
                                                        view! {
                                                            <button
                                                                class="btn btn--small"
                                                                on:click=move |ev| {
                                                                    ev.stop_propagation();
                                                                    approve_target.set(Some((id, number_approve.clone())));
                                                                }
                                                            >
                                                                "Approve"
                                                            </button>
                                                        }
                                                    })}
                                                {status
                                                    .can_delete()
                                                    .then(|| {
                                                        view! {
                                                            <button
                                                                class="btn btn--small btn--danger"
                                                                on:click=move |ev| {
                                                                    ev.stop_propagation();
                                                                    delete_target.set(Some((id, number_delete.clone())));
                                                                }
                                                            >
                                                                "Delete"
                                                            </button>
                                                        }
                                                    })}
                                            </td>
                                        </tr>
                                        {detail_row}
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
                <Show when=move || grns.get().is_empty()>
                    <p class="page-empty">"No GRNs match the current filters."</p>
                </Show>
            </Show>

            {move || {
                pagination.get().map(|p| view! { <Pager pagination=p on_page=on_page/> })
            }}

            <Show when=move || show_create.get()>
                <CreateGrnDialog on_cancel=on_create_cancel on_created=on_created/>
            </Show>
            <Show when=move || approve_target.get().is_some()>
                <ApproveGrnDialog target=approve_target on_cancel=on_approve_cancel on_confirm=on_approve_confirm/>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <DeleteGrnDialog target=delete_target on_cancel=on_delete_cancel on_confirm=on_delete_confirm/>
            </Show>
        </AppLayout>
    }
}

/// Per-line form field signals; separate signals keep keystrokes from
/// re-rendering the whole line list.
#[derive(Clone, Copy)]
struct LineSignals {
    product_value: RwSignal<String>,
    quantity: RwSignal<String>,
    unit_cost: RwSignal<String>,
}

impl LineSignals {
    fn new() -> Self {
        Self {
            product_value: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
            unit_cost: RwSignal::new(String::new()),
        }
    }

    fn to_draft(self) -> GrnLineDraft {
        GrnLineDraft {
            product_value: self.product_value.get(),
            quantity: self.quantity.get(),
            unit_cost: self.unit_cost.get(),
        }
    }
}

/// Modal dialog creating a pending GRN with editable line items.
#[component]
fn CreateGrnDialog(on_cancel: Callback<()>, on_created: Callback<Grn>) -> impl IntoView {
    let suppliers = RwSignal::new(Vec::<Supplier>::new());
    let warehouses = RwSignal::new(Vec::<Warehouse>::new());
    let products = RwSignal::new(Vec::<Product>::new());
    let supplier_value = RwSignal::new(String::new());
    let warehouse_value = RwSignal::new(String::new());
    let received_date = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let lines = RwSignal::new(vec![LineSignals::new()]);
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_suppliers().await {
            Ok(items) => suppliers.set(items),
            Err(e) => message.set(format!("Supplier list failed: {e}")),
        }
        match crate::net::api::fetch_warehouses().await {
            Ok(items) => warehouses.set(items),
            Err(e) => message.set(format!("Warehouse list failed: {e}")),
        }
        match crate::net::api::fetch_products(1, records::MAX_PAGE_LIMIT, "", "").await {
            Ok((items, _)) => products.set(items),
            Err(e) => message.set(format!("Product list failed: {e}")),
        }
    });

    let total_display = move || {
        let drafts: Vec<GrnLineDraft> = lines.get().into_iter().map(LineSignals::to_draft).collect();
        format_money(draft_total(&drafts))
    };

    let submit = Callback::new(move |_| {
        if busy.get() {
            return;
        }
        let drafts: Vec<GrnLineDraft> = lines.get().into_iter().map(LineSignals::to_draft).collect();
        let payload = match build_new_grn(
            &supplier_value.get(),
            &warehouse_value.get(),
            &received_date.get(),
            &note.get(),
            &drafts,
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
            match crate::net::api::create_grn(&payload).await {
                Ok(created) => on_created.run(created),
                Err(e) => {
                    message.set(format!("Create failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, on_created);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"New GRN"</h2>
                <label class="dialog__label">
                    "Supplier"
                    <select
                        class="dialog__input"
                        prop:value=move || supplier_value.get()
                        on:change=move |ev| supplier_value.set(event_target_value(&ev))
                    >
                        <option value="">"Choose a supplier..."</option>
                        {move || {
                            suppliers
                                .get()
                                .into_iter()
                                .map(|s| view! { <option value=s.id.to_string()>{s.name}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Warehouse"
                    <select
                        class="dialog__input"
                        prop:value=move || warehouse_value.get()
                        on:change=move |ev| warehouse_value.set(event_target_value(&ev))
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
                <label class="dialog__label">
                    "Received Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || received_date.get()
                        on:input=move |ev| received_date.set(event_target_value(&ev))
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

                <h3 class="dialog__section">"Received Lines"</h3>
                {move || {
                    lines
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, line)| {
                            view! {
                                <div class="grn-line">
                                    <select
                                        class="dialog__input grn-line__product"
                                        prop:value=move || line.product_value.get()
                                        on:change=move |ev| line.product_value.set(event_target_value(&ev))
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
                                    <input
                                        class="dialog__input grn-line__qty"
                                        type="text"
                                        placeholder="Qty"
                                        prop:value=move || line.quantity.get()
                                        on:input=move |ev| line.quantity.set(event_target_value(&ev))
                                    />
                                    <input
                                        class="dialog__input grn-line__cost"
                                        type="text"
                                        placeholder="Unit cost"
                                        prop:value=move || line.unit_cost.get()
                                        on:input=move |ev| line.unit_cost.set(event_target_value(&ev))
                                    />
                                    <button
                                        class="btn btn--small"
                                        on:click=move |_| {
                                            lines.update(|l| {
                                                if l.len() > 1 {
                                                    l.remove(i);
                                                }
                                            });
                                        }
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <div class="grn-line__footer">
                    <button class="btn" on:click=move |_| lines.update(|l| l.push(LineSignals::new()))>
                        "+ Add Line"
                    </button>
                    <span class="grn-line__total">{move || format!("Total: {}", total_display())}</span>
                </div>

                <Show when=move || !message.get().is_empty()>
                    <p class="dialog__message">{move || message.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog for the one-shot approval step.
#[component]
fn ApproveGrnDialog(
    target: RwSignal<Option<(Uuid, String)>>,
    on_cancel: Callback<()>,
    on_confirm: Callback<Uuid>,
) -> impl IntoView {
    let number = move || target.get().map(|(_, n)| n).unwrap_or_default();
    let submit = move |_| {
        if let Some((id, _)) = target.get_untracked() {
            on_confirm.run(id);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Approve GRN"</h2>
                <p>{move || format!("Approve {}?", number())}</p>
                <p class="dialog__danger">
                    "Approval posts every received line to the stock ledger and cannot be undone."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=submit>
                        "Approve"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog for deleting a pending GRN.
#[component]
fn DeleteGrnDialog(
    target: RwSignal<Option<(Uuid, String)>>,
    on_cancel: Callback<()>,
    on_confirm: Callback<Uuid>,
) -> impl IntoView {
    let number = move || target.get().map(|(_, n)| n).unwrap_or_default();
    let submit = move |_| {
        if let Some((id, _)) = target.get_untracked() {
            on_confirm.run(id);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete GRN"</h2>
                <p>{move || format!("Delete {}?", number())}</p>
                <p class="dialog__danger">
                    "This discards the pending delivery record. Approved GRNs cannot be deleted."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=submit>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
