//! Products page: searchable catalogue list with create and detail views.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;
use records::inventory::{NewProduct, Product, ProductDetail};
use records::money::parse_amount;
use records::{DEFAULT_PAGE_LIMIT, Pagination};
use uuid::Uuid;

use crate::components::layout::AppLayout;
use crate::components::pager::Pager;
use crate::state::toast::ToastState;
use crate::util::format::{display_or_dash, format_money};

/// Build a creation payload from raw form fields. Blank category and unit
/// become `None` so the server applies its defaults.
fn build_new_product(
    sku: &str,
    name: &str,
    category: &str,
    unit: &str,
    price: &str,
    cost: &str,
    reorder_level: &str,
) -> Result<NewProduct, String> {
    let sku = sku.trim();
    if sku.is_empty() {
        return Err("SKU is required.".to_owned());
    }
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required.".to_owned());
    }
    let price = parse_amount(price).map_err(|e| format!("Price: {e}"))?;
    let cost = parse_amount(cost).map_err(|e| format!("Cost: {e}"))?;
    let reorder_level = match reorder_level.trim() {
        "" => None,
        raw => {
            let parsed: i32 = raw.parse().map_err(|_| "Reorder level must be a whole number.".to_owned())?;
            if parsed < 0 {
                return Err("Reorder level cannot be negative.".to_owned());
            }
            Some(parsed)
        }
    };
    let category = category.trim();
    let unit = unit.trim();
    Ok(NewProduct {
        sku: sku.to_owned(),
        name: name.to_owned(),
        category: (!category.is_empty()).then(|| category.to_owned()),
        unit: (!unit.is_empty()).then(|| unit.to_owned()),
        price,
        cost,
        reorder_level,
    })
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let products = RwSignal::new(Vec::<Product>::new());
    let pagination = RwSignal::new(None::<Pagination>);
    let page = RwSignal::new(1_u32);
    let search_input = RwSignal::new(String::new());
    let applied_search = RwSignal::new(String::new());
    let category_input = RwSignal::new(String::new());
    let applied_category = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);
    let detail = RwSignal::new(None::<ProductDetail>);
    let reload_seq = RwSignal::new(0_u64);

    Effect::new(move || {
        let page_value = page.get();
        let search_value = applied_search.get();
        let category_value = applied_category.get();
        let _ = reload_seq.get();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_products(page_value, DEFAULT_PAGE_LIMIT, &search_value, &category_value).await
            {
                Ok((items, page_info)) => {
                    products.set(items);
                    pagination.set(page_info);
                    error.set(String::new());
                }
                Err(e) => error.set(format!("Product list failed: {e}")),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (page_value, search_value, category_value);
    });

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        applied_search.set(search_input.get().trim().to_owned());
        applied_category.set(category_input.get().trim().to_owned());
        page.set(1);
    };

    let on_page = Callback::new(move |next: u32| page.set(next));
    let on_create_cancel = Callback::new(move |_| show_create.set(false));
    let on_created = Callback::new(move |product: Product| {
        show_create.set(false);
        toasts.update(|t| {
            t.success(format!("Product {} created", product.sku));
        });
        reload_seq.update(|n| *n += 1);
    });
    let on_detail_close = Callback::new(move |_| detail.set(None));

    let open_detail = move |product_id: Uuid| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_product_detail(product_id).await {
                Ok(d) => detail.set(Some(d)),
                Err(e) => toasts.update(|t| {
                    t.error(format!("Product detail failed: {e}"));
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = product_id;
    };

    view! {
        <AppLayout title="Products">
            <div class="page-toolbar">
                <form class="page-toolbar__filters" on:submit=on_filter>
                    <input
                        class="input"
                        type="text"
                        placeholder="Search SKU or name"
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="text"
                        placeholder="Category"
                        prop:value=move || category_input.get()
                        on:input=move |ev| category_input.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">
                        "Apply"
                    </button>
                </form>
                <span class="page-toolbar__spacer"></span>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Product"
                </button>
            </div>

            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <p class="page-loading">"Loading products..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"SKU"</th>
                            <th>"Name"</th>
                            <th>"Category"</th>
                            <th>"Unit"</th>
                            <th class="data-table__num">"Price"</th>
                            <th class="data-table__num">"Cost"</th>
                            <th class="data-table__num">"Reorder"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            products
                                .get()
                                .into_iter()
                                .map(|product| {
                                    let id = product.id;
                                    view! {
                                        <tr class="data-table__row" on:click=move |_| open_detail(id)>
                                            <td>{product.sku}</td>
                                            <td>{product.name}</td>
                                            <td>{display_or_dash(product.category.as_deref())}</td>
                                            <td>{product.unit}</td>
                                            <td class="data-table__num">{format_money(product.price)}</td>
                                            <td class="data-table__num">{format_money(product.cost)}</td>
                                            <td class="data-table__num">{product.reorder_level}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
                <Show when=move || products.get().is_empty()>
                    <p class="page-empty">"No products match the current filters."</p>
                </Show>
            </Show>

            {move || {
                pagination.get().map(|p| view! { <Pager pagination=p on_page=on_page/> })
            }}

            <Show when=move || show_create.get()>
                <CreateProductDialog on_cancel=on_create_cancel on_created=on_created/>
            </Show>
            <Show when=move || detail.get().is_some()>
                <ProductDetailDialog detail=detail on_close=on_detail_close/>
            </Show>
        </AppLayout>
    }
}

/// Modal dialog for creating a product.
#[component]
fn CreateProductDialog(on_cancel: Callback<()>, on_created: Callback<Product>) -> impl IntoView {
    let sku = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let unit = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let cost = RwSignal::new(String::new());
    let reorder_level = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |_| {
        if busy.get() {
            return;
        }
        let payload = match build_new_product(
            &sku.get(),
            &name.get(),
            &category.get(),
            &unit.get(),
            &price.get(),
            &cost.get(),
            &reorder_level.get(),
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
            match crate::net::api::create_product(&payload).await {
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
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Product"</h2>
                <label class="dialog__label">
                    "SKU"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || sku.get()
                        on:input=move |ev| sku.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Category"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="optional"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Unit"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="pcs"
                        prop:value=move || unit.get()
                        on:input=move |ev| unit.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Price"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="0.00"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Cost"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="0.00"
                        prop:value=move || cost.get()
                        on:input=move |ev| cost.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Reorder Level"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="0"
                        prop:value=move || reorder_level.get()
                        on:input=move |ev| reorder_level.set(event_target_value(&ev))
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
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Modal dialog showing a product with its per-warehouse stock levels.
#[component]
fn ProductDetailDialog(detail: RwSignal<Option<ProductDetail>>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                {move || {
                    detail
                        .get()
                        .map(|d| {
                            let title = format!("{} - {}", d.product.sku, d.product.name);
                            let meta = format!(
                                "Category: {} | Unit: {} | Price: {} | Cost: {}",
                                display_or_dash(d.product.category.as_deref()),
                                d.product.unit,
                                format_money(d.product.price),
                                format_money(d.product.cost),
                            );
                            let total = format!("Total on hand: {}", d.on_hand_total);
                            let levels = d
                                .levels
                                .into_iter()
                                .map(|level| {
                                    view! {
                                        <tr>
                                            <td>{level.warehouse}</td>
                                            <td class="data-table__num">{level.on_hand}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>();
                            view! {
                                <h2>{title}</h2>
                                <p class="dialog__meta">{meta}</p>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Warehouse"</th>
                                            <th class="data-table__num">"On Hand"</th>
                                        </tr>
                                    </thead>
                                    <tbody>{levels}</tbody>
                                </table>
                                <p class="dialog__meta">{total}</p>
                            }
                        })
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
