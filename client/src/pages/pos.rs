//! Point-of-sale page running entirely on local demo state.
//!
//! DESIGN
//! ======
//! The walking-skeleton POS: a fixed catalogue, an in-memory cart with
//! 10% tax, and a checkout that just clears the cart. Nothing here calls
//! the server or touches the stock ledger.

#[cfg(test)]
#[path = "pos_test.rs"]
mod pos_test;

use leptos::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::components::layout::AppLayout;
use crate::state::toast::ToastState;
use crate::util::format::format_money;

/// Demo sales tax rate applied to the cart subtotal.
const TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// One sellable item in the demo catalogue.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PosItem {
    sku: &'static str,
    name: &'static str,
    price: Decimal,
}

/// One line in the in-memory cart.
#[derive(Clone, Debug, PartialEq)]
struct CartLine {
    sku: &'static str,
    name: &'static str,
    price: Decimal,
    quantity: i32,
}

fn demo_catalogue() -> Vec<PosItem> {
    vec![
        PosItem { sku: "KB-201", name: "Mechanical Keyboard", price: Decimal::new(7900, 2) },
        PosItem { sku: "MS-115", name: "Wireless Mouse", price: Decimal::new(2450, 2) },
        PosItem { sku: "MN-270", name: "27\" Monitor", price: Decimal::new(21900, 2) },
        PosItem { sku: "HS-040", name: "USB Headset", price: Decimal::new(4575, 2) },
        PosItem { sku: "DK-310", name: "Laptop Dock", price: Decimal::new(12800, 2) },
        PosItem { sku: "CB-005", name: "USB-C Cable 2m", price: Decimal::new(950, 2) },
        PosItem { sku: "LP-450", name: "Laptop Stand", price: Decimal::new(3325, 2) },
        PosItem { sku: "WB-120", name: "Webcam 1080p", price: Decimal::new(6150, 2) },
    ]
}

/// Add one unit of an item, merging with an existing line for the same SKU.
fn cart_add(cart: &mut Vec<CartLine>, item: PosItem) {
    if let Some(line) = cart.iter_mut().find(|line| line.sku == item.sku) {
        line.quantity += 1;
    } else {
        cart.push(CartLine { sku: item.sku, name: item.name, price: item.price, quantity: 1 });
    }
}

/// Remove one unit of a SKU, dropping the line when it reaches zero.
fn cart_remove(cart: &mut Vec<CartLine>, sku: &str) {
    if let Some(pos) = cart.iter().position(|line| line.sku == sku) {
        if cart[pos].quantity > 1 {
            cart[pos].quantity -= 1;
        } else {
            cart.remove(pos);
        }
    }
}

fn cart_subtotal(cart: &[CartLine]) -> Decimal {
    cart.iter().map(|line| line.price * Decimal::from(line.quantity)).sum()
}

/// Tax on a subtotal, rounded to cents away from zero on midpoints.
fn cart_tax(subtotal: Decimal) -> Decimal {
    (subtotal * TAX_RATE).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[component]
pub fn PosPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let cart = RwSignal::new(Vec::<CartLine>::new());

    let subtotal = move || cart_subtotal(&cart.get());
    let tax = move || cart_tax(subtotal());
    let total = move || subtotal() + tax();

    let on_checkout = move |_| {
        if cart.get().is_empty() {
            return;
        }
        cart.set(Vec::new());
        toasts.update(|t| {
            t.success("Sale recorded (demo)");
        });
    };

    view! {
        <AppLayout title="Point of Sale">
            <p class="page-note">"Demo workspace - sales are not persisted."</p>
            <div class="pos-layout">
                <div class="pos-catalogue">
                    {demo_catalogue()
                        .into_iter()
                        .map(|item| {
                            view! {
                                <button class="pos-item" on:click=move |_| cart.update(|c| cart_add(c, item))>
                                    <span class="pos-item__name">{item.name}</span>
                                    <span class="pos-item__sku">{item.sku}</span>
                                    <span class="pos-item__price">{format_money(item.price)}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="pos-cart">
                    <h3>"Cart"</h3>
                    <Show when=move || cart.get().is_empty()>
                        <p class="page-empty">"Tap items to add them."</p>
                    </Show>
                    <table class="data-table">
                        <tbody>
                            {move || {
                                cart.get()
                                    .into_iter()
                                    .map(|line| {
                                        let sku = line.sku;
                                        let line_total = format_money(line.price * Decimal::from(line.quantity));
                                        view! {
                                            <tr>
                                                <td>{line.name}</td>
                                                <td class="data-table__num">{line.quantity}</td>
                                                <td class="data-table__num">{line_total}</td>
                                                <td class="data-table__actions">
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| cart.update(|c| cart_remove(c, sku))
                                                    >
                                                        "-"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                    <div class="pos-cart__totals">
                        <p>{move || format!("Subtotal: {}", format_money(subtotal()))}</p>
                        <p>{move || format!("Tax (10%): {}", format_money(tax()))}</p>
                        <p class="pos-cart__grand">{move || format!("Total: {}", format_money(total()))}</p>
                    </div>
                    <button class="btn btn--primary pos-cart__checkout" on:click=on_checkout>
                        "Checkout"
                    </button>
                </div>
            </div>
        </AppLayout>
    }
}
