//! Billing page: demo invoice ledger with status rollups.

#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::components::layout::AppLayout;
use crate::components::stat_card::StatCard;
use crate::util::format::format_money;

/// Lifecycle of a demo invoice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

fn invoice_status_label(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Draft => "Draft",
        InvoiceStatus::Sent => "Sent",
        InvoiceStatus::Paid => "Paid",
        InvoiceStatus::Overdue => "Overdue",
    }
}

fn invoice_status_class(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Draft => "badge badge--draft",
        InvoiceStatus::Sent => "badge badge--sent",
        InvoiceStatus::Paid => "badge badge--paid",
        InvoiceStatus::Overdue => "badge badge--overdue",
    }
}

/// One demo invoice row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Invoice {
    number: &'static str,
    customer: &'static str,
    issued: &'static str,
    due: &'static str,
    amount: Decimal,
    status: InvoiceStatus,
}

fn demo_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            number: "INV-2025-0114",
            customer: "Brightline Retail",
            issued: "2025-02-03",
            due: "2025-03-05",
            amount: Decimal::new(482000, 2),
            status: InvoiceStatus::Paid,
        },
        Invoice {
            number: "INV-2025-0115",
            customer: "Cobalt Works",
            issued: "2025-02-17",
            due: "2025-03-19",
            amount: Decimal::new(129950, 2),
            status: InvoiceStatus::Sent,
        },
        Invoice {
            number: "INV-2025-0116",
            customer: "Harbor & Lane",
            issued: "2025-01-28",
            due: "2025-02-27",
            amount: Decimal::new(76025, 2),
            status: InvoiceStatus::Overdue,
        },
        Invoice {
            number: "INV-2025-0117",
            customer: "Brightline Retail",
            issued: "2025-03-01",
            due: "2025-03-31",
            amount: Decimal::new(215300, 2),
            status: InvoiceStatus::Sent,
        },
        Invoice {
            number: "INV-2025-0118",
            customer: "Quarry Supply Co.",
            issued: "2025-03-04",
            due: "2025-04-03",
            amount: Decimal::new(58800, 2),
            status: InvoiceStatus::Draft,
        },
    ]
}

/// Sum of billed-but-unpaid invoices (sent or overdue; drafts are unbilled).
fn outstanding_total(invoices: &[Invoice]) -> Decimal {
    invoices
        .iter()
        .filter(|invoice| matches!(invoice.status, InvoiceStatus::Sent | InvoiceStatus::Overdue))
        .map(|invoice| invoice.amount)
        .sum()
}

/// Sum of paid invoices.
fn paid_total(invoices: &[Invoice]) -> Decimal {
    invoices
        .iter()
        .filter(|invoice| invoice.status == InvoiceStatus::Paid)
        .map(|invoice| invoice.amount)
        .sum()
}

/// Stat cards in display order: `(label, value)`.
fn billing_cards(invoices: &[Invoice]) -> Vec<(&'static str, String)> {
    vec![
        ("Outstanding", format_money(outstanding_total(invoices))),
        ("Paid", format_money(paid_total(invoices))),
        ("Invoices", invoices.len().to_string()),
    ]
}

#[component]
pub fn BillingPage() -> impl IntoView {
    view! {
        <AppLayout title="Billing">
            <p class="page-note">"Demo workspace - invoices are not issued."</p>
            <div class="stat-grid">
                {billing_cards(&demo_invoices())
                    .into_iter()
                    .map(|(label, value)| view! { <StatCard label=label value=value/> })
                    .collect::<Vec<_>>()}
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Invoice"</th>
                        <th>"Customer"</th>
                        <th>"Issued"</th>
                        <th>"Due"</th>
                        <th class="data-table__num">"Amount"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {demo_invoices()
                        .into_iter()
                        .map(|invoice| {
                            view! {
                                <tr>
                                    <td>{invoice.number}</td>
                                    <td>{invoice.customer}</td>
                                    <td>{invoice.issued}</td>
                                    <td>{invoice.due}</td>
                                    <td class="data-table__num">{format_money(invoice.amount)}</td>
                                    <td>
                                        <span class=invoice_status_class(invoice.status)>
                                            {invoice_status_label(invoice.status)}
                                        </span>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </AppLayout>
    }
}
