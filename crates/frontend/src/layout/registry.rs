use contracts::domain::a008_counterparty::aggregate::CounterpartyKind;
use leptos::prelude::*;

use crate::domain::a001_purchase_order::ui::list::PurchaseOrderList;
use crate::domain::a002_purchase::ui::list::PurchaseList;
use crate::domain::a003_product::ui::list::ProductList;
use crate::domain::a004_expense::ui::list::ExpenseList;
use crate::domain::a005_invoice::ui::list::InvoiceList;
use crate::domain::a006_quotation::ui::list::QuotationList;
use crate::domain::a007_delivery_challan::ui::list::DeliveryChallanList;
use crate::domain::a008_counterparty::ui::list::CounterpartyList;
use crate::domain::a009_payment::ui::list::PaymentList;

pub const DEFAULT_SCREEN: &str = "a005_invoice";

/// Заголовок экрана по ключу
pub fn screen_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_purchase_order" => "Purchase orders",
        "a002_purchase" => "Purchases",
        "a003_product" => "Products",
        "a004_expense" => "Expenses",
        "a005_invoice" => "Invoices",
        "a006_quotation" => "Quotations",
        "a007_delivery_challan" => "Delivery challans",
        "a008_customer" => "Customers",
        "a008_vendor" => "Vendors",
        "a009_payment" => "Payments",
        _ => "Unknown",
    }
}

/// Рендерит экран по его ключу.
///
/// Неизвестный ключ даёт заглушку, а не панику.
pub fn render_screen(key: &str) -> AnyView {
    match key {
        "a001_purchase_order" => view! { <PurchaseOrderList /> }.into_any(),
        "a002_purchase" => view! { <PurchaseList /> }.into_any(),
        "a003_product" => view! { <ProductList /> }.into_any(),
        "a004_expense" => view! { <ExpenseList /> }.into_any(),
        "a005_invoice" => view! { <InvoiceList /> }.into_any(),
        "a006_quotation" => view! { <QuotationList /> }.into_any(),
        "a007_delivery_challan" => view! { <DeliveryChallanList /> }.into_any(),
        // a008: одна коллекция, два экрана
        "a008_customer" => view! { <CounterpartyList kind=CounterpartyKind::Customer /> }.into_any(),
        "a008_vendor" => view! { <CounterpartyList kind=CounterpartyKind::Vendor /> }.into_any(),
        "a009_payment" => view! { <PaymentList /> }.into_any(),
        _ => {
            log::warn!("unknown screen key: {}", key);
            view! { <div class="placeholder">{format!("Unknown screen: {}", key)}</div> }
                .into_any()
        }
    }
}
