use contracts::domain::common::AggregateRoot;
use contracts::domain::a005_invoice::aggregate::Invoice;
use contracts::shared::list::SortDirection;
use leptos::prelude::*;

use crate::shared::components::toasts::use_notifier;
use crate::shared::list_controller::{http_controller, use_list_controller};
use crate::shared::list_page::{Column, ListPage};
use crate::shared::list_utils::{format_date, format_optional_date, format_money};

fn columns() -> Vec<Column<Invoice>> {
    vec![
        Column::new("invoiceNumber", "Invoice #", |r| r.invoice_number.clone()),
        Column::new("customerName", "Customer", |r| r.customer_name.clone()),
        Column::unsorted("customerPhone", "Phone", |r| r.customer_phone.clone().unwrap_or_default()),
        Column::new("invoiceDate", "Date", |r| format_date(r.invoice_date)),
        Column::new("dueDate", "Due", |r| format_optional_date(r.due_date)),
        Column::new("status", "Status", |r| r.status.to_string()),
        Column::new("totalAmount", "Total", |r| format_money(r.total_amount)),
    ]
}

#[component]
pub fn InvoiceList() -> impl IntoView {
    let controller = http_controller::<Invoice>(use_notifier())
        .with_sort("invoiceDate", SortDirection::Desc);
    let binding = use_list_controller(controller);
    binding.spawn(|controller| async move {
        let _ = controller.initialize(Vec::new()).await;
    });

    view! {
        <ListPage
            binding=binding
            columns=columns()
            title=Invoice::list_name()
        />
    }
}
