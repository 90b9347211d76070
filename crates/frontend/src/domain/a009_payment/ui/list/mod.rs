use contracts::domain::common::AggregateRoot;
use contracts::domain::a009_payment::aggregate::Payment;
use contracts::shared::list::SortDirection;
use leptos::prelude::*;

use crate::shared::components::toasts::use_notifier;
use crate::shared::list_controller::{http_controller, use_list_controller};
use crate::shared::list_page::{Column, ListPage};
use crate::shared::list_utils::{format_date, format_money};

fn columns() -> Vec<Column<Payment>> {
    vec![
        Column::new("paymentNumber", "Payment #", |r| r.payment_number.clone()),
        Column::new("paymentDate", "Date", |r| format_date(r.payment_date)),
        Column::new("direction", "Direction", |r| r.direction.as_str().to_string()),
        Column::new("counterpartyName", "Counterparty", |r| r.counterparty_name.clone()),
        Column::unsorted("method", "Method", |r| r.method.clone().unwrap_or_default()),
        Column::unsorted("referenceNo", "Reference", |r| r.reference_no.clone().unwrap_or_default()),
        Column::new("amount", "Amount", |r| format_money(r.amount)),
    ]
}

#[component]
pub fn PaymentList() -> impl IntoView {
    let controller = http_controller::<Payment>(use_notifier())
        .with_sort("paymentDate", SortDirection::Desc);
    let binding = use_list_controller(controller);
    binding.spawn(|controller| async move {
        let _ = controller.initialize(Vec::new()).await;
    });

    view! {
        <ListPage
            binding=binding
            columns=columns()
            title=Payment::list_name()
        />
    }
}
