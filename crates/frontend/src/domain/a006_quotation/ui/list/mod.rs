use contracts::domain::common::AggregateRoot;
use contracts::domain::a006_quotation::aggregate::Quotation;
use contracts::shared::list::SortDirection;
use leptos::prelude::*;

use crate::shared::components::toasts::use_notifier;
use crate::shared::list_controller::{http_controller, use_list_controller};
use crate::shared::list_page::{Column, ListPage};
use crate::shared::list_utils::{format_date, format_optional_date, format_money};

fn columns() -> Vec<Column<Quotation>> {
    vec![
        Column::new("quotationNumber", "Quotation #", |r| r.quotation_number.clone()),
        Column::new("customerName", "Customer", |r| r.customer_name.clone()),
        Column::new("quotationDate", "Date", |r| format_date(r.quotation_date)),
        Column::new("validUntil", "Valid until", |r| format_optional_date(r.valid_until)),
        Column::new("status", "Status", |r| r.status.to_string()),
        Column::new("totalAmount", "Total", |r| format_money(r.total_amount)),
    ]
}

#[component]
pub fn QuotationList() -> impl IntoView {
    let controller = http_controller::<Quotation>(use_notifier())
        .with_sort("quotationDate", SortDirection::Desc);
    let binding = use_list_controller(controller);
    binding.spawn(|controller| async move {
        let _ = controller.initialize(Vec::new()).await;
    });

    view! {
        <ListPage
            binding=binding
            columns=columns()
            title=Quotation::list_name()
            convert_label="Convert to invoice"
        />
    }
}
