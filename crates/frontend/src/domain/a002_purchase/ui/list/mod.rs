use contracts::domain::common::AggregateRoot;
use contracts::domain::a002_purchase::aggregate::Purchase;
use contracts::shared::list::SortDirection;
use leptos::prelude::*;

use crate::shared::components::toasts::use_notifier;
use crate::shared::list_controller::{http_controller, use_list_controller};
use crate::shared::list_page::{Column, ListPage};
use crate::shared::list_utils::{format_date, format_money};

fn columns() -> Vec<Column<Purchase>> {
    vec![
        Column::new("purchaseId", "Purchase #", |r| r.purchase_id.clone()),
        Column::new("vendorName", "Vendor", |r| r.vendor_name.clone()),
        Column::new("purchaseDate", "Date", |r| format_date(r.purchase_date)),
        Column::new("status", "Status", |r| r.status.to_string()),
        Column::new("totalAmount", "Total", |r| format_money(r.total_amount)),
        Column::unsorted("balanceDue", "Balance due", |r| format_money(r.balance_due())),
    ]
}

#[component]
pub fn PurchaseList() -> impl IntoView {
    let controller = http_controller::<Purchase>(use_notifier())
        .with_sort("purchaseDate", SortDirection::Desc);
    let binding = use_list_controller(controller);
    binding.spawn(|controller| async move {
        let _ = controller.initialize(Vec::new()).await;
    });

    view! {
        <ListPage
            binding=binding
            columns=columns()
            title=Purchase::list_name()
        />
    }
}
