use contracts::domain::common::AggregateRoot;
use contracts::domain::a001_purchase_order::aggregate::PurchaseOrder;
use contracts::shared::list::SortDirection;
use leptos::prelude::*;

use crate::shared::components::toasts::use_notifier;
use crate::shared::list_controller::{http_controller, use_list_controller};
use crate::shared::list_page::{Column, ListPage};
use crate::shared::list_utils::{format_date, format_optional_date, format_money};

fn columns() -> Vec<Column<PurchaseOrder>> {
    vec![
        Column::new("purchaseOrderId", "PO #", |r| r.purchase_order_id.clone()),
        Column::new("vendorName", "Vendor", |r| r.vendor_name.clone()),
        Column::unsorted("vendorPhone", "Phone", |r| r.vendor_phone.clone().unwrap_or_default()),
        Column::new("orderDate", "Order date", |r| format_date(r.order_date)),
        Column::new("expectedDate", "Expected", |r| format_optional_date(r.expected_date)),
        Column::new("status", "Status", |r| r.status.to_string()),
        Column::new("totalAmount", "Total", |r| format_money(r.total_amount)),
    ]
}

#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    let controller = http_controller::<PurchaseOrder>(use_notifier())
        .with_sort("orderDate", SortDirection::Desc);
    let binding = use_list_controller(controller);
    binding.spawn(|controller| async move {
        let _ = controller.initialize(Vec::new()).await;
    });

    view! {
        <ListPage
            binding=binding
            columns=columns()
            title=PurchaseOrder::list_name()
            convert_label="Convert to purchase"
        />
    }
}
