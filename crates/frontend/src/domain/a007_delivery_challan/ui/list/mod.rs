use contracts::domain::common::AggregateRoot;
use contracts::domain::a007_delivery_challan::aggregate::DeliveryChallan;
use contracts::shared::list::SortDirection;
use leptos::prelude::*;

use crate::shared::components::toasts::use_notifier;
use crate::shared::list_controller::{http_controller, use_list_controller};
use crate::shared::list_page::{Column, ListPage};
use crate::shared::list_utils::{format_date, format_money};

fn columns() -> Vec<Column<DeliveryChallan>> {
    vec![
        Column::new("challanNumber", "Challan #", |r| r.challan_number.clone()),
        Column::new("customerName", "Customer", |r| r.customer_name.clone()),
        Column::new("challanDate", "Date", |r| format_date(r.challan_date)),
        Column::unsorted("vehicleNumber", "Vehicle", |r| r.vehicle_number.clone().unwrap_or_default()),
        Column::new("status", "Status", |r| r.status.to_string()),
        Column::new("totalAmount", "Total", |r| format_money(r.total_amount)),
    ]
}

#[component]
pub fn DeliveryChallanList() -> impl IntoView {
    let controller = http_controller::<DeliveryChallan>(use_notifier())
        .with_sort("challanDate", SortDirection::Desc);
    let binding = use_list_controller(controller);
    binding.spawn(|controller| async move {
        let _ = controller.initialize(Vec::new()).await;
    });

    view! {
        <ListPage
            binding=binding
            columns=columns()
            title=DeliveryChallan::list_name()
            convert_label="Convert to invoice"
        />
    }
}
