use contracts::domain::common::AggregateRoot;
use contracts::domain::a003_product::aggregate::Product;
use contracts::shared::list::SortDirection;
use leptos::prelude::*;

use crate::shared::components::toasts::use_notifier;
use crate::shared::list_controller::{http_controller, use_list_controller};
use crate::shared::list_page::{Column, ListPage};
use crate::shared::list_utils::format_money;

fn columns() -> Vec<Column<Product>> {
    vec![
        Column::new("sku", "SKU", |r| r.sku.clone()),
        Column::new("name", "Name", |r| r.name.clone()),
        Column::new("category", "Category", |r| r.category.clone().unwrap_or_default()),
        Column::unsorted("unit", "Unit", |r| r.unit.clone().unwrap_or_default()),
        Column::new("unitPrice", "Price", |r| format_money(r.unit_price)),
        Column::new("stockQuantity", "In stock", |r| r.stock_quantity.to_string()),
    ]
}

#[component]
pub fn ProductList() -> impl IntoView {
    let controller = http_controller::<Product>(use_notifier())
        .with_sort("name", SortDirection::Asc);
    let binding = use_list_controller(controller);
    binding.spawn(|controller| async move {
        let _ = controller.initialize(Vec::new()).await;
    });

    view! {
        <ListPage
            binding=binding
            columns=columns()
            title=Product::list_name()
        />
    }
}
