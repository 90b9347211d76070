use contracts::domain::a008_counterparty::aggregate::{Counterparty, CounterpartyKind};
use contracts::shared::list::SortDirection;
use leptos::prelude::*;

use crate::shared::components::toasts::use_notifier;
use crate::shared::list_controller::{http_controller, use_list_controller};
use crate::shared::list_page::{Column, ListPage};
use crate::shared::list_utils::format_money;

fn columns() -> Vec<Column<Counterparty>> {
    vec![
        Column::new("code", "Code", |r| r.code.clone()),
        Column::new("name", "Name", |r| r.name.clone()),
        Column::unsorted("phone", "Phone", |r| r.phone.clone().unwrap_or_default()),
        Column::unsorted("email", "Email", |r| r.email.clone().unwrap_or_default()),
        Column::unsorted("taxId", "Tax ID", |r| r.tax_id.clone().unwrap_or_default()),
        Column::new("openingBalance", "Opening balance", |r| {
            format_money(r.opening_balance)
        }),
    ]
}

fn title(kind: CounterpartyKind) -> &'static str {
    match kind {
        CounterpartyKind::Customer => "Customers",
        CounterpartyKind::Vendor => "Vendors",
    }
}

/// Customers and vendors share one collection; `kind` becomes the entity filter
#[component]
pub fn CounterpartyList(kind: CounterpartyKind) -> impl IntoView {
    let controller = http_controller::<Counterparty>(use_notifier())
        .with_entity_filter(kind.as_str())
        .with_sort("name", SortDirection::Asc);
    let binding = use_list_controller(controller);
    binding.spawn(|controller| async move {
        let _ = controller.initialize(Vec::new()).await;
    });

    view! { <ListPage binding=binding columns=columns() title=title(kind) /> }
}
