use contracts::domain::common::AggregateRoot;
use contracts::domain::a004_expense::aggregate::Expense;
use contracts::shared::list::SortDirection;
use leptos::prelude::*;

use crate::shared::components::toasts::use_notifier;
use crate::shared::list_controller::{http_controller, use_list_controller};
use crate::shared::list_page::{Column, ListPage};
use crate::shared::list_utils::{format_date, format_money};

fn columns() -> Vec<Column<Expense>> {
    vec![
        Column::new("expenseId", "Expense #", |r| r.expense_id.clone()),
        Column::new("expenseDate", "Date", |r| format_date(r.expense_date)),
        Column::new("category", "Category", |r| r.category.clone()),
        Column::new("payeeName", "Payee", |r| r.payee_name.clone()),
        Column::unsorted("paymentMethod", "Paid by", |r| r.payment_method.clone().unwrap_or_default()),
        Column::new("amount", "Amount", |r| format_money(r.amount)),
    ]
}

#[component]
pub fn ExpenseList() -> impl IntoView {
    let controller = http_controller::<Expense>(use_notifier())
        .with_sort("expenseDate", SortDirection::Desc);
    let binding = use_list_controller(controller);
    binding.spawn(|controller| async move {
        let _ = controller.initialize(Vec::new()).await;
    });

    view! {
        <ListPage
            binding=binding
            columns=columns()
            title=Expense::list_name()
        />
    }
}
