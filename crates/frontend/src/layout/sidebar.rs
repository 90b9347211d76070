use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::registry::screen_label_for_key;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<&'static str>, // screen keys
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Sales",
            items: vec!["a006_quotation", "a007_delivery_challan", "a005_invoice"],
        },
        MenuGroup {
            label: "Purchasing",
            items: vec!["a001_purchase_order", "a002_purchase", "a004_expense"],
        },
        MenuGroup {
            label: "Money",
            items: vec!["a009_payment"],
        },
        MenuGroup {
            label: "References",
            items: vec!["a003_product", "a008_customer", "a008_vendor"],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    let groups = get_menu_groups()
        .into_iter()
        .map(|group| {
            let items = group
                .items
                .into_iter()
                .map(|key| {
                    let class = move || {
                        if ctx.active.get() == key {
                            "sidebar-item active"
                        } else {
                            "sidebar-item"
                        }
                    };
                    view! {
                        <li class=class on:click=move |_| ctx.open(key)>
                            {screen_label_for_key(key)}
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div class="sidebar-group">
                    <div class="sidebar-group-label">{group.label}</div>
                    <ul>{items}</ul>
                </div>
            }
        })
        .collect_view();

    view! { <nav class="sidebar">{groups}</nav> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_screen() {
        for group in get_menu_groups() {
            for key in group.items {
                assert_ne!(screen_label_for_key(key), "Unknown", "{}", key);
            }
        }
    }
}
