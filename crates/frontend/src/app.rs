use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::components::toasts::ToastNotifier;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // List controllers report through this notifier
    provide_context(ToastNotifier::new());

    view! { <Shell /> }
}
