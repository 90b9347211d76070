pub mod global_context;
pub mod registry;
pub mod sidebar;

use leptos::prelude::*;

use crate::shared::components::toasts::Toasts;
use global_context::AppGlobalContext;
use registry::render_screen;
use sidebar::Sidebar;

/// Sidebar on the left, the active list screen in the center, toasts on top
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    view! {
        <div class="app-shell">
            <Sidebar />
            <main class="app-center">
                // keyed by screen so each switch builds a fresh controller
                {move || render_screen(ctx.active.get())}
            </main>
            <Toasts />
        </div>
    }
}
