use contracts::shared::list::Pagination;
use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls
///
/// Page callbacks use zero-based indexes; the page-size select reports its
/// raw value so the list controller can ignore non-numeric input.
#[component]
pub fn PaginationControls(
    /// Current page state (`current` is one-based)
    #[prop(into)]
    pagination: Signal<Pagination>,

    /// Callback when page changes (zero-based index)
    on_page_change: Callback<usize>,

    /// Callback when page size changes (raw select value)
    on_page_size_change: Callback<String>,

    /// Available page size options (optional, defaults to [10, 25, 50, 100])
    #[prop(optional)]
    page_size_options: Option<Vec<u64>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 25, 50, 100]);

    let page_index = move || pagination.get().current.saturating_sub(1) as usize;
    let total_pages = move || pagination.get().total_pages() as usize;
    let on_last_page = move || page_index() + 1 >= total_pages();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=move || page_index() == 0
                title="First page"
            >
                "«"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = page_index();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || page_index() == 0
                title="Previous page"
            >
                "‹"
            </button>
            <span class="pagination-info">
                {move || {
                    let p = pagination.get();
                    format!("{} / {} ({})", p.current, p.total_pages().max(1), p.total)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if !on_last_page() {
                        on_page_change.run(page_index() + 1);
                    }
                }
                disabled=on_last_page
                title="Next page"
            >
                "›"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=on_last_page
                title="Last page"
            >
                "»"
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| on_page_size_change.run(event_target_value(&ev))
                prop:value=move || pagination.get().page_size.to_string()
            >
                {page_size_opts
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || pagination.get().page_size == size
                            >
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
