//! Generic list screen: search, sortable header, rows with actions, pagination.

use contracts::domain::common::AggregateRoot;
use contracts::shared::list::Searchable;
use leptos::prelude::*;

use crate::shared::api_utils::open_in_new_tab;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_controller::ListBinding;
use crate::shared::list_utils::get_sort_indicator;

/// Table column: JSON field used for server sorting plus a cell formatter
pub struct Column<T> {
    pub key: &'static str,
    pub title: &'static str,
    pub value: fn(&T) -> String,
    pub sortable: bool,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> Column<T> {
    pub fn new(key: &'static str, title: &'static str, value: fn(&T) -> String) -> Self {
        Self {
            key,
            title,
            value,
            sortable: true,
        }
    }

    pub fn unsorted(key: &'static str, title: &'static str, value: fn(&T) -> String) -> Self {
        Self {
            sortable: false,
            ..Self::new(key, title, value)
        }
    }
}

#[component]
pub fn ListPage<T>(
    binding: ListBinding<T>,
    columns: Vec<Column<T>>,
    #[prop(into)] title: String,
    /// Label of the convert action; the button is hidden when absent
    #[prop(optional)]
    convert_label: Option<&'static str>,
) -> impl IntoView
where
    T: AggregateRoot + Searchable + Clone + Send + Sync + 'static,
{
    let state = binding.state;
    let columns = StoredValue::new(columns);
    // (id, document number) of the record waiting for delete confirmation
    let pending_delete = RwSignal::new(None::<(String, String)>);

    // Errors below are reported to the user through the controller's notifier.
    let on_page_change = Callback::new(move |index: usize| {
        binding.spawn(move |controller| async move {
            let _ = controller.change_page(index).await;
        });
    });
    let on_page_size_change = Callback::new(move |raw: String| {
        binding.spawn(move |controller| async move {
            let _ = controller.change_page_size_input(&raw).await;
        });
    });

    let header = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let key = col.key;
                let sortable = col.sortable;
                let class = if sortable { "sortable" } else { "" };
                view! {
                    <th
                        class=class
                        on:click=move |_| {
                            if sortable {
                                binding.spawn(move |controller| async move {
                                    let _ = controller.request_sort(key, None).await;
                                });
                            }
                        }
                    >
                        {col.title}
                        {move || {
                            if sortable {
                                state.with(|s| {
                                    get_sort_indicator(s.sort_by.as_deref(), key, s.sort_direction)
                                })
                            } else {
                                ""
                            }
                        }}
                    </th>
                }
            })
            .collect_view()
    });

    let rows = move || {
        let records = state.with(|s| s.records.clone());
        if records.is_empty() {
            let span = columns.with_value(|cols| cols.len() + 1).to_string();
            return view! {
                <tr>
                    <td colspan=span class="empty-row">
                        "No records"
                    </td>
                </tr>
            }
            .into_any();
        }

        records
            .into_iter()
            .map(|record| {
                let id = record.id().to_string();
                let number = record.document_no().to_string();
                let cells = columns.with_value(|cols| {
                    cols.iter()
                        .map(|col| view! { <td>{(col.value)(&record)}</td> })
                        .collect_view()
                });

                let delete_target = (id.clone(), number);
                let clone_id = id.clone();
                let print_id = id.clone();
                let convert_button = convert_label.map(|label| {
                    let convert_id = id.clone();
                    view! {
                        <button on:click=move |_| {
                            let id = convert_id.clone();
                            binding.spawn(move |controller| async move {
                                let _ = controller.convert(&id).await;
                            });
                        }>{label}</button>
                    }
                });

                view! {
                    <tr>
                        {cells}
                        <td class="row-actions">
                            <button on:click=move |_| {
                                pending_delete.set(Some(delete_target.clone()))
                            }>"Delete"</button>
                            <button on:click=move |_| {
                                let id = clone_id.clone();
                                binding.spawn(move |controller| async move {
                                    let _ = controller.clone_record(&id).await;
                                });
                            }>"Clone"</button>
                            {convert_button}
                            <button on:click=move |_| {
                                let id = print_id.clone();
                                binding.spawn(move |controller| async move {
                                    if let Ok(url) = controller.print_url(&id).await {
                                        open_in_new_tab(&url);
                                    }
                                });
                            }>"Print"</button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    // stays open when the delete fails so the user can retry or cancel
    let confirm_delete = move || {
        pending_delete.get().map(|(id, number)| {
            view! {
                <div class="confirm-bar">
                    <span>{format!("Delete {}?", number)}</span>
                    <button on:click=move |_| {
                        let id = id.clone();
                        binding.spawn(move |controller| async move {
                            if controller.delete(&id).await.is_ok() {
                                let _ = pending_delete.try_set(None);
                            }
                        });
                    }>"Delete"</button>
                    <button on:click=move |_| pending_delete.set(None)>"Cancel"</button>
                </div>
            }
        })
    };

    view! {
        <div class="list-page">
            <div class="list-header">
                <h2>{title}</h2>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search this page..."
                    prop:value=move || state.with(|s| s.search_term.clone())
                    on:input=move |ev| binding.search(&event_target_value(&ev))
                />
                {move || state.with(|s| s.loading).then(|| view! { <span class="loading">"Loading..."</span> })}
            </div>
            {confirm_delete}
            <table class="list-table">
                <thead>
                    <tr>
                        {header}
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <PaginationControls
                pagination=Signal::derive(move || state.with(|s| s.pagination))
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
            />
        </div>
    }
}
