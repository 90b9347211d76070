use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::list_controller::{NoticeKind, Notifier};

const MAX_TOASTS: usize = 5;
const TOAST_TTL_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Notifier that shows messages as toasts; provided as context by `App`
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn dismiss(&self, id: u64) {
        // the signal may already be disposed when a timer fires after unmount
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        LogNotifier.notify(kind, message);

        self.next_id.update_value(|id| *id += 1);
        let toast = Toast {
            id: self.next_id.get_value(),
            kind,
            message: message.to_string(),
        };
        let id = toast.id;
        self.toasts.update(|toasts| {
            toasts.push(toast);
            if toasts.len() > MAX_TOASTS {
                toasts.remove(0);
            }
        });

        let notifier = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            notifier.dismiss(id);
        });
    }
}

/// Fallback when no toast context is available
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => log::info!("{}", message),
            NoticeKind::Error => log::error!("{}", message),
        }
    }
}

pub fn use_notifier() -> Rc<dyn Notifier> {
    match use_context::<ToastNotifier>() {
        Some(toasts) => Rc::new(toasts),
        None => Rc::new(LogNotifier),
    }
}

#[component]
pub fn Toasts() -> impl IntoView {
    let notifier = use_context::<ToastNotifier>();

    view! {
        <div class="toasts">
            {move || {
                notifier
                    .map(|notifier| {
                        notifier
                            .toasts
                            .get()
                            .into_iter()
                            .map(|toast| {
                                let id = toast.id;
                                let class = match toast.kind {
                                    NoticeKind::Success => "toast toast-success",
                                    NoticeKind::Error => "toast toast-error",
                                };
                                view! {
                                    <div class=class>
                                        <span>{toast.message}</span>
                                        <button on:click=move |_| notifier.dismiss(id)>"×"</button>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
            }}
        </div>
    }
}
