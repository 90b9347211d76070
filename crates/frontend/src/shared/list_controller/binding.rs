//! Leptos glue: mirrors controller snapshots into a signal for the views.

use std::future::Future;

use contracts::shared::list::Searchable;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::controller::ListController;
use super::state::ListSnapshot;

/// Copyable handle used by list components.
///
/// `state` is updated after every controller transition; the controller
/// itself lives in local (non-`Send`) arena storage.
pub struct ListBinding<T: Send + Sync + 'static> {
    pub state: RwSignal<ListSnapshot<T>>,
    controller: StoredValue<ListController<T>, LocalStorage>,
}

impl<T: Send + Sync + 'static> Clone for ListBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListBinding<T> {}

impl<T> ListBinding<T>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    pub fn controller(&self) -> Option<ListController<T>> {
        self.controller.try_get_value()
    }

    /// Runs an async controller operation on the UI event loop
    pub fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(ListController<T>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        match self.controller() {
            Some(controller) => spawn_local(task(controller)),
            None => log::warn!("list controller already disposed"),
        }
    }

    pub fn search(&self, term: &str) {
        if let Some(controller) = self.controller() {
            controller.search(term);
        }
    }
}

/// Binds a controller to the current reactive owner.
///
/// The controller is disposed together with the owner, so responses that
/// arrive after the view is gone are dropped.
pub fn use_list_controller<T>(controller: ListController<T>) -> ListBinding<T>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(controller.snapshot());
    controller.subscribe(move |snapshot| {
        let _ = state.try_set(snapshot.clone());
    });

    let stored = StoredValue::new_local(controller);
    on_cleanup(move || {
        let _ = stored.try_with_value(|controller| controller.dispose());
    });

    ListBinding {
        state,
        controller: stored,
    }
}
