use leptos::prelude::*;

use crate::layout::registry::DEFAULT_SCREEN;

/// Глобальное состояние оболочки: какой экран открыт сейчас
#[derive(Clone, Copy, Debug)]
pub struct AppGlobalContext {
    pub active: RwSignal<&'static str>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_SCREEN),
        }
    }

    pub fn open(&self, key: &'static str) {
        if self.active.get_untracked() != key {
            log::debug!("open screen {}", key);
            self.active.set(key);
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
