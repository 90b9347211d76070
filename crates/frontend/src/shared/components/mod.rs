pub mod pagination_controls;
pub mod toasts;
