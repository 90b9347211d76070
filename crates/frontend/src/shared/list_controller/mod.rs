//! Generic list-data controller shared by every entity list screen.
//!
//! Owns the current page of records, pagination, sort and local search state;
//! talks to the server only through the [`ListSource`] / [`EntityActions`]
//! ports and reports user-facing feedback through a [`Notifier`].

pub mod binding;
pub mod controller;
pub mod error;
pub mod http;
pub mod ports;
pub mod state;

pub use binding::{use_list_controller, ListBinding};
pub use controller::ListController;
pub use error::ListError;
pub use http::{http_controller, HttpListSource};
pub use ports::{EntityActions, ListSource, NoticeKind, Notifier};
pub use state::{FetchOutcome, FetchParams, ListSnapshot};
