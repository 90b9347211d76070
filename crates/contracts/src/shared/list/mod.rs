//! Wire types for paged entity lists and row actions.
//!
//! Shared by the REST backend (`/api/{collection}/...`) and the frontend
//! list controller.

pub mod query;
pub mod response;
pub mod search;

pub use query::{ListQuery, SortDirection, DEFAULT_PAGE_SIZE, FILTER_PREFIX, MAX_PAGE_SIZE};
pub use response::{ActionResponse, PaginatedResponse, Pagination, PrintResponse};
pub use search::Searchable;
