use async_trait::async_trait;
use contracts::shared::list::{ActionResponse, ListQuery, PaginatedResponse};

use super::error::ListError;

/// Paged-list capability (`fetchPagedList`)
#[async_trait(?Send)]
pub trait ListSource<T> {
    async fn fetch_page(&self, query: &ListQuery) -> Result<PaginatedResponse<T>, ListError>;
}

/// Row-level write capabilities
#[async_trait(?Send)]
pub trait EntityActions<T> {
    async fn delete(&self, id: &str) -> Result<ActionResponse, ListError>;

    async fn clone_entity(&self, id: &str) -> Result<T, ListError>;

    /// Quotation / challan -> invoice, purchase order -> purchase
    async fn convert(&self, id: &str) -> Result<ActionResponse, ListError>;

    /// URL of the printable document; opened in a new tab by the view
    async fn print_url(&self, id: &str) -> Result<String, ListError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-facing feedback port (toast, banner, log...)
pub trait Notifier {
    fn notify(&self, kind: NoticeKind, message: &str);
}
