use contracts::shared::list::{Pagination, SortDirection};

/// Read-only view of the controller state handed to observers
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<T> {
    pub records: Vec<T>,
    pub pagination: Pagination,
    pub sort_by: Option<String>,
    pub sort_direction: SortDirection,
    pub search_term: String,
    pub searching: bool,
    pub loading: bool,
}

impl<T> Default for ListSnapshot<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            pagination: Pagination::default(),
            sort_by: None,
            sort_direction: SortDirection::Asc,
            search_term: String::new(),
            searching: false,
            loading: false,
        }
    }
}

/// Partial override of the current page / sort state.
///
/// `None` keeps the current value; `sort_by: Some("")` returns to the
/// server-default ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl FetchParams {
    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(field.into());
        self.sort_direction = Some(direction);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the list state
    Applied,
    /// `initialize` was given records, no request was made
    Seeded,
    /// A later request was issued before this one completed; response dropped
    Superseded,
    /// The owning view is gone; response dropped
    Disposed,
    /// Invalid UI input or repeated `initialize`; nothing happened
    Skipped,
}
