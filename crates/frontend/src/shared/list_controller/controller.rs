use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use contracts::shared::list::{
    ActionResponse, ListQuery, PaginatedResponse, Pagination, Searchable, SortDirection,
};

use super::error::ListError;
use super::ports::{EntityActions, ListSource, NoticeKind, Notifier};
use super::state::{FetchOutcome, FetchParams, ListSnapshot};

type Observer<T> = Rc<dyn Fn(&ListSnapshot<T>)>;

struct Inner<T> {
    snapshot: ListSnapshot<T>,
    /// Last fetched page, source of local search
    cache: Vec<T>,
    entity_filter: Option<String>,
    filters: BTreeMap<String, String>,
    /// Token of the most recently issued fetch
    latest_request: u64,
    in_flight: usize,
    initialized: bool,
    disposed: bool,
    observers: Vec<Observer<T>>,
}

impl<T: Searchable + Clone> Inner<T> {
    fn resolve_query(&self, params: FetchParams) -> ListQuery {
        let sort_by = match params.sort_by {
            Some(field) => (!field.trim().is_empty()).then_some(field),
            None => self.snapshot.sort_by.clone(),
        };
        ListQuery {
            entity_filter: self.entity_filter.clone(),
            page: params
                .page
                .unwrap_or(self.snapshot.pagination.current)
                .max(1),
            page_size: params
                .page_size
                .unwrap_or(self.snapshot.pagination.page_size)
                .max(1),
            filters: self.filters.clone(),
            sort_by,
            sort_direction: params
                .sort_direction
                .unwrap_or(self.snapshot.sort_direction),
        }
    }

    /// Replaces page, sort and cache from one response. An active search term
    /// is re-applied to the new page.
    fn apply_page(&mut self, page: PaginatedResponse<T>, query: &ListQuery) {
        self.snapshot.pagination = page.pagination;
        self.snapshot.sort_by = query.sort_by.clone();
        self.snapshot.sort_direction = query.sort_direction;
        self.cache = page.records;

        let term = self.snapshot.search_term.trim();
        if term.is_empty() {
            self.snapshot.records = self.cache.clone();
        } else {
            let filtered = filter_records(&self.cache, term);
            self.snapshot.pagination.total = filtered.len() as u64;
            self.snapshot.records = filtered;
        }
    }
}

fn filter_records<T: Searchable + Clone>(records: &[T], term: &str) -> Vec<T> {
    records
        .iter()
        .filter(|record| record.matches_filter(term))
        .cloned()
        .collect()
}

/// List data controller, generic over the entity record.
///
/// Clones share the same state, so a view can hand copies to event handlers
/// and spawned tasks. Not thread-safe: everything runs on the UI event loop.
pub struct ListController<T> {
    inner: Rc<RefCell<Inner<T>>>,
    source: Rc<dyn ListSource<T>>,
    actions: Option<Rc<dyn EntityActions<T>>>,
    notifier: Rc<dyn Notifier>,
}

impl<T> Clone for ListController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            source: Rc::clone(&self.source),
            actions: self.actions.clone(),
            notifier: Rc::clone(&self.notifier),
        }
    }
}

impl<T> ListController<T>
where
    T: Searchable + Clone + 'static,
{
    pub fn new(source: Rc<dyn ListSource<T>>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                snapshot: ListSnapshot::default(),
                cache: Vec::new(),
                entity_filter: None,
                filters: BTreeMap::new(),
                latest_request: 0,
                in_flight: 0,
                initialized: false,
                disposed: false,
                observers: Vec::new(),
            })),
            source,
            actions: None,
            notifier,
        }
    }

    pub fn with_actions(mut self, actions: Rc<dyn EntityActions<T>>) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn with_page_size(self, page_size: u64) -> Self {
        self.inner.borrow_mut().snapshot.pagination.page_size = page_size.max(1);
        self
    }

    pub fn with_sort(self, field: impl Into<String>, direction: SortDirection) -> Self {
        {
            let mut inner = self.inner.borrow_mut();
            inner.snapshot.sort_by = Some(field.into());
            inner.snapshot.sort_direction = direction;
        }
        self
    }

    /// Restricts every request to one scope (e.g. `vendor` counterparties)
    pub fn with_entity_filter(self, scope: impl Into<String>) -> Self {
        self.inner.borrow_mut().entity_filter = Some(scope.into());
        self
    }

    pub fn with_filter(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner
            .borrow_mut()
            .filters
            .insert(field.into(), value.into());
        self
    }

    // ------------------------------------------------------------------
    // Observable state
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> ListSnapshot<T> {
        self.inner.borrow().snapshot.clone()
    }

    pub fn records(&self) -> Vec<T> {
        self.inner.borrow().snapshot.records.clone()
    }

    pub fn pagination(&self) -> Pagination {
        self.inner.borrow().snapshot.pagination
    }

    pub fn is_loading(&self) -> bool {
        self.inner.borrow().snapshot.loading
    }

    /// Called after every state transition with the new snapshot
    pub fn subscribe(&self, observer: impl Fn(&ListSnapshot<T>) + 'static) {
        self.inner.borrow_mut().observers.push(Rc::new(observer));
    }

    /// Marks the owning view as gone: pending responses are dropped and no
    /// further notifications are sent.
    pub fn dispose(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.disposed = true;
        inner.observers.clear();
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().disposed
    }

    // ------------------------------------------------------------------
    // Lifecycle & fetching
    // ------------------------------------------------------------------

    /// Called once by the owning view. Non-empty `initial_records` seed the
    /// list without a request; otherwise the first page is fetched.
    pub async fn initialize(&self, initial_records: Vec<T>) -> Result<FetchOutcome, ListError> {
        let seeded = !initial_records.is_empty();
        {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            if inner.disposed {
                return Ok(FetchOutcome::Disposed);
            }
            if inner.initialized {
                return Ok(FetchOutcome::Skipped);
            }
            inner.initialized = true;

            if seeded {
                inner.snapshot.pagination.current = 1;
                inner.snapshot.pagination.total = initial_records.len() as u64;
                inner.cache = initial_records.clone();
                inner.snapshot.records = initial_records;
            }
        }

        if seeded {
            self.emit();
            Ok(FetchOutcome::Seeded)
        } else {
            self.fetch_page(FetchParams::default()).await
        }
    }

    /// Fetches one page. On failure the previous state is kept, the error is
    /// reported through the notifier and returned to the caller.
    pub async fn fetch_page(&self, params: FetchParams) -> Result<FetchOutcome, ListError> {
        let (token, query) = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return Ok(FetchOutcome::Disposed);
            }
            inner.latest_request += 1;
            inner.in_flight += 1;
            inner.snapshot.loading = true;
            let query = inner.resolve_query(params);
            (inner.latest_request, query)
        };
        self.emit();

        log::debug!(
            "list fetch #{}: page={} size={} sort={:?} {}",
            token,
            query.page,
            query.page_size,
            query.sort_by,
            query.sort_direction.as_str()
        );
        let result = self.source.fetch_page(&query).await;

        let outcome = {
            let mut inner = self.inner.borrow_mut();
            inner.in_flight = inner.in_flight.saturating_sub(1);
            inner.snapshot.loading = inner.in_flight > 0;

            if inner.disposed {
                log::debug!("list fetch #{} finished after dispose", token);
                return result.map(|_| FetchOutcome::Disposed);
            }

            match result {
                Ok(page) if token == inner.latest_request => {
                    inner.apply_page(page, &query);
                    Ok(FetchOutcome::Applied)
                }
                Ok(_) => {
                    log::debug!(
                        "list fetch #{} superseded by #{}",
                        token,
                        inner.latest_request
                    );
                    Ok(FetchOutcome::Superseded)
                }
                // ответ устаревшего запроса не показываем, даже если это ошибка
                Err(e) if token != inner.latest_request => {
                    log::warn!(
                        "list fetch #{} failed after being superseded by #{}: {}",
                        token,
                        inner.latest_request,
                        e
                    );
                    Ok(FetchOutcome::Superseded)
                }
                Err(e) => Err(e),
            }
        };
        self.emit();

        if let Err(e) = &outcome {
            log::error!("list fetch #{} failed: {}", token, e);
            self.report(NoticeKind::Error, &e.to_string());
        }
        outcome
    }

    /// Re-fetches the current page with the current sort
    pub async fn refresh(&self) -> Result<FetchOutcome, ListError> {
        self.fetch_page(FetchParams::default()).await
    }

    /// `index` is the zero-based page index used by the pagination controls
    pub async fn change_page(&self, index: usize) -> Result<FetchOutcome, ListError> {
        self.fetch_page(FetchParams::default().page((index as u64).saturating_add(1)))
            .await
    }

    /// Raw UI value; non-numeric input is ignored
    pub async fn change_page_input(&self, raw: &str) -> Result<FetchOutcome, ListError> {
        match raw.trim().parse::<usize>() {
            Ok(index) => self.change_page(index).await,
            Err(_) => Ok(FetchOutcome::Skipped),
        }
    }

    /// Always returns to the first page
    pub async fn change_page_size(&self, size: u64) -> Result<FetchOutcome, ListError> {
        if size == 0 {
            return Ok(FetchOutcome::Skipped);
        }
        self.fetch_page(FetchParams::default().page(1).page_size(size))
            .await
    }

    pub async fn change_page_size_input(&self, raw: &str) -> Result<FetchOutcome, ListError> {
        match raw.trim().parse::<u64>() {
            Ok(size) => self.change_page_size(size).await,
            Err(_) => Ok(FetchOutcome::Skipped),
        }
    }

    /// Same column without an explicit direction flips the direction, a new
    /// column starts ascending. Returns to the first page.
    pub async fn request_sort(
        &self,
        column: &str,
        explicit_direction: Option<SortDirection>,
    ) -> Result<FetchOutcome, ListError> {
        let direction = {
            let inner = self.inner.borrow();
            match explicit_direction {
                Some(direction) => direction,
                None if inner.snapshot.sort_by.as_deref() == Some(column) => {
                    inner.snapshot.sort_direction.toggled()
                }
                None => SortDirection::Asc,
            }
        };
        self.fetch_page(FetchParams::default().page(1).sort(column, direction))
            .await
    }

    // ------------------------------------------------------------------
    // Local search
    // ------------------------------------------------------------------

    /// Filters the cached page. Returns `false` when nothing changed (same
    /// term as the active one, or disposed).
    ///
    /// Only the records of the last fetched page are searched.
    pub fn search(&self, term: &str) -> bool {
        {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            if inner.disposed || inner.snapshot.search_term == term {
                return false;
            }

            inner.snapshot.searching = true;
            inner.snapshot.search_term = term.to_string();

            let needle = term.trim();
            if needle.is_empty() {
                inner.snapshot.records = inner.cache.clone();
                inner.snapshot.pagination.total = inner.cache.len() as u64;
            } else {
                let filtered = filter_records(&inner.cache, needle);
                inner.snapshot.pagination.total = filtered.len() as u64;
                inner.snapshot.pagination.current = 1;
                inner.snapshot.records = filtered;
            }
            inner.snapshot.searching = false;
        }
        self.emit();
        true
    }

    // ------------------------------------------------------------------
    // Row actions
    // ------------------------------------------------------------------

    pub async fn delete(&self, id: &str) -> Result<(), ListError> {
        let result = match self.actions("Delete") {
            Ok(actions) => actions.delete(id).await,
            Err(e) => Err(e),
        };
        self.complete_action(result, "Record deleted").await
    }

    pub async fn convert(&self, id: &str) -> Result<(), ListError> {
        let result = match self.actions("Convert") {
            Ok(actions) => actions.convert(id).await,
            Err(e) => Err(e),
        };
        self.complete_action(result, "Record converted").await
    }

    pub async fn clone_record(&self, id: &str) -> Result<T, ListError> {
        let result = match self.actions("Clone") {
            Ok(actions) => actions.clone_entity(id).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(record) => {
                self.report(NoticeKind::Success, "Record cloned");
                self.refresh_after_action().await;
                Ok(record)
            }
            Err(e) => {
                self.report(NoticeKind::Error, &e.to_string());
                Err(e)
            }
        }
    }

    pub async fn print_url(&self, id: &str) -> Result<String, ListError> {
        let result = match self.actions("Print") {
            Ok(actions) => actions.print_url(id).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            self.report(NoticeKind::Error, &e.to_string());
        }
        result
    }

    fn actions(&self, operation: &'static str) -> Result<Rc<dyn EntityActions<T>>, ListError> {
        self.actions
            .clone()
            .ok_or(ListError::Unsupported(operation))
    }

    async fn complete_action(
        &self,
        result: Result<ActionResponse, ListError>,
        done: &str,
    ) -> Result<(), ListError> {
        let result = result.and_then(|response| {
            if response.success {
                Ok(response.message.unwrap_or_else(|| done.to_string()))
            } else {
                Err(ListError::Rejected(
                    response
                        .message
                        .unwrap_or_else(|| "The server rejected the action".to_string()),
                ))
            }
        });

        match result {
            Ok(message) => {
                self.report(NoticeKind::Success, &message);
                self.refresh_after_action().await;
                Ok(())
            }
            Err(e) => {
                log::warn!("list action failed: {}", e);
                self.report(NoticeKind::Error, &e.to_string());
                Err(e)
            }
        }
    }

    async fn refresh_after_action(&self) {
        if self.is_disposed() {
            return;
        }
        // failures are already reported by fetch_page
        if let Err(e) = self.refresh().await {
            log::warn!("refresh after action failed: {}", e);
        }
    }

    fn report(&self, kind: NoticeKind, message: &str) {
        if !self.is_disposed() {
            self.notifier.notify(kind, message);
        }
    }

    fn emit(&self) {
        let (snapshot, observers) = {
            let inner = self.inner.borrow();
            if inner.disposed || inner.observers.is_empty() {
                return;
            }
            (inner.snapshot.clone(), inner.observers.clone())
        };
        for observer in observers {
            observer(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use contracts::domain::a001_purchase_order::aggregate::PurchaseOrder;
    use contracts::domain::common::DocumentStatus;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::Cell;
    use std::collections::VecDeque;

    type PageResult = Result<PaginatedResponse<PurchaseOrder>, ListError>;

    fn order(id: &str, number: &str, vendor: &str) -> PurchaseOrder {
        PurchaseOrder {
            id: id.to_string(),
            purchase_order_id: number.to_string(),
            vendor_name: vendor.to_string(),
            vendor_phone: None,
            order_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            expected_date: None,
            status: DocumentStatus::Approved,
            lines: Vec::new(),
            total_amount: 100.0,
            notes: None,
        }
    }

    /// Ten orders, three of them from an "Acme" vendor
    fn ten_orders() -> Vec<PurchaseOrder> {
        (0..10)
            .map(|i| {
                let vendor = if i % 3 == 0 && i > 0 {
                    "Acme Supplies"
                } else {
                    "Northwind Traders"
                };
                order(&format!("id-{}", i), &format!("PO-{}", 1000 + i), vendor)
            })
            .collect()
    }

    fn page(records: Vec<PurchaseOrder>, current: u64, page_size: u64, total: u64) -> PageResult {
        Ok(PaginatedResponse {
            records,
            pagination: Pagination {
                current,
                page_size,
                total,
            },
        })
    }

    #[derive(Default)]
    struct FakeBackend {
        pages: RefCell<VecDeque<PageResult>>,
        queries: RefCell<Vec<ListQuery>>,
        actions: RefCell<VecDeque<Result<ActionResponse, ListError>>>,
    }

    impl FakeBackend {
        fn queue(&self, result: PageResult) {
            self.pages.borrow_mut().push_back(result);
        }

        fn queue_action(&self, result: Result<ActionResponse, ListError>) {
            self.actions.borrow_mut().push_back(result);
        }

        fn last_query(&self) -> ListQuery {
            self.queries.borrow().last().cloned().expect("no request made")
        }

        fn request_count(&self) -> usize {
            self.queries.borrow().len()
        }

        fn next_action(&self) -> Result<ActionResponse, ListError> {
            self.actions
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ListError::Transport("no action queued".to_string())))
        }
    }

    #[async_trait(?Send)]
    impl ListSource<PurchaseOrder> for FakeBackend {
        async fn fetch_page(&self, query: &ListQuery) -> PageResult {
            self.queries.borrow_mut().push(query.clone());
            self.pages
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ListError::Transport("no page queued".to_string())))
        }
    }

    #[async_trait(?Send)]
    impl EntityActions<PurchaseOrder> for FakeBackend {
        async fn delete(&self, _id: &str) -> Result<ActionResponse, ListError> {
            self.next_action()
        }

        async fn clone_entity(&self, id: &str) -> Result<PurchaseOrder, ListError> {
            self.next_action()
                .map(|_| order(&format!("{}-copy", id), "PO-2000", "Acme Supplies"))
        }

        async fn convert(&self, _id: &str) -> Result<ActionResponse, ListError> {
            self.next_action()
        }

        async fn print_url(&self, id: &str) -> Result<String, ListError> {
            Ok(format!("/api/purchase_orders/{}/document", id))
        }
    }

    /// Source whose responses are released by the test, one channel per request
    #[derive(Default)]
    struct GatedSource {
        gates: RefCell<VecDeque<oneshot::Receiver<PageResult>>>,
    }

    impl GatedSource {
        fn gate(&self) -> oneshot::Sender<PageResult> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().push_back(rx);
            tx
        }
    }

    #[async_trait(?Send)]
    impl ListSource<PurchaseOrder> for GatedSource {
        async fn fetch_page(&self, _query: &ListQuery) -> PageResult {
            let rx = self.gates.borrow_mut().pop_front().expect("no gate prepared");
            rx.await
                .unwrap_or_else(|_| Err(ListError::Transport("gate dropped".to_string())))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<(NoticeKind, String)>>,
    }

    impl RecordingNotifier {
        fn errors(&self) -> Vec<String> {
            self.notices
                .borrow()
                .iter()
                .filter(|(kind, _)| *kind == NoticeKind::Error)
                .map(|(_, message)| message.clone())
                .collect()
        }

        fn successes(&self) -> Vec<String> {
            self.notices
                .borrow()
                .iter()
                .filter(|(kind, _)| *kind == NoticeKind::Success)
                .map(|(_, message)| message.clone())
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: NoticeKind, message: &str) {
            self.notices.borrow_mut().push((kind, message.to_string()));
        }
    }

    fn setup() -> (
        ListController<PurchaseOrder>,
        Rc<FakeBackend>,
        Rc<RecordingNotifier>,
    ) {
        let backend = Rc::new(FakeBackend::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let controller = ListController::new(backend.clone(), notifier.clone())
            .with_actions(backend.clone());
        (controller, backend, notifier)
    }

    fn transitions(controller: &ListController<PurchaseOrder>) -> Rc<Cell<usize>> {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        controller.subscribe(move |_| counter.set(counter.get() + 1));
        count
    }

    #[test]
    fn test_repeated_search_is_noop() {
        let (controller, backend, _) = setup();
        block_on(controller.initialize(ten_orders())).unwrap();
        let count = transitions(&controller);

        assert!(controller.search("acme"));
        assert!(!controller.search("acme"));

        assert_eq!(count.get(), 1);
        assert_eq!(backend.request_count(), 0);
    }

    #[test]
    fn test_empty_search_restores_cached_page() {
        let (controller, backend, _) = setup();
        backend.queue(page(ten_orders(), 1, 10, 25));
        block_on(controller.initialize(Vec::new())).unwrap();

        controller.search("acme");
        assert_eq!(controller.records().len(), 3);

        assert!(controller.search(""));
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.records, ten_orders());
        assert_eq!(snapshot.pagination.total, 10);
        assert_eq!(backend.request_count(), 1);
    }

    #[test]
    fn test_whitespace_search_restores_cached_page() {
        let (controller, _, _) = setup();
        block_on(controller.initialize(ten_orders())).unwrap();

        controller.search("acme");
        assert!(controller.search("   "));
        assert_eq!(controller.records().len(), 10);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let (controller, _, _) = setup();
        block_on(controller.initialize(ten_orders())).unwrap();

        controller.search("po-1002");
        let records = controller.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].purchase_order_id, "PO-1002");
    }

    #[test]
    fn test_search_filters_and_resets_to_first_page() {
        let (controller, backend, _) = setup();
        backend.queue(page(ten_orders(), 2, 10, 25));
        block_on(controller.fetch_page(FetchParams::default().page(2))).unwrap();
        assert_eq!(controller.pagination().current, 2);

        controller.search("acme");
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.records.len(), 3);
        assert_eq!(snapshot.pagination.total, 3);
        assert_eq!(snapshot.pagination.current, 1);
        assert!(!snapshot.searching);
    }

    #[test]
    fn test_sort_same_column_flips_direction() {
        let (controller, backend, _) = setup();
        let controller = controller.with_sort("date", SortDirection::Asc);
        backend.queue(page(ten_orders(), 3, 10, 25));
        block_on(controller.request_sort("date", None)).unwrap();

        let query = backend.last_query();
        assert_eq!(query.sort_by.as_deref(), Some("date"));
        assert_eq!(query.sort_direction, SortDirection::Desc);
        assert_eq!(query.page, 1);
        assert_eq!(controller.snapshot().sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_sort_new_column_starts_ascending() {
        let (controller, backend, _) = setup();
        let controller = controller.with_sort("date", SortDirection::Asc);
        backend.queue(page(ten_orders(), 1, 10, 25));
        block_on(controller.request_sort("amount", None)).unwrap();

        let query = backend.last_query();
        assert_eq!(query.sort_by.as_deref(), Some("amount"));
        assert_eq!(query.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_sort_explicit_direction_wins() {
        let (controller, backend, _) = setup();
        let controller = controller.with_sort("date", SortDirection::Desc);
        backend.queue(page(ten_orders(), 1, 10, 25));
        block_on(controller.request_sort("date", Some(SortDirection::Desc))).unwrap();

        assert_eq!(backend.last_query().sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_state() {
        let (controller, backend, notifier) = setup();
        backend.queue(page(ten_orders(), 1, 10, 25));
        block_on(controller.initialize(Vec::new())).unwrap();
        let before = controller.snapshot();

        backend.queue(Err(ListError::Transport("network down".to_string())));
        let result = block_on(controller.request_sort("vendorName", None));

        assert_eq!(
            result,
            Err(ListError::Transport("network down".to_string()))
        );
        let after = controller.snapshot();
        assert_eq!(after.records, before.records);
        assert_eq!(after.pagination, before.pagination);
        assert_eq!(after.sort_by, before.sort_by);
        assert_eq!(after.sort_direction, before.sort_direction);
        assert!(!after.loading);
        assert_eq!(notifier.errors(), vec!["network down".to_string()]);
    }

    #[test]
    fn test_loading_flag_is_cleared_after_fetch() {
        let (controller, backend, _) = setup();
        let seen_loading = Rc::new(Cell::new(false));
        let seen = seen_loading.clone();
        controller.subscribe(move |s| {
            if s.loading {
                seen.set(true);
            }
        });

        backend.queue(page(ten_orders(), 1, 10, 10));
        block_on(controller.refresh()).unwrap();

        assert!(seen_loading.get());
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_page_size_change_returns_to_first_page() {
        let (controller, backend, _) = setup();
        backend.queue(page(ten_orders(), 3, 10, 60));
        block_on(controller.change_page(2)).unwrap();
        assert_eq!(controller.pagination().current, 3);

        backend.queue(page(ten_orders(), 1, 25, 60));
        block_on(controller.change_page_size(25)).unwrap();

        let query = backend.last_query();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 25);
        assert_eq!(controller.pagination().current, 1);
    }

    #[test]
    fn test_zero_based_page_index() {
        let (controller, backend, _) = setup();
        backend.queue(page(ten_orders(), 2, 10, 25));
        block_on(controller.fetch_page(FetchParams::default().page(2))).unwrap();

        backend.queue(page(ten_orders(), 1, 10, 25));
        block_on(controller.change_page(0)).unwrap();
        assert_eq!(backend.last_query().page, 1);
    }

    #[test]
    fn test_non_numeric_page_input_is_ignored() {
        let (controller, backend, notifier) = setup();

        assert_eq!(
            block_on(controller.change_page_input("next")),
            Ok(FetchOutcome::Skipped)
        );
        assert_eq!(
            block_on(controller.change_page_size_input("all")),
            Ok(FetchOutcome::Skipped)
        );
        assert_eq!(
            block_on(controller.change_page_size_input("0")),
            Ok(FetchOutcome::Skipped)
        );
        assert_eq!(backend.request_count(), 0);
        assert!(notifier.errors().is_empty());

        backend.queue(page(ten_orders(), 2, 10, 25));
        block_on(controller.change_page_input(" 1 ")).unwrap();
        assert_eq!(backend.last_query().page, 2);
    }

    #[test]
    fn test_initialize_with_records_skips_fetch() {
        let (controller, backend, _) = setup();

        let outcome = block_on(controller.initialize(ten_orders())).unwrap();
        assert_eq!(outcome, FetchOutcome::Seeded);
        assert_eq!(backend.request_count(), 0);
        assert_eq!(controller.pagination().total, 10);

        let again = block_on(controller.initialize(Vec::new())).unwrap();
        assert_eq!(again, FetchOutcome::Skipped);
        assert_eq!(backend.request_count(), 0);
    }

    #[test]
    fn test_fetch_reapplies_active_search() {
        let (controller, backend, _) = setup();
        block_on(controller.initialize(ten_orders())).unwrap();
        controller.search("acme");

        backend.queue(page(ten_orders(), 2, 10, 25));
        block_on(controller.change_page(1)).unwrap();

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.search_term, "acme");
        assert_eq!(snapshot.records.len(), 3);
        assert_eq!(snapshot.pagination.total, 3);
        assert_eq!(snapshot.pagination.current, 2);
    }

    #[test]
    fn test_entity_scope_is_sent_with_every_request() {
        let backend = Rc::new(FakeBackend::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let controller = ListController::new(backend.clone(), notifier)
            .with_entity_filter("vendor")
            .with_filter("status", "approved")
            .with_page_size(50);

        backend.queue(page(Vec::new(), 1, 50, 0));
        block_on(controller.refresh()).unwrap();

        let query = backend.last_query();
        assert_eq!(query.entity_filter.as_deref(), Some("vendor"));
        assert_eq!(query.filters.get("status").map(String::as_str), Some("approved"));
        assert_eq!(query.page_size, 50);
    }

    #[test]
    fn test_superseded_response_is_discarded() {
        let source = Rc::new(GatedSource::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let controller: ListController<PurchaseOrder> =
            ListController::new(source.clone(), notifier);
        let first_gate = source.gate();
        let second_gate = source.gate();

        let outcomes = Rc::new(RefCell::new(Vec::new()));
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        // started one after another so the first request holds the first gate
        for page_no in [1u64, 2] {
            let controller = controller.clone();
            let outcomes = outcomes.clone();
            spawner
                .spawn_local(async move {
                    let outcome = controller
                        .fetch_page(FetchParams::default().page(page_no))
                        .await;
                    outcomes.borrow_mut().push((page_no, outcome));
                })
                .unwrap();
            pool.run_until_stalled();
        }
        assert!(controller.is_loading());

        let newer = vec![order("b", "PO-2000", "Beta")];
        second_gate.send(page(newer.clone(), 2, 10, 11)).unwrap();
        pool.run_until_stalled();
        assert!(controller.is_loading());

        first_gate
            .send(page(vec![order("a", "PO-1000", "Alpha")], 1, 10, 11))
            .unwrap();
        pool.run_until_stalled();

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.records, newer);
        assert_eq!(snapshot.pagination.current, 2);
        assert!(!snapshot.loading);
        assert_eq!(
            *outcomes.borrow(),
            vec![
                (2, Ok(FetchOutcome::Applied)),
                (1, Ok(FetchOutcome::Superseded)),
            ]
        );
    }

    #[test]
    fn test_superseded_failure_is_not_reported() {
        let source = Rc::new(GatedSource::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let controller: ListController<PurchaseOrder> =
            ListController::new(source.clone(), notifier.clone());
        let first_gate = source.gate();
        let second_gate = source.gate();

        let outcomes = Rc::new(RefCell::new(Vec::new()));
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        for page_no in [1u64, 2] {
            let controller = controller.clone();
            let outcomes = outcomes.clone();
            spawner
                .spawn_local(async move {
                    let outcome = controller
                        .fetch_page(FetchParams::default().page(page_no))
                        .await;
                    outcomes.borrow_mut().push((page_no, outcome));
                })
                .unwrap();
            pool.run_until_stalled();
        }

        let newer = vec![order("b", "PO-2000", "Beta")];
        second_gate.send(page(newer.clone(), 2, 10, 11)).unwrap();
        pool.run_until_stalled();

        first_gate
            .send(Err(ListError::Transport("timeout".to_string())))
            .unwrap();
        pool.run_until_stalled();

        assert_eq!(controller.records(), newer);
        assert!(!controller.is_loading());
        assert!(notifier.errors().is_empty());
        assert_eq!(
            *outcomes.borrow(),
            vec![
                (2, Ok(FetchOutcome::Applied)),
                (1, Ok(FetchOutcome::Superseded)),
            ]
        );
    }

    #[test]
    fn test_largest_page_index_does_not_overflow() {
        let (controller, backend, _) = setup();
        backend.queue(page(Vec::new(), 1, 10, 0));
        block_on(controller.change_page(usize::MAX)).unwrap();

        assert_eq!(
            backend.last_query().page,
            (usize::MAX as u64).saturating_add(1)
        );
    }

    #[test]
    fn test_dispose_drops_pending_response() {
        let source = Rc::new(GatedSource::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let controller: ListController<PurchaseOrder> =
            ListController::new(source.clone(), notifier.clone());
        let gate = source.gate();

        let mut pool = LocalPool::new();
        let task_controller = controller.clone();
        pool.spawner()
            .spawn_local(async move {
                let _ = task_controller.refresh().await;
            })
            .unwrap();
        pool.run_until_stalled();

        controller.dispose();
        gate.send(Err(ListError::Transport("late failure".to_string())))
            .unwrap();
        pool.run_until_stalled();

        assert!(controller.records().is_empty());
        assert!(notifier.notices.borrow().is_empty());
        assert!(!controller.search("anything"));
    }

    #[test]
    fn test_delete_success_refreshes_page() {
        let (controller, backend, notifier) = setup();
        backend.queue(page(ten_orders(), 1, 10, 10));
        block_on(controller.initialize(Vec::new())).unwrap();

        backend.queue_action(Ok(ActionResponse::ok("Purchase order deleted")));
        backend.queue(page(ten_orders()[1..].to_vec(), 1, 10, 9));
        block_on(controller.delete("id-0")).unwrap();

        assert_eq!(notifier.successes(), vec!["Purchase order deleted".to_string()]);
        assert_eq!(backend.request_count(), 2);
        assert_eq!(controller.pagination().total, 9);
    }

    #[test]
    fn test_rejected_action_keeps_state() {
        let (controller, backend, notifier) = setup();
        block_on(controller.initialize(ten_orders())).unwrap();
        let before = controller.snapshot();

        backend.queue_action(Ok(ActionResponse::failed("Quotation already converted")));
        let result = block_on(controller.convert("id-1"));

        assert_eq!(
            result,
            Err(ListError::Rejected("Quotation already converted".to_string()))
        );
        assert_eq!(controller.snapshot(), before);
        assert_eq!(
            notifier.errors(),
            vec!["Quotation already converted".to_string()]
        );
        assert_eq!(backend.request_count(), 0);
    }

    #[test]
    fn test_clone_returns_new_record() {
        let (controller, backend, notifier) = setup();
        block_on(controller.initialize(ten_orders())).unwrap();

        backend.queue_action(Ok(ActionResponse::ok("")));
        backend.queue(page(ten_orders(), 1, 10, 11));
        let cloned = block_on(controller.clone_record("id-3")).unwrap();

        assert_eq!(cloned.id, "id-3-copy");
        assert_eq!(notifier.successes(), vec!["Record cloned".to_string()]);
        assert_eq!(backend.request_count(), 1);
    }

    #[test]
    fn test_actions_without_port_are_unsupported() {
        let backend = Rc::new(FakeBackend::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let controller: ListController<PurchaseOrder> =
            ListController::new(backend, notifier.clone());

        let result = block_on(controller.print_url("id-1"));
        assert_eq!(result, Err(ListError::Unsupported("Print")));
        assert_eq!(
            notifier.errors(),
            vec!["Print is not available for this list".to_string()]
        );
    }

    #[test]
    fn test_print_url_is_returned() {
        let (controller, _, notifier) = setup();
        let url = block_on(controller.print_url("id-1")).unwrap();
        assert_eq!(url, "/api/purchase_orders/id-1/document");
        assert!(notifier.notices.borrow().is_empty());
    }
}
