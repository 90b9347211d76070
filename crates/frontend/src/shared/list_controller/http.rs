use std::marker::PhantomData;
use std::rc::Rc;

use async_trait::async_trait;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list::{
    ActionResponse, ListQuery, PaginatedResponse, PrintResponse, Searchable,
};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

use super::controller::ListController;
use super::error::ListError;
use super::ports::{EntityActions, ListSource, Notifier};
use crate::shared::api_utils::{absolute_url, api_base};

/// REST adapter for one collection: `{base}/api/{collection}/...`
pub struct HttpListSource<T> {
    base: String,
    collection: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> HttpListSource<T> {
    pub fn with_base(base: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            collection: collection.into(),
            _record: PhantomData,
        }
    }

    /// Uses the API base derived from the browser location
    pub fn new(collection: impl Into<String>) -> Self {
        Self::with_base(api_base(), collection)
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/api/{}",
            self.base.trim_end_matches('/'),
            self.collection
        )
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id))
    }

    pub fn list_url(&self, query: &ListQuery) -> String {
        let params = query
            .to_pairs()
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/list?{}", self.collection_url(), params)
    }
}

impl<T: AggregateRoot> HttpListSource<T> {
    pub fn for_aggregate() -> Self {
        Self::new(T::collection_name())
    }
}

async fn read_json<R: DeserializeOwned>(request: RequestBuilder) -> Result<R, ListError> {
    let response = request
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(|e| ListError::Transport(format!("Network error: {}", e)))?;

    if !response.ok() {
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status_text
        } else {
            body
        };
        return Err(ListError::Status { status, message });
    }

    response
        .json::<R>()
        .await
        .map_err(|e| ListError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl<T> ListSource<T> for HttpListSource<T>
where
    T: DeserializeOwned + 'static,
{
    async fn fetch_page(&self, query: &ListQuery) -> Result<PaginatedResponse<T>, ListError> {
        read_json(Request::get(&self.list_url(query))).await
    }
}

#[async_trait(?Send)]
impl<T> EntityActions<T> for HttpListSource<T>
where
    T: DeserializeOwned + 'static,
{
    async fn delete(&self, id: &str) -> Result<ActionResponse, ListError> {
        read_json(Request::delete(&self.record_url(id))).await
    }

    async fn clone_entity(&self, id: &str) -> Result<T, ListError> {
        read_json(Request::post(&format!("{}/clone", self.record_url(id)))).await
    }

    async fn convert(&self, id: &str) -> Result<ActionResponse, ListError> {
        read_json(Request::post(&format!("{}/convert", self.record_url(id)))).await
    }

    async fn print_url(&self, id: &str) -> Result<String, ListError> {
        let response: PrintResponse =
            read_json(Request::get(&format!("{}/print", self.record_url(id)))).await?;
        Ok(absolute_url(&self.base, &response.url))
    }
}

/// Controller wired to the REST collection of `T`
pub fn http_controller<T>(notifier: Rc<dyn Notifier>) -> ListController<T>
where
    T: AggregateRoot + Searchable + Clone + DeserializeOwned + 'static,
{
    let source = Rc::new(HttpListSource::<T>::for_aggregate());
    ListController::new(source.clone(), notifier).with_actions(source)
}
