use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::shared::list::{ActionResponse, ListQuery, PaginatedResponse, PrintResponse};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::domain::documents::{service, DocumentError};
use crate::shared::data::db::get_connection;

/// Maps a service failure to a status code; unexpected errors are logged
fn error_status(action: &str, collection: &str, error: &anyhow::Error) -> StatusCode {
    match error.downcast_ref::<DocumentError>() {
        Some(DocumentError::UnknownCollection(_)) | Some(DocumentError::NotFound { .. }) => {
            tracing::warn!("{} {}: {}", action, collection, error);
            StatusCode::NOT_FOUND
        }
        _ => {
            tracing::error!("Failed to {} {}: {}", action, collection, error);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn connection(action: &str, collection: &str) -> Result<&'static DatabaseConnection, StatusCode> {
    get_connection().map_err(|e| error_status(action, collection, &e))
}

/// Rejected conversions are a normal outcome: `{success: false, message}`
fn rejection(error: &anyhow::Error) -> Option<ActionResponse> {
    error
        .downcast_ref::<DocumentError>()
        .filter(|e| e.is_rejection())
        .map(|e| ActionResponse::failed(e.to_string()))
}

/// GET /api/:collection/list
pub async fn list(
    Path(collection): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<PaginatedResponse<Value>>, StatusCode> {
    let query = ListQuery::from_pairs(params);
    let db = connection("list", &collection)?;
    service::list(db, &collection, &query)
        .await
        .map(Json)
        .map_err(|e| error_status("list", &collection, &e))
}

/// GET /api/:collection/:id
pub async fn get_by_id(
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    let db = connection("get", &collection)?;
    service::get_by_id(db, &collection, &id)
        .await
        .map(Json)
        .map_err(|e| error_status("get", &collection, &e))
}

/// DELETE /api/:collection/:id
pub async fn delete(
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<ActionResponse>, StatusCode> {
    let db = connection("delete", &collection)?;
    service::delete(db, &collection, &id)
        .await
        .map(Json)
        .map_err(|e| error_status("delete", &collection, &e))
}

/// POST /api/:collection/:id/clone
pub async fn clone_document(
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    let db = connection("clone", &collection)?;
    service::clone_document(db, &collection, &id)
        .await
        .map(Json)
        .map_err(|e| error_status("clone", &collection, &e))
}

/// POST /api/:collection/:id/convert
pub async fn convert(
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<ActionResponse>, StatusCode> {
    let db = connection("convert", &collection)?;
    match service::convert(db, &collection, &id).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => match rejection(&e) {
            Some(response) => {
                tracing::info!("Conversion of {} {} rejected: {}", collection, id, e);
                Ok(Json(response))
            }
            None => Err(error_status("convert", &collection, &e)),
        },
    }
}

/// GET /api/:collection/:id/print
pub async fn print(
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<PrintResponse>, StatusCode> {
    let db = connection("print", &collection)?;
    service::print(db, &collection, &id)
        .await
        .map(Json)
        .map_err(|e| error_status("print", &collection, &e))
}

/// GET /api/:collection/:id/document
pub async fn document_view(
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    let db = connection("render", &collection)?;
    service::document_view(db, &collection, &id)
        .await
        .map(Json)
        .map_err(|e| error_status("render", &collection, &e))
}
