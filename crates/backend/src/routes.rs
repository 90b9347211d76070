use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DOCUMENT COLLECTIONS (a001-a009)
        // ========================================
        .route("/api/:collection/list", get(handlers::documents::list))
        .route(
            "/api/:collection/:id",
            get(handlers::documents::get_by_id).delete(handlers::documents::delete),
        )
        .route(
            "/api/:collection/:id/clone",
            post(handlers::documents::clone_document),
        )
        .route(
            "/api/:collection/:id/convert",
            post(handlers::documents::convert),
        )
        .route("/api/:collection/:id/print", get(handlers::documents::print))
        .route(
            "/api/:collection/:id/document",
            get(handlers::documents::document_view),
        )
}
