use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::{handlers, system};

/// Configure all application routes
///
/// With `static_dir`, any non-API path is served from the built frontend.
pub fn configure_routes(static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let router = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/models", get(handlers::a001_llm_model::list_all));

    let router = match static_dir {
        Some(dir) => {
            tracing::info!("Serving static files from: {}", dir.display());
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    };

    router
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}
