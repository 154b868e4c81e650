// LogTriage - api/router.rs
//
// HTTP router composition.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{analyze_handler, health_handler, index_handler};
use crate::util::constants;

/// Build the complete application router.
///
/// Stateless: the classifier is pure and its pattern tables are
/// process-wide constants, so no shared state is threaded through.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .layer(DefaultBodyLimit::max(constants::MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
