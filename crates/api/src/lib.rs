//! HTTP server for the synthetic health feed.
//!
//! Serves freshly generated health records at `GET /api/health`, rejects
//! every other method on that path with a JSON 405, and carries the usual
//! liveness and Prometheus endpoints alongside.
//!
//! No CORS layer is installed: `OPTIONS` on the record endpoint gets the
//! same 405 as every other non-GET method.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

/// Path of the health record endpoint.
pub const HEALTH_RECORD_PATH: &str = "/api/health";

/// Creates the Axum application router with all routes.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::status::metrics))
        .with_state(metrics_handle);

    // HEAD is routed explicitly; axum would otherwise answer it with the GET handler.
    let records = get(routes::records::get)
        .head(routes::records::method_not_allowed)
        .options(routes::records::method_not_allowed)
        .fallback(routes::records::method_not_allowed);

    Router::new()
        .route("/health", get(routes::status::liveness))
        .route(HEALTH_RECORD_PATH, records)
        .merge(metrics_router)
        .layer(TraceLayer::new_for_http())
}
