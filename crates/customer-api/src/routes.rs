//! Route definitions.

use crate::handlers;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Path of the customer resource.
pub const CUSTOMERS_PATH: &str = "/v1/customers";

/// Path of the health check.
pub const HEALTH_PATH: &str = "/healthz";

/// Create the application router.
///
/// Only `GET` is registered on each path; other methods are answered by the
/// router with `405 Method Not Allowed`.
pub fn create_router() -> Router {
    Router::new()
        .route(CUSTOMERS_PATH, get(handlers::get_customer))
        .route(HEALTH_PATH, get(handlers::healthz))
        .layer(TraceLayer::new_for_http())
}
