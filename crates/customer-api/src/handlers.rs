//! Request handlers.

use crate::api_types::{CustomerProfileResponse, CustomerQuery, HealthResponse};
use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};

/// Service name reported by the health check.
pub const SERVICE_NAME: &str = "customer-server";

/// Handler for `GET /v1/customers`.
///
/// The `customer_id` query parameter is logged but does not change the
/// response. An unparseable query string is treated as absent.
pub async fn get_customer(
    query: Result<Query<CustomerQuery>, QueryRejection>,
) -> Json<CustomerProfileResponse> {
    let customer_id = match query {
        Ok(Query(params)) => params.customer_id,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring unparseable customer query");
            None
        }
    };

    tracing::info!(customer_id = ?customer_id, "Customer profile requested");

    Json(CustomerProfileResponse::current())
}

/// Handler for `GET /healthz`.
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: SERVICE_NAME.to_string(),
    })
}
