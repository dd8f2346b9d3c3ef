//! # customer-api
//!
//! Customer profile HTTP endpoint.
//!
//! Serves a single resource, `GET /v1/customers`, which always answers with
//! the same profile and loyalty metric:
//!
//! ```json
//! {"data":{"profile":{"customer_id":"1","name":"Alice"},"metrics":{"loyaltyScore":100}}}
//! ```
//!
//! A `customer_id` query parameter is accepted and logged but does not select
//! a different profile. `GET /healthz` is provided for process supervision.

pub mod api_types;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use api_types::CustomerProfileResponse;
pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use server::CustomerServer;
