//! API request and response types.
//!
//! Field names are part of the wire contract and are serialized verbatim,
//! including the camel-cased `loyaltyScore`. Struct field order fixes the key
//! order of the emitted JSON.

use serde::{Deserialize, Serialize};

/// Identifier reported for every profile lookup.
pub const CUSTOMER_ID: &str = "1";

/// Display name reported for every profile lookup.
pub const CUSTOMER_NAME: &str = "Alice";

/// Loyalty score reported for every profile lookup.
pub const LOYALTY_SCORE: i64 = 100;

// =============================================================================
// Customer Profile
// =============================================================================

/// Response for `GET /v1/customers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfileResponse {
    /// The `data` envelope.
    pub data: CustomerData,
}

/// Contents of the `data` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerData {
    pub profile: Profile,
    pub metrics: Metrics,
}

/// Customer identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub customer_id: String,
    pub name: String,
}

/// Customer metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(rename = "loyaltyScore")]
    pub loyalty_score: i64,
}

impl CustomerProfileResponse {
    /// Build the profile served for every request.
    pub fn current() -> Self {
        Self {
            data: CustomerData {
                profile: Profile {
                    customer_id: CUSTOMER_ID.to_string(),
                    name: CUSTOMER_NAME.to_string(),
                },
                metrics: Metrics {
                    loyalty_score: LOYALTY_SCORE,
                },
            },
        }
    }
}

/// Query parameters accepted by `GET /v1/customers`.
///
/// `customer_id` is read for diagnostics only and does not select a profile.
#[derive(Debug, Default, Deserialize)]
pub struct CustomerQuery {
    pub customer_id: Option<String>,
}

// =============================================================================
// Health
// =============================================================================

/// Response for `GET /healthz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: String,
}
