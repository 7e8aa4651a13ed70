use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

pub struct HealthApi;

impl HealthApi {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Reports that the catalog service is up, for probes and load balancers.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
