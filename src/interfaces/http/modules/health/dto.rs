use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service health response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponse {
    /// `true` when the database answered
    pub healthy: bool,
}
