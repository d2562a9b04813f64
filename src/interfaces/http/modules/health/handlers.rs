//! Health check handler

use std::sync::Arc;

use axum::{extract::State, Json};

use super::dto::HealthCheckResponse;
use crate::application::HealthCheckService;
use crate::interfaces::http::common::ErrorResponse;
use crate::shared::AppError;

/// Health check state
#[derive(Clone)]
pub struct HealthState {
    pub health_service: Arc<HealthCheckService>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Database reachability", body = HealthCheckResponse),
        (status = 500, description = "Health probe failed", body = ErrorResponse)
    )
)]
pub async fn health_check(
    State(state): State<HealthState>,
) -> Result<Json<HealthCheckResponse>, AppError> {
    let healthy = state.health_service.check_health().await?;
    Ok(Json(HealthCheckResponse { healthy }))
}
