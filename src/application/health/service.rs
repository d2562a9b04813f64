//! Health check service

use std::sync::Arc;

use tracing::warn;

use crate::domain::HealthProbe;
use crate::shared::AppError;

/// Reports whether the service can reach its database.
pub struct HealthCheckService {
    probe: Arc<dyn HealthProbe>,
}

impl HealthCheckService {
    pub fn new(probe: Arc<dyn HealthProbe>) -> Self {
        Self { probe }
    }

    pub async fn check_health(&self) -> Result<bool, AppError> {
        self.probe.is_alive().await.map_err(|e| {
            warn!("Health probe failed: {}", e);
            AppError::internal("An error occurred when checking if application is healthy")
                .with_context("unknown")
                .with_cause(e)
        })
    }
}
