//! Health probe port

use async_trait::async_trait;

use crate::shared::DomainResult;

/// Checks that a backing dependency answers.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn is_alive(&self) -> DomainResult<bool>;
}
