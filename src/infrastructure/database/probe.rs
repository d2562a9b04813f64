//! Database liveness probe

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

use crate::domain::{DomainError, DomainResult, HealthProbe};

/// Answers `true` when `SELECT 1` succeeds on the pool.
pub struct SeaOrmHealthProbe {
    db: DatabaseConnection,
}

impl SeaOrmHealthProbe {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthProbe for SeaOrmHealthProbe {
    async fn is_alive(&self) -> DomainResult<bool> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await
            .map_err(|e| DomainError::Probe(e.to_string()))?;
        Ok(true)
    }
}
