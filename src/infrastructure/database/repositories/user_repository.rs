use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};

use crate::domain::{DomainError, DomainResult, NewUser, User, UserRepositoryInterface};
use crate::infrastructure::database::entities::user;
use crate::shared::PageRequest;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

/// Unique-email violations become conflicts, everything else stays a
/// database error.
fn write_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => DomainError::Conflict(detail),
        _ => DomainError::Database(e),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn create_user(&self, new_user: NewUser) -> DomainResult<User> {
        let model = user::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(new_user.name),
            email: Set(new_user.email),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        let inserted = model.insert(&self.db).await.map_err(write_err)?;
        Ok(user_model_to_domain(inserted))
    }

    async fn read_and_count_users(&self, request: PageRequest) -> DomainResult<(Vec<User>, u64)> {
        let total = user::Entity::find().count(&self.db).await?;

        let models = user::Entity::find()
            .order_by_desc(user::Column::CreatedAt)
            .order_by_asc(user::Column::Id)
            .offset(request.offset())
            .limit(u64::from(request.limit))
            .all(&self.db)
            .await?;

        let users = models.into_iter().map(user_model_to_domain).collect();
        Ok((users, total))
    }

    async fn read_user(&self, id: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(user_model_to_domain))
    }

    async fn update_user(&self, id: &str, replacement: NewUser) -> DomainResult<Option<User>> {
        let existing = user::Entity::find_by_id(id).one(&self.db).await?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: user::ActiveModel = existing.into();
        active.name = Set(replacement.name);
        active.email = Set(replacement.email);
        active.updated_at = Set(Some(Utc::now()));

        let updated = active.update(&self.db).await.map_err(write_err)?;
        Ok(Some(user_model_to_domain(updated)))
    }

    async fn delete_user(&self, id: &str) -> DomainResult<Option<User>> {
        let txn = self.db.begin().await?;

        let Some(existing) = user::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        user::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(Some(user_model_to_domain(existing)))
    }
}
