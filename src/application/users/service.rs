//! User management service: application-layer orchestration
//!
//! HTTP handlers stay thin and delegate here. Every repository outcome is
//! translated into an [`AppError`] carrying the status code, the inputs of
//! the failed operation (`context`) and the underlying error (`cause`).

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::{DomainError, NewUser, User, UserRepositoryInterface};
use crate::shared::{AppError, PageRequest};

/// Service over a type-erased repository, as stored in handler state.
pub type DynUserService = UserService<dyn UserRepositoryInterface>;

/// User service, generic over the repository so it stays decoupled from
/// the concrete persistence layer.
pub struct UserService<R: UserRepositoryInterface + ?Sized> {
    repo: Arc<R>,
}

impl<R: UserRepositoryInterface + ?Sized> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Persist a new user.
    pub async fn register_user(&self, user: NewUser) -> Result<User, AppError> {
        let context = json!(user);
        let created = self.repo.create_user(user).await.map_err(|e| match e {
            DomainError::Conflict(_) => AppError::conflict("User already exists")
                .with_context(context.clone())
                .with_cause(&e),
            _ => AppError::internal("An error occurred when registering a user")
                .with_context(context.clone())
                .with_cause(&e),
        })?;

        info!(user_id = %created.id, "New user registered");
        Ok(created)
    }

    /// One page of users plus the total number of users.
    ///
    /// An empty table is not an error: the page is simply empty.
    pub async fn retrieve_and_count_users(
        &self,
        request: PageRequest,
    ) -> Result<(Vec<User>, u64), AppError> {
        let (users, total) = self.repo.read_and_count_users(request).await.map_err(|e| {
            AppError::internal("An error occurred when reading and counting users")
                .with_context(json!({ "page": request.page, "limit": request.limit }))
                .with_cause(e)
        })?;

        debug!(page = request.page, limit = request.limit, total, "Users retrieved");
        Ok((users, total))
    }

    pub async fn retrieve_user(&self, user_id: &str) -> Result<User, AppError> {
        let user = self.repo.read_user(user_id).await.map_err(|e| {
            AppError::internal("An error occurred when retrieving a user")
                .with_context(json!({ "userId": user_id }))
                .with_cause(e)
        })?;

        user.ok_or_else(|| user_not_found(json!({ "userId": user_id })))
    }

    /// Replace name and email of an existing user.
    pub async fn replace_user(&self, user_id: &str, user: NewUser) -> Result<User, AppError> {
        let context = json!({ "userId": user_id, "user": user });
        let replaced = self.repo.update_user(user_id, user).await.map_err(|e| match e {
            DomainError::Conflict(_) => AppError::conflict("User already exists")
                .with_context(context.clone())
                .with_cause(&e),
            _ => AppError::internal("An error occurred when replacing a user")
                .with_context(context.clone())
                .with_cause(&e),
        })?;

        let replaced = replaced.ok_or_else(|| user_not_found(context))?;
        info!(user_id = %replaced.id, "User replaced");
        Ok(replaced)
    }

    /// Delete a user and return what was removed.
    pub async fn remove_user(&self, user_id: &str) -> Result<User, AppError> {
        let removed = self.repo.delete_user(user_id).await.map_err(|e| {
            AppError::internal("An error occurred when removing a user")
                .with_context(json!({ "userId": user_id }))
                .with_cause(e)
        })?;

        let removed = removed.ok_or_else(|| user_not_found(json!({ "userId": user_id })))?;
        info!(user_id = %removed.id, "User removed");
        Ok(removed)
    }
}

fn user_not_found(context: serde_json::Value) -> AppError {
    AppError::not_found("User not found").with_context(context)
}
