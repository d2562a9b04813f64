use async_trait::async_trait;

use super::{NewUser, User};
use crate::shared::{DomainResult, PageRequest};

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    async fn create_user(&self, user: NewUser) -> DomainResult<User>;

    /// One page of users, newest first, together with the total row count.
    async fn read_and_count_users(&self, request: PageRequest) -> DomainResult<(Vec<User>, u64)>;
    async fn read_user(&self, id: &str) -> DomainResult<Option<User>>;

    async fn update_user(&self, id: &str, user: NewUser) -> DomainResult<Option<User>>;
    /// Delete and return the removed row, `None` if it did not exist.
    async fn delete_user(&self, id: &str) -> DomainResult<Option<User>>;
}
