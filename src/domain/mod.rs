//! Domain layer: entities and the ports the application layer depends on.

pub mod health;
pub mod user;

pub use health::HealthProbe;
pub use user::{NewUser, User, UserRepositoryInterface};

pub use crate::shared::{DomainError, DomainResult};
