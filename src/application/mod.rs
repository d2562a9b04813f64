//! Application layer: use-cases orchestrating domain ports.

pub mod health;
pub mod users;

pub use health::HealthCheckService;
pub use users::{DynUserService, UserService};
