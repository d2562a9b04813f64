//! # Users Service
//!
//! CRUD REST service for users with page/limit pagination.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **shared**: Pagination core, error types, shutdown signalling
//! - **domain**: Core business entities and the ports they are stored through
//! - **application**: Use cases orchestrating the domain ports
//! - **infrastructure**: Database connection, SeaORM entities, migrations, repositories
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::create_api_router;

// Re-export the pagination core
pub use shared::{Page, PageRequest};
