//! Users module: user management use-cases
//!
//! Contains the `UserService` which orchestrates registration, paginated
//! listing, lookup, replacement and removal of users.

pub mod service;

pub use service::{DynUserService, UserService};
