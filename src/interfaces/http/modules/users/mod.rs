//! Users module: CRUD plus paginated listing

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
