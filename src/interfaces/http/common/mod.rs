//! Building blocks shared by every HTTP module

pub mod error;
pub mod request_url;
pub mod validated;

pub use error::{ErrorDetail, ErrorResponse};
pub use request_url::request_url;
pub use validated::{ValidatedJson, ValidatedQuery, ValidationRejection};
