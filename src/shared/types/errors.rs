use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors raised by repositories and other ports.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Health probe failed: {0}")]
    Probe(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Application-level error carried up to the HTTP layer.
///
/// `context` holds the inputs of the failed operation and `cause` the text
/// of the underlying error, if any. 4xx errors are operational: the request
/// was wrong, not the server.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AppError {
    pub message: String,
    pub status: StatusCode,
    pub context: Value,
    pub cause: Option<String>,
}

impl AppError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
            context: Value::Null,
            cause: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::NOT_FOUND)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::CONFLICT)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::UNPROCESSABLE_ENTITY)
    }

    pub fn with_context(mut self, context: impl Into<Value>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_cause(mut self, cause: impl std::fmt::Display) -> Self {
        self.cause = Some(cause.to_string());
        self
    }

    pub fn is_operational(&self) -> bool {
        self.status.is_client_error()
    }
}
