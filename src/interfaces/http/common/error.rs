//! Error response body and `AppError` → HTTP conversion

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::shared::AppError;

/// Body of every non-2xx response.
///
/// `isOperational` is `true` for client errors (4xx) and `false` when the
/// server failed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ErrorDetail>,
    pub is_operational: bool,
}

/// What was being done when the error happened, and why it failed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    #[schema(value_type = Object)]
    pub context: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let detail = if err.context.is_null() && err.cause.is_none() {
            None
        } else {
            Some(ErrorDetail {
                context: err.context.clone(),
                cause: err.cause.clone(),
            })
        };

        Self {
            message: err.message.clone(),
            detail,
            is_operational: err.is_operational(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, cause = ?self.cause, "{}", self.message);
        } else {
            warn!(status = %self.status, "{}", self.message);
        }

        (self.status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_renders_operational_error() {
        let response = AppError::not_found("User not found")
            .with_context(json!({ "userId": "42" }))
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({
                "message": "User not found",
                "detail": { "context": { "userId": "42" } },
                "isOperational": true
            })
        );
    }

    #[tokio::test]
    async fn internal_error_carries_cause() {
        let response = AppError::internal("An error occurred when removing a user")
            .with_context(json!({ "userId": "42" }))
            .with_cause("connection reset")
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["isOperational"], false);
        assert_eq!(body["detail"]["cause"], "connection reset");
    }

    #[tokio::test]
    async fn bare_error_has_no_detail() {
        let response = AppError::bad_request("Invalid request URL").into_response();
        let body = body_json(response).await;
        assert_eq!(body, json!({ "message": "Invalid request URL", "isOperational": true }));
    }
}
