//! Validating extractors for Axum
//!
//! `ValidatedJson<T>` and `ValidatedQuery<T>` work like `axum::Json<T>` and
//! `axum::extract::Query<T>`, but additionally run
//! `validator::Validate::validate()` on the deserialized value. Failures are
//! rendered as [`ErrorResponse`](super::ErrorResponse) bodies: field-level
//! messages go into `detail.context`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::shared::AppError;

/// JSON body that passed validation.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct UserRequest {
///     #[validate(length(min = 1))]
///     name: String,
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn handler(ValidatedJson(body): ValidatedJson<UserRequest>) {
///     // `body` is guaranteed to pass validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

/// Query string that passed validation.
pub struct ValidatedQuery<T>(pub T);

/// Error type for validated extraction failures.
pub enum ValidationRejection {
    /// Body was not acceptable JSON for `T`.
    Json(JsonRejection),
    /// Query string could not be deserialized into `T`.
    Query(QueryRejection),
    /// Deserialized fine, but failed validation.
    Invalid(ValidationErrors),
}

impl From<ValidationRejection> for AppError {
    fn from(rejection: ValidationRejection) -> Self {
        match rejection {
            ValidationRejection::Json(r) => {
                AppError::new(format!("Invalid JSON: {}", r.body_text()), r.status())
            }
            ValidationRejection::Query(r) => {
                AppError::new(format!("Invalid query: {}", r.body_text()), r.status())
            }
            ValidationRejection::Invalid(errors) => {
                AppError::unprocessable("Validation failed").with_context(field_errors(&errors))
            }
        }
    }
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

/// `{ "<field>": ["<message>", ...] }`
fn field_errors(errors: &ValidationErrors) -> Value {
    let fields: Map<String, Value> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages = errs.iter().map(describe).map(Value::String).collect();
            (field.to_string(), Value::Array(messages))
        })
        .collect();
    Value::Object(fields)
}

fn describe(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidationRejection::Json)?;

        value.validate().map_err(ValidationRejection::Invalid)?;

        Ok(ValidatedJson(value))
    }
}

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ValidationRejection::Query)?;

        value.validate().map_err(ValidationRejection::Invalid)?;

        Ok(ValidatedQuery(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
