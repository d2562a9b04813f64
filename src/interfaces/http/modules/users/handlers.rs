//! User API handlers
//!
//! Thin adapters: extract and validate, delegate to [`UserService`], map
//! the result into a response. Errors are [`AppError`]s and render
//! themselves.
//!
//! [`UserService`]: crate::application::UserService

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::json;

use super::dto::{ListUsersParams, UserRequest, UserResponse};
use crate::application::DynUserService;
use crate::config::PaginationConfig;
use crate::interfaces::http::common::{request_url, ErrorResponse, ValidatedJson, ValidatedQuery};
use crate::shared::{AppError, Page, PageRequest};

/// User handler state
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<DynUserService>,
    pub pagination: PaginationConfig,
    /// `host:port` used for pagination links when the request has no `Host`
    pub public_host: String,
}

impl UserHandlerState {
    /// Resolve defaults and enforce the configured page size ceiling.
    fn page_request(&self, params: &ListUsersParams) -> Result<PageRequest, AppError> {
        let page = params.page.unwrap_or(1);
        let limit = params.limit.unwrap_or(self.pagination.default_limit);

        if limit > self.pagination.max_limit {
            return Err(AppError::unprocessable("Validation failed").with_context(json!({
                "limit": [format!("must be at most {}", self.pagination.max_limit)]
            })));
        }

        Ok(PageRequest::new(page, limit))
    }
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "Email already taken", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state.user_service.register_user(request.into()).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "One page of users", body = Page<UserResponse>),
        (status = 400, description = "Unparsable query", body = ErrorResponse),
        (status = 422, description = "page or limit out of range", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    ValidatedQuery(params): ValidatedQuery<ListUsersParams>,
) -> Result<Json<Page<UserResponse>>, AppError> {
    let request = state.page_request(&params)?;
    let base_url = request_url(&uri, &headers, &state.public_host)?;

    let (users, total) = state.user_service.retrieve_and_count_users(request).await?;

    let page = Page::compute(&base_url, request, total, users).map(UserResponse::from);
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/users/{userId}",
    tag = "Users",
    params(("userId" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.retrieve_user(&user_id).await?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    put,
    path = "/users/{userId}",
    tag = "Users",
    params(("userId" = String, Path, description = "User ID")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User replaced", body = UserResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 409, description = "Email already taken", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(user_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.replace_user(&user_id, request.into()).await?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    delete,
    path = "/users/{userId}",
    tag = "Users",
    params(("userId" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = UserResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.remove_user(&user_id).await?;
    Ok(Json(UserResponse::from(user)))
}
