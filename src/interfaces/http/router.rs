//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{DynUserService, HealthCheckService};
use crate::config::{AppConfig, CorsConfig};
use crate::interfaces::http::common::{ErrorDetail, ErrorResponse};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{health, users};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::create_user,
        users::list_users,
        users::get_user,
        users::update_user,
        users::delete_user,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            health::HealthCheckResponse,
            users::UserRequest,
            users::UserResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Users", description = "User management with paginated listing"),
    ),
    info(
        title = "Users Service API",
        version = "1.0.0",
        description = "CRUD API for users with page/limit pagination",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    user_service: Arc<DynUserService>,
    health_service: Arc<HealthCheckService>,
    config: &AppConfig,
) -> Router {
    let user_state = users::UserHandlerState {
        user_service,
        pagination: config.pagination,
        public_host: config.server.address(),
    };

    let health_state = health::HealthState { health_service };

    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{userId}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(user_state);

    let health_routes = Router::new()
        .route("/", get(health::health_check))
        .with_state(health_state);

    Router::new()
        .nest("/users", user_routes)
        .nest("/health", health_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin: {}", e);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
