//! Shared fixtures for HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;
use users_service::application::{DynUserService, HealthCheckService, UserService};
use users_service::domain::{HealthProbe, UserRepositoryInterface};
use users_service::infrastructure::database::migrator::Migrator;
use users_service::infrastructure::{init_database, DatabaseConfig, SeaOrmHealthProbe, UserRepository};
use users_service::{create_api_router, AppConfig};

pub const HOST: &str = "api.test";

/// Full router over a fresh in-memory SQLite database.
pub async fn create_test_router() -> Router {
    let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let repo: Arc<dyn UserRepositoryInterface> = Arc::new(UserRepository::new(db.clone()));
    let user_service: Arc<DynUserService> = Arc::new(UserService::new(repo));
    let probe: Arc<dyn HealthProbe> = Arc::new(SeaOrmHealthProbe::new(db));
    let health_service = Arc::new(HealthCheckService::new(probe));

    create_api_router(user_service, health_service, &AppConfig::default())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("host", HOST)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("host", HOST)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("host", HOST)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a user and return the created body.
pub async fn create_user(app: &Router, name: &str, email: &str) -> Value {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/users",
            &serde_json::json!({ "name": name, "email": email }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    body_json(response).await
}
