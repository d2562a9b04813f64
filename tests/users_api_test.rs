//! Tests for the users REST API

mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, create_test_router, create_user, delete, get, json_request, HOST};

#[tokio::test]
async fn test_create_user_returns_created_body() {
    let app = create_test_router().await;

    let user = create_user(&app, "Ada", "ada@example.com").await;

    assert_eq!(user["name"], "Ada");
    assert_eq!(user["email"], "ada@example.com");
    assert!(user["id"].is_string());
    assert!(user["createdAt"].is_string());
    assert!(user["updatedAt"].is_null());
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    let app = create_test_router().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            &json!({ "name": "Ada", "email": "not-an-email" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["isOperational"], true);
    assert!(body["detail"]["context"]["email"].is_array());
}

#[tokio::test]
async fn test_create_user_malformed_body() {
    let app = create_test_router().await;

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/users")
                .header("host", HOST)
                .header("content-type", "application/json")
                .body(axum::body::Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let app = create_test_router().await;
    create_user(&app, "Ada", "ada@example.com").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            &json!({ "name": "Someone else", "email": "ada@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User already exists");
    assert_eq!(body["isOperational"], true);
}

#[tokio::test]
async fn test_list_users_empty() {
    let app = create_test_router().await;

    let response = app.oneshot(get("/users")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "page": 1,
            "limit": 1,
            "totalPages": 0,
            "totalRecords": 0,
            "records": []
        })
    );
}

#[tokio::test]
async fn test_list_users_first_page_links() {
    let app = create_test_router().await;
    create_user(&app, "Ada", "ada@example.com").await;
    create_user(&app, "Grace", "grace@example.com").await;

    let response = app.oneshot(get("/users?page=1&limit=1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["totalRecords"], 2);
    assert_eq!(body["records"].as_array().unwrap().len(), 1);
    assert_eq!(body["next"], format!("http://{HOST}/users?page=2&limit=1"));
    assert!(body.get("previous").is_none());
}

#[tokio::test]
async fn test_list_users_last_page_links() {
    let app = create_test_router().await;
    for i in 0..3 {
        create_user(&app, "user", &format!("user{i}@example.com")).await;
    }

    let response = app.oneshot(get("/users?page=2&limit=2")).await.unwrap();

    let body = body_json(response).await;
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["records"].as_array().unwrap().len(), 1);
    assert_eq!(body["previous"], format!("http://{HOST}/users?page=1&limit=2"));
    assert!(body.get("next").is_none());
}

#[tokio::test]
async fn test_list_users_without_query_appends_page_and_limit() {
    let app = create_test_router().await;
    create_user(&app, "Ada", "ada@example.com").await;
    create_user(&app, "Grace", "grace@example.com").await;

    let response = app.oneshot(get("/users")).await.unwrap();

    let body = body_json(response).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 1);
    assert_eq!(body["next"], format!("http://{HOST}/users?page=2&limit=1"));
}

#[tokio::test]
async fn test_list_users_honours_forwarded_proto() {
    let app = create_test_router().await;
    create_user(&app, "Ada", "ada@example.com").await;
    create_user(&app, "Grace", "grace@example.com").await;

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .uri("/users?limit=1")
                .header("host", HOST)
                .header("x-forwarded-proto", "https")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["next"], format!("https://{HOST}/users?limit=1&page=2"));
}

#[tokio::test]
async fn test_list_users_rejects_out_of_range_query() {
    let app = create_test_router().await;

    for uri in ["/users?limit=11", "/users?page=0", "/users?limit=0"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        let body = body_json(response).await;
        assert_eq!(body["message"], "Validation failed", "{uri}");
    }
}

#[tokio::test]
async fn test_list_users_rejects_non_numeric_query() {
    let app = create_test_router().await;

    let response = app.oneshot(get("/users?page=two")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_user_roundtrip() {
    let app = create_test_router().await;
    let created = create_user(&app, "Ada", "ada@example.com").await;
    let id = created["id"].as_str().unwrap();

    let response = app.oneshot(get(&format!("/users/{id}"))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["email"], "ada@example.com");
    assert!(body["updatedAt"].is_null());
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let app = create_test_router().await;

    let requests = [
        get("/users/does-not-exist"),
        json_request(
            "PUT",
            "/users/does-not-exist",
            &json!({ "name": "Ada", "email": "ada@example.com" }),
        ),
        delete("/users/does-not-exist"),
    ];

    for request in requests {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["message"], "User not found");
        assert_eq!(body["isOperational"], true);
        assert_eq!(body["detail"]["context"]["userId"], "does-not-exist");
    }
}

#[tokio::test]
async fn test_replace_user() {
    let app = create_test_router().await;
    let created = create_user(&app, "Ada", "ada@example.com").await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/users/{id}"),
            &json!({ "name": "Grace", "email": "grace@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Grace");
    assert_eq!(body["email"], "grace@example.com");
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn test_replace_user_with_taken_email() {
    let app = create_test_router().await;
    create_user(&app, "Ada", "ada@example.com").await;
    let grace = create_user(&app, "Grace", "grace@example.com").await;
    let id = grace["id"].as_str().unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/users/{id}"),
            &json!({ "name": "Grace", "email": "ada@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_user_returns_removed_row() {
    let app = create_test_router().await;
    let created = create_user(&app, "Ada", "ada@example.com").await;
    let id = created["id"].as_str().unwrap();

    let response = app.clone().oneshot(delete(&format!("/users/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["email"], "ada@example.com");

    let response = app.oneshot(get(&format!("/users/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
