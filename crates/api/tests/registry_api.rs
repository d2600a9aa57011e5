//! HTTP-level integration tests for the server and target registry.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

fn server_payload(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "host": "db01.internal",
        "port": 5432,
        "use_integrated_security": false,
        "username": "ops",
        "password": "secret"
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_server_returns_201_without_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/servers", server_payload("prod")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "prod");
    assert!(json["id"].is_number());
    // The stored password must never appear in responses.
    assert!(json.get("password").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_server_with_empty_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/servers", server_payload("")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_server_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/servers/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_server_host(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/servers", server_payload("prod")).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/servers/{id}"),
        serde_json::json!({"host": "db02.internal"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["host"], "db02.internal");
    assert_eq!(json["name"], "prod");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_server_returns_204_then_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/servers", server_payload("prod")).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/servers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/servers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_target_and_list_by_server(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let server = body_json(post_json(app, "/api/v1/servers", server_payload("prod")).await).await;
    let server_id = server["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/targets",
        serde_json::json!({"server_id": server_id, "database_name": "inventory"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/servers/{server_id}/targets")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["database_name"], "inventory");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_target_for_unknown_server_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/targets",
        serde_json::json!({"server_id": 424242, "database_name": "inventory"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
