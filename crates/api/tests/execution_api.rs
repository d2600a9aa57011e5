//! HTTP-level integration tests for the query and maintenance surfaces.
//!
//! These exercise the paths that do not require a reachable target: the
//! safe-mode guard, run-kind validation, and run history reads.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

async fn register_pair(pool: PgPool) -> (i64, i64) {
    let app = common::build_test_app(pool.clone());
    let server = body_json(
        post_json(
            app,
            "/api/v1/servers",
            serde_json::json!({"name": "prod", "host": "db01.internal"}),
        )
        .await,
    )
    .await;
    let server_id = server["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let target = body_json(
        post_json(
            app,
            "/api/v1/targets",
            serde_json::json!({"server_id": server_id, "database_name": "inventory"}),
        )
        .await,
    )
    .await;
    (server_id, target["id"].as_i64().unwrap())
}

#[sqlx::test(migrations = "../db/migrations")]
async fn destructive_statement_blocked_with_409(pool: PgPool) {
    let (server_id, target_id) = register_pair(pool.clone()).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/query",
        serde_json::json!({
            "server_id": server_id,
            "target_id": target_id,
            "sql": "DELETE FROM accounts"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "POLICY_BLOCKED");

    // Blocked statements leave no history entry.
    let app = common::build_test_app(pool);
    let history = body_json(get(app, "/api/v1/query-runs").await).await;
    assert_eq!(history.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn query_against_unknown_target_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/query",
        serde_json::json!({
            "server_id": 1,
            "target_id": 1,
            "sql": "SELECT 1"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mismatched_server_target_pair_returns_400(pool: PgPool) {
    let (server_id, _) = register_pair(pool.clone()).await;

    // A second server whose target we borrow.
    let app = common::build_test_app(pool.clone());
    let other = body_json(
        post_json(
            app,
            "/api/v1/servers",
            serde_json::json!({"name": "staging", "host": "db02.internal"}),
        )
        .await,
    )
    .await;
    let app = common::build_test_app(pool.clone());
    let foreign_target = body_json(
        post_json(
            app,
            "/api/v1/targets",
            serde_json::json!({"server_id": other["id"], "database_name": "other"}),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/query",
        serde_json::json!({
            "server_id": server_id,
            "target_id": foreign_target["id"],
            "sql": "SELECT 1"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_maintenance_kind_returns_400(pool: PgPool) {
    let (server_id, target_id) = register_pair(pool.clone()).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/maintenance/shrink_database",
        serde_json::json!({"server_id": server_id, "target_id": target_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn ad_hoc_kind_rejected_on_maintenance_route(pool: PgPool) {
    let (server_id, target_id) = register_pair(pool.clone()).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/maintenance/ad_hoc_query",
        serde_json::json!({"server_id": server_id, "target_id": target_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn run_history_starts_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/runs").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_run_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/runs/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
