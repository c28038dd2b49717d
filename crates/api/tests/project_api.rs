//! HTTP-level integration tests for the `/api/projects` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_project(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/projects", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

async fn count_projects(pool: &PgPool) -> i64 {
    let count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM documents WHERE collection = 'videoproject'")
            .fetch_one(pool)
            .await
            .unwrap();
    count.0
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_fills_placeholders(pool: PgPool) {
    let json = create_project(
        &pool,
        json!({"prompt": "Make a cooking video", "mode": "short"}),
    )
    .await;

    assert!(json["id"].is_string());
    assert!(json.get("_id").is_none());
    assert_eq!(json["status"], "created");
    assert_eq!(json["duration_sec"], 60);
    assert_eq!(json["language"], "en");

    let title = json["title"].as_str().unwrap();
    assert!(title.starts_with("Make a cooking video"));
    let script = json["script"].as_str().unwrap();
    assert!(script.contains("short video script for: Make a cooking video"));

    assert_eq!(json["tags"], json!(["ai", "video", "prompt", "short"]));
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 3);
    assert!(json["video_url"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_keeps_optional_inputs(pool: PgPool) {
    let json = create_project(
        &pool,
        json!({
            "prompt": "Launch teaser",
            "mode": "long",
            "duration_sec": 900,
            "language": "de",
            "voice": "narrator-1",
            "template": "bold",
            "brand_name": "Acme"
        }),
    )
    .await;

    assert_eq!(json["mode"], "long");
    assert_eq!(json["duration_sec"], 900);
    assert_eq!(json["language"], "de");
    assert_eq!(json["voice"], "narrator-1");
    assert_eq!(json["template"], "bold");
    assert_eq!(json["brand_name"], "Acme");
    assert_eq!(json["tags"][3], "long");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_out_of_range_duration(pool: PgPool) {
    for duration in [9, 3601, -1] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/projects",
            json!({"prompt": "p", "duration_sec": duration}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    assert_eq!(count_projects(&pool).await, 0, "nothing should be persisted");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_prompt(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/projects", json!({"mode": "short"})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/json"), "got: {content_type}");
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("prompt"));

    assert_eq!(count_projects(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_unknown_mode(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/projects", json!({"prompt": "p", "mode": "medium"})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_after_single_create_returns_it(pool: PgPool) {
    let created = create_project(&pool, json!({"prompt": "Only one"})).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0], created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_honours_limit_and_order(pool: PgPool) {
    let mut ids = Vec::new();
    for n in 0..3 {
        let created = create_project(&pool, json!({ "prompt": format!("P{n}") })).await;
        ids.push(created["id"].clone());
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/projects?limit=2").await).await;
    let listed: Vec<_> = json.as_array().unwrap().iter().map(|p| p["id"].clone()).collect();
    assert_eq!(listed, ids[..2].to_vec());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/projects").await).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_limit_zero_returns_default_page(pool: PgPool) {
    for n in 0..22 {
        create_project(&pool, json!({ "prompt": format!("P{n}") })).await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/projects?limit=0").await).await;
    assert_eq!(json.as_array().unwrap().len(), 20);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_non_integer_limit_returns_json_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects?limit=abc").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Get by id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_project_by_id(pool: PgPool) {
    let created = create_project(&pool, json!({"prompt": "Get Me"})).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects/0190f6c2-7a1e-7cc3-9d0b-5b8d3f2a1c44").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_malformed_id_returns_500(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects/not-a-valid-id").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INVALID_ID");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_status_leaves_other_fields(pool: PgPool) {
    let created = create_project(&pool, json!({"prompt": "Status change"})).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        &format!("/api/projects/{id}"),
        json!({"status": "generated"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "generated");

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/api/projects/{id}")).await).await;

    let mut expected = created.clone();
    expected["status"] = json!("generated");
    assert_eq!(fetched, expected);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_with_null_keeps_stored_value(pool: PgPool) {
    let created = create_project(&pool, json!({"prompt": "Null safe"})).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/projects/{id}"),
        json!({"title": null, "video_url": "https://cdn.example.com/v.mp4"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], created["title"]);
    assert_eq!(json["video_url"], "https://cdn.example.com/v.mp4");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_rejects_unknown_field_and_bad_values(pool: PgPool) {
    let created = create_project(&pool, json!({"prompt": "Strict"})).await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("/api/projects/{id}");

    for body in [
        json!({"colour": "red"}),
        json!({"status": "finished"}),
        json!({"duration_sec": 4000}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = patch_json(app, &uri, body).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    let app = common::build_test_app(pool);
    assert_eq!(body_json(get(app, &uri).await).await, created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_all_null_is_noop(pool: PgPool) {
    let created = create_project(&pool, json!({"prompt": "Untouched"})).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, &format!("/api/projects/{id}"), json!({"title": null})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/projects/0190f6c2-7a1e-7cc3-9d0b-5b8d3f2a1c44",
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        "/api/projects/0190f6c2-7a1e-7cc3-9d0b-5b8d3f2a1c44",
        json!({"status": "error"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_malformed_id_returns_500(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(app, "/api/projects/12345", json!({"status": "error"})).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ---------------------------------------------------------------------------
// No delete endpoint
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_is_not_routed(pool: PgPool) {
    let created = create_project(&pool, json!({"prompt": "Stay"})).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(count_projects(&pool).await, 1);
}
