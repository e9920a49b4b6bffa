//! Integration tests for the `/api/v1/articles` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_article, create_tag, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_existing_tag_returns_201(pool: PgPool) {
    let tag_id = create_tag(&pool, "go").await;
    assert_eq!(tag_id, 1);

    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/articles",
        json!({
            "tag_id": 1,
            "title": "t",
            "desc": "d",
            "content": "c",
            "created_by": "alice",
            "state": 1,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "OK");
    assert_eq!(json["data"]["tag_id"], 1);
    assert_eq!(json["data"]["title"], "t");
    assert_eq!(json["data"]["created_by"], "alice");
    assert_eq!(json["data"]["created_on"], json["data"]["modified_on"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_accepts_string_and_float_numbers(pool: PgPool) {
    create_tag(&pool, "go").await;

    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/articles",
        json!({"tag_id": "1", "title": "t", "desc": "d", "content": "c", "state": 1.0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["tag_id"], 1);
    assert_eq!(json["data"]["state"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_unknown_tag_fails_integrity(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/articles",
        json!({"tag_id": 99, "title": "t", "desc": "d", "content": "c", "state": 1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["msg"], "referenced tag must exist");
    assert_eq!(json["data"], json!({}));

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM articles")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0, "no row may be written on validation failure");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_non_positive_tag_reports_range(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/articles",
        json!({"tag_id": 0, "title": "t", "desc": "d", "content": "c", "state": 1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "tag_id must be greater than 0");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_reports_every_missing_field(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/api/v1/articles", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["msg"],
        "title must not be empty, desc must not be empty, \
         content must not be empty, state must be 0 or 1"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_nul_in_title_is_a_validation_error(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/articles",
        json!({"title": "a\0b", "desc": "d", "content": "c", "state": 1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["msg"], "title must not contain NUL characters");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM articles")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

// ---------------------------------------------------------------------------
// Get / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_returns_article_with_tag(pool: PgPool) {
    let tag_id = create_tag(&pool, "go").await;
    let id = create_article(&pool, tag_id, "t", 1).await;

    let app = build_test_app(pool);
    let response = get(app, &format!("/api/v1/articles/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["tag"]["name"], "go");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/articles/12345").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["msg"], "Article with id 12345 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_with_zero_id_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/articles/0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["msg"], "id must be greater than 0");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_pages_and_counts(pool: PgPool) {
    let go = create_tag(&pool, "go").await;
    let rust = create_tag(&pool, "rust").await;
    let a1 = create_article(&pool, go, "a1", 1).await;
    create_article(&pool, rust, "a2", 1).await;
    let a3 = create_article(&pool, go, "a3", 1).await;
    let a4 = create_article(&pool, go, "a4", 1).await;
    create_article(&pool, go, "a5", 0).await;

    // Page size is 2 in the test config.
    let app = build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/articles?tag_id={go}&state=1")).await).await;
    let ids: Vec<i64> = json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![a1, a3]);
    assert_eq!(json["data"]["total"], 3);

    let app = build_test_app(pool);
    let json =
        body_json(get(app, &format!("/api/v1/articles?tag_id={go}&state=1&page=1")).await).await;
    let ids: Vec<i64> = json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![a4]);
    assert_eq!(json["data"]["total"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_with_empty_filter_values_lists_everything(pool: PgPool) {
    create_article(&pool, 0, "a1", 1).await;

    let app = build_test_app(pool);
    let response = get(app, "/api/v1/articles?state=&tag_id=&page=").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_with_bad_state_filter_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/articles?state=7").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "state must be 0 or 1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_with_unknown_tag_filter_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/articles?tag_id=42").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "referenced tag must exist");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_changes_only_state(pool: PgPool) {
    let tag_id = create_tag(&pool, "go").await;
    let id = create_article(&pool, tag_id, "original", 1).await;

    let app = build_test_app(pool.clone());
    let before = body_json(get(app, &format!("/api/v1/articles/{id}")).await).await;

    let app = build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/v1/articles/{id}"), json!({"state": "0"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let after = body_json(response).await;

    assert_eq!(after["data"]["state"], 0);
    for field in ["title", "desc", "content", "tag_id", "created_by", "created_on"] {
        assert_eq!(after["data"][field], before["data"][field], "{field} changed");
    }

    // Applying the same update again is a no-op on the data.
    let app = build_test_app(pool);
    let again = body_json(put_json(app, &format!("/api/v1/articles/{id}"), json!({"state": "0"})).await).await;
    assert_eq!(again["data"]["state"], 0);
    assert_eq!(again["data"]["title"], "original");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_validates_only_present_fields(pool: PgPool) {
    let id = create_article(&pool, 0, "t", 1).await;

    let app = build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/articles/{id}"),
        json!({"title": "   ", "modified_by": ""}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["msg"],
        "title must not be empty, modified_by must not be empty"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = put_json(app, "/api/v1/articles/77", json!({"state": 1})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_then_get_returns_404(pool: PgPool) {
    let id = create_article(&pool, 0, "t", 1).await;

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/articles/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({"code": "OK", "msg": "ok", "data": {}}));

    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/articles/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = build_test_app(pool);
    let response = delete(app, &format!("/api/v1/articles/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
