//! Integration tests for the `/venues` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: Create then fetch detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_fetch_detail(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/venues",
        json!({
            "name": "The Fillmore",
            "city": "SF",
            "state": "CA",
            "genres": ["Jazz", "Blues"]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().expect("id should be numeric");

    let response = get(app, &format!("/api/v1/venues/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let detail = body_json(response).await;

    assert_eq!(detail["name"], "The Fillmore");
    assert_eq!(detail["genres"], json!(["Jazz", "Blues"]));
    assert_eq!(detail["upcoming_shows_count"], 0);
    assert_eq!(detail["past_shows_count"], 0);
}

// ---------------------------------------------------------------------------
// Test: Validation errors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_blank_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/venues", json!({ "name": "   " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = body_json(response).await;
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: Not found
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_venue_detail_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/venues/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error = body_json(response).await;
    assert_eq!(error["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: Grouped listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_groups_by_city_and_state(pool: PgPool) {
    let app = common::build_test_app(pool);

    for name in ["The Fillmore", "The Chapel"] {
        let response = post_json(
            app.clone(),
            "/api/v1/venues",
            json!({ "name": name, "city": "SF", "state": "CA" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app, "/api/v1/venues").await;
    assert_eq!(response.status(), StatusCode::OK);
    let groups = body_json(response).await;

    assert_eq!(groups.as_array().unwrap().len(), 1);
    assert_eq!(groups[0]["city"], "SF");
    assert_eq!(groups[0]["state"], "CA");
    assert_eq!(groups[0]["venues"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Test: Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_is_case_insensitive_and_count_matches(pool: PgPool) {
    let app = common::build_test_app(pool);

    for name in ["Central PARK Lounge", "The Basement"] {
        post_json(app.clone(), "/api/v1/venues", json!({ "name": name })).await;
    }

    let response = get(app, "/api/v1/venues/search?term=park").await;
    assert_eq!(response.status(), StatusCode::OK);
    let results = body_json(response).await;

    assert_eq!(results["count"], 1);
    assert_eq!(results["data"].as_array().unwrap().len(), 1);
    assert_eq!(results["data"][0]["name"], "Central PARK Lounge");
}

// ---------------------------------------------------------------------------
// Test: Full-replace update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_all_editable_fields(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/venues",
        json!({ "name": "Before", "phone": "415-555-0100" }),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/venues/{id}"),
        json!({ "name": "After", "city": "Oakland" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;

    assert_eq!(updated["name"], "After");
    assert_eq!(updated["city"], "Oakland");
    // The omitted phone is cleared by the full-replace edit.
    assert_eq!(updated["phone"], serde_json::Value::Null);
}

// ---------------------------------------------------------------------------
// Test: Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_then_fetch_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/venues", json!({ "name": "Doomed" })).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/api/v1/venues/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/api/v1/venues/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting again reports not found, not success.
    let response = delete(app, &format!("/api/v1/venues/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
