//! HTTP-level tests for learning progress entries.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_skill, delete, get, post_json, put_json, skill_body};
use sqlx::PgPool;

fn entry(skill_id: i64, date: &str, hours: f64) -> serde_json::Value {
    serde_json::json!({"skill_id": skill_id, "date": date, "hours_spent": hours})
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_progress_for_existing_skill(pool: PgPool) {
    let app = common::build_test_app(pool);
    let skill_id = create_skill(app.clone(), skill_body("Rust", "")).await;

    let response = post_json(
        app,
        "/api/v1/progress",
        serde_json::json!({
            "skill_id": skill_id, "date": "2024-03-01", "hours_spent": 2.5,
            "notes": "Borrow checker"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["skill_id"], skill_id);
    assert_eq!(json["data"]["hours_spent"], 2.5);
    assert_eq!(json["data"]["notes"], "Borrow checker");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_progress_for_unknown_skill_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/progress", entry(999999, "2024-03-01", 1.0)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_progress_rejects_invalid_hours(pool: PgPool) {
    let app = common::build_test_app(pool);
    let skill_id = create_skill(app.clone(), skill_body("Rust", "")).await;

    for hours in [-0.5, 1000.0, 2.55] {
        let response = post_json(
            app.clone(),
            "/api/v1/progress",
            entry(skill_id, "2024-03-01", hours),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "hours: {hours}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_progress_filters_by_skill_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let a = create_skill(app.clone(), skill_body("A", "")).await;
    let b = create_skill(app.clone(), skill_body("B", "")).await;

    post_json(app.clone(), "/api/v1/progress", entry(a, "2024-01-01", 1.0)).await;
    post_json(app.clone(), "/api/v1/progress", entry(a, "2024-01-05", 1.0)).await;
    post_json(app.clone(), "/api/v1/progress", entry(b, "2024-01-03", 1.0)).await;

    let json = body_json(get(app.clone(), "/api/v1/progress").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);

    let json = body_json(get(app.clone(), &format!("/api/v1/progress?skill_id={a}")).await).await;
    let dates: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["2024-01-05", "2024-01-01"]);

    let json = body_json(get(app, &format!("/api/v1/skills/{b}/progress")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_and_delete_progress(pool: PgPool) {
    let app = common::build_test_app(pool);
    let skill_id = create_skill(app.clone(), skill_body("Rust", "")).await;
    let created = body_json(
        post_json(app.clone(), "/api/v1/progress", entry(skill_id, "2024-01-01", 1.0)).await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/progress/{id}"),
        serde_json::json!({"hours_spent": 3.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["hours_spent"], 3.0);
    assert_eq!(json["data"]["date"], "2024-01-01");

    let response = delete(app.clone(), &format!("/api/v1/progress/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/progress/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
