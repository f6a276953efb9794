//! HTTP-level tests for the insight endpoints under `/api/v1/ml`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{Duration, NaiveDate, Utc};
use common::{
    body_json, build_test_app_with, create_skill, get, post_json, skill_body, FailingSummarizer,
    StubClassifier, StubSummarizer,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn recommendations_rank_similar_skills_and_exclude_self(pool: PgPool) {
    let app = common::build_test_app(pool);
    let rust = create_skill(
        app.clone(),
        skill_body("Rust programming", "Systems programming with ownership"),
    )
    .await;
    let async_rust = create_skill(
        app.clone(),
        skill_body("Async Rust", "Programming async services in Rust"),
    )
    .await;
    create_skill(
        app.clone(),
        skill_body("Watercolor", "Painting landscapes with watercolor"),
    )
    .await;

    let response = get(app, &format!("/api/v1/ml/{rust}/recommend-skills")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let recs = json["data"].as_array().unwrap();
    assert_eq!(recs.len(), 2);
    assert!(recs.iter().all(|r| r["id"] != rust));
    assert_eq!(recs[0]["id"], async_rust);
    assert_eq!(recs[0]["name"], "Async Rust");
    assert!(recs[0]["similarity"].as_f64().unwrap() > recs[1]["similarity"].as_f64().unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn recommendations_respect_limit(pool: PgPool) {
    let app = common::build_test_app(pool);
    let target = create_skill(app.clone(), skill_body("Target", "shared words")).await;
    for i in 0..4 {
        create_skill(app.clone(), skill_body(&format!("Other {i}"), "shared words")).await;
    }

    let uri = format!("/api/v1/ml/{target}/recommend-skills?limit=2");
    let json = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    for bad in [0, 51] {
        let response = get(
            app.clone(),
            &format!("/api/v1/ml/{target}/recommend-skills?limit={bad}"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "limit {bad}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn recomputing_recommendations_keeps_one_row_per_pair(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let a = create_skill(app.clone(), skill_body("SQL basics", "Relational queries")).await;
    create_skill(app.clone(), skill_body("SQL tuning", "Relational query plans")).await;

    for _ in 0..2 {
        let response = get(app.clone(), &format!("/api/v1/ml/{a}/recommend-skills")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let rows: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM skill_recommendations WHERE skill_id = $1")
            .bind(a)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(rows, 1);

    let json = body_json(get(app, &format!("/api/v1/skills/{a}/recommendations")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn recommendations_for_lone_skill_are_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = create_skill(app.clone(), skill_body("Only", "one skill")).await;

    let json = body_json(get(app, &format!("/api/v1/ml/{id}/recommend-skills")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Summaries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn short_notes_are_returned_without_model_call(pool: PgPool) {
    let summarizer = Arc::new(StubSummarizer::new("never used"));
    let app = build_test_app_with(pool, summarizer.clone(), Arc::new(StubClassifier::new()));
    let id = create_skill(
        app.clone(),
        serde_json::json!({
            "name": "Go", "description": "Concurrency", "notes": "Channels and goroutines",
            "resource_type": "video", "platform": "YouTube"
        }),
    )
    .await;

    let response = get(app.clone(), &format!("/api/v1/ml/{id}/summarize-notes")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["summary"], "Concurrency\nChannels and goroutines");
    assert_eq!(summarizer.call_count(), 0);

    let json = body_json(get(app, &format!("/api/v1/skills/{id}/summaries")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn long_notes_are_summarized_and_appended(pool: PgPool) {
    let summarizer = Arc::new(StubSummarizer::new("A concise summary."));
    let app = build_test_app_with(pool, summarizer.clone(), Arc::new(StubClassifier::new()));
    let notes = "word ".repeat(40);
    let id = create_skill(
        app.clone(),
        serde_json::json!({
            "name": "Reading", "notes": notes, "resource_type": "book", "platform": "Kindle"
        }),
    )
    .await;

    for _ in 0..2 {
        let uri = format!("/api/v1/ml/{id}/summarize-notes");
        let json = body_json(get(app.clone(), &uri).await).await;
        assert_eq!(json["data"]["summary"], "A concise summary.");
    }
    assert_eq!(summarizer.call_count(), 2);

    let json = body_json(get(app, &format!("/api/v1/skills/{id}/summaries")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn summarizer_failure_returns_500_and_stores_nothing(pool: PgPool) {
    let app = build_test_app_with(
        pool.clone(),
        Arc::new(FailingSummarizer),
        Arc::new(StubClassifier::new()),
    );
    let id = create_skill(
        app.clone(),
        serde_json::json!({
            "name": "Math", "description": "proof ".repeat(35),
            "resource_type": "course", "platform": "MIT"
        }),
    )
    .await;

    let response = get(app, &format!("/api/v1/ml/{id}/summarize-notes")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INFERENCE_ERROR");
    assert!(json["error"].as_str().unwrap().contains("model is loading"));

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM note_summaries")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);
}

// ---------------------------------------------------------------------------
// Mastery prediction
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn mastery_without_history_reports_insufficient_data(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = create_skill(app.clone(), skill_body("New", "")).await;

    let response = get(app.clone(), &format!("/api/v1/ml/{id}/predict-mastery")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["message"], "Insufficient data for prediction");

    let json = body_json(get(app, &format!("/api/v1/skills/{id}/mastery-predictions")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mastery_prediction_extrapolates_and_is_stored(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = create_skill(app.clone(), skill_body("Piano", "")).await;

    let today = Utc::now().date_naive();
    for (days_ago, hours) in [(10, 2.0), (5, 3.0), (0, 4.0)] {
        let date = today - Duration::days(days_ago);
        post_json(
            app.clone(),
            "/api/v1/progress",
            serde_json::json!({"skill_id": id, "date": date, "hours_spent": hours}),
        )
        .await;
    }

    let json = body_json(get(app.clone(), &format!("/api/v1/ml/{id}/predict-mastery")).await).await;
    let predicted: NaiveDate = json["data"]["predicted_date"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    // Cumulative 2, 5, 9 hours over days 0, 5, 10 gives a slope of 0.7 h/day.
    assert_eq!(predicted, today + Duration::days(44));
    let confidence = json["data"]["confidence"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&confidence));

    let json = body_json(get(app, &format!("/api/v1/skills/{id}/mastery-predictions")).await).await;
    let stored = json["data"].as_array().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["hours_per_week"], 7.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mastery_already_reached_predicts_today(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = create_skill(app.clone(), skill_body("Chess", "")).await;
    post_json(
        app.clone(),
        "/api/v1/progress",
        serde_json::json!({"skill_id": id, "date": "2024-01-01", "hours_spent": 45.0}),
    )
    .await;

    let json = body_json(get(app, &format!("/api/v1/ml/{id}/predict-mastery")).await).await;
    let today = Utc::now().date_naive().to_string();
    assert_eq!(json["data"]["predicted_date"], today.as_str());
    assert_eq!(json["data"]["confidence"], 1.0);
}

// ---------------------------------------------------------------------------
// Auto-categorization
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn auto_categorize_seeds_default_categories(pool: PgPool) {
    let classifier = Arc::new(StubClassifier::preferring("Programming"));
    let app = build_test_app_with(
        pool,
        Arc::new(StubSummarizer::new("unused")),
        classifier.clone(),
    );
    let id = create_skill(app.clone(), skill_body("Rust", "Systems programming")).await;

    let response = get(app.clone(), &format!("/api/v1/ml/{id}/auto-categorize")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["category"], "Programming");
    assert_eq!(json["data"]["confidence"], 0.87);

    let seen = classifier.seen_labels.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].len(), 6);

    let json = body_json(get(app, "/api/v1/categories").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 6);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn auto_categorize_uses_existing_categories(pool: PgPool) {
    let classifier = Arc::new(StubClassifier::new());
    let app = build_test_app_with(
        pool,
        Arc::new(StubSummarizer::new("unused")),
        classifier.clone(),
    );
    let response = post_json(
        app.clone(),
        "/api/v1/categories",
        serde_json::json!({"name": "Cooking"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = create_skill(app.clone(), skill_body("Bread", "Sourdough baking")).await;

    let json = body_json(get(app.clone(), &format!("/api/v1/ml/{id}/auto-categorize")).await).await;
    assert_eq!(json["data"]["category"], "Cooking");

    let seen = classifier.seen_labels.lock().unwrap().clone();
    assert_eq!(seen, vec![vec!["Cooking".to_string()]]);

    let json = body_json(get(app, "/api/v1/categories").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_category_name_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = serde_json::json!({"name": "Music"});
    post_json(app.clone(), "/api/v1/categories", body.clone()).await;

    let response = post_json(app, "/api/v1/categories", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Unknown skill
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn insight_endpoints_return_404_for_unknown_skill(pool: PgPool) {
    let app = common::build_test_app(pool);
    for endpoint in [
        "recommend-skills",
        "summarize-notes",
        "predict-mastery",
        "auto-categorize",
    ] {
        let response = get(app.clone(), &format!("/api/v1/ml/999999/{endpoint}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{endpoint}");
    }

    // Unknown skill wins over a bad limit.
    let response = get(app, "/api/v1/ml/999999/recommend-skills?limit=0").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
