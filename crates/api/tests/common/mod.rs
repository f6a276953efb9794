#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use skilltrack_api::config::ServerConfig;
use skilltrack_api::router::build_app_router;
use skilltrack_api::state::AppState;
use skilltrack_inference::{
    Classification, InferenceConfig, InferenceError, Summarizer, ZeroShotClassifier,
};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        inference: InferenceConfig::default(),
    }
}

// ---------------------------------------------------------------------------
// Model stubs
// ---------------------------------------------------------------------------

/// Summarizer that returns a fixed summary and counts calls.
pub struct StubSummarizer {
    pub summary: String,
    pub calls: AtomicUsize,
}

impl StubSummarizer {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(
        &self,
        _text: &str,
        _max_length: u32,
        _min_length: u32,
    ) -> Result<String, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.summary.clone())
    }
}

/// Summarizer that always fails the way an unavailable model does.
pub struct FailingSummarizer;

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(
        &self,
        _text: &str,
        _max_length: u32,
        _min_length: u32,
    ) -> Result<String, InferenceError> {
        Err(InferenceError::Api {
            status: 503,
            body: "model is loading".to_string(),
        })
    }
}

/// Classifier that picks a preferred label when offered, else the first one.
/// Records the label set of every call.
pub struct StubClassifier {
    pub preferred: Option<String>,
    pub seen_labels: Mutex<Vec<Vec<String>>>,
}

impl StubClassifier {
    pub fn new() -> Self {
        Self {
            preferred: None,
            seen_labels: Mutex::new(Vec::new()),
        }
    }

    pub fn preferring(label: &str) -> Self {
        Self {
            preferred: Some(label.to_string()),
            seen_labels: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ZeroShotClassifier for StubClassifier {
    async fn classify(
        &self,
        _text: &str,
        labels: &[String],
    ) -> Result<Classification, InferenceError> {
        self.seen_labels.lock().unwrap().push(labels.to_vec());
        let label = self
            .preferred
            .as_ref()
            .filter(|p| labels.contains(p))
            .or_else(|| labels.first())
            .cloned()
            .ok_or_else(|| InferenceError::InvalidInput("no labels".into()))?;
        Ok(Classification { label, score: 0.87 })
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the full application router with stub models.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(
        pool,
        Arc::new(StubSummarizer::new("stub summary")),
        Arc::new(StubClassifier::new()),
    )
}

/// Build the full application router with the given models, using the same
/// middleware stack as the binary.
pub fn build_test_app_with(
    pool: PgPool,
    summarizer: Arc<dyn Summarizer>,
    classifier: Arc<dyn ZeroShotClassifier>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        summarizer,
        classifier,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a skill through the API and return its id.
pub async fn create_skill(app: Router, body: serde_json::Value) -> i64 {
    let response = post_json(app, "/api/v1/skills", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Minimal valid skill payload.
pub fn skill_body(name: &str, description: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "description": description,
        "resource_type": "course",
        "platform": "Coursera",
    })
}
