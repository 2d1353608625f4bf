//! `FeedbackClient` against an in-process axum backend.

use axum::Router;
use axum::extract::{Path, RawQuery};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::Json;
use feedback_portal::{ClientConfig, FeedbackApi, FeedbackClient, Timeouts};
use portal::{Category, ListQuery, NewFeedback, PageLimit, ReviewFilter, SortOrder};
use serde_json::{Value, json};

// =========================================================================
// Mock backend
// =========================================================================

fn record(id: &str, text: &str, reviewed: bool) -> Value {
    json!({
        "_id": id,
        "feedback": text,
        "category": "Leadership",
        "isReviewed": reviewed,
        "submissionTime": "2025-01-15T10:30:00Z",
        "__v": 0
    })
}

async fn create(Json(body): Json<Value>) -> Response {
    let text = body["feedback"].as_str().unwrap_or_default().to_owned();
    if text.trim().chars().count() < 10 {
        let error = json!({ "message": "Feedback must be at least 10 characters" });
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }
    (StatusCode::CREATED, Json(record("created-1", &text, false))).into_response()
}

/// Echoes the raw query string as the only row's text.
async fn list(RawQuery(query): RawQuery) -> Json<Value> {
    let query = query.unwrap_or_default();
    Json(json!({ "data": [record("q", &query, false)], "page": 2, "pages": 3, "total": 25 }))
}

async fn stats() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "totalFeedback": 25,
            "totalReviewed": 10,
            "totalUnreviewed": 15,
            "categoryStats": [{ "_id": "Leadership", "count": 25 }]
        }
    }))
}

async fn read(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "missing" => (StatusCode::NOT_FOUND, "{}").into_response(),
        "gateway" => (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>").into_response(),
        _ => Json(json!({ "data": record(&id, "Wrapped record body", false) })).into_response(),
    }
}

async fn review(Path(id): Path<String>) -> Json<Value> {
    Json(record(&id, "Reviewed record body", true))
}

async fn remove(Path(_id): Path<String>) -> Json<Value> {
    Json(json!({ "message": "Feedback deleted" }))
}

async fn spawn_backend() -> String {
    let api = Router::new()
        .route("/feedback", get(list).post(create))
        .route("/feedback/stats", get(stats))
        .route("/feedback/{id}", get(read).delete(remove))
        .route("/feedback/{id}/reviewed", patch(review));
    let app = Router::new().route("/", get(|| async { "API is running" })).nest("/api", api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn client(base_url: &str) -> FeedbackClient {
    let config = ClientConfig::new(base_url, Timeouts { request_secs: 5, connect_secs: 2 }).unwrap();
    FeedbackClient::new(&config).unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn create_returns_record() {
    let api = client(&spawn_backend().await);
    let payload = NewFeedback { feedback: "Great team culture and support.".to_owned(), category: Category::Growth };
    let created = api.create(&payload).await.unwrap();
    assert_eq!(created.id, "created-1");
    assert_eq!(created.feedback, "Great team culture and support.");
}

#[tokio::test]
async fn bad_request_carries_server_message() {
    let api = client(&spawn_backend().await);
    let payload = NewFeedback { feedback: "short".to_owned(), category: Category::Growth };
    let err = api.create(&payload).await.unwrap_err();
    assert_eq!(err.message, "Feedback must be at least 10 characters");
    assert_eq!(err.status, Some(400));
}

#[tokio::test]
async fn list_sends_encoded_query() {
    let api = client(&spawn_backend().await);
    let query = ListQuery {
        category: Some(Category::WorkEnvironment),
        reviewed: ReviewFilter::Pending,
        page: 2,
        limit: PageLimit::Ten,
        sort: Some(SortOrder::NewestFirst),
    };
    let page = api.list(&query).await.unwrap();
    assert_eq!(page.data[0].feedback, "category=Work%20Environment&reviewed=false&page=2&limit=10&sort=-submissionTime");
    assert_eq!(page.pagination().label(), "Showing page 2 of 3 (25 total)");
}

#[tokio::test]
async fn get_unwraps_data_envelope() {
    let api = client(&spawn_backend().await);
    let record = api.get("abc123").await.unwrap();
    assert_eq!(record.id, "abc123");
    assert!(!record.is_reviewed);
}

#[tokio::test]
async fn not_found_without_message_uses_status_text() {
    let api = client(&spawn_backend().await);
    let err = api.get("missing").await.unwrap_err();
    assert_eq!(err.message, "HTTP error! status: 404");
    assert_eq!(err.status, Some(404));
}

#[tokio::test]
async fn non_json_error_body_uses_status_text() {
    let api = client(&spawn_backend().await);
    let err = api.get("gateway").await.unwrap_err();
    assert_eq!(err.message, "HTTP error! status: 502");
}

#[tokio::test]
async fn mark_reviewed_and_delete() {
    let api = client(&spawn_backend().await);
    let updated = api.mark_reviewed("abc123").await.unwrap();
    assert!(updated.is_reviewed);
    let confirmation = api.delete("abc123").await.unwrap();
    assert_eq!(confirmation.message.as_deref(), Some("Feedback deleted"));
}

#[tokio::test]
async fn stats_envelope_is_unwrapped() {
    let api = client(&spawn_backend().await);
    let stats = api.stats().await.unwrap();
    assert_eq!(stats.total_feedback, 25);
    assert_eq!(stats.category_stats[0].category, "Leadership");
}

#[tokio::test]
async fn health_probes_service_root() {
    let api = client(&spawn_backend().await);
    assert!(api.health().await);
}

#[tokio::test]
async fn closed_port_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = client(&format!("http://{addr}/api"));
    let err = api.stats().await.unwrap_err();
    assert!(err.is_network());
    assert_eq!(err.status, None);
    assert!(!api.health().await);
}
