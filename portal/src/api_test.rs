use super::*;
use crate::types::{Category, DeleteConfirmation, Feedback, FeedbackList, PageLimit, ReviewFilter, Stats};

const BASE: &str = "http://localhost:5000/api";

fn record_body(reviewed: bool) -> String {
    serde_json::json!({
        "_id": "abc123",
        "feedback": "Great team culture and support.",
        "category": "Growth",
        "isReviewed": reviewed,
        "submissionTime": "2025-02-01T08:00:00Z"
    })
    .to_string()
}

// =============================================================
// Request building
// =============================================================

#[test]
fn create_request_posts_payload_to_collection() {
    let payload = NewFeedback { feedback: "Great team culture and support.".to_owned(), category: Category::Growth };
    let request = ApiRequest::create(BASE, &payload);
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "http://localhost:5000/api/feedback");
    assert_eq!(
        request.body,
        Some(serde_json::json!({ "feedback": "Great team culture and support.", "category": "Growth" }))
    );
}

#[test]
fn list_request_appends_query_string() {
    let query = ListQuery {
        category: Some(Category::Leadership),
        reviewed: ReviewFilter::Pending,
        page: 2,
        limit: PageLimit::Ten,
        sort: None,
    };
    let request = ApiRequest::list(BASE, &query);
    assert_eq!(request.method, Method::Get);
    assert_eq!(
        request.url,
        "http://localhost:5000/api/feedback?category=Leadership&reviewed=false&page=2&limit=10"
    );
    assert!(request.body.is_none());
}

#[test]
fn record_requests_target_encoded_id() {
    assert_eq!(ApiRequest::get(BASE, "a b").url, "http://localhost:5000/api/feedback/a%20b");
    let patch = ApiRequest::mark_reviewed(BASE, "abc123");
    assert_eq!(patch.method, Method::Patch);
    assert_eq!(patch.url, "http://localhost:5000/api/feedback/abc123/reviewed");
    let delete = ApiRequest::delete(BASE, "abc123");
    assert_eq!(delete.method, Method::Delete);
    assert_eq!(delete.url, "http://localhost:5000/api/feedback/abc123");
}

#[test]
fn stats_request_uses_stats_path() {
    assert_eq!(ApiRequest::stats(BASE).url, "http://localhost:5000/api/feedback/stats");
}

#[test]
fn join_url_tolerates_trailing_slash() {
    assert_eq!(join_url("http://host/api/", "/feedback"), "http://host/api/feedback");
}

#[test]
fn health_url_replaces_api_segment_with_root() {
    assert_eq!(health_url(BASE), "http://localhost:5000/");
    assert_eq!(health_url("http://host:8080"), "http://host:8080");
    assert_eq!(health_url("https://api.example.com/api"), "https://api.example.com/");
    assert_eq!(health_url("https://api.example.com/api/"), "https://api.example.com/");
    assert_eq!(health_url("/api"), "/");
}

#[test]
fn method_display_is_uppercase_verb() {
    assert_eq!(Method::Patch.to_string(), "PATCH");
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_list_page() {
    let body = serde_json::json!({
        "data": [serde_json::from_str::<serde_json::Value>(&record_body(false)).expect("json")],
        "page": 2,
        "pages": 3,
        "total": 25
    })
    .to_string();
    let list: FeedbackList = decode(200, &body).expect("decode");
    assert_eq!(list.data.len(), 1);
    assert_eq!((list.page, list.pages, list.total), (2, 3, 25));
}

#[test]
fn decode_record_accepts_bare_and_wrapped() {
    let bare: Feedback = decode_record(201, &record_body(false)).expect("bare");
    assert_eq!(bare.id, "abc123");

    let wrapped = format!(r#"{{"success":true,"data":{}}}"#, record_body(true));
    let record: Feedback = decode_record(200, &wrapped).expect("wrapped");
    assert!(record.is_reviewed);
}

#[test]
fn decode_record_unwraps_stats_envelope() {
    let body = r#"{"data":{"totalFeedback":3,"totalReviewed":1,"totalUnreviewed":2,"categoryStats":[]}}"#;
    let stats: Stats = decode_record(200, body).expect("stats");
    assert_eq!(stats.total_unreviewed, 2);
}

#[test]
fn decode_delete_confirmation() {
    let confirmation: DeleteConfirmation = decode(200, r#"{"message":"Feedback deleted"}"#).expect("decode");
    assert_eq!(confirmation.message.as_deref(), Some("Feedback deleted"));
}

#[test]
fn non_success_uses_server_message() {
    let err = decode::<Feedback>(400, r#"{"message":"Feedback must be at least 10 characters"}"#)
        .expect_err("400 should fail");
    assert_eq!(err.message, "Feedback must be at least 10 characters");
    assert_eq!(err.status, Some(400));
}

#[test]
fn non_success_without_message_uses_generic_status_text() {
    let err = decode::<Feedback>(404, "{}").expect_err("404 should fail");
    assert_eq!(err.message, "HTTP error! status: 404");

    let err = decode::<Feedback>(502, "<html>Bad Gateway</html>").expect_err("502 should fail");
    assert_eq!(err.message, "HTTP error! status: 502");
    assert_eq!(err.status, Some(502));
}

#[test]
fn success_with_unexpected_shape_is_an_error() {
    let err = decode::<FeedbackList>(200, "not json").expect_err("garbage should fail");
    assert!(err.message.starts_with("invalid response body"));
    assert_eq!(err.status, Some(200));
}

#[test]
fn record_with_missing_field_names_the_field() {
    let err = decode_record::<Feedback>(200, r#"{"_id": "abc", "category": "Growth"}"#).expect_err("incomplete record");
    assert!(err.message.starts_with("invalid response body"));
    assert!(err.message.contains("missing field `feedback`"), "{}", err.message);
}

#[test]
fn network_error_has_no_status() {
    let err = ApiError::network("connection refused");
    assert!(err.is_network());
    assert_eq!(err.to_string(), "connection refused");
}
