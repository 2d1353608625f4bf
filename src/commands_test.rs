use super::*;
use crate::api::test_helpers::{MockApi, feedback};
use portal::ReviewFilter;

fn api() -> MockApi {
    MockApi::with_rows(vec![
        feedback("a1", Category::Leadership, "Managers should hold regular one-on-ones.", false),
        feedback("b2", Category::Growth, "More training budget please, thanks.", true),
        feedback("c3", Category::Leadership, "Office hours with leadership would help.", false),
    ])
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn ping_reports_ok_or_unreachable() {
    let api = api();
    let mut out = Vec::new();
    ping(&api, "http://localhost:5000/api", &mut out).await.unwrap();
    assert_eq!(output(out), "ok\n");

    api.fail("health");
    let err = ping(&api, "http://localhost:5000/api", &mut Vec::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "feedback service unreachable at http://localhost:5000/");
}

#[tokio::test]
async fn submit_prints_thanks() {
    let api = api();
    let mut out = Vec::new();
    submit(&api, Category::Growth, "Great team culture and support.", &mut out).await.unwrap();
    assert_eq!(output(out), "Thank you! Your feedback has been submitted successfully.\n");
    assert_eq!(api.rows().len(), 4);
}

#[tokio::test]
async fn short_submission_fails_without_call() {
    let api = api();
    let err = submit(&api, Category::Growth, "short", &mut Vec::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "Feedback must be at least 10 characters long");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn list_filters_and_searches() {
    let api = api();
    let query = ListQuery::default().with_category(Some(Category::Leadership)).with_reviewed(ReviewFilter::Pending);
    let mut out = Vec::new();
    list(&api, query, Some("office"), false, &mut out).await.unwrap();

    let text = output(out);
    assert!(text.contains("c3"));
    assert!(!text.contains("a1"));
    assert!(text.contains("1 of 2 on this page"));
    assert!(text.contains("Showing page 1 of 1 (2 total)"));
    assert_eq!(api.calls()[0], "list category=Leadership&reviewed=false&page=1&limit=10");
}

#[tokio::test]
async fn list_json_emits_page_shape() {
    let api = api();
    let mut out = Vec::new();
    list(&api, ListQuery::default(), None, true, &mut out).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&output(out)).unwrap();
    assert_eq!(value["total"], 3);
    assert_eq!(value["data"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["data"][0]["_id"], "a1");
}

#[tokio::test]
async fn list_failure_is_an_error() {
    let api = api();
    api.fail("list");
    let err = list(&api, ListQuery::default(), None, false, &mut Vec::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch feedback");
}

#[tokio::test]
async fn review_skips_already_reviewed() {
    let api = api();
    let mut out = Vec::new();
    review(&api, "b2", false, &mut out).await.unwrap();
    assert_eq!(output(out), "Feedback b2 is already reviewed\n");
    assert_eq!(api.calls(), vec!["get b2".to_owned()]);

    let mut out = Vec::new();
    review(&api, "a1", false, &mut out).await.unwrap();
    assert_eq!(output(out), "Feedback marked as reviewed\n");
    assert!(api.rows()[0].is_reviewed);
}

#[tokio::test]
async fn declined_delete_makes_no_call() {
    let api = api();
    let mut input: &[u8] = b"n\n";
    let mut out = Vec::new();
    delete(&api, "a1", false, &mut input, &mut out).await.unwrap();

    let text = output(out);
    assert!(text.starts_with("Are you sure you want to delete this feedback? [y/N]"));
    assert!(text.ends_with("Cancelled\n"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn confirmed_delete_removes_record() {
    let api = api();
    let mut input: &[u8] = b"YES\n";
    let mut out = Vec::new();
    delete(&api, "a1", false, &mut input, &mut out).await.unwrap();
    assert!(output(out).ends_with("Feedback deleted successfully\n"));
    assert_eq!(api.calls(), vec!["delete a1".to_owned()]);
}

#[tokio::test]
async fn delete_with_yes_skips_prompt() {
    let api = api();
    let mut input: &[u8] = b"";
    let mut out = Vec::new();
    delete(&api, "zz", true, &mut input, &mut out).await.unwrap_err();
    assert!(output(out).is_empty());
}

#[tokio::test]
async fn stats_prints_cards_and_breakdown() {
    let api = api();
    let mut out = Vec::new();
    stats(&api, false, &mut out).await.unwrap();
    let text = output(out);
    assert!(text.contains("Total Feedback  3"));
    assert!(text.contains("Pending Review  2"));
    assert!(text.contains("Leadership"));
}
