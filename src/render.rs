//! Plain-text rendering of portal state for the terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use portal::dashboard::{DashboardState, EMPTY, LOADING};
use portal::form::{FormState, MAX_FEEDBACK_CHARS};
use portal::message::{MessageKind, StatusMessage};
use portal::types::{Feedback, Stats, format_submission_time};

/// Longest feedback excerpt shown in a table row.
const EXCERPT_CHARS: usize = 60;

#[must_use]
pub fn message(message: &StatusMessage) -> String {
    let tag = match message.kind {
        MessageKind::Success => "ok",
        MessageKind::Error => "error",
        MessageKind::Info => "info",
    };
    format!("[{tag}] {}", message.text)
}

/// The four summary cards, one per line.
#[must_use]
pub fn stats_cards(stats: &Stats) -> String {
    let mut out = String::new();
    for (label, value) in stats.cards() {
        let _ = writeln!(out, "{label:<16}{value}");
    }
    out
}

/// Per-category counts from the stats response.
#[must_use]
pub fn category_breakdown(stats: &Stats) -> String {
    let mut out = String::new();
    for stat in &stats.category_stats {
        let _ = writeln!(out, "  {:<18}{}", stat.category, stat.count);
    }
    out
}

fn excerpt(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= EXCERPT_CHARS {
        return flat;
    }
    let cut: String = flat.chars().take(EXCERPT_CHARS - 3).collect();
    format!("{cut}...")
}

fn status_label(row: &Feedback) -> &'static str {
    if row.is_reviewed { "Reviewed" } else { "Pending" }
}

/// Table of rows: id, date, category, status, and an excerpt.
#[must_use]
pub fn table(rows: &[&Feedback]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<26} {:<24} {:<18} {:<9} FEEDBACK", "ID", "SUBMITTED", "CATEGORY", "STATUS");
    for row in rows {
        let _ = writeln!(
            out,
            "{:<26} {:<24} {:<18} {:<9} {}",
            row.id,
            format_submission_time(row.submission_time),
            row.category,
            status_label(row),
            excerpt(&row.feedback)
        );
    }
    out
}

/// A single record with its full text.
#[must_use]
pub fn record(row: &Feedback) -> String {
    format!(
        "ID:        {}\nCategory:  {}\nStatus:    {}\nSubmitted: {}\n\n{}\n",
        row.id,
        row.category,
        status_label(row),
        format_submission_time(row.submission_time),
        row.feedback
    )
}

/// Everything the admin view shows, top to bottom.
#[must_use]
pub fn dashboard(state: &DashboardState) -> String {
    let mut out = String::new();
    if let Some(msg) = state.message() {
        let _ = writeln!(out, "{}", message(msg));
    }
    if let Some(stats) = state.stats() {
        out.push_str(&stats_cards(stats));
        out.push('\n');
    }
    if let Some(summary) = state.search_summary() {
        let _ = writeln!(out, "Search \"{}\": {summary}", state.search());
    }
    if state.is_loading() {
        let _ = writeln!(out, "{LOADING}");
    } else if state.show_empty_state() {
        let _ = writeln!(out, "{EMPTY}");
    } else {
        out.push_str(&table(&state.visible_rows()));
    }
    if state.show_pagination() {
        if let Some(pagination) = state.pagination() {
            let _ = writeln!(out, "{}", pagination.label());
        }
    }
    if let Some(id) = state.pending_delete() {
        let _ = writeln!(out, "Confirm delete of {id}? (confirm / cancel)");
    }
    out
}

/// The employee view: current selections, counter, and any message.
#[must_use]
pub fn form(state: &FormState) -> String {
    let mut out = String::new();
    let category = state.category().map_or("(none)", |c| c.as_str());
    let _ = writeln!(out, "Category: {category}");
    let near = if state.near_limit() { " (near limit)" } else { "" };
    let _ = writeln!(out, "Feedback: {}/{MAX_FEEDBACK_CHARS}{near}", state.char_count());
    if state.is_submitting() {
        let _ = writeln!(out, "Submitting...");
    }
    if let Some(msg) = state.message() {
        let _ = writeln!(out, "{}", message(msg));
    }
    out
}
