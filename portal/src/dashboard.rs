//! Admin review dashboard view-state machine.
//!
//! DESIGN
//! ======
//! The dashboard never performs I/O. Each operation mutates local state and
//! returns the [`Effect`]s a driver must run; the driver reports results back
//! through the `apply_*` methods, which may return follow-up effects (a
//! successful mutation refetches list and stats).
//!
//! SEQUENCING
//! ==========
//! List and stats requests carry a [`RequestToken`]. Only a response whose
//! token is the newest one issued for its kind may touch displayed state;
//! anything older is dropped, so a slow earlier fetch can never overwrite a
//! later one.
//!
//! SEARCH
//! ======
//! The search term filters the rows of the current page locally. It is never
//! sent to the server, so pagination totals describe the unfiltered page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::HashSet;

use crate::api::ApiError;
use crate::message::StatusMessage;
use crate::query::ListQuery;
use crate::types::{Category, DeleteConfirmation, Feedback, FeedbackList, PageLimit, Pagination, ReviewFilter, SortOrder, Stats};

pub const FETCH_FAILED: &str = "Failed to fetch feedback";
pub const MARKED_REVIEWED: &str = "Feedback marked as reviewed";
pub const MARK_FAILED: &str = "Failed to mark as reviewed";
pub const DELETED: &str = "Feedback deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete feedback";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this feedback?";
pub const LOADING: &str = "Loading feedback...";
pub const EMPTY: &str = "No feedback found";

/// Monotonic tag identifying one list or stats request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Network work requested by the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    FetchList { token: RequestToken, query: ListQuery },
    FetchStats { token: RequestToken },
    MarkReviewed { id: String },
    Delete { id: String },
}

/// Query state plus everything fetched for it.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    query: ListQuery,
    search: String,
    rows: Vec<Feedback>,
    pagination: Option<Pagination>,
    stats: Option<Stats>,
    loading: bool,
    message: Option<StatusMessage>,
    pending_delete: Option<String>,
    in_flight: HashSet<String>,
    last_token: u64,
    list_token: Option<RequestToken>,
    stats_token: Option<RequestToken>,
}

impl DashboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `query` instead of the defaults; nothing is fetched until [`Self::mount`].
    #[must_use]
    pub fn with_query(query: ListQuery) -> Self {
        Self { query, ..Self::default() }
    }

    // -------------------------------------------------------------------------
    // Fetch cycle
    // -------------------------------------------------------------------------

    /// Initial fetch when the dashboard is shown.
    pub fn mount(&mut self) -> Vec<Effect> {
        self.fetch_all()
    }

    /// Manual refresh: refetch list and stats unconditionally.
    pub fn refresh(&mut self) -> Vec<Effect> {
        self.fetch_all()
    }

    fn issue_token(&mut self) -> RequestToken {
        self.last_token += 1;
        RequestToken(self.last_token)
    }

    fn fetch_all(&mut self) -> Vec<Effect> {
        let list = self.issue_token();
        let stats = self.issue_token();
        self.list_token = Some(list);
        self.stats_token = Some(stats);
        self.loading = true;
        vec![
            Effect::FetchList { token: list, query: self.query.clone() },
            Effect::FetchStats { token: stats },
        ]
    }

    /// Replace the query; refetches only when the value actually changed.
    pub fn set_query(&mut self, next: ListQuery) -> Vec<Effect> {
        if next == self.query {
            return Vec::new();
        }
        self.query = next;
        self.fetch_all()
    }

    pub fn set_category(&mut self, category: Option<Category>) -> Vec<Effect> {
        if self.query.category == category {
            return Vec::new();
        }
        self.set_query(self.query.with_category(category))
    }

    pub fn set_reviewed(&mut self, reviewed: ReviewFilter) -> Vec<Effect> {
        if self.query.reviewed == reviewed {
            return Vec::new();
        }
        self.set_query(self.query.with_reviewed(reviewed))
    }

    pub fn set_limit(&mut self, limit: PageLimit) -> Vec<Effect> {
        if self.query.limit == limit {
            return Vec::new();
        }
        self.set_query(self.query.with_limit(limit))
    }

    pub fn set_sort(&mut self, sort: Option<SortOrder>) -> Vec<Effect> {
        if self.query.sort == sort {
            return Vec::new();
        }
        self.set_query(self.query.with_sort(sort))
    }

    /// Jump to `page`, clamped into `[1, pages]`.
    pub fn go_to_page(&mut self, page: u32) -> Vec<Effect> {
        let last = self.pagination.map_or(1, |p| p.pages.max(1));
        self.set_query(self.query.with_page(page.clamp(1, last)))
    }

    pub fn next_page(&mut self) -> Vec<Effect> {
        if !self.can_go_next() {
            return Vec::new();
        }
        self.go_to_page(self.current_page() + 1)
    }

    pub fn previous_page(&mut self) -> Vec<Effect> {
        if !self.can_go_previous() {
            return Vec::new();
        }
        self.go_to_page(self.current_page() - 1)
    }

    /// Update the local search term. Never triggers a fetch.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Apply a list response. Returns `false` when the response was stale.
    pub fn apply_list(&mut self, token: RequestToken, result: Result<FeedbackList, ApiError>) -> bool {
        if self.list_token != Some(token) {
            tracing::debug!(?token, latest = ?self.list_token, "dropping stale list response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(list) => {
                self.pagination = Some(list.pagination());
                self.rows = list.data;
            }
            Err(error) => {
                tracing::warn!(%error, status = ?error.status, "feedback list fetch failed");
                self.message = Some(StatusMessage::error(FETCH_FAILED));
            }
        }
        true
    }

    /// Apply a stats response. Failures are logged only.
    pub fn apply_stats(&mut self, token: RequestToken, result: Result<Stats, ApiError>) -> bool {
        if self.stats_token != Some(token) {
            tracing::debug!(?token, latest = ?self.stats_token, "dropping stale stats response");
            return false;
        }
        match result {
            Ok(stats) => self.stats = Some(stats),
            Err(error) => tracing::warn!(%error, status = ?error.status, "feedback stats fetch failed"),
        }
        true
    }

    // -------------------------------------------------------------------------
    // Row actions
    // -------------------------------------------------------------------------

    /// Whether the mark-reviewed control should be offered for `row`.
    #[must_use]
    pub fn can_mark_reviewed(&self, row: &Feedback) -> bool {
        !row.is_reviewed && !self.in_flight.contains(&row.id)
    }

    /// Start marking a listed, unreviewed row as reviewed.
    pub fn mark_reviewed(&mut self, id: &str) -> Option<Effect> {
        let row = self.rows.iter().find(|row| row.id == id)?;
        if !self.can_mark_reviewed(row) {
            return None;
        }
        self.in_flight.insert(id.to_owned());
        Some(Effect::MarkReviewed { id: id.to_owned() })
    }

    pub fn apply_mark_reviewed(&mut self, id: &str, result: Result<Feedback, ApiError>) -> Vec<Effect> {
        self.in_flight.remove(id);
        match result {
            Ok(_) => {
                self.message = Some(StatusMessage::success(MARKED_REVIEWED));
                self.fetch_all()
            }
            Err(error) => {
                tracing::warn!(%error, %id, "mark reviewed failed");
                self.message = Some(StatusMessage::error(MARK_FAILED));
                Vec::new()
            }
        }
    }

    /// Open the delete confirmation for a listed row.
    pub fn request_delete(&mut self, id: &str) -> bool {
        if self.in_flight.contains(id) || !self.rows.iter().any(|row| row.id == id) {
            return false;
        }
        self.pending_delete = Some(id.to_owned());
        true
    }

    /// Decline the pending confirmation. No network call is made.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Accept the pending confirmation and emit the delete call.
    pub fn confirm_delete(&mut self) -> Option<Effect> {
        let id = self.pending_delete.take()?;
        self.in_flight.insert(id.clone());
        Some(Effect::Delete { id })
    }

    pub fn apply_delete(&mut self, id: &str, result: Result<DeleteConfirmation, ApiError>) -> Vec<Effect> {
        self.in_flight.remove(id);
        match result {
            Ok(_) => {
                self.message = Some(StatusMessage::success(DELETED));
                self.fetch_all()
            }
            Err(error) => {
                tracing::warn!(%error, %id, "delete failed");
                self.message = Some(StatusMessage::error(DELETE_FAILED));
                Vec::new()
            }
        }
    }

    pub fn dismiss_message(&mut self) {
        self.message = None;
    }

    // -------------------------------------------------------------------------
    // Read side
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Every row of the fetched page, ignoring search.
    #[must_use]
    pub fn rows(&self) -> &[Feedback] {
        &self.rows
    }

    /// Rows of the fetched page that match the search term.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&Feedback> {
        self.rows.iter().filter(|row| row.matches_search(&self.search)).collect()
    }

    #[must_use]
    pub fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    #[must_use]
    pub fn stats(&self) -> Option<&Stats> {
        self.stats.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    #[must_use]
    pub fn is_in_flight(&self, id: &str) -> bool {
        self.in_flight.contains(id)
    }

    /// Page shown by the last list response, or the requested one before it.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.pagination.map_or(self.query.page, |p| p.page)
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.current_page() > 1
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.pagination.is_some_and(|p| p.has_next())
    }

    /// Pagination controls are only shown for multi-page results.
    #[must_use]
    pub fn show_pagination(&self) -> bool {
        self.pagination.is_some_and(|p| p.pages > 1)
    }

    #[must_use]
    pub fn show_empty_state(&self) -> bool {
        !self.loading && self.visible_rows().is_empty()
    }

    /// `"{visible} of {rows} on this page"` while a search is active.
    #[must_use]
    pub fn search_summary(&self) -> Option<String> {
        if self.search.trim().is_empty() {
            return None;
        }
        Some(format!("{} of {} on this page", self.visible_rows().len(), self.rows.len()))
    }
}
