//! `FeedbackApi` seam between the effect runner and the HTTP transport.
//!
//! Production code uses [`crate::client::FeedbackClient`]; tests substitute
//! in-memory implementations.

use portal::api::ApiError;
use portal::types::{DeleteConfirmation, Feedback, FeedbackList, NewFeedback, Stats};
use portal::ListQuery;

/// Every call the portal makes against the backend.
#[async_trait::async_trait]
pub trait FeedbackApi: Send + Sync {
    async fn create(&self, payload: &NewFeedback) -> Result<Feedback, ApiError>;

    async fn list(&self, query: &ListQuery) -> Result<FeedbackList, ApiError>;

    async fn get(&self, id: &str) -> Result<Feedback, ApiError>;

    async fn mark_reviewed(&self, id: &str) -> Result<Feedback, ApiError>;

    async fn delete(&self, id: &str) -> Result<DeleteConfirmation, ApiError>;

    async fn stats(&self) -> Result<Stats, ApiError>;

    /// Probe the service root. `true` only for a 2xx answer.
    async fn health(&self) -> bool;
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use portal::types::CategoryStat;
    use portal::{Category, ReviewFilter};
    use time::macros::datetime;

    use super::*;

    /// In-memory backend with a call log.
    ///
    /// Operations named in `failing` return a network error instead.
    #[derive(Default)]
    pub struct MockApi {
        pub calls: Mutex<Vec<String>>,
        rows: Mutex<Vec<Feedback>>,
        failing: Mutex<HashSet<&'static str>>,
        next_id: Mutex<u32>,
    }

    impl MockApi {
        pub fn with_rows(rows: Vec<Feedback>) -> Self {
            Self { rows: Mutex::new(rows), ..Self::default() }
        }

        pub fn fail(&self, operation: &'static str) {
            self.failing.lock().unwrap().insert(operation);
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        pub fn rows(&self) -> Vec<Feedback> {
            self.rows.lock().unwrap().clone()
        }

        fn record(&self, call: String) -> Result<(), ApiError> {
            let operation = call.split(' ').next().unwrap_or_default().to_owned();
            self.calls.lock().unwrap().push(call);
            if self.failing.lock().unwrap().contains(operation.as_str()) {
                return Err(ApiError::network("connection refused"));
            }
            Ok(())
        }

        fn not_found() -> ApiError {
            ApiError { message: "Feedback not found".to_owned(), status: Some(404) }
        }
    }

    /// Fixture row with a fixed timestamp.
    pub fn feedback(id: &str, category: Category, text: &str, reviewed: bool) -> Feedback {
        Feedback {
            id: id.to_owned(),
            feedback: text.to_owned(),
            category,
            is_reviewed: reviewed,
            submission_time: datetime!(2025-01-15 10:30 UTC),
        }
    }

    #[async_trait::async_trait]
    impl FeedbackApi for MockApi {
        async fn create(&self, payload: &NewFeedback) -> Result<Feedback, ApiError> {
            self.record(format!("create {}", payload.category))?;
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            let created = feedback(&format!("new-{next}"), payload.category, &payload.feedback, false);
            self.rows.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn list(&self, query: &ListQuery) -> Result<FeedbackList, ApiError> {
            self.record(format!("list {}", query.query_string()))?;
            let matching: Vec<Feedback> = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|row| query.category.is_none_or(|c| row.category == c))
                .filter(|row| match query.reviewed {
                    ReviewFilter::Any => true,
                    ReviewFilter::Reviewed => row.is_reviewed,
                    ReviewFilter::Pending => !row.is_reviewed,
                })
                .cloned()
                .collect();
            let limit = query.limit.as_u32() as usize;
            let total = matching.len();
            let pages = total.div_ceil(limit);
            let start = (query.page as usize - 1) * limit;
            let data = matching.into_iter().skip(start).take(limit).collect();
            Ok(FeedbackList { data, page: query.page, pages: pages as u32, total: total as u64 })
        }

        async fn get(&self, id: &str) -> Result<Feedback, ApiError> {
            self.record(format!("get {id}"))?;
            self.rows.lock().unwrap().iter().find(|row| row.id == id).cloned().ok_or_else(Self::not_found)
        }

        async fn mark_reviewed(&self, id: &str) -> Result<Feedback, ApiError> {
            self.record(format!("mark_reviewed {id}"))?;
            let mut rows = self.rows.lock().unwrap();
            let row = rows.iter_mut().find(|row| row.id == id).ok_or_else(Self::not_found)?;
            row.is_reviewed = true;
            Ok(row.clone())
        }

        async fn delete(&self, id: &str) -> Result<DeleteConfirmation, ApiError> {
            self.record(format!("delete {id}"))?;
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|row| row.id != id);
            if rows.len() == before {
                return Err(Self::not_found());
            }
            Ok(DeleteConfirmation { message: Some("Feedback deleted".to_owned()) })
        }

        async fn stats(&self) -> Result<Stats, ApiError> {
            self.record("stats".to_owned())?;
            let rows = self.rows.lock().unwrap();
            let reviewed = rows.iter().filter(|row| row.is_reviewed).count() as u64;
            let category_stats = Category::ALL
                .into_iter()
                .map(|c| CategoryStat {
                    category: c.as_str().to_owned(),
                    count: rows.iter().filter(|row| row.category == c).count() as u64,
                })
                .filter(|stat| stat.count > 0)
                .collect();
            Ok(Stats {
                total_feedback: rows.len() as u64,
                total_reviewed: reviewed,
                total_unreviewed: rows.len() as u64 - reviewed,
                category_stats,
            })
        }

        async fn health(&self) -> bool {
            self.record("health".to_owned()).is_ok()
        }
    }
}
