//! REST wire types and the enumerated filter values.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`_id`, `isReviewed`,
//! `submissionTime`) through serde renames so Rust code stays snake_case.
//! `Category::ALL` is the single source of the category list; the form, the
//! dashboard filter, the CLI parser, and the web selects all read it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;

// =============================================================================
// CATEGORY
// =============================================================================

/// Fixed feedback category set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Work Environment")]
    WorkEnvironment,
    Leadership,
    Growth,
    Others,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [Self::WorkEnvironment, Self::Leadership, Self::Growth, Self::Others];

    /// Wire and display label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WorkEnvironment => "Work Environment",
            Self::Leadership => "Leadership",
            Self::Growth => "Growth",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names none of the enumerated values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseValueError {
    #[error("unknown category: {0}")]
    Category(String),
    #[error("unknown review filter: {0} (expected any, true, or false)")]
    ReviewFilter(String),
    #[error("invalid page size: {0} (expected 5, 10, 20, or 50)")]
    PageLimit(String),
    #[error("unknown sort order: {0}")]
    SortOrder(String),
}

impl FromStr for Category {
    type Err = ParseValueError;

    /// Accepts the label case-insensitively, with `-` or `_` standing in for spaces.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParseValueError::Category(raw.to_owned()))
    }
}

// =============================================================================
// REVIEW FILTER
// =============================================================================

/// Tri-state reviewed filter for the list query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReviewFilter {
    #[default]
    Any,
    Reviewed,
    Pending,
}

impl ReviewFilter {
    pub const ALL: [ReviewFilter; 3] = [Self::Any, Self::Reviewed, Self::Pending];

    /// Value sent as the `reviewed` query parameter; `None` omits it.
    #[must_use]
    pub fn as_query_value(self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Reviewed => Some("true"),
            Self::Pending => Some("false"),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Any => "All Status",
            Self::Reviewed => "Reviewed",
            Self::Pending => "Pending Review",
        }
    }
}

impl FromStr for ReviewFilter {
    type Err = ParseValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "any" | "all" => Ok(Self::Any),
            "true" | "reviewed" => Ok(Self::Reviewed),
            "false" | "pending" => Ok(Self::Pending),
            _ => Err(ParseValueError::ReviewFilter(raw.to_owned())),
        }
    }
}

// =============================================================================
// PAGE LIMIT
// =============================================================================

/// Page size, restricted to the sizes the dashboard offers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageLimit {
    Five,
    #[default]
    Ten,
    Twenty,
    Fifty,
}

impl PageLimit {
    pub const ALL: [PageLimit; 4] = [Self::Five, Self::Ten, Self::Twenty, Self::Fifty];

    #[must_use]
    pub fn as_u32(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        format!("{} per page", self.as_u32())
    }
}

impl TryFrom<u32> for PageLimit {
    type Error = ParseValueError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|limit| limit.as_u32() == value)
            .ok_or_else(|| ParseValueError::PageLimit(value.to_string()))
    }
}

impl FromStr for PageLimit {
    type Err = ParseValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseValueError::PageLimit(raw.to_owned()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

// =============================================================================
// SORT ORDER
// =============================================================================

/// Server-side sort keys accepted by the list endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortOrder {
    NewestFirst,
    OldestFirst,
    CategoryAsc,
    CategoryDesc,
    UnreviewedFirst,
    ReviewedFirst,
}

impl SortOrder {
    pub const ALL: [SortOrder; 6] = [
        Self::NewestFirst,
        Self::OldestFirst,
        Self::CategoryAsc,
        Self::CategoryDesc,
        Self::UnreviewedFirst,
        Self::ReviewedFirst,
    ];

    /// Value sent as the `sort` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewestFirst => "-submissionTime",
            Self::OldestFirst => "submissionTime",
            Self::CategoryAsc => "category",
            Self::CategoryDesc => "-category",
            Self::UnreviewedFirst => "isReviewed",
            Self::ReviewedFirst => "-isReviewed",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NewestFirst => "Newest First",
            Self::OldestFirst => "Oldest First",
            Self::CategoryAsc => "Category A-Z",
            Self::CategoryDesc => "Category Z-A",
            Self::UnreviewedFirst => "Unreviewed First",
            Self::ReviewedFirst => "Reviewed First",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == wanted)
            .ok_or_else(|| ParseValueError::SortOrder(raw.to_owned()))
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// One anonymous feedback submission as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Opaque backend identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Free-text body.
    pub feedback: String,
    pub category: Category,
    /// One-way flag flipped by the mark-reviewed action.
    #[serde(default)]
    pub is_reviewed: bool,
    /// Server-assigned creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub submission_time: OffsetDateTime,
}

impl Feedback {
    /// Case-insensitive substring match on the feedback text.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        term.is_empty() || self.feedback.to_lowercase().contains(&term)
    }
}

/// Body of `POST /feedback`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewFeedback {
    pub feedback: String,
    pub category: Category,
}

/// One page of `GET /feedback`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackList {
    #[serde(default)]
    pub data: Vec<Feedback>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub total: u64,
}

impl FeedbackList {
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination { page: self.page.max(1), pages: self.pages, total: self.total }
    }
}

/// Page position reported by the last successful list fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    pub total: u64,
}

impl Pagination {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    /// e.g. `Showing page 2 of 3 (25 total)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Showing page {} of {} ({} total)", self.page, self.pages, self.total)
    }
}

/// Aggregate counts from `GET /feedback/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub total_feedback: u64,
    #[serde(default)]
    pub total_reviewed: u64,
    #[serde(default)]
    pub total_unreviewed: u64,
    #[serde(default)]
    pub category_stats: Vec<CategoryStat>,
}

impl Stats {
    /// Summary cards in display order: total, reviewed, pending, category buckets.
    #[must_use]
    pub fn cards(&self) -> [(&'static str, u64); 4] {
        [
            ("Total Feedback", self.total_feedback),
            ("Reviewed", self.total_reviewed),
            ("Pending Review", self.total_unreviewed),
            ("Categories", self.category_stats.len() as u64),
        ]
    }
}

/// Per-category bucket inside [`Stats`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStat {
    #[serde(rename = "_id", alias = "category")]
    pub category: String,
    #[serde(default)]
    pub count: u64,
}

/// Body returned by `DELETE /feedback/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    #[serde(default)]
    pub message: Option<String>,
}

/// Render a submission time like `Jan 15, 2025, 10:30 AM` (UTC).
#[must_use]
pub fn format_submission_time(ts: OffsetDateTime) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]");
    let utc = ts.to_offset(time::UtcOffset::UTC);
    utc.format(format).unwrap_or_else(|_| utc.to_string())
}
