//! Shared feedback-portal model and view-state machines.
//!
//! This crate owns everything both front ends agree on: the REST wire types,
//! the query-state value, response decoding, and the submission form,
//! dashboard, and view-switcher state machines. It performs no I/O. The
//! native CLI (`feedback-portal`) and the browser client (`client`) each
//! bring their own HTTP transport and feed results back in.

pub mod api;
pub mod dashboard;
pub mod form;
pub mod message;
pub mod query;
pub mod shell;
pub mod types;

pub use api::{ApiError, ApiRequest, Method};
pub use dashboard::{DashboardState, Effect, RequestToken};
pub use form::{FormState, ValidationError};
pub use message::{MessageKind, StatusMessage};
pub use query::ListQuery;
pub use shell::{Shell, ViewKind};
pub use types::{Category, Feedback, FeedbackList, NewFeedback, PageLimit, ReviewFilter, SortOrder, Stats};
