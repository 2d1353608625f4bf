//! Anonymous submission form state machine.
//!
//! Phases: `Editing` -> `Submitting` -> `Editing`. [`FormState::submit`]
//! validates locally and, only when validation passes, hands back the single
//! create payload for the driver to send. The driver reports the outcome via
//! [`FormState::apply_result`]: success clears the fields, failure keeps them
//! so the user can retry without retyping.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::api::ApiError;
use crate::message::StatusMessage;
use crate::types::{Category, Feedback, NewFeedback};

pub const MIN_FEEDBACK_CHARS: usize = 10;
pub const MAX_FEEDBACK_CHARS: usize = 1000;
/// Counter switches to its warning style past this many characters.
pub const NEAR_LIMIT_CHARS: usize = 900;

pub const SUBMIT_SUCCESS: &str = "Thank you! Your feedback has been submitted successfully.";
pub const SUBMIT_FAILED: &str = "Failed to submit feedback. Please try again.";

/// Local, pre-network rejection of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Feedback must be at least 10 characters long")]
    TooShort,
    #[error("Feedback must be at most 1000 characters long")]
    TooLong,
}

/// Check a submission in the same order the form reports problems.
///
/// The returned payload carries the text exactly as entered.
///
/// # Errors
///
/// Returns the first [`ValidationError`] that applies.
pub fn validate(category: Option<Category>, text: &str) -> Result<NewFeedback, ValidationError> {
    let trimmed = text.trim();
    let Some(category) = category.filter(|_| !trimmed.is_empty()) else {
        return Err(ValidationError::MissingFields);
    };
    let chars = trimmed.chars().count();
    if chars < MIN_FEEDBACK_CHARS {
        return Err(ValidationError::TooShort);
    }
    if chars > MAX_FEEDBACK_CHARS {
        return Err(ValidationError::TooLong);
    }
    Ok(NewFeedback { feedback: text.to_owned(), category })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
}

/// Field values, phase, and the last status message of the form.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    category: Option<Category>,
    text: String,
    phase: FormPhase,
    message: Option<StatusMessage>,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    #[must_use]
    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.category.is_some() && !self.text.trim().is_empty()
    }

    /// Raw character count for the `n/1000` counter.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn near_limit(&self) -> bool {
        self.char_count() > NEAR_LIMIT_CHARS
    }

    /// Validate and enter `Submitting`.
    ///
    /// Returns the create payload to send, or `None` when validation failed
    /// (an error message is set) or a submission is already in flight.
    pub fn submit(&mut self) -> Option<NewFeedback> {
        if self.is_submitting() {
            return None;
        }
        match validate(self.category, &self.text) {
            Ok(payload) => {
                self.phase = FormPhase::Submitting;
                self.message = None;
                Some(payload)
            }
            Err(error) => {
                tracing::debug!(%error, "feedback submission rejected locally");
                self.message = Some(StatusMessage::error(error.to_string()));
                None
            }
        }
    }

    pub fn dismiss_message(&mut self) {
        self.message = None;
    }

    /// Record the outcome of the create call and return to `Editing`.
    pub fn apply_result(&mut self, result: Result<Feedback, ApiError>) {
        self.phase = FormPhase::Editing;
        match result {
            Ok(created) => {
                tracing::info!(id = %created.id, category = %created.category, "feedback submitted");
                self.category = None;
                self.text.clear();
                self.message = Some(StatusMessage::success(SUBMIT_SUCCESS));
            }
            Err(error) => {
                tracing::warn!(%error, status = ?error.status, "feedback submission failed");
                let text = if error.message.is_empty() { SUBMIT_FAILED.to_owned() } else { error.message };
                self.message = Some(StatusMessage::error(text));
            }
        }
    }
}
