//! Dashboard table of feedback rows with per-row review and delete actions.
//!
//! DESIGN
//! ======
//! Rows are snapshotted into [`RowView`] values from the dashboard state so
//! the markup never borrows the signal while rendering. Delete is a two-step
//! action: the row's buttons are replaced by an inline confirmation while it
//! is the pending delete.

#[cfg(test)]
#[path = "feedback_table_test.rs"]
mod feedback_table_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use portal::dashboard::{DELETE_PROMPT, EMPTY, LOADING};
use portal::types::format_submission_time;
use portal::{DashboardState, Feedback};

/// Everything one table row displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub submitted: String,
    pub category: &'static str,
    pub text: String,
    pub reviewed: bool,
    pub can_review: bool,
    pub busy: bool,
    pub confirming: bool,
}

impl RowView {
    pub fn new(state: &DashboardState, row: &Feedback) -> Self {
        Self {
            id: row.id.clone(),
            submitted: format_submission_time(row.submission_time),
            category: row.category.as_str(),
            text: row.feedback.clone(),
            reviewed: row.is_reviewed,
            can_review: state.can_mark_reviewed(row),
            busy: state.is_in_flight(&row.id),
            confirming: state.pending_delete() == Some(row.id.as_str()),
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.reviewed { "Reviewed" } else { "Pending" }
    }
}

/// `category-badge--work-environment` style modifier for a category label.
pub fn category_badge_class(category: &str) -> String {
    format!("category-badge category-badge--{}", category.to_ascii_lowercase().replace(' ', "-"))
}

fn visible_row_views(state: &DashboardState) -> Vec<RowView> {
    state.visible_rows().into_iter().map(|row| RowView::new(state, row)).collect()
}

#[component]
pub fn FeedbackTable(
    state: RwSignal<DashboardState>,
    on_review: Callback<String>,
    on_delete: Callback<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let rows = move || {
        state
            .with(visible_row_views)
            .into_iter()
            .map(|row| feedback_row(row, on_review, on_delete, on_confirm, on_cancel))
            .collect_view()
    };

    view! {
        <Show
            when=move || !state.with(DashboardState::is_loading)
            fallback=|| view! { <p class="feedback-table__notice">{LOADING}</p> }
        >
            <Show
                when=move || !state.with(DashboardState::show_empty_state)
                fallback=|| view! { <p class="feedback-table__notice">{EMPTY}</p> }
            >
                <table class="feedback-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Category"</th>
                            <th>"Feedback"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </Show>
        </Show>
    }
}

fn feedback_row(
    row: RowView,
    on_review: Callback<String>,
    on_delete: Callback<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let status = row.status_label();
    let status_class = if row.reviewed { "status-pill status-pill--reviewed" } else { "status-pill status-pill--pending" };
    let RowView { id, submitted, category, text, can_review, busy, confirming, .. } = row;

    let actions = if confirming {
        view! {
            <span class="feedback-table__confirm">
                <span>{DELETE_PROMPT}</span>
                <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                    "Confirm"
                </button>
                <button class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </span>
        }
        .into_any()
    } else {
        let review_id = id.clone();
        let review = can_review.then(move || {
            view! {
                <button class="btn btn--review" on:click=move |_| on_review.run(review_id.clone())>
                    "Mark Reviewed"
                </button>
            }
        });
        view! {
            {review}
            <button class="btn btn--danger" disabled=busy on:click=move |_| on_delete.run(id.clone())>
                "Delete"
            </button>
        }
        .into_any()
    };

    view! {
        <tr class="feedback-table__row">
            <td class="feedback-table__date">{submitted}</td>
            <td>
                <span class=category_badge_class(category)>{category}</span>
            </td>
            <td class="feedback-table__text">{text}</td>
            <td>
                <span class=status_class>{status}</span>
            </td>
            <td class="feedback-table__actions">{actions}</td>
        </tr>
    }
}
