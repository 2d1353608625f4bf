//! Effect runner: drives the `portal` state machines against a [`FeedbackApi`].
//!
//! Effects are executed one at a time in the order they were emitted. Results
//! go straight back into the state machine, and any follow-up effects it
//! returns (the refetch after a mutation) are queued behind the rest.

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;

use std::collections::VecDeque;

use portal::dashboard::{DashboardState, Effect};
use portal::form::FormState;

use crate::api::FeedbackApi;

/// Run `effects` and everything they lead to until the queue drains.
pub async fn run_effects<A>(api: &A, dashboard: &mut DashboardState, effects: Vec<Effect>)
where
    A: FeedbackApi + ?Sized,
{
    let mut queue: VecDeque<Effect> = effects.into();
    while let Some(effect) = queue.pop_front() {
        match effect {
            Effect::FetchList { token, query } => {
                let result = api.list(&query).await;
                dashboard.apply_list(token, result);
            }
            Effect::FetchStats { token } => {
                let result = api.stats().await;
                dashboard.apply_stats(token, result);
            }
            Effect::MarkReviewed { id } => {
                let result = api.mark_reviewed(&id).await;
                queue.extend(dashboard.apply_mark_reviewed(&id, result));
            }
            Effect::Delete { id } => {
                let result = api.delete(&id).await;
                queue.extend(dashboard.apply_delete(&id, result));
            }
        }
    }
}

/// Submit the form. Returns `true` when a create call was made.
pub async fn submit_form<A>(api: &A, form: &mut FormState) -> bool
where
    A: FeedbackApi + ?Sized,
{
    let Some(payload) = form.submit() else {
        return false;
    };
    let result = api.create(&payload).await;
    form.apply_result(result);
    true
}
