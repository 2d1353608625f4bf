//! Admin review dashboard: filters, stats, table, and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`DashboardState`] decides what to fetch; this page only executes the
//! returned effects. Each effect runs in its own task and feeds its result
//! back through the matching `apply_*` call, which drops replies that a newer
//! request has superseded. Follow-up effects (the refetch after a review or
//! delete) are dispatched the same way.

use leptos::prelude::*;
use portal::dashboard::{DashboardState, Effect};
use portal::{Category, PageLimit, ReviewFilter, SortOrder};

use crate::components::feedback_table::FeedbackTable;
use crate::components::pagination::PaginationBar;
use crate::components::stats_cards::StatsCards;
use crate::components::status_message::StatusBanner;
use crate::util::select;

/// Apply `op` to the dashboard and run whatever it asks for.
fn act(state: RwSignal<DashboardState>, op: impl FnOnce(&mut DashboardState) -> Vec<Effect>) {
    let effects = state.try_update(op).unwrap_or_default();
    dispatch(state, effects);
}

fn dispatch(state: RwSignal<DashboardState>, effects: Vec<Effect>) {
    #[cfg(feature = "csr")]
    for effect in effects {
        leptos::task::spawn_local(async move {
            let follow_up = run_effect(state, effect).await;
            dispatch(state, follow_up);
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (state, effects);
}

/// Execute one effect. `try_update` returns `None` once the page is gone,
/// so a reply arriving after a view switch is discarded.
#[cfg(feature = "csr")]
async fn run_effect(state: RwSignal<DashboardState>, effect: Effect) -> Vec<Effect> {
    use crate::net::api;

    match effect {
        Effect::FetchList { token, query } => {
            let result = api::list(&query).await;
            let _ = state.try_update(|s| s.apply_list(token, result));
            Vec::new()
        }
        Effect::FetchStats { token } => {
            let result = api::stats().await;
            let _ = state.try_update(|s| s.apply_stats(token, result));
            Vec::new()
        }
        Effect::MarkReviewed { id } => {
            let result = api::mark_reviewed(&id).await;
            state.try_update(|s| s.apply_mark_reviewed(&id, result)).unwrap_or_default()
        }
        Effect::Delete { id } => {
            let result = api::delete(&id).await;
            state.try_update(|s| s.apply_delete(&id, result)).unwrap_or_default()
        }
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let mut initial = DashboardState::new();
    let mount = initial.mount();
    let state = RwSignal::new(initial);
    dispatch(state, mount);

    let on_review = Callback::new(move |id: String| {
        let effect = state.try_update(|s| s.mark_reviewed(&id)).flatten();
        dispatch(state, effect.into_iter().collect());
    });
    let on_delete = Callback::new(move |id: String| {
        let _ = state.try_update(|s| s.request_delete(&id));
    });
    let on_confirm = Callback::new(move |()| {
        let effect = state.try_update(DashboardState::confirm_delete).flatten();
        dispatch(state, effect.into_iter().collect());
    });
    let on_cancel = Callback::new(move |()| state.update(DashboardState::cancel_delete));
    let on_previous = Callback::new(move |()| act(state, DashboardState::previous_page));
    let on_next = Callback::new(move |()| act(state, DashboardState::next_page));
    let on_dismiss = Callback::new(move |()| state.update(DashboardState::dismiss_message));

    let category_options = Category::ALL
        .into_iter()
        .map(|category| view! { <option value=category.as_str()>{category.as_str()}</option> })
        .collect_view();
    let review_options = ReviewFilter::ALL
        .into_iter()
        .map(|filter| view! { <option value=select::review_value(filter)>{filter.label()}</option> })
        .collect_view();
    let limit_options = PageLimit::ALL
        .into_iter()
        .map(|limit| view! { <option value=limit.to_string()>{limit.label()}</option> })
        .collect_view();
    let sort_options = SortOrder::ALL
        .into_iter()
        .map(|sort| view! { <option value=sort.as_str()>{sort.label()}</option> })
        .collect_view();

    view! {
        <section class="dashboard">
            <h2>"Feedback Dashboard"</h2>
            <StatusBanner
                message=Signal::derive(move || state.with(|s| s.message().cloned()))
                on_dismiss=on_dismiss
            />
            <StatsCards stats=Signal::derive(move || state.with(|s| s.stats().cloned())) />
            <div class="dashboard__filters">
                <select
                    class="field-input"
                    aria-label="Category"
                    prop:value=move || select::category_value(state.with(|s| s.query().category))
                    on:change=move |ev| {
                        let category = select::category_from_value(&event_target_value(&ev));
                        act(state, |s| s.set_category(category));
                    }
                >
                    <option value="">"All Categories"</option>
                    {category_options}
                </select>
                <select
                    class="field-input"
                    aria-label="Review status"
                    prop:value=move || select::review_value(state.with(|s| s.query().reviewed))
                    on:change=move |ev| {
                        let reviewed = select::review_from_value(&event_target_value(&ev));
                        act(state, |s| s.set_reviewed(reviewed));
                    }
                >
                    {review_options}
                </select>
                <select
                    class="field-input"
                    aria-label="Page size"
                    prop:value=move || state.with(|s| s.query().limit.to_string())
                    on:change=move |ev| {
                        let limit = select::limit_from_value(&event_target_value(&ev));
                        act(state, |s| s.set_limit(limit));
                    }
                >
                    {limit_options}
                </select>
                <select
                    class="field-input"
                    aria-label="Sort order"
                    prop:value=move || select::sort_value(state.with(|s| s.query().sort))
                    on:change=move |ev| {
                        let sort = select::sort_from_value(&event_target_value(&ev));
                        act(state, |s| s.set_sort(sort));
                    }
                >
                    <option value="">"Default Order"</option>
                    {sort_options}
                </select>
                <input
                    class="field-input dashboard__search"
                    type="search"
                    placeholder="Search this page..."
                    prop:value=move || state.with(|s| s.search().to_owned())
                    on:input=move |ev| state.update(|s| s.set_search(event_target_value(&ev)))
                />
                <button class="btn" on:click=move |_| act(state, DashboardState::refresh)>
                    "Refresh"
                </button>
            </div>
            <Show when=move || state.with(|s| s.search_summary().is_some())>
                <p class="dashboard__search-summary">
                    {move || state.with(|s| s.search_summary().unwrap_or_default())}
                </p>
            </Show>
            <FeedbackTable
                state=state
                on_review=on_review
                on_delete=on_delete
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
            <PaginationBar state=state on_previous=on_previous on_next=on_next />
        </section>
    }
}
