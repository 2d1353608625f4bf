//! Previous/next controls under the dashboard table.

use leptos::prelude::*;
use portal::DashboardState;

/// Shown only when the result spans more than one page.
#[component]
pub fn PaginationBar(
    state: RwSignal<DashboardState>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let label = move || state.with(|s| s.pagination().map(|p| p.label()).unwrap_or_default());

    view! {
        <Show when=move || state.with(DashboardState::show_pagination)>
            <nav class="pagination">
                <button
                    class="btn"
                    disabled=move || !state.with(DashboardState::can_go_previous)
                    on:click=move |_| on_previous.run(())
                >
                    "Previous"
                </button>
                <span class="pagination__label">{label}</span>
                <button
                    class="btn"
                    disabled=move || !state.with(DashboardState::can_go_next)
                    on:click=move |_| on_next.run(())
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
