//! Summary cards above the dashboard table.

use leptos::prelude::*;
use portal::Stats;

/// Hidden until the first stats response arrives.
#[component]
pub fn StatsCards(#[prop(into)] stats: Signal<Option<Stats>>) -> impl IntoView {
    move || {
        stats.get().map(|stats| {
            let cards = stats
                .cards()
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="stats-card">
                            <span class="stats-card__value">{value}</span>
                            <span class="stats-card__label">{label}</span>
                        </div>
                    }
                })
                .collect_view();
            view! { <div class="stats-cards">{cards}</div> }
        })
    }
}
