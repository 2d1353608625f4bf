//! Top bar with the portal title, view tabs, and API connectivity.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use portal::ViewKind;

/// Result of probing the API root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connection {
    Checking,
    Connected,
    Unreachable,
}

impl Connection {
    pub fn from_probe(reachable: bool) -> Self {
        if reachable { Self::Connected } else { Self::Unreachable }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Checking => "Checking API...",
            Self::Connected => "API connected",
            Self::Unreachable => "API unreachable",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Checking => "connection connection--checking",
            Self::Connected => "connection connection--ok",
            Self::Unreachable => "connection connection--down",
        }
    }
}

/// Header bar. Clicking a tab sets `active`, including the tab already
/// shown, which reloads that page.
#[component]
pub fn Header(active: RwSignal<ViewKind>) -> impl IntoView {
    let connection = RwSignal::new(Connection::Checking);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let reachable = crate::net::api::check_connection().await;
        connection.set(Connection::from_probe(reachable));
    });

    let tabs = ViewKind::ALL
        .into_iter()
        .map(|view| {
            view! {
                <button
                    class="view-tab"
                    class:view-tab--active=move || active.get() == view
                    on:click=move |_| active.set(view)
                >
                    {view.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <header class="header">
            <h1 class="header__title">"Employee Feedback Portal"</h1>
            <nav class="header__tabs">{tabs}</nav>
            <span class=move || connection.get().class()>{move || connection.get().label()}</span>
        </header>
    }
}
