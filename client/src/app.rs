//! Root component: header with the view switcher, then the active page.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use portal::ViewKind;

use crate::components::header::Header;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::employee_form::EmployeeFormPage;

#[component]
pub fn App() -> impl IntoView {
    let active = RwSignal::new(ViewKind::default());

    // Switching rebuilds the page from scratch, so the form and dashboard
    // never carry state across a view change.
    let page = move || match active.get() {
        ViewKind::Employee => view! { <EmployeeFormPage /> }.into_any(),
        ViewKind::Admin => view! { <AdminDashboardPage /> }.into_any(),
    };

    view! {
        <div class="app">
            <Header active=active />
            <main class="app__main">{page}</main>
        </div>
    }
}
