//! Anonymous feedback form for employees.

#[cfg(test)]
#[path = "employee_form_test.rs"]
mod employee_form_test;

use leptos::prelude::*;
use portal::form::MAX_FEEDBACK_CHARS;
use portal::{Category, FormState};

use crate::components::status_message::StatusBanner;
use crate::util::select;

fn counter_label(count: usize) -> String {
    format!("{count}/{MAX_FEEDBACK_CHARS}")
}

fn counter_class(near_limit: bool) -> &'static str {
    if near_limit { "char-counter char-counter--near-limit" } else { "char-counter" }
}

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Submitting..." } else { "Submit Feedback" }
}

#[component]
pub fn EmployeeFormPage() -> impl IntoView {
    let form = RwSignal::new(FormState::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(FormState::submit).flatten() else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create(&payload).await;
            // Switching views disposes the signal; a late reply is dropped.
            let _ = form.try_update(|f| f.apply_result(result));
        });
        #[cfg(not(feature = "csr"))]
        let _ = payload;
    };

    let category_options = Category::ALL
        .into_iter()
        .map(|category| view! { <option value=category.as_str()>{category.as_str()}</option> })
        .collect_view();

    view! {
        <section class="employee-form">
            <h2>"Share Your Feedback"</h2>
            <p class="employee-form__intro">
                "Submissions are anonymous. Pick a category and tell us what is on your mind."
            </p>
            <form class="employee-form__form" on:submit=on_submit>
                <label class="field-label" for="feedback-category">
                    "Category"
                </label>
                <select
                    id="feedback-category"
                    class="field-input"
                    prop:value=move || select::category_value(form.with(FormState::category))
                    on:change=move |ev| {
                        let category = select::category_from_value(&event_target_value(&ev));
                        form.update(|f| f.set_category(category));
                    }
                >
                    <option value="">"Select a category"</option>
                    {category_options}
                </select>
                <label class="field-label" for="feedback-text">
                    "Feedback"
                </label>
                <textarea
                    id="feedback-text"
                    class="field-input field-input--textarea"
                    rows="6"
                    maxlength=MAX_FEEDBACK_CHARS.to_string()
                    placeholder="Share your thoughts (at least 10 characters)"
                    prop:value=move || form.with(|f| f.text().to_owned())
                    on:input=move |ev| form.update(|f| f.set_text(event_target_value(&ev)))
                ></textarea>
                <div class=move || counter_class(form.with(FormState::near_limit))>
                    {move || counter_label(form.with(FormState::char_count))}
                </div>
                <button
                    type="submit"
                    class="btn btn--primary"
                    disabled=move || !form.with(FormState::can_submit)
                >
                    {move || submit_label(form.with(FormState::is_submitting))}
                </button>
            </form>
            <StatusBanner message=Signal::derive(move || form.with(|f| f.message().cloned())) />
        </section>
    }
}
