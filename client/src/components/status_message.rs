//! Success/error banner for the last completed action.

use leptos::prelude::*;
use portal::{MessageKind, StatusMessage};

fn banner_class(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Success => "status-banner status-banner--success",
        MessageKind::Error => "status-banner status-banner--error",
        MessageKind::Info => "status-banner status-banner--info",
    }
}

/// Renders nothing while `message` is `None`. A dismiss button is shown only
/// when `on_dismiss` is given.
#[component]
pub fn StatusBanner(
    #[prop(into)] message: Signal<Option<StatusMessage>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            let dismiss = on_dismiss.map(|on_dismiss| {
                view! {
                    <button
                        class="status-banner__dismiss"
                        aria-label="Dismiss"
                        on:click=move |_| on_dismiss.run(())
                    >
                        "×"
                    </button>
                }
            });
            view! {
                <div class=banner_class(msg.kind) role="status">
                    <span class="status-banner__text">{msg.text}</span>
                    {dismiss}
                </div>
            }
        })
    }
}
