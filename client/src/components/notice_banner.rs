//! Single surface for user-facing action failures.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Dismissible banner showing the current notice, if any.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show when=move || session.get().notice.is_some()>
            <div class="notice-banner">
                <span class="notice-banner__text">
                    {move || session.get().notice.map(|notice| notice.message).unwrap_or_default()}
                </span>
                <button
                    class="notice-banner__dismiss"
                    on:click=move |_| session.update(SessionState::clear_notice)
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
