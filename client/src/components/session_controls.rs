//! Phase controls for a running and a completed session.

use leptos::prelude::*;

use crate::controller;
use crate::state::session::SessionState;

/// Stop control shown while the discussion is running.
#[component]
pub fn RunningControls() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let label = move || if session.get().stop_pending { "Stopping..." } else { "End discussion" };
    let disabled = move || session.get().stop_pending;

    view! {
        <div class="session-controls">
            <p class="session-controls__note">
                "The members are reviewing the charts. A proposal will appear in the side panel once drafted."
            </p>
            <button
                class="btn btn--danger"
                disabled=disabled
                on:click=move |_| controller::stop_session(session)
            >
                {label}
            </button>
        </div>
    }
}

/// Download control shown once the final report is ready.
#[component]
pub fn CompleteControls() -> impl IntoView {
    view! {
        <div class="session-controls">
            <p class="session-controls__note">"The final report has been submitted."</p>
            <button class="btn btn--primary" on:click=move |_| controller::download_report()>
                "Download report"
            </button>
        </div>
    }
}
