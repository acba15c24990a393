//! Activation-phase panel with the activate-all control.

use leptos::prelude::*;

use crate::controller;
use crate::state::session::SessionState;

/// Panel shown until all four members are online.
#[component]
pub fn ActivationPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let label = move || controller::activate_all_label(&session.get());
    let disabled = move || {
        let state = session.get();
        state.activation_running || state.all_online()
    };

    view! {
        <div class="activation-panel">
            <p class="activation-panel__intro">
                "All four members must be online before charts can be submitted. "
                "Activate them together, or click a member in the rail to bring one online."
            </p>
            <button
                class="btn btn--primary activation-panel__all"
                disabled=disabled
                on:click=move |_| controller::activate_all(session)
            >
                {label}
            </button>
            <p class="activation-panel__count">
                {move || format!("{} / 4 online", session.get().online_count())}
            </p>
        </div>
    }
}
