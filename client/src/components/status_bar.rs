//! Header status bar: connection dot, session status chip, online badge.

use leptos::prelude::*;

use crate::state::session::{ConnectionStatus, SessionState};

/// Status bar under the page header.
#[component]
pub fn StatusBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let connection_class = move || match session.get().connection {
        ConnectionStatus::Connected => "status-bar__dot status-bar__dot--connected",
        ConnectionStatus::Connecting => "status-bar__dot status-bar__dot--connecting",
        ConnectionStatus::Disconnected => "status-bar__dot status-bar__dot--disconnected",
    };

    let connection_label = move || match session.get().connection {
        ConnectionStatus::Connected => "Connected",
        ConnectionStatus::Connecting => "Connecting...",
        ConnectionStatus::Disconnected => "Disconnected",
    };

    let status_label = move || session.get().status.label();
    let badge_class = move || {
        if session.get().all_online() {
            "status-bar__online status-bar__online--full"
        } else {
            "status-bar__online"
        }
    };

    view! {
        <div class="status-bar">
            <span class="status-bar__connection">
                <span class=connection_class></span>
                {connection_label}
            </span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__chip">{status_label}</span>
            <span class="status-bar__spacer"></span>
            <span class=badge_class>{move || format!("{} / 4 online", session.get().online_count())}</span>
        </div>
    }
}
