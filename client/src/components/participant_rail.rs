//! Left rail with one slot per participant.
//!
//! Clicking an offline slot activates that participant individually; the
//! activate-all control lives in the activation panel.

use leptos::prelude::*;

use events::ParticipantId;

use crate::controller;
use crate::state::session::{LinkState, SessionState};

/// Member roster with activation indicators.
#[component]
pub fn ParticipantRail() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <aside class="participant-rail">
            <div class="participant-rail__heading">"Members"</div>
            {ParticipantId::ALL
                .into_iter()
                .map(|id| {
                    let link = move || session.get().links.get(&id).copied().unwrap_or_default();
                    let indicator_class = move || match link() {
                        LinkState::Online => "indicator indicator--online",
                        LinkState::Connecting => "indicator indicator--connecting",
                        LinkState::Offline => "indicator indicator--offline",
                    };
                    let title = move || match link() {
                        LinkState::Online => "Online",
                        LinkState::Connecting => "Activating...",
                        LinkState::Offline => "Offline. Click to activate.",
                    };
                    let avatar_style = format!("background:{};", id.color());
                    view! {
                        <button
                            class="participant-rail__slot"
                            title=title
                            on:click=move |_| controller::activate_participant(session, id)
                        >
                            <span class="participant-rail__avatar" style=avatar_style>{id.icon()}</span>
                            <span class="participant-rail__name">{id.display_name()}</span>
                            <span class=indicator_class></span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </aside>
    }
}
