//! The single parliament workspace page.

use leptos::prelude::*;

use crate::components::activation_panel::ActivationPanel;
use crate::components::chat_panel::ChatPanel;
use crate::components::notice_banner::NoticeBanner;
use crate::components::participant_rail::ParticipantRail;
use crate::components::proposal_panel::ProposalPanel;
use crate::components::session_controls::{CompleteControls, RunningControls};
use crate::components::status_bar::StatusBar;
use crate::components::upload_panel::UploadPanel;
use crate::state::session::{Phase, SessionState};
use crate::util::format::header_date;

/// Workspace page: header, member rail, transcript, phase panel, proposal.
///
/// The center panel under the transcript is a pure function of the phase;
/// nothing else decides what is visible.
#[component]
pub fn ParliamentPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="parliament-page">
            <header class="parliament-header">
                <h1 class="parliament-header__title">"Project Parliament"</h1>
                <span class="parliament-header__date">{header_date()}</span>
            </header>
            <StatusBar/>
            <NoticeBanner/>

            <div class="parliament-layout">
                <ParticipantRail/>

                <main class="parliament-main">
                    <ChatPanel/>
                    {move || match session.get().phase {
                        Phase::Activation => view! { <ActivationPanel/> }.into_any(),
                        Phase::Upload => view! { <UploadPanel/> }.into_any(),
                        Phase::Running => view! { <RunningControls/> }.into_any(),
                        Phase::Complete => view! { <CompleteControls/> }.into_any(),
                    }}
                </main>

                <ProposalPanel/>
            </div>
        </div>
    }
}
