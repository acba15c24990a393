//! Proposal side panel: badge, body, and vote rows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered entirely from `ProposalState`, which is patched field-by-field
//! by `proposal_update` events. Votes arriving before any content are shown
//! as-is.

use leptos::prelude::*;

use events::{ParticipantId, ProposalStatus, Vote};

use crate::state::proposal::ProposalState;

/// Right-rail proposal panel.
#[component]
pub fn ProposalPanel() -> impl IntoView {
    let proposal = expect_context::<RwSignal<ProposalState>>();

    let badge = move || proposal.get().badge_label();
    let badge_class = move || match proposal.get().status {
        Some(ProposalStatus::Approved) => "proposal-panel__badge proposal-panel__badge--approved",
        Some(ProposalStatus::Voting) => "proposal-panel__badge proposal-panel__badge--voting",
        None => "proposal-panel__badge",
    };

    view! {
        <aside class="proposal-panel">
            <div class="proposal-panel__header">
                <span class="proposal-panel__title">"Proposal"</span>
                <Show when=move || badge().is_some()>
                    <span class=badge_class>{move || badge().unwrap_or_default()}</span>
                </Show>
            </div>

            <div class="proposal-panel__body">
                {move || match proposal.get().content {
                    Some(content) => {
                        view! { <div class="proposal-panel__content">{content}</div> }.into_any()
                    }
                    None => view! { <div class="proposal-panel__empty">"No proposal yet."</div> }
                        .into_any(),
                }}
            </div>

            <div class="proposal-panel__votes">
                {ParticipantId::ALL
                    .into_iter()
                    .map(|id| {
                        let vote = move || proposal.get().votes.get(&id).copied();
                        let row_class = move || match vote() {
                            Some(Vote::Support) => "vote-row vote-row--support",
                            Some(Vote::Oppose) => "vote-row vote-row--oppose",
                            None => "vote-row",
                        };
                        let result = move || match vote() {
                            Some(Vote::Support) => "✅ Support",
                            Some(Vote::Oppose) => "❌ Oppose",
                            None => "—",
                        };
                        view! {
                            <div class=row_class>
                                <span class="vote-row__name">{id.display_name()}</span>
                                <span class="vote-row__result">{result}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </aside>
    }
}
