//! State for the proposal side panel.
//!
//! DESIGN
//! ======
//! Updates patch only the fields they carry, so a vote arriving before any
//! proposal content is rendered as-is. No ordering validation happens here.

#[cfg(test)]
#[path = "proposal_test.rs"]
mod proposal_test;

use std::collections::BTreeMap;

use events::{ParticipantId, ProposalStatus, ProposalUpdate, Vote};

/// Side-panel state: badge, proposal body, and the vote map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProposalState {
    /// Badge status, absent until the first status-bearing update.
    pub status: Option<ProposalStatus>,
    /// Latest proposal body, absent until one arrives.
    pub content: Option<String>,
    /// Ballots received so far.
    pub votes: BTreeMap<ParticipantId, Vote>,
}

impl ProposalState {
    /// Patch the panel with whatever fields an update carries.
    pub fn apply_update(&mut self, update: &ProposalUpdate) {
        if let Some(status) = update.status {
            self.status = Some(status);
        }
        if let Some(content) = &update.content {
            self.content = Some(content.clone());
        }
        for (id, vote) in &update.votes {
            self.votes.insert(*id, *vote);
        }
    }

    /// Badge text, if a status has arrived.
    #[must_use]
    pub fn badge_label(&self) -> Option<&'static str> {
        self.status.map(ProposalStatus::label)
    }
}
