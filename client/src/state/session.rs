//! Session state for the parliament workspace.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the explicit session-state object the rest of the client renders
//! from: the UI phase, the coarse status chip, the participant link map, and
//! the single notice surface every failed action reports through. Phase
//! transitions are one-directional and driven only by inbound events and
//! action outcomes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeMap;

use events::{ParticipantId, ProposalStatus, StatusUpdate};

use crate::net::api::ApiError;

/// Coarse UI mode gating which center panel is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for all four participants to come online.
    #[default]
    Activation,
    /// Chart selection and discussion start.
    Upload,
    /// Discussion in progress.
    Running,
    /// Final report available for download.
    Complete,
}

/// Session status shown in the header chip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Waiting,
    Standby,
    Discussing,
    Voting,
    Reviewing,
    Complete,
}

impl SessionStatus {
    /// Chip text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Waiting => "Waiting for activation",
            Self::Standby => "All members standing by",
            Self::Discussing => "In discussion",
            Self::Voting => "Voting",
            Self::Reviewing => "Under review",
            Self::Complete => "Report submitted",
        }
    }
}

/// Push-channel connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; socket is closed or not yet opened.
    #[default]
    Disconnected,
    /// WebSocket handshake is in progress.
    Connecting,
    /// WebSocket is open.
    Connected,
}

/// Per-participant activation indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkState {
    #[default]
    Offline,
    /// An activation request for this participant is in flight.
    Connecting,
    Online,
}

/// What a surfaced notice is about; decides the banner styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    ActivationFailed,
    StartFailed,
    FileRejected,
}

/// A user-facing failure message. One surface for every action, instead of
/// the scattered alert/log/silent mix the original UI had.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn activation_failed(id: ParticipantId, error: &ApiError) -> Self {
        Self {
            kind: NoticeKind::ActivationFailed,
            message: format!("{} failed to come online: {error}", id.display_name()),
        }
    }

    #[must_use]
    pub fn start_failed(error: &ApiError) -> Self {
        Self { kind: NoticeKind::StartFailed, message: error.to_string() }
    }

    #[must_use]
    pub fn file_rejected(message: String) -> Self {
        Self { kind: NoticeKind::FileRejected, message }
    }
}

/// Session-level state: phase, status chip, connection, and participant links.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Which center panel is visible.
    pub phase: Phase,
    /// Header chip status.
    pub status: SessionStatus,
    /// Push-channel lifecycle state.
    pub connection: ConnectionStatus,
    /// Activation indicator per participant.
    pub links: BTreeMap<ParticipantId, LinkState>,
    /// True while the activate-all sequence is running.
    pub activation_running: bool,
    /// True once the activate-all sequence has finished at least once.
    pub activation_done: bool,
    /// True while a start request is in flight.
    pub start_pending: bool,
    /// True while a stop request is in flight (the page reloads after).
    pub stop_pending: bool,
    /// Current user-facing failure, if any.
    pub notice: Option<Notice>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: Phase::default(),
            status: SessionStatus::default(),
            connection: ConnectionStatus::default(),
            links: ParticipantId::ALL.iter().map(|id| (*id, LinkState::Offline)).collect(),
            activation_running: false,
            activation_done: false,
            start_pending: false,
            stop_pending: false,
            notice: None,
        }
    }
}

impl SessionState {
    /// Number of participants currently online.
    #[must_use]
    pub fn online_count(&self) -> usize {
        self.links.values().filter(|link| **link == LinkState::Online).count()
    }

    /// True when every one of the four participants is online.
    #[must_use]
    pub fn all_online(&self) -> bool {
        ParticipantId::ALL
            .iter()
            .all(|id| self.links.get(id).copied() == Some(LinkState::Online))
    }

    /// Apply an inbound status snapshot. Moving to the upload phase happens
    /// here and only here: exactly when all four are online and the session
    /// is still in the activation phase.
    pub fn apply_status_update(&mut self, update: &StatusUpdate) {
        for (id, online) in &update.all_status {
            let link = if *online { LinkState::Online } else { LinkState::Offline };
            self.links.insert(*id, link);
        }
        if self.all_online() && self.phase == Phase::Activation {
            self.phase = Phase::Upload;
            self.status = SessionStatus::Standby;
        }
    }

    /// Mark a participant's indicator while its activation request is in
    /// flight.
    pub fn begin_activation(&mut self, id: ParticipantId) {
        self.links.insert(id, LinkState::Connecting);
    }

    /// Record the outcome of one activation request. Failures surface as a
    /// notice; the phase is left to inbound status snapshots.
    pub fn apply_activation_result(&mut self, id: ParticipantId, result: &Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.links.insert(id, LinkState::Online);
            }
            Err(error) => {
                self.links.insert(id, LinkState::Offline);
                self.notice = Some(Notice::activation_failed(id, error));
            }
        }
    }

    /// Mark the start request as in flight and clear stale notices.
    pub fn begin_start(&mut self) {
        self.start_pending = true;
        self.notice = None;
    }

    /// Record the outcome of a start request.
    pub fn apply_start_outcome(&mut self, result: &Result<(), ApiError>) {
        self.start_pending = false;
        match result {
            Ok(()) => {
                self.phase = Phase::Running;
                self.status = SessionStatus::Discussing;
                self.notice = None;
            }
            Err(error) => {
                self.notice = Some(Notice::start_failed(error));
            }
        }
    }

    /// A proposal-typed chat message opens the ballot.
    pub fn note_proposal_message(&mut self) {
        self.status = SessionStatus::Voting;
    }

    /// A proposal badge change moves the chip alongside it.
    pub fn note_proposal_status(&mut self, status: ProposalStatus) {
        self.status = match status {
            ProposalStatus::Voting => SessionStatus::Voting,
            ProposalStatus::Approved => SessionStatus::Reviewing,
        };
    }

    /// The final report is ready: force the complete phase from wherever the
    /// session currently is. Idempotent.
    pub fn apply_final_report_ready(&mut self) {
        self.phase = Phase::Complete;
        self.status = SessionStatus::Complete;
    }

    /// Drop the current notice.
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}
