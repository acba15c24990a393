use super::*;
use crate::net::api::ApiError;
use crate::state::files::SelectedFile;
use crate::state::session::SessionStatus;
use events::StatusUpdate;
use std::collections::BTreeMap;

fn all_online() -> SessionState {
    let mut session = SessionState::default();
    session.apply_status_update(&StatusUpdate {
        all_status: ParticipantId::ALL.iter().map(|id| (*id, true)).collect::<BTreeMap<_, _>>(),
    });
    session
}

fn two_charts() -> FileQueue {
    let mut files = FileQueue::default();
    files.try_add(SelectedFile::from_meta("imgA.png", "image/png", 100.0));
    files.try_add(SelectedFile::from_meta("imgB.png", "image/png", 200.0));
    files
}

// =============================================================
// Start preconditions
// =============================================================

#[test]
fn start_requires_upload_phase_files_and_full_roster() {
    let session = all_online();
    let files = two_charts();
    assert!(can_start(&session, &files));

    assert!(!can_start(&SessionState::default(), &files));
    assert!(!can_start(&session, &FileQueue::default()));
}

#[test]
fn start_is_blocked_while_a_request_is_in_flight() {
    let mut session = all_online();
    let files = two_charts();
    session.begin_start();
    assert!(!can_start(&session, &files));
}

#[test]
fn start_is_blocked_when_a_member_drops_offline() {
    let mut session = all_online();
    let files = two_charts();
    session.apply_status_update(&StatusUpdate {
        all_status: BTreeMap::from([(ParticipantId::Codex, false)]),
    });
    assert!(!can_start(&session, &files));
}

// =============================================================
// Start outcomes drive the control state
// =============================================================

#[test]
fn successful_start_disables_the_start_control() {
    let mut session = all_online();
    let files = two_charts();
    session.begin_start();
    session.apply_start_outcome(&Ok(()));

    assert_eq!(session.phase, Phase::Running);
    assert_eq!(session.status, SessionStatus::Discussing);
    assert!(!can_start(&session, &files));
}

#[test]
fn failed_start_reenables_the_control_with_its_original_label() {
    let mut session = all_online();
    let files = two_charts();
    session.begin_start();
    assert_eq!(start_label(&session), "Starting...");

    session.apply_start_outcome(&Err(ApiError::Rejected("quota exceeded".to_owned())));
    assert_eq!(session.notice.as_ref().expect("notice").message, "quota exceeded");
    assert!(can_start(&session, &files));
    assert_eq!(start_label(&session), "Start discussion");
}

// =============================================================
// Hints and labels
// =============================================================

#[test]
fn blocked_hint_names_the_missing_precondition() {
    let session = all_online();
    assert_eq!(
        start_blocked_hint(&session, &FileQueue::default()),
        Some("Add at least one chart image")
    );

    let mut one_offline = all_online();
    one_offline.apply_status_update(&StatusUpdate {
        all_status: BTreeMap::from([(ParticipantId::Gemini, false)]),
    });
    assert_eq!(
        start_blocked_hint(&one_offline, &two_charts()),
        Some("All four members must be online")
    );
}

#[test]
fn no_hint_when_start_is_allowed_or_already_pending() {
    let session = all_online();
    assert_eq!(start_blocked_hint(&session, &two_charts()), None);

    let mut pending = all_online();
    pending.begin_start();
    assert_eq!(start_blocked_hint(&pending, &FileQueue::default()), None);
}

#[test]
fn activate_all_label_tracks_the_sequence() {
    let mut session = SessionState::default();
    assert_eq!(activate_all_label(&session), "Activate all members");

    session.activation_running = true;
    assert_eq!(activate_all_label(&session), "Activating...");

    session.activation_running = false;
    session.activation_done = true;
    assert_eq!(activate_all_label(&session), "Activation complete");
}

#[test]
fn activate_all_label_reads_complete_once_everyone_is_online() {
    let session = all_online();
    assert_eq!(activate_all_label(&session), "Activation complete");
}
