//! The client session controller: outbound actions and their state effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call into here; each action issues its REST request via
//! `spawn_local` and funnels the outcome back through the pure transition
//! methods on the state structs. Browser file handles backing the upload
//! queue are kept in a module-local store so signal state stays plain data.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use events::ParticipantId;
use leptos::prelude::RwSignal;

use crate::state::files::FileQueue;
use crate::state::session::{Phase, SessionState};

#[cfg(feature = "hydrate")]
use leptos::prelude::{GetUntracked, Update};

#[cfg(feature = "hydrate")]
use crate::state::files::{AddOutcome, MAX_FILES, SelectedFile};
#[cfg(feature = "hydrate")]
use crate::state::session::{LinkState, Notice};

/// Milliseconds between consecutive activations in [`activate_all`].
/// Cosmetic pacing, not a timeout.
pub const ACTIVATION_PACING_MS: u64 = 400;

/// Prompt shown before a stop request is sent.
pub const STOP_CONFIRM_PROMPT: &str = "End the discussion and discard all session data?";

#[cfg(feature = "hydrate")]
thread_local! {
    /// Browser file handles, index-aligned with the `FileQueue` entries.
    static FILE_BLOBS: std::cell::RefCell<Vec<web_sys::File>> =
        const { std::cell::RefCell::new(Vec::new()) };
}

/// True when the start action is currently allowed: upload phase, at least
/// one chart selected, every participant online, and no start in flight.
#[must_use]
pub fn can_start(session: &SessionState, files: &FileQueue) -> bool {
    session.phase == Phase::Upload
        && !files.is_empty()
        && session.all_online()
        && !session.start_pending
}

/// Label for the start control.
#[must_use]
pub fn start_label(session: &SessionState) -> &'static str {
    if session.start_pending { "Starting..." } else { "Start discussion" }
}

/// Hint shown under a blocked start control, if any.
#[must_use]
pub fn start_blocked_hint(session: &SessionState, files: &FileQueue) -> Option<&'static str> {
    if session.phase != Phase::Upload || session.start_pending {
        None
    } else if files.is_empty() {
        Some("Add at least one chart image")
    } else if !session.all_online() {
        Some("All four members must be online")
    } else {
        None
    }
}

/// Label for the activate-all control.
#[must_use]
pub fn activate_all_label(session: &SessionState) -> &'static str {
    if session.activation_running {
        "Activating..."
    } else if session.activation_done || session.all_online() {
        "Activation complete"
    } else {
        "Activate all members"
    }
}

/// Activate a single participant from its roster slot. No-op when already
/// online.
pub fn activate_participant(session: RwSignal<SessionState>, id: ParticipantId) {
    #[cfg(feature = "hydrate")]
    {
        if session.get_untracked().links.get(&id).copied() == Some(LinkState::Online) {
            return;
        }
        session.update(|s| s.begin_activation(id));
        leptos::task::spawn_local(async move {
            let result = crate::net::api::activate_participant(id).await;
            session.update(|s| s.apply_activation_result(id, &result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
    }
}

/// Activate all four participants in roster order with fixed pacing between
/// steps. Already-online participants are cycled too; the server treats
/// activation as idempotent. There is no cancellation; navigating away
/// abandons the remaining steps.
pub fn activate_all(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        if session.get_untracked().activation_running {
            return;
        }
        session.update(|s| s.activation_running = true);
        leptos::task::spawn_local(async move {
            for (step, id) in ParticipantId::ALL.into_iter().enumerate() {
                if step > 0 {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(
                        ACTIVATION_PACING_MS,
                    ))
                    .await;
                }
                session.update(|s| s.begin_activation(id));
                let result = crate::net::api::activate_participant(id).await;
                session.update(|s| s.apply_activation_result(id, &result));
            }
            session.update(|s| {
                s.activation_running = false;
                s.activation_done = true;
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Add picked or dropped files to the upload queue, surfacing rejections as
/// notices instead of dropping them silently.
#[cfg(feature = "hydrate")]
pub fn add_files(
    session: RwSignal<SessionState>,
    files: RwSignal<FileQueue>,
    picked: Vec<web_sys::File>,
) {
    for file in picked {
        let mut selected = SelectedFile::from_meta(file.name(), file.type_(), file.size());
        selected.preview_url = web_sys::Url::create_object_url_with_blob(&file).ok();
        let name = selected.name.clone();
        let preview = selected.preview_url.clone();

        let outcome = files
            .try_update(|queue| queue.try_add(selected))
            .unwrap_or(AddOutcome::QueueFull);
        match outcome {
            AddOutcome::Added => FILE_BLOBS.with(|blobs| blobs.borrow_mut().push(file)),
            AddOutcome::NotAnImage => {
                revoke_preview(preview);
                session.update(|s| {
                    s.notice = Some(Notice::file_rejected(format!(
                        "\"{name}\" is not an image and was skipped"
                    )));
                });
            }
            AddOutcome::QueueFull => {
                revoke_preview(preview);
                session.update(|s| {
                    s.notice = Some(Notice::file_rejected(format!(
                        "chart limit of {MAX_FILES} reached; \"{name}\" was skipped"
                    )));
                });
            }
        }
    }
}

/// Remove one selected chart, its blob, and its preview URL.
pub fn remove_file(files: RwSignal<FileQueue>, index: usize) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(removed) = files.try_update(|queue| queue.remove(index)).flatten() {
            revoke_preview(removed.preview_url);
            FILE_BLOBS.with(|blobs| {
                let mut blobs = blobs.borrow_mut();
                if index < blobs.len() {
                    blobs.remove(index);
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (files, index);
    }
}

#[cfg(feature = "hydrate")]
fn revoke_preview(url: Option<String>) {
    if let Some(url) = url {
        let _ = web_sys::Url::revoke_object_url(&url);
    }
}

/// Start the discussion with the selected charts.
pub fn start_session(session: RwSignal<SessionState>, files: RwSignal<FileQueue>) {
    #[cfg(feature = "hydrate")]
    {
        if !can_start(&session.get_untracked(), &files.get_untracked()) {
            return;
        }
        let names: Vec<String> = files
            .get_untracked()
            .entries
            .iter()
            .map(|entry| entry.name.clone())
            .collect();
        let charts: Vec<(String, web_sys::File)> =
            FILE_BLOBS.with(|blobs| names.into_iter().zip(blobs.borrow().iter().cloned()).collect());

        session.update(|s| s.begin_start());
        leptos::task::spawn_local(async move {
            let result = crate::net::api::start_discussion(&charts).await;
            session.update(|s| s.apply_start_outcome(&result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, files);
    }
}

/// Stop the discussion after user confirmation. Reloads the page regardless
/// of the request outcome.
pub fn stop_session(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        if session.get_untracked().stop_pending || !crate::util::browser::confirm(STOP_CONFIRM_PROMPT)
        {
            return;
        }
        session.update(|s| s.stop_pending = true);
        leptos::task::spawn_local(async move {
            if let Err(error) = crate::net::api::stop_discussion().await {
                leptos::logging::warn!("stop request failed: {error}");
            }
            crate::util::browser::reload();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Navigate to the report download endpoint. Failures are whatever the
/// browser surfaces for a navigation.
pub fn download_report() {
    crate::util::browser::navigate(crate::net::api::report_download_url());
}
