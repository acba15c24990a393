//! WebSocket push client for the realtime event channel.
//!
//! Manages the socket lifecycle: connect, decode, dispatch, reconnect with
//! exponential backoff. It is the only inbound path into client state, and
//! every payload is routed to a pure transition method on the owning state
//! struct, so the transitions stay natively testable.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since
//! it requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Undecodable envelopes are logged and skipped; transport failures feed the
//! reconnect loop so the realtime UX recovers on its own.

#[cfg(test)]
#[path = "push_client_test.rs"]
mod push_client_test;

#[cfg(feature = "hydrate")]
use events::{Event, MessageKind};
#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

#[cfg(feature = "hydrate")]
use crate::state::chat::ChatState;
#[cfg(feature = "hydrate")]
use crate::state::proposal::ProposalState;
#[cfg(feature = "hydrate")]
use crate::state::session::{ConnectionStatus, SessionState};

#[cfg(any(test, feature = "hydrate"))]
const INITIAL_BACKOFF_MS: u32 = 1_000;
#[cfg(any(test, feature = "hydrate"))]
const MAX_BACKOFF_MS: u32 = 10_000;

/// Reconnect delay following `current`, doubling up to the cap.
#[cfg(any(test, feature = "hydrate"))]
fn next_backoff_ms(current: u32) -> u32 {
    (current * 2).min(MAX_BACKOFF_MS)
}

/// WebSocket URL for the event channel, derived from the page location.
#[cfg(any(test, feature = "hydrate"))]
fn events_url(href: &str, host: &str) -> String {
    let proto = if href.starts_with("https") { "wss" } else { "ws" };
    format!("{proto}://{host}/api/events")
}

/// Spawn the push-channel lifecycle as a local async task.
///
/// Connects to the server, dispatches incoming events, and reconnects on
/// disconnect with exponential backoff.
#[cfg(feature = "hydrate")]
pub fn spawn_push_client(
    session: RwSignal<SessionState>,
    chat: RwSignal<ChatState>,
    proposal: RwSignal<ProposalState>,
) {
    leptos::task::spawn_local(push_client_loop(session, chat, proposal));
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn push_client_loop(
    session: RwSignal<SessionState>,
    chat: RwSignal<ChatState>,
    proposal: RwSignal<ProposalState>,
) {
    let mut backoff_ms = INITIAL_BACKOFF_MS;

    loop {
        session.update(|s| s.connection = ConnectionStatus::Connecting);

        let href = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        let url = events_url(&href, &host);

        match connect_and_run(&url, session, chat, proposal).await {
            Ok(()) => leptos::logging::log!("push channel closed cleanly"),
            Err(e) => leptos::logging::warn!("push channel error: {e}"),
        }

        session.update(|s| s.connection = ConnectionStatus::Disconnected);

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = next_backoff_ms(backoff_ms);
    }
}

/// Connect and process inbound events until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    session: RwSignal<SessionState>,
    chat: RwSignal<ChatState>,
    proposal: RwSignal<ProposalState>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    session.update(|s| s.connection = ConnectionStatus::Connected);

    // The client never sends on the push channel; actions go over REST.
    let (_write, mut read) = ws.split();

    while let Some(message) = read.next().await {
        match message {
            Ok(Message::Text(text)) => match events::decode_event(&text) {
                Ok(event) => dispatch_event(&event, session, chat, proposal),
                Err(e) => leptos::logging::warn!("undecodable event: {e}"),
            },
            Ok(Message::Bytes(_)) => {}
            Err(e) => {
                leptos::logging::warn!("push recv error: {e}");
                break;
            }
        }
    }

    Ok(())
}

/// Route one event to the owning state's transition method.
#[cfg(feature = "hydrate")]
fn dispatch_event(
    event: &Event,
    session: RwSignal<SessionState>,
    chat: RwSignal<ChatState>,
    proposal: RwSignal<ProposalState>,
) {
    match event {
        Event::AiStatusUpdate(update) => session.update(|s| s.apply_status_update(update)),
        Event::NewMessage(message) => {
            if message.kind == MessageKind::Proposal {
                session.update(|s| s.note_proposal_message());
            }
            chat.update(|c| c.push(message.clone()));
        }
        Event::Typing(notice) => chat.update(|c| c.set_typing(notice.ai_id)),
        Event::ProposalUpdate(update) => {
            if let Some(status) = update.status {
                session.update(|s| s.note_proposal_status(status));
            }
            proposal.update(|p| p.apply_update(update));
        }
        Event::SessionReset => crate::util::browser::reload(),
        Event::FinalReportReady => session.update(|s| s.apply_final_report_ready()),
    }
}
