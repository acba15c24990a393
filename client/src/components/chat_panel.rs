//! Discussion transcript panel: system, user, AI, and proposal bubbles.
//!
//! The panel is also a drop target for chart images, mirroring the file
//! picker in the upload panel.

use leptos::prelude::*;

use events::{ChatMessage, MessageKind};

use crate::state::chat::ChatState;
use crate::state::files::FileQueue;
use crate::state::session::SessionState;
use crate::util::format::{clock_time, header_date};

/// Display profile for a message sender: name, avatar glyph, accent color.
fn sender_profile(message: &ChatMessage) -> (String, &'static str, &'static str) {
    match message.participant() {
        Some(id) => (id.display_name().to_owned(), id.icon(), id.color()),
        None if message.is_user() => ("You".to_owned(), "👤", "#3b82f6"),
        // Unknown senders render as-is with a generic profile.
        None => (message.sender.clone(), "🤖", "#666666"),
    }
}

fn render_message(message: &ChatMessage) -> AnyView {
    if message.kind == MessageKind::System {
        return view! {
            <div class="system-bubble">
                <span class="system-bubble__icon">"📢"</span>
                <span class="system-bubble__text">{message.content.clone()}</span>
            </div>
        }
        .into_any();
    }

    let (name, icon, color) = sender_profile(message);
    let row_class = if message.is_user() { "msg-row msg-row--user" } else { "msg-row msg-row--ai" };
    let bubble_class = if message.kind == MessageKind::Proposal {
        "msg-bubble msg-bubble--proposal"
    } else {
        "msg-bubble"
    };
    let proposal_tag = (message.kind == MessageKind::Proposal)
        .then(|| view! { <span class="msg-bubble__tag">"📋 Proposal"</span> });
    let avatar_style = format!("background:{color};");
    let time = clock_time(&message.timestamp);
    let content = message.content.clone();

    view! {
        <div class=row_class>
            <div class="msg-avatar" style=avatar_style>{icon}</div>
            <div class="msg-body">
                <div class="msg-header">
                    <span class="msg-name">{name}</span>
                    <span class="msg-time">{time}</span>
                </div>
                <div class=bubble_class>
                    {proposal_tag}
                    <div class="msg-text">{content}</div>
                </div>
            </div>
        </div>
    }
    .into_any()
}

/// Transcript panel with auto-scroll and drag-drop chart intake.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let files = expect_context::<RwSignal<FileQueue>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the transcript pinned to the newest message.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_dragover = move |ev: leptos::ev::DragEvent| ev.prevent_default();
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            if let Some(transfer) = ev.data_transfer() {
                if let Some(list) = transfer.files() {
                    crate::controller::add_files(
                        session,
                        files,
                        crate::util::browser::file_list_to_vec(&list),
                    );
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, files);
        }
    };

    let typing_line = move || {
        chat.get()
            .typing
            .map(|id| format!("{} is typing...", id.display_name()))
            .unwrap_or_default()
    };

    view! {
        <section class="chat-panel" on:dragover=on_dragover on:drop=on_drop>
            <div class="chat-panel__date">{header_date()}</div>
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">
                                "No messages yet. Activate the members and submit charts to begin."
                            </div>
                        }
                            .into_any();
                    }

                    messages.iter().map(render_message).collect::<Vec<_>>().into_any()
                }}
            </div>
            <div class="chat-panel__typing">{typing_line}</div>
        </section>
    }
}
