//! State for the discussion transcript panel.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use events::{ChatMessage, ParticipantId};

/// Transcript state: rendered messages plus the typing indicator line.
///
/// Messages are transient render records; nothing is replayed or reconciled
/// on reconnect.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// Participant currently shown as composing, last writer wins.
    pub typing: Option<ParticipantId>,
}

impl ChatState {
    /// Append a message. A participant's own message clears its typing line.
    pub fn push(&mut self, message: ChatMessage) {
        if self.typing.is_some() && self.typing == message.participant() {
            self.typing = None;
        }
        self.messages.push(message);
    }

    /// Show the typing line for one participant.
    pub fn set_typing(&mut self, id: ParticipantId) {
        self.typing = Some(id);
    }
}
