//! Shared event model and JSON codec for the realtime push channel.
//!
//! This crate owns the wire representation the browser client consumes.
//! Events travel as JSON text envelopes `{"event": <name>, "data": {...}}`
//! so payloads stay schema-driven on both ends of the socket.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned by [`decode_event`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text is not valid JSON, names an unknown event, or carries a
    /// payload that does not match the event's schema.
    #[error("failed to decode event: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One of the four fixed discussion participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantId {
    Chatgpt,
    Gemini,
    Codex,
    Claude,
}

impl ParticipantId {
    /// Activation order, also the roster display order.
    pub const ALL: [Self; 4] = [Self::Chatgpt, Self::Gemini, Self::Codex, Self::Claude];

    /// Wire identifier, e.g. `"chatgpt"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chatgpt => "chatgpt",
            Self::Gemini => "gemini",
            Self::Codex => "codex",
            Self::Claude => "claude",
        }
    }

    /// Parse a wire identifier. Returns `None` for anything outside the
    /// fixed set of four.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == raw)
    }

    /// Display name shown in chat headers and the roster.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Chatgpt => "ChatGPT",
            Self::Gemini => "Gemini",
            Self::Codex => "Codex",
            Self::Claude => "Claude",
        }
    }

    /// Avatar glyph.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Chatgpt => "🤖",
            Self::Gemini => "💎",
            Self::Codex => "⚡",
            Self::Claude => "🧠",
        }
    }

    /// Accent color (hex) used for avatars and vote rows.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Chatgpt => "#10a37f",
            Self::Gemini => "#4285f4",
            Self::Codex => "#f97316",
            Self::Claude => "#d97706",
        }
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named event on the realtime push channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum Event {
    /// Online/offline snapshot covering every participant.
    AiStatusUpdate(StatusUpdate),
    /// A chat message to render.
    NewMessage(ChatMessage),
    /// A participant started composing.
    Typing(TypingNotice),
    /// Badge/content/vote changes for the proposal side panel.
    ProposalUpdate(ProposalUpdate),
    /// The server discarded the session; clients reload.
    SessionReset,
    /// The final report is ready for download.
    FinalReportReady,
}

/// Payload of [`Event::AiStatusUpdate`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// Online flag per participant. The server sends the complete set.
    #[serde(default)]
    pub all_status: BTreeMap<ParticipantId, bool>,
}

/// Payload of [`Event::NewMessage`]: a transient render-only chat record.
///
/// The client keeps these in a render list only; there is no replay or
/// reconciliation on reconnect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Wire sender id: `"user"`, a participant id, or a free-form label.
    pub sender: String,
    /// Render variant for the bubble.
    #[serde(rename = "type", default)]
    pub kind: MessageKind,
    /// Message body, plain text.
    pub content: String,
    /// ISO 8601 creation time as sent by the server.
    #[serde(default)]
    pub timestamp: String,
}

impl ChatMessage {
    /// The participant this message came from, if the sender id is one of
    /// the fixed four.
    #[must_use]
    pub fn participant(&self) -> Option<ParticipantId> {
        ParticipantId::parse(&self.sender)
    }

    /// True when the human user sent this message.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.sender == "user"
    }
}

/// Render variant of a chat message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    /// Broadcast line rendered as a centered system bubble.
    System,
    /// Formal submission subject to voting; rendered with a proposal tag.
    Proposal,
    /// Ordinary conversation bubble.
    #[default]
    Normal,
}

impl MessageKind {
    /// Wire label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Proposal => "proposal",
            Self::Normal => "normal",
        }
    }

    /// Parse a wire label. Unknown labels render as ordinary bubbles.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "system" => Self::System,
            "proposal" => Self::Proposal,
            _ => Self::Normal,
        }
    }
}

impl Serialize for MessageKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MessageKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Payload of [`Event::Typing`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingNotice {
    /// Participant that started composing.
    pub ai_id: ParticipantId,
}

/// Payload of [`Event::ProposalUpdate`]. Every field is optional; the panel
/// patches only what arrives.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalUpdate {
    /// New badge status. Unknown labels leave the badge untouched.
    #[serde(default, deserialize_with = "deserialize_proposal_status")]
    pub status: Option<ProposalStatus>,
    /// Replacement proposal body, when present.
    #[serde(default)]
    pub content: Option<String>,
    /// Vote results keyed by participant.
    #[serde(default)]
    pub votes: BTreeMap<ParticipantId, Vote>,
}

/// Lifecycle position of the proposal under discussion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProposalStatus {
    /// Ballots are open.
    Voting,
    /// The proposal passed and moved to review.
    Approved,
}

impl ProposalStatus {
    /// Wire label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Voting => "voting",
            Self::Approved => "approved",
        }
    }

    /// Parse a wire label.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "voting" => Some(Self::Voting),
            "approved" => Some(Self::Approved),
            _ => None,
        }
    }

    /// Badge text for the side panel.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Voting => "Voting",
            Self::Approved => "Approved",
        }
    }
}

impl Serialize for ProposalStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

fn deserialize_proposal_status<'de, D>(deserializer: D) -> Result<Option<ProposalStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(ProposalStatus::parse))
}

/// One participant's ballot on the current proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vote {
    Support,
    Oppose,
}

impl Vote {
    /// Wire label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Oppose => "oppose",
        }
    }

    /// Parse a wire label. Anything other than `"support"` counts as an
    /// opposing ballot, matching how the vote rows are rendered.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "support" { Self::Support } else { Self::Oppose }
    }

    /// Row text for the side panel.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Support => "Support",
            Self::Oppose => "Oppose",
        }
    }
}

impl Serialize for Vote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Vote {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Encode an event into a JSON text envelope.
#[must_use]
pub fn encode_event(event: &Event) -> String {
    // Serializing a data-only enum into a string cannot fail.
    serde_json::to_string(event).unwrap_or_default()
}

/// Decode a JSON text envelope into an event.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed JSON, unknown event names,
/// and payloads that do not match the named event's schema.
pub fn decode_event(text: &str) -> Result<Event, CodecError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
