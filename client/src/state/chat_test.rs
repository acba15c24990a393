use super::*;
use events::MessageKind;

fn message_from(sender: &str) -> ChatMessage {
    ChatMessage {
        sender: sender.to_owned(),
        kind: MessageKind::Normal,
        content: "looks like seasonality to me".to_owned(),
        timestamp: "2026-08-08T10:00:00Z".to_owned(),
    }
}

#[test]
fn chat_default_is_empty() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(state.typing.is_none());
}

#[test]
fn push_appends_in_arrival_order() {
    let mut state = ChatState::default();
    state.push(message_from("user"));
    state.push(message_from("gemini"));
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].sender, "user");
    assert_eq!(state.messages[1].sender, "gemini");
}

#[test]
fn typing_is_last_writer_wins() {
    let mut state = ChatState::default();
    state.set_typing(ParticipantId::Codex);
    state.set_typing(ParticipantId::Claude);
    assert_eq!(state.typing, Some(ParticipantId::Claude));
}

#[test]
fn a_participants_message_clears_its_own_typing_line() {
    let mut state = ChatState::default();
    state.set_typing(ParticipantId::Claude);
    state.push(message_from("claude"));
    assert!(state.typing.is_none());
}

#[test]
fn another_senders_message_keeps_the_typing_line() {
    let mut state = ChatState::default();
    state.set_typing(ParticipantId::Claude);
    state.push(message_from("user"));
    assert_eq!(state.typing, Some(ParticipantId::Claude));
}
