use super::*;

fn sample_message() -> ChatMessage {
    ChatMessage {
        sender: "claude".to_owned(),
        kind: MessageKind::Normal,
        content: "the Q3 trend line is misleading".to_owned(),
        timestamp: "2026-08-08T09:15:00Z".to_owned(),
    }
}

#[test]
fn participant_id_wire_mapping_round_trips() {
    for id in ParticipantId::ALL {
        assert_eq!(ParticipantId::parse(id.as_str()), Some(id));
    }
}

#[test]
fn participant_id_parse_rejects_unknown_ids() {
    assert_eq!(ParticipantId::parse("grok"), None);
    assert_eq!(ParticipantId::parse(""), None);
    assert_eq!(ParticipantId::parse("Claude"), None);
}

#[test]
fn participant_id_serializes_as_lowercase_string() {
    let json = serde_json::to_string(&ParticipantId::Chatgpt).expect("serialize");
    assert_eq!(json, "\"chatgpt\"");
}

#[test]
fn message_kind_parse_maps_known_labels() {
    assert_eq!(MessageKind::parse("system"), MessageKind::System);
    assert_eq!(MessageKind::parse("proposal"), MessageKind::Proposal);
    assert_eq!(MessageKind::parse("normal"), MessageKind::Normal);
}

#[test]
fn message_kind_parse_defaults_unknown_labels_to_normal() {
    assert_eq!(MessageKind::parse("banner"), MessageKind::Normal);
    assert_eq!(MessageKind::parse(""), MessageKind::Normal);
}

#[test]
fn vote_parse_treats_anything_but_support_as_oppose() {
    assert_eq!(Vote::parse("support"), Vote::Support);
    assert_eq!(Vote::parse("oppose"), Vote::Oppose);
    assert_eq!(Vote::parse("abstain"), Vote::Oppose);
}

#[test]
fn proposal_status_parse_accepts_only_known_labels() {
    assert_eq!(ProposalStatus::parse("voting"), Some(ProposalStatus::Voting));
    assert_eq!(ProposalStatus::parse("approved"), Some(ProposalStatus::Approved));
    assert_eq!(ProposalStatus::parse("rejected"), None);
}

#[test]
fn encode_uses_snake_case_event_names() {
    let encoded = encode_event(&Event::FinalReportReady);
    assert_eq!(encoded, "{\"event\":\"final_report_ready\"}");

    let encoded = encode_event(&Event::AiStatusUpdate(StatusUpdate::default()));
    assert!(encoded.starts_with("{\"event\":\"ai_status_update\""));
}

#[test]
fn encode_decode_round_trip_preserves_events() {
    let events = [
        Event::AiStatusUpdate(StatusUpdate {
            all_status: BTreeMap::from([
                (ParticipantId::Chatgpt, true),
                (ParticipantId::Gemini, false),
                (ParticipantId::Codex, true),
                (ParticipantId::Claude, true),
            ]),
        }),
        Event::NewMessage(sample_message()),
        Event::Typing(TypingNotice { ai_id: ParticipantId::Gemini }),
        Event::ProposalUpdate(ProposalUpdate {
            status: Some(ProposalStatus::Voting),
            content: Some("Proposal: reallocate the Q4 budget".to_owned()),
            votes: BTreeMap::from([(ParticipantId::Codex, Vote::Support)]),
        }),
        Event::SessionReset,
        Event::FinalReportReady,
    ];

    for event in events {
        let text = encode_event(&event);
        let decoded = decode_event(&text).expect("decode should succeed");
        assert_eq!(decoded, event);
    }
}

#[test]
fn decode_rejects_malformed_text() {
    let err = decode_event("{\"event\": ").expect_err("text should fail");
    assert!(matches!(err, CodecError::Decode(_)));
}

#[test]
fn decode_rejects_unknown_event_names() {
    let err = decode_event("{\"event\":\"ai_rebooted\",\"data\":{}}").expect_err("name should fail");
    assert!(matches!(err, CodecError::Decode(_)));
}

#[test]
fn decode_status_update_with_missing_map_defaults_empty() {
    let decoded = decode_event("{\"event\":\"ai_status_update\",\"data\":{}}").expect("decode");
    let Event::AiStatusUpdate(update) = decoded else {
        panic!("wrong event variant");
    };
    assert!(update.all_status.is_empty());
}

#[test]
fn decode_message_defaults_kind_and_timestamp() {
    let decoded = decode_event(
        "{\"event\":\"new_message\",\"data\":{\"sender\":\"user\",\"content\":\"hello\"}}",
    )
    .expect("decode");
    let Event::NewMessage(msg) = decoded else {
        panic!("wrong event variant");
    };
    assert_eq!(msg.kind, MessageKind::Normal);
    assert!(msg.timestamp.is_empty());
    assert!(msg.is_user());
    assert_eq!(msg.participant(), None);
}

#[test]
fn decode_message_with_unknown_kind_renders_as_normal() {
    let decoded = decode_event(
        "{\"event\":\"new_message\",\"data\":{\"sender\":\"codex\",\"type\":\"sidebar\",\"content\":\"hm\"}}",
    )
    .expect("decode");
    let Event::NewMessage(msg) = decoded else {
        panic!("wrong event variant");
    };
    assert_eq!(msg.kind, MessageKind::Normal);
    assert_eq!(msg.participant(), Some(ParticipantId::Codex));
}

#[test]
fn decode_proposal_update_with_unknown_status_leaves_badge_untouched() {
    let decoded = decode_event(
        "{\"event\":\"proposal_update\",\"data\":{\"status\":\"tabled\",\"content\":\"text\"}}",
    )
    .expect("decode");
    let Event::ProposalUpdate(update) = decoded else {
        panic!("wrong event variant");
    };
    assert_eq!(update.status, None);
    assert_eq!(update.content.as_deref(), Some("text"));
    assert!(update.votes.is_empty());
}

#[test]
fn decode_proposal_votes_key_by_participant() {
    let decoded = decode_event(
        "{\"event\":\"proposal_update\",\"data\":{\"votes\":{\"claude\":\"support\",\"gemini\":\"oppose\"}}}",
    )
    .expect("decode");
    let Event::ProposalUpdate(update) = decoded else {
        panic!("wrong event variant");
    };
    assert_eq!(update.votes.get(&ParticipantId::Claude), Some(&Vote::Support));
    assert_eq!(update.votes.get(&ParticipantId::Gemini), Some(&Vote::Oppose));
}

#[test]
fn decode_typing_rejects_unknown_participant() {
    let err = decode_event("{\"event\":\"typing\",\"data\":{\"ai_id\":\"grok\"}}")
        .expect_err("unknown id should fail");
    assert!(matches!(err, CodecError::Decode(_)));
}
