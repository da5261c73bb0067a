use super::*;
use crate::state::transcript::{FAILURE_TEXT, TurnPhase};

fn pending_turn(id: &str) -> TranscriptState {
    let mut t = TranscriptState::default();
    t.push_user_turn("hi");
    t.push_placeholder(id.to_owned());
    t
}

#[test]
fn success_outcome_returns_trimmed_reveal_text() {
    let mut t = pending_turn("id-1-abc");

    let reveal = apply_outcome(&mut t, "id-1-abc", Ok("  hello  ".to_owned()));

    assert_eq!(reveal.as_deref(), Some("hello"));
    assert_eq!(t.turns[1].text, "");
    assert_eq!(t.turns[1].phase, TurnPhase::Complete);
}

#[test]
fn status_failure_settles_fixed_text_with_server_detail() {
    let mut t = pending_turn("id-1-abc");
    let err = CompletionError::Status { status: 429, body: "rate limited".to_owned() };

    let reveal = apply_outcome(&mut t, "id-1-abc", Err(err));

    assert!(reveal.is_none());
    assert_eq!(t.turns[1].text, FAILURE_TEXT);
    assert_eq!(
        t.turns[1].phase,
        TurnPhase::Failed { detail: "rate limited".to_owned() }
    );
}

#[test]
fn transport_failure_settles_through_the_same_path() {
    let mut t = pending_turn("id-1-abc");
    let err = CompletionError::Request("connection refused".to_owned());

    let reveal = apply_outcome(&mut t, "id-1-abc", Err(err));

    assert!(reveal.is_none());
    assert_eq!(t.turns[1].text, FAILURE_TEXT);
    assert!(matches!(t.turns[1].phase, TurnPhase::Failed { .. }));
}

#[test]
fn decode_failure_settles_through_the_same_path() {
    let mut t = pending_turn("id-1-abc");
    let err = CompletionError::Decode("missing field `bot`".to_owned());

    apply_outcome(&mut t, "id-1-abc", Err(err));

    assert_eq!(t.turns[1].text, FAILURE_TEXT);
    assert_eq!(
        t.turns[1].phase,
        TurnPhase::Failed { detail: "malformed completion reply: missing field `bot`".to_owned() }
    );
}

#[test]
fn outcome_for_unknown_turn_leaves_transcript_unchanged() {
    let mut t = pending_turn("id-1-abc");

    let reveal = apply_outcome(&mut t, "id-404-cafe", Ok("hello".to_owned()));

    assert!(reveal.is_none());
    assert_eq!(t.turns[1].text, " ");
    assert_eq!(t.turns[1].phase, TurnPhase::Pending);
}
