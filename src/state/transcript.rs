#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

/// Fixed text shown in place of a reply when a completion request fails.
pub const FAILURE_TEXT: &str = "Something Went Wrong!";

/// Who authored a chat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// Lifecycle of a turn's content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TurnPhase {
    /// Reply in flight; the turn shows the cycling-dot animation.
    Pending,
    /// User-authored, or reply received (possibly mid-reveal).
    #[default]
    Complete,
    /// Request failed; the turn shows [`FAILURE_TEXT`] plus the detail.
    Failed { detail: String },
}

/// A single rendered chat turn.
#[derive(Clone, Debug)]
pub struct ChatTurn {
    /// Lookup key for routing a reply back to its bot turn. User turns
    /// carry none.
    pub id: Option<String>,
    pub role: Role,
    pub text: String,
    pub phase: TurnPhase,
}

/// State for the chat transcript.
///
/// Turns are append-only history: only the in-flight bot turn is mutated
/// after being pushed (empty → dots → reply or failure). Nothing here
/// outlives the page.
#[derive(Clone, Debug, Default)]
pub struct TranscriptState {
    pub turns: Vec<ChatTurn>,
}

impl TranscriptState {
    /// Append the user's prompt as a new turn, text verbatim.
    pub fn push_user_turn(&mut self, text: &str) {
        self.turns.push(ChatTurn {
            id: None,
            role: Role::User,
            text: text.to_owned(),
            phase: TurnPhase::Complete,
        });
    }

    /// Append a pending bot turn tagged with `id` so the reply can be
    /// routed back to it once the request settles.
    pub fn push_placeholder(&mut self, id: String) {
        self.turns.push(ChatTurn {
            id: Some(id),
            role: Role::Bot,
            text: " ".to_owned(),
            phase: TurnPhase::Pending,
        });
    }

    /// Replace the text of the turn tagged with `id`, leaving every other
    /// turn untouched. Unknown ids are a no-op.
    pub fn set_turn_text(&mut self, id: &str, text: String) {
        if let Some(turn) = self.turn_mut(id) {
            turn.text = text;
        }
    }

    /// Settle the turn tagged with `id` with a successful reply.
    ///
    /// Clears the turn's text so the typewriter reveal starts from empty
    /// and returns the whitespace-trimmed reply to reveal. `None` if no
    /// turn carries `id`.
    pub fn resolve_bot_turn(&mut self, id: &str, reply: &str) -> Option<String> {
        let turn = self.turn_mut(id)?;
        turn.text = String::new();
        turn.phase = TurnPhase::Complete;
        Some(reply.trim().to_owned())
    }

    /// Settle the turn tagged with `id` as failed, keeping `detail` for
    /// inline display under the fixed failure text.
    pub fn fail_bot_turn(&mut self, id: &str, detail: String) {
        if let Some(turn) = self.turn_mut(id) {
            turn.text = FAILURE_TEXT.to_owned();
            turn.phase = TurnPhase::Failed { detail };
        }
    }

    fn turn_mut(&mut self, id: &str) -> Option<&mut ChatTurn> {
        self.turns.iter_mut().find(|t| t.id.as_deref() == Some(id))
    }
}
